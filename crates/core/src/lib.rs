//! Domain logic for the finboard dashboard backend.
//!
//! This crate has zero internal dependencies so the repository layer, the
//! HTTP layer, and any future tooling can all use it. It holds the
//! pagination-window math, invoice form validation, money helpers, and the
//! shared domain error type.

pub mod error;
pub mod invoice;
pub mod money;
pub mod pagination;
pub mod types;
