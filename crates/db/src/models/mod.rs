//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs for writes
//! - Read-model structs for queries that join or aggregate

pub mod customer;
pub mod invoice;
pub mod overview;
pub mod revenue;
pub mod session;
pub mod user;
