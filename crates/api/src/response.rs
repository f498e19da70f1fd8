//! Shared response envelope for read endpoints.
//!
//! Successful reads return `{ "data": ... }`. Using [`DataResponse`] instead
//! of ad-hoc `serde_json::json!` keeps the payload typed and the envelope
//! consistent across handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
