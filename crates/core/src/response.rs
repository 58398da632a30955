//! The `{ "data": ... }` envelope exchanged between the two services.
//!
//! The data service serializes it and the presentation service decodes the
//! same type, so both ends agree on the wire shape at compile time.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}
