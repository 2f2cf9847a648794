//! HTTP handlers, one module per record type.

pub mod data;
pub mod dht22;

use serde::Deserialize;

/// Pagination query parameters for the list endpoints. `page` is 1-based;
/// the repository clamps out-of-range values.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: i64,
    pub rows_per_page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            rows_per_page: 10,
        }
    }
}
