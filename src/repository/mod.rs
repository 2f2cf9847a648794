//! Persistence seam: one trait covering exactly the CRUD capability set,
//! implemented per record type by the SQLite backend.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::ApiError;

pub use sqlite::{SqliteDataRepository, SqliteDht22Repository};

/// CRUD operations for one record type against the backing store.
///
/// `update` and `delete` report the number of rows affected; 0 means the
/// identifier did not match any row and is not an error.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send + Sync;

    /// Insert the record and back-fill its store-assigned id.
    async fn create(&self, record: &mut Self::Record) -> Result<(), ApiError>;

    /// Point lookup; `None` when no row matches.
    async fn read_one(&self, id: i64) -> Result<Option<Self::Record>, ApiError>;

    /// Fetch at most `rows_per_page` rows for the 1-based `page`, in
    /// store-native order.
    async fn read_many(
        &self,
        page: i64,
        rows_per_page: i64,
    ) -> Result<Vec<Self::Record>, ApiError>;

    /// Update all non-id fields by id.
    async fn update(&self, record: &Self::Record) -> Result<u64, ApiError>;

    /// Delete by id.
    async fn delete(&self, id: i64) -> Result<u64, ApiError>;
}
