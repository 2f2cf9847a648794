//! Pass-through service layer between handlers and repositories.

pub mod factory;

use std::sync::Arc;

use crate::db::models::{Data, Dht22Data};
use crate::error::ApiError;
use crate::repository::Repository;

pub use factory::{ServiceFactory, StoreKind};

/// Thin orchestration layer over a repository: forwards every call and adds
/// no business rules. Update/delete expose the repository's rows-affected
/// count so callers can tell a missing id from a successful write.
pub struct CrudService<T> {
    repo: Arc<dyn Repository<Record = T>>,
}

pub type DataService = CrudService<Data>;
pub type Dht22Service = CrudService<Dht22Data>;

impl<T> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<T: Send + Sync> CrudService<T> {
    pub fn new(repo: Arc<dyn Repository<Record = T>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, record: &mut T) -> Result<(), ApiError> {
        self.repo.create(record).await
    }

    pub async fn read_one(&self, id: i64) -> Result<Option<T>, ApiError> {
        self.repo.read_one(id).await
    }

    pub async fn read_many(&self, page: i64, rows_per_page: i64) -> Result<Vec<T>, ApiError> {
        self.repo.read_many(page, rows_per_page).await
    }

    pub async fn update(&self, record: &T) -> Result<u64, ApiError> {
        self.repo.update(record).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        self.repo.delete(id).await
    }
}
