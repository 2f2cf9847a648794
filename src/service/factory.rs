use std::sync::Arc;

use crate::db::SqlitePool;
use crate::error::ApiError;
use crate::repository::{SqliteDataRepository, SqliteDht22Repository};
use crate::service::{CrudService, DataService, Dht22Service};

/// Backing store selector. SQLite is the only implementation today; adding
/// another store means adding a variant here and a match arm below, which
/// the compiler enforces at every construction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
}

/// Constructs a repository bound to the shared pool and wraps it in the
/// matching service. Repository construction runs the destructive table
/// init, so build each service once at startup.
pub struct ServiceFactory {
    pool: SqlitePool,
}

impl ServiceFactory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn data_service(&self, kind: StoreKind) -> Result<DataService, ApiError> {
        match kind {
            StoreKind::Sqlite => {
                let repo = SqliteDataRepository::init(self.pool.clone()).await?;
                Ok(CrudService::new(Arc::new(repo)))
            }
        }
    }

    pub async fn dht22_service(&self, kind: StoreKind) -> Result<Dht22Service, ApiError> {
        match kind {
            StoreKind::Sqlite => {
                let repo = SqliteDht22Repository::init(self.pool.clone()).await?;
                Ok(CrudService::new(Arc::new(repo)))
            }
        }
    }
}
