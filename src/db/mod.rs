//! Database module: record models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod models;
pub mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error::ApiError;

pub type SqlitePool = Pool<Sqlite>;

pub use models::{Data, Dht22Data};

/// Open the pool, creating the database file if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, ApiError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}
