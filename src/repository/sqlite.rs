//! SQLite repositories, one per record type.
//!
//! Each repository keeps its five statement texts as constants; sqlx prepares
//! them lazily and caches the prepared form per pool connection. Initializing
//! a repository drops and recreates its table, so every startup begins from
//! an empty store.

use async_trait::async_trait;

use crate::db::models::{Data, Dht22Data};
use crate::db::{SqlitePool, schema};
use crate::error::ApiError;
use crate::repository::Repository;

/// Upper bound on a single page; requests beyond it are clamped.
const MAX_ROWS_PER_PAGE: i64 = 100;

/// Pagination is 1-based. A non-positive page reads from the start instead
/// of producing a negative offset.
fn page_to_offset(page: i64, rows_per_page: i64) -> (i64, i64) {
    let rows_per_page = rows_per_page.clamp(1, MAX_ROWS_PER_PAGE);
    let offset = rows_per_page * (page.max(1) - 1);
    (rows_per_page, offset)
}

async fn exec_init(pool: &SqlitePool, ddl: &str) -> Result<(), ApiError> {
    // execute multiple statements safely (SQLite supports multi-commands but
    // sqlx::query doesn't)
    for stmt in ddl.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

const DATA_CREATE: &str = "INSERT INTO data (device_id, device_name, price, serial_number, type, date_time, description) VALUES (?, ?, ?, ?, ?, ?, ?)";
const DATA_READ_ONE: &str = "SELECT id, device_id, device_name, price, serial_number, type, date_time, description FROM data WHERE id = ?";
const DATA_READ_MANY: &str = "SELECT id, device_id, device_name, price, serial_number, type, date_time, description FROM data LIMIT ? OFFSET ?";
const DATA_UPDATE: &str = "UPDATE data SET device_id = ?, device_name = ?, price = ?, serial_number = ?, type = ?, date_time = ?, description = ? WHERE id = ?";
const DATA_DELETE: &str = "DELETE FROM data WHERE id = ?";

pub struct SqliteDataRepository {
    pool: SqlitePool,
}

impl SqliteDataRepository {
    /// Recreate the `data` table (destructive) and bind the repository to
    /// the pool.
    pub async fn init(pool: SqlitePool) -> Result<Self, ApiError> {
        exec_init(&pool, schema::DATA_INIT).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl Repository for SqliteDataRepository {
    type Record = Data;

    async fn create(&self, record: &mut Data) -> Result<(), ApiError> {
        let result = sqlx::query(DATA_CREATE)
            .bind(&record.device_id)
            .bind(&record.device_name)
            .bind(record.price)
            .bind(record.serial_number)
            .bind(&record.kind)
            .bind(&record.date_time)
            .bind(&record.description)
            .execute(&self.pool)
            .await?;
        record.id = result.last_insert_rowid();
        Ok(())
    }

    async fn read_one(&self, id: i64) -> Result<Option<Data>, ApiError> {
        let row = sqlx::query_as::<_, Data>(DATA_READ_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn read_many(&self, page: i64, rows_per_page: i64) -> Result<Vec<Data>, ApiError> {
        let (limit, offset) = page_to_offset(page, rows_per_page);
        let rows = sqlx::query_as::<_, Data>(DATA_READ_MANY)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, record: &Data) -> Result<u64, ApiError> {
        let result = sqlx::query(DATA_UPDATE)
            .bind(&record.device_id)
            .bind(&record.device_name)
            .bind(record.price)
            .bind(record.serial_number)
            .bind(&record.kind)
            .bind(&record.date_time)
            .bind(&record.description)
            .bind(record.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query(DATA_DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

const DHT22_CREATE: &str = "INSERT INTO dht22_data (device_name, temperature, humidity, date_time) VALUES (?, ?, ?, ?)";
const DHT22_READ_ONE: &str = "SELECT id, device_name, temperature, humidity, date_time FROM dht22_data WHERE id = ?";
const DHT22_READ_MANY: &str = "SELECT id, device_name, temperature, humidity, date_time FROM dht22_data LIMIT ? OFFSET ?";
const DHT22_UPDATE: &str = "UPDATE dht22_data SET device_name = ?, temperature = ?, humidity = ?, date_time = ? WHERE id = ?";
const DHT22_DELETE: &str = "DELETE FROM dht22_data WHERE id = ?";

pub struct SqliteDht22Repository {
    pool: SqlitePool,
}

impl SqliteDht22Repository {
    /// Recreate the `dht22_data` table (destructive) and bind the repository
    /// to the pool.
    pub async fn init(pool: SqlitePool) -> Result<Self, ApiError> {
        exec_init(&pool, schema::DHT22_INIT).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl Repository for SqliteDht22Repository {
    type Record = Dht22Data;

    async fn create(&self, record: &mut Dht22Data) -> Result<(), ApiError> {
        let result = sqlx::query(DHT22_CREATE)
            .bind(&record.device_name)
            .bind(record.temperature)
            .bind(record.humidity)
            .bind(&record.date_time)
            .execute(&self.pool)
            .await?;
        record.id = result.last_insert_rowid();
        Ok(())
    }

    async fn read_one(&self, id: i64) -> Result<Option<Dht22Data>, ApiError> {
        let row = sqlx::query_as::<_, Dht22Data>(DHT22_READ_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn read_many(&self, page: i64, rows_per_page: i64) -> Result<Vec<Dht22Data>, ApiError> {
        let (limit, offset) = page_to_offset(page, rows_per_page);
        let rows = sqlx::query_as::<_, Dht22Data>(DHT22_READ_MANY)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, record: &Dht22Data) -> Result<u64, ApiError> {
        let result = sqlx::query(DHT22_UPDATE)
            .bind(&record.device_name)
            .bind(record.temperature)
            .bind(record.humidity)
            .bind(&record.date_time)
            .bind(record.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query(DHT22_DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same :memory: database.
    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database")
    }

    fn sample_reading() -> Dht22Data {
        Dht22Data {
            id: 0,
            device_name: "Test Sensor".to_string(),
            temperature: 25.5,
            humidity: 60.0,
            date_time: "2024-12-22T12:00:00Z".to_string(),
        }
    }

    fn sample_asset() -> Data {
        Data {
            id: 0,
            device_id: "dev-42".to_string(),
            device_name: "Thermostat".to_string(),
            price: 199.99,
            serial_number: 77.0,
            kind: "climate".to_string(),
            date_time: "2024-12-22T12:00:00Z".to_string(),
            description: "office unit".to_string(),
        }
    }

    #[tokio::test]
    async fn dht22_create_backfills_id_and_round_trips() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();

        let mut reading = sample_reading();
        repo.create(&mut reading).await.unwrap();
        assert!(reading.id > 0);

        let fetched = repo.read_one(reading.id).await.unwrap().unwrap();
        assert_eq!(fetched, reading);
    }

    #[tokio::test]
    async fn dht22_read_one_absent_is_none() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();
        assert!(repo.read_one(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dht22_read_many_returns_stored_rows() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();
        for _ in 0..2 {
            repo.create(&mut sample_reading()).await.unwrap();
        }

        let rows = repo.read_many(1, 10).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn dht22_read_many_clamps_non_positive_page() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();
        repo.create(&mut sample_reading()).await.unwrap();

        // Page 0 must behave like page 1, not produce a negative offset.
        let rows = repo.read_many(0, 10).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn dht22_read_many_paginates() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();
        for _ in 0..3 {
            repo.create(&mut sample_reading()).await.unwrap();
        }

        assert_eq!(repo.read_many(1, 2).await.unwrap().len(), 2);
        assert_eq!(repo.read_many(2, 2).await.unwrap().len(), 1);
        assert!(repo.read_many(3, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dht22_update_reports_rows_affected() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();

        let mut reading = sample_reading();
        repo.create(&mut reading).await.unwrap();

        reading.temperature = 30.0;
        assert_eq!(repo.update(&reading).await.unwrap(), 1);

        let fetched = repo.read_one(reading.id).await.unwrap().unwrap();
        assert_eq!(fetched.temperature, 30.0);

        let missing = Dht22Data {
            id: 999,
            ..sample_reading()
        };
        assert_eq!(repo.update(&missing).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dht22_delete_reports_rows_affected() {
        let repo = SqliteDht22Repository::init(memory_pool().await)
            .await
            .unwrap();

        let mut reading = sample_reading();
        repo.create(&mut reading).await.unwrap();

        assert_eq!(repo.delete(reading.id).await.unwrap(), 1);
        assert_eq!(repo.delete(reading.id).await.unwrap(), 0);
        assert!(repo.read_one(reading.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn data_round_trip_and_zero_row_conventions() {
        let repo = SqliteDataRepository::init(memory_pool().await)
            .await
            .unwrap();

        let mut asset = sample_asset();
        repo.create(&mut asset).await.unwrap();
        assert!(asset.id > 0);

        let fetched = repo.read_one(asset.id).await.unwrap().unwrap();
        assert_eq!(fetched, asset);

        let missing = Data {
            id: 999,
            ..sample_asset()
        };
        assert_eq!(repo.update(&missing).await.unwrap(), 0);
        assert_eq!(repo.delete(999).await.unwrap(), 0);
        assert!(repo.read_one(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn init_drops_existing_rows() {
        let pool = memory_pool().await;
        let repo = SqliteDht22Repository::init(pool.clone()).await.unwrap();
        repo.create(&mut sample_reading()).await.unwrap();

        // A second init recreates the table from scratch.
        let repo = SqliteDht22Repository::init(pool).await.unwrap();
        assert!(repo.read_many(1, 10).await.unwrap().is_empty());
    }
}
