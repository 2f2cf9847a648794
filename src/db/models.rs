use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// DHT22 sensor reading. `id` is 0 until persisted; the store assigns it on
/// insert and it is immutable afterwards. `date_time` is carried as an
/// ISO-8601 string and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Dht22Data {
    #[serde(default)]
    pub id: i64,
    pub device_name: String,
    pub temperature: f64,
    pub humidity: f64,
    pub date_time: String,
}

/// Generic asset record. Same identifier lifecycle as [`Dht22Data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Data {
    #[serde(default)]
    pub id: i64,
    pub device_id: String,
    pub device_name: String,
    pub price: f64,
    pub serial_number: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub date_time: String,
    pub description: String,
}
