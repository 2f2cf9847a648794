//! SQL DDL for initializing the two record tables.
//!
//! Both tables are dropped and recreated on every startup: readings are
//! scratch data with no durability requirement across deployments, so there
//! is no migration step.

pub const DATA_INIT: &str = r#"
DROP TABLE IF EXISTS data;

CREATE TABLE data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    device_id TEXT NOT NULL,
    device_name TEXT NOT NULL,
    price REAL NOT NULL,
    serial_number REAL NOT NULL,
    type TEXT NOT NULL,
    date_time TEXT NOT NULL,
    description TEXT NOT NULL
);
"#;

pub const DHT22_INIT: &str = r#"
DROP TABLE IF EXISTS dht22_data;

CREATE TABLE dht22_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    device_name TEXT NOT NULL,
    temperature REAL NOT NULL,
    humidity REAL NOT NULL,
    date_time TEXT NOT NULL
);
"#;
