#![allow(dead_code)]
//! SQLite fixture in the `hawaii.sqlite` layout.

use climate_api::{
    config::{Config, DatasetConfig, ServerConfig},
    state::AppState,
    store::ClimateStore,
};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, Connection};
use std::path::{Path, PathBuf};

pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2010-01-01", Some(0.08), 65.0),
    ("USC00519397", "2016-08-22", Some(0.0), 78.0),
    ("USC00519397", "2016-08-23", Some(0.15), 81.0),
    ("USC00513117", "2016-08-23", None, 76.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00513117", "2017-08-22", Some(0.5), 76.0),
    ("USC00519281", "2017-08-23", Some(0.08), 79.0),
];

pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

pub async fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("hawaii.sqlite");
    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("create fixture database");

    sqlx::query(
        "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
    )
    .execute(&mut conn)
    .await
    .expect("create measurement table");
    sqlx::query(
        "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT)",
    )
    .execute(&mut conn)
    .await
    .expect("create station table");

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&mut conn)
            .await
            .expect("insert measurement");
    }
    for (station, name, lat, lon, elev) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*station)
        .bind(*name)
        .bind(*lat)
        .bind(*lon)
        .bind(*elev)
        .execute(&mut conn)
        .await
        .expect("insert station");
    }

    conn.close().await.expect("close fixture database");
    path
}

pub async fn insert_measurement(
    path: &Path,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .connect()
        .await
        .expect("open fixture database");
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(&mut conn)
        .await
        .expect("insert measurement");
    conn.close().await.expect("close fixture database");
}

pub fn test_config(path: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            request_timeout_secs: 5,
            enable_cors: true,
            debug: false,
        },
        dataset: DatasetConfig {
            path: path.display().to_string(),
        },
    }
}

pub async fn load_state(path: &Path) -> AppState {
    let store = ClimateStore::open(path).await.expect("load fixture dataset");
    AppState::from_store(store)
}
