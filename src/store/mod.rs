//! Read-only climate dataset.
//!
//! Both tables are read from the SQLite file once at startup and held in
//! memory for the life of the process. Nothing writes to a loaded store.

pub mod error;
pub mod models;
pub mod query;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};
use std::path::Path;
use tracing::{debug, info};

pub use error::{Result, StoreError};
pub use models::{Observation, PrecipitationReading, Station, TemperatureStats};
pub use query::trailing_year_cutoff;

const OBSERVATIONS_SQL: &str = r#"
    SELECT station AS station_id,
           date,
           CAST(prcp AS REAL) AS precipitation,
           CAST(tobs AS REAL) AS temperature
    FROM measurement
    ORDER BY rowid
"#;

const STATIONS_SQL: &str = r#"
    SELECT station AS station_id,
           name,
           CAST(latitude AS REAL) AS latitude,
           CAST(longitude AS REAL) AS longitude,
           CAST(elevation AS REAL) AS elevation
    FROM station
    ORDER BY rowid
"#;

#[derive(Debug, Clone, Default)]
pub struct ClimateStore {
    observations: Vec<Observation>,
    stations: Vec<Station>,
}

impl ClimateStore {
    /// Load the `measurement` and `station` tables from a SQLite file.
    ///
    /// The file is opened read-only and the connection is closed once both
    /// tables are in memory.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::DatasetMissing(path.to_path_buf()));
        }

        debug!(path = %path.display(), "opening climate dataset");
        let mut conn: SqliteConnection = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .connect()
            .await?;

        let observations = sqlx::query_as::<_, Observation>(OBSERVATIONS_SQL)
            .fetch_all(&mut conn)
            .await?;
        let stations = sqlx::query_as::<_, Station>(STATIONS_SQL)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        let store = Self::from_records(observations, stations);
        info!(
            path = %path.display(),
            observations = store.observations.len(),
            stations = store.stations.len(),
            first_date = store.earliest_date().unwrap_or("-"),
            last_date = store.latest_date().unwrap_or("-"),
            "climate dataset loaded"
        );
        Ok(store)
    }

    pub fn from_records(observations: Vec<Observation>, stations: Vec<Station>) -> Self {
        Self {
            observations,
            stations,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}
