use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// One station's recorded precipitation and temperature for one date
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Observation {
    pub station_id: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub precipitation: Option<f64>,
    /// `None` where the source row has no reading; skipped by the aggregates
    pub temperature: Option<f64>,
}

impl Observation {
    pub fn new(station_id: &str, date: &str, precipitation: Option<f64>, temperature: Option<f64>) -> Self {
        Self {
            station_id: station_id.to_string(),
            date: date.to_string(),
            precipitation,
            temperature,
        }
    }
}

/// Weather station metadata row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    pub fn new(station_id: &str, name: &str, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            station_id: station_id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            elevation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub date: String,
    pub precipitation: Option<f64>,
}

impl From<&Observation> for PrecipitationReading {
    fn from(obs: &Observation) -> Self {
        Self {
            date: obs.date.clone(),
            precipitation: obs.precipitation,
        }
    }
}

/// Minimum, average and maximum temperature over a filtered set of observations.
///
/// Serializes as a `[min, avg, max]` triple. All three are `None` when no
/// observation matched the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.min, self.avg, self.max).serialize(serializer)
    }
}
