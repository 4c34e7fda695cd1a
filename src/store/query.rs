use chrono::{Duration, NaiveDate};

use super::{ClimateStore, Observation, PrecipitationReading, Result, StoreError, TemperatureStats};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing-year window. Only whole days are applied to the
/// calendar date, so the six extra hours never move the cutoff.
pub fn trailing_window() -> Duration {
    Duration::days(365) + Duration::hours(6)
}

/// First date included in the trailing-year window ending at `latest`.
pub fn trailing_year_cutoff(latest: &str) -> Result<String> {
    let latest_date =
        NaiveDate::parse_from_str(latest, DATE_FORMAT).map_err(|source| StoreError::InvalidDate {
            date: latest.to_string(),
            source,
        })?;
    let cutoff = latest_date - Duration::days(trailing_window().num_days());
    Ok(cutoff.format(DATE_FORMAT).to_string())
}

impl ClimateStore {
    /// Every observation's date and precipitation, in storage order.
    ///
    /// Rows sharing a date are kept as separate readings.
    pub fn precipitation(&self) -> Vec<PrecipitationReading> {
        self.observations.iter().map(PrecipitationReading::from).collect()
    }

    /// Station names, sorted byte-wise ascending.
    pub fn station_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stations.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    pub fn latest_date(&self) -> Option<&str> {
        self.observations.iter().map(|o| o.date.as_str()).max()
    }

    pub fn earliest_date(&self) -> Option<&str> {
        self.observations.iter().map(|o| o.date.as_str()).min()
    }

    /// Precipitation readings from the trailing year ending at the latest
    /// date in the dataset, ascending by date.
    ///
    /// An empty dataset yields no readings.
    pub fn trailing_year_precipitation(&self) -> Result<Vec<PrecipitationReading>> {
        let Some(latest) = self.latest_date() else {
            return Ok(Vec::new());
        };
        let cutoff = trailing_year_cutoff(latest)?;

        let mut readings: Vec<PrecipitationReading> = self
            .observations
            .iter()
            .filter(|o| o.date.as_str() >= cutoff.as_str())
            .map(PrecipitationReading::from)
            .collect();
        // stable: rows on the same date keep storage order
        readings.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(readings)
    }

    /// Temperature min/avg/max over observations with `start <= date`, and
    /// `date <= end` when an end is given. Dates compare as plain strings.
    pub fn temperature_stats(&self, start: &str, end: Option<&str>) -> TemperatureStats {
        let matching = self.observations.iter().filter(|o| {
            let date = o.date.as_str();
            date >= start && end.map_or(true, |end| date <= end)
        });
        aggregate_temperatures(matching)
    }
}

fn aggregate_temperatures<'a>(observations: impl Iterator<Item = &'a Observation>) -> TemperatureStats {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for temperature in observations.filter_map(|o| o.temperature) {
        count += 1;
        sum += temperature;
        min = min.min(temperature);
        max = max.max(temperature);
    }

    if count == 0 {
        return TemperatureStats::default();
    }

    TemperatureStats {
        min: Some(min),
        avg: Some(sum / count as f64),
        max: Some(max),
    }
}
