//! Climate query routes under `/api/v1.0`

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use tracing::debug;

use crate::{
    api::error::ApiError,
    state::AppState,
    store::{PrecipitationReading, TemperatureStats},
};

const INDEX_HTML: &str = concat!(
    "<h2>Welcome to the Climate API!</h2>",
    "<p><strong>Available routes:</strong></p>",
    "<ul>",
    "<li>/api/v1.0/precipitation</li>",
    "<li>/api/v1.0/stations</li>",
    "<li>/api/v1.0/tobs</li>",
    "</ul>",
    "<hr/>",
    "<p>You can also get the min, avg, and max temps for a given start date or start-end date range<br/>",
    "(replace <em>start-date</em> and/or <em>end-date</em> with a date formatted 'YYYY-MM-DD'):</p>",
    "<ul>",
    "<li>/api/v1.0/<em>start-date</em></li>",
    "<li>/api/v1.0/<em>start-date</em>/<em>end-date</em></li>",
    "</ul>",
);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/precipitation", get(list_precipitation))
        .route("/stations", get(list_stations))
        .route("/tobs", get(trailing_year))
        .route("/:start", get(stats_from))
        .route("/:start/:end", get(stats_between))
        .with_state(state)
}

/// Serializes a reading as `{date: precipitation}`
#[derive(Debug)]
pub struct DateKeyed(pub PrecipitationReading);

impl Serialize for DateKeyed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.date, &self.0.precipitation)?;
        map.end()
    }
}

/// Serializes a reading as `[date, precipitation]`
#[derive(Debug)]
pub struct DatePair(pub PrecipitationReading);

impl Serialize for DatePair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.0.date, self.0.precipitation).serialize(serializer)
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_precipitation(State(st): State<AppState>) -> Json<Vec<DateKeyed>> {
    Json(st.store.precipitation().into_iter().map(DateKeyed).collect())
}

pub async fn list_stations(State(st): State<AppState>) -> Json<Vec<String>> {
    Json(st.store.station_names())
}

/// Dated precipitation for the trailing year. The route name is historical;
/// it has always served precipitation rather than temperature.
pub async fn trailing_year(State(st): State<AppState>) -> Result<Json<Vec<DatePair>>, ApiError> {
    let readings = st.store.trailing_year_precipitation()?;
    debug!(count = readings.len(), "trailing year readings");
    Ok(Json(readings.into_iter().map(DatePair).collect()))
}

pub async fn stats_from(
    State(st): State<AppState>,
    Path(start): Path<String>,
) -> Json<Vec<TemperatureStats>> {
    Json(vec![st.store.temperature_stats(&start, None)])
}

pub async fn stats_between(
    State(st): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Json<Vec<TemperatureStats>> {
    Json(vec![st.store.temperature_stats(&start, Some(&end))])
}
