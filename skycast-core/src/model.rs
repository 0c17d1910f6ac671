use serde::{Deserialize, Serialize};

/// Geographic point produced by geocoding. Consumed immediately by the
/// forecast fetch; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One row of the "current + up to 5 days" view model. Numeric fields are
/// rounded to integers at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub city: String,
    /// Calendar day, formatted MM/DD/YYYY.
    pub date: String,
    pub icon: String,
    pub description: String,
    pub temp_f: i32,
    pub wind_mph: i32,
    pub humidity_pct: i32,
}

/// A previously searched city, as persisted in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub name: String,
}

/// OpenWeather 5-day forecast response: three-hour interval samples grouped
/// under a place descriptor.
///
/// `city` and `list` default to empty so a payload missing them still
/// deserializes; the forecast builder rejects the empty shapes as malformed
/// data with a precise message instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub city: PlaceInfo,
    #[serde(default)]
    pub list: Vec<ForecastInterval>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceInfo {
    #[serde(default)]
    pub name: String,
}

/// One timestamped sample from the provider's interval list.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastInterval {
    /// Provider-local timestamp, "YYYY-MM-DD HH:MM:SS".
    pub dt_txt: String,
    pub main: IntervalMain,
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
    pub wind: IntervalWind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntervalMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSummary {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntervalWind {
    pub speed: f64,
}
