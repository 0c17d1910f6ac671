//! Turns a raw interval payload into the "current + up to 5 days" sequence.
//!
//! Pure transformation over in-memory data; all I/O lives in
//! [`crate::service`] and [`crate::geocode`].

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::WeatherError;
use crate::model::{ForecastEntry, ForecastInterval, ForecastPayload};

const DATE_FORMAT: &str = "%m/%d/%Y";
const INTERVAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour of the sample that represents a whole day.
const NOON_HOUR: u32 = 12;

/// Upper bound on appended daily entries; the result is 1..=6 rows.
const MAX_FORECAST_DAYS: usize = 5;

fn interval_time(interval: &ForecastInterval) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&interval.dt_txt, INTERVAL_FORMAT).ok()
}

fn entry_from_interval(
    city: &str,
    interval: &ForecastInterval,
    at: NaiveDateTime,
) -> Result<ForecastEntry, WeatherError> {
    let condition = interval.weather.first().ok_or_else(|| {
        WeatherError::MalformedData("forecast interval has no weather conditions".to_string())
    })?;

    Ok(ForecastEntry {
        city: city.to_owned(),
        date: at.format(DATE_FORMAT).to_string(),
        icon: condition.icon.clone(),
        description: condition.description.clone(),
        temp_f: interval.main.temp.round() as i32,
        wind_mph: interval.wind.speed.round() as i32,
        humidity_pct: interval.main.humidity.round() as i32,
    })
}

/// Map the first (soonest) interval to a [`ForecastEntry`] representing "now".
///
/// # Errors
///
/// Returns [`WeatherError::MalformedData`] when the payload carries no city
/// name, no intervals, an unparseable first timestamp, or a first interval
/// without weather conditions.
pub fn parse_current(payload: &ForecastPayload) -> Result<ForecastEntry, WeatherError> {
    if payload.city.name.is_empty() {
        return Err(WeatherError::MalformedData(
            "forecast payload has no city name".to_string(),
        ));
    }

    let first = payload.list.first().ok_or_else(|| {
        WeatherError::MalformedData("forecast payload has an empty interval list".to_string())
    })?;

    let at = interval_time(first).ok_or_else(|| {
        WeatherError::MalformedData(format!("unparseable interval timestamp '{}'", first.dt_txt))
    })?;

    entry_from_interval(&payload.city.name, first, at)
}

/// Build the full sequence: `current` first, then one representative entry per
/// future calendar day, chronologically, capped at five daily entries.
///
/// A day is represented by its noon sample only; days without an exact
/// hour-12 interval are skipped rather than matched to a nearest hour. The
/// current calendar day (`today`) is always excluded. Intervals with
/// unparseable timestamps are ignored.
pub fn build_forecast(
    current: ForecastEntry,
    payload: &ForecastPayload,
    today: NaiveDate,
) -> Vec<ForecastEntry> {
    // Pass 1: collect the distinct future days that carry a noon sample.
    let mut pending_days: HashSet<NaiveDate> = HashSet::new();
    for interval in &payload.list {
        if let Some(at) = interval_time(interval) {
            if at.date() > today && at.hour() == NOON_HOUR {
                pending_days.insert(at.date());
            }
        }
    }

    // Pass 2: walk the list in time order and consume each day at most once.
    // Upstream data can repeat a day with multiple noon-like entries; the
    // two-pass shape guarantees a single entry per day regardless.
    let mut entries = vec![current];
    for interval in &payload.list {
        if entries.len() > MAX_FORECAST_DAYS {
            break;
        }
        let Some(at) = interval_time(interval) else {
            continue;
        };
        if at.hour() == NOON_HOUR && pending_days.remove(&at.date()) {
            match entry_from_interval(&payload.city.name, interval, at) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::warn!("skipping malformed interval at {}: {err}", interval.dt_txt);
                }
            }
        }
    }

    entries
}
