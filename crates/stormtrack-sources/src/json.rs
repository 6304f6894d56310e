//! JSON endpoint adapters.
//!
//! Track endpoint: `[{Year, Name, Cyclone_Number, Entries: [{Date, Time,
//! Latitude, Longitude, Max_Wind_Speed, ...}]}]`.
//!
//! Landfall endpoint: `[{Year, Hurricane, Date, Time, Latitude, Longitude,
//! "Max Wind Speed (knots)"}]`.
//!
//! Scalars are read as loose [`Value`]s so that a year sent as a number, or a
//! coordinate sent as a string, still normalises the same way.

use crate::{require_content, Result, SourceAdapter, SourceError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use stormtrack_core::normalize::{coordinate, json_text, pad_time, wind_speed};
use stormtrack_core::{LandfallEvent, StormTrack, TrackPoint};

fn decode_array<T: DeserializeOwned>(source_name: &'static str, payload: &[u8]) -> Result<Vec<T>> {
    require_content(source_name, payload)?;
    let rows: Vec<T> =
        serde_json::from_slice(payload).map_err(|error| SourceError::Json { source_name, error })?;
    if rows.is_empty() {
        return Err(SourceError::Empty { source_name });
    }
    Ok(rows)
}

fn optional_text(value: &Value) -> Option<String> {
    Some(json_text(value)).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStorm {
    #[serde(rename = "Year", default)]
    year: Value,
    #[serde(rename = "Name", default)]
    name: Value,
    #[serde(rename = "Cyclone_Number", default)]
    cyclone_number: Value,
    #[serde(rename = "Basin", default)]
    basin: Value,
    #[serde(rename = "Entries", default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "Date", default)]
    date: Value,
    #[serde(rename = "Time", default)]
    time: Value,
    #[serde(rename = "Latitude", default)]
    latitude: Value,
    #[serde(rename = "Longitude", default)]
    longitude: Value,
    #[serde(rename = "Max_Wind_Speed", default)]
    max_wind_speed: Value,
    #[serde(rename = "Indicator", default)]
    indicator: Value,
    #[serde(rename = "Status", default)]
    status: Value,
    #[serde(rename = "Min_Pressure", default)]
    min_pressure: Value,
}

impl From<RawEntry> for TrackPoint {
    fn from(raw: RawEntry) -> Self {
        TrackPoint {
            date: json_text(&raw.date),
            time: pad_time(&json_text(&raw.time)),
            latitude: coordinate(&raw.latitude),
            longitude: coordinate(&raw.longitude),
            max_wind_speed: wind_speed(&raw.max_wind_speed),
            indicator: optional_text(&raw.indicator),
            status: optional_text(&raw.status),
            min_pressure: raw.min_pressure.as_i64().and_then(|p| i32::try_from(p).ok()),
        }
    }
}

/// Storm tracks from the track endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackJson;

impl SourceAdapter for TrackJson {
    type Output = Vec<StormTrack>;

    fn name(&self) -> &'static str {
        "track-json"
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<StormTrack>> {
        let storms: Vec<RawStorm> = decode_array(self.name(), payload)?;
        Ok(storms
            .into_iter()
            .map(|raw| StormTrack {
                year: json_text(&raw.year),
                name: json_text(&raw.name),
                cyclone_number: json_text(&raw.cyclone_number),
                basin: optional_text(&raw.basin),
                points: raw.entries.into_iter().map(TrackPoint::from).collect(),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Landfalls
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLandfall {
    #[serde(rename = "Year", default)]
    year: Value,
    #[serde(rename = "Hurricane", alias = "Name", default)]
    hurricane: Value,
    #[serde(rename = "Date", default)]
    date: Value,
    #[serde(rename = "Time", default)]
    time: Value,
    #[serde(rename = "Latitude", default)]
    latitude: Value,
    #[serde(rename = "Longitude", default)]
    longitude: Value,
    #[serde(rename = "Max Wind Speed (knots)", alias = "Max_Wind_Speed", default)]
    wind: Value,
}

/// Landfall events from the landfall endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandfallJson;

impl SourceAdapter for LandfallJson {
    type Output = Vec<LandfallEvent>;

    fn name(&self) -> &'static str {
        "landfall-json"
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<LandfallEvent>> {
        let rows: Vec<RawLandfall> = decode_array(self.name(), payload)?;
        Ok(rows
            .into_iter()
            .map(|raw| LandfallEvent {
                year: json_text(&raw.year),
                hurricane_name: json_text(&raw.hurricane),
                date: json_text(&raw.date),
                time: pad_time(&json_text(&raw.time)),
                latitude: coordinate(&raw.latitude),
                longitude: coordinate(&raw.longitude),
                wind_speed_knots: wind_speed(&raw.wind),
            })
            .collect())
    }
}
