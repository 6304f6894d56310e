//! Render projection — a selection flattened into what a map draws.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stormtrack_core::time::normalize_str;
use stormtrack_core::{Bounds, LandfallEvent, LandfallStore, Selection};

/// One landfall marker with its popup text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// `[latitude, longitude]`.
    pub position: [f64; 2],
    pub title: String,
    pub formatted_date_time: String,
    pub wind_speed_text: String,
}

impl Marker {
    pub fn from_event(event: &LandfallEvent) -> Self {
        Self {
            position: [event.latitude, event.longitude],
            title: event.hurricane_name.clone(),
            formatted_date_time: normalize_str(&event.date, &event.time),
            wind_speed_text: format!("{} knots", event.wind_speed_knots),
        }
    }
}

/// Everything needed to draw one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub year: String,
    /// One `[lat, lon]` path per track, in store order.
    pub polylines: Vec<Vec<[f64; 2]>>,
    pub markers: Vec<Marker>,
    /// South-west and north-east corners of the region overlay.
    pub overlay: [[f64; 2]; 2],
    pub may_contain_false_positives: bool,
    /// When the landfall snapshot behind the markers was loaded.
    pub landfalls_loaded_at: Option<DateTime<Utc>>,
}

impl RenderFrame {
    /// Project `selection`, taking the approximation flag and snapshot time
    /// from the landfall store it was selected from.
    pub fn project(selection: &Selection<'_>, overlay: Bounds, landfalls: &LandfallStore) -> Self {
        Self {
            year: selection.year.to_string(),
            polylines: selection.tracks.iter().map(|t| t.path()).collect(),
            markers: selection.landfalls.iter().map(|e| Marker::from_event(e)).collect(),
            overlay: overlay.corners(),
            may_contain_false_positives: landfalls.may_contain_false_positives(),
            landfalls_loaded_at: landfalls.loaded_at(),
        }
    }
}
