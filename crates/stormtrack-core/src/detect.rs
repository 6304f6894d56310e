//! Landfall detection — derives [`LandfallEvent`]s from storm tracks.
//!
//! This is how the tabular landfall files are produced. Land is approximated
//! by the Florida reference box (grown by a small buffer for the heuristic
//! method); there is no coastline geometry.

use crate::normalize::year_number;
use crate::types::{Bounds, LandfallEvent, StormTrack, TrackPoint};
use std::collections::HashSet;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// How landfall points are picked out of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Points whose HURDAT2 record identifier is `L` and that lie in the region.
    UsingIndicator,
    /// Sea-to-land transitions inferred from consecutive positions. May
    /// report false positives.
    WithoutIndicator,
    /// The first point of each storm that lies in the region.
    FirstOnLand,
}

impl std::str::FromStr for DetectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "using-l" => Ok(DetectionMethod::UsingIndicator),
            "without-l" => Ok(DetectionMethod::WithoutIndicator),
            "first-on-land" => Ok(DetectionMethod::FirstOnLand),
            other => Err(format!("unknown detection method {other:?}")),
        }
    }
}

/// Tunables for [`detect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectOptions {
    pub region: Bounds,
    /// Degrees added around `region` when deciding a point is near land
    /// (heuristic method only). 0.05° is roughly three miles.
    pub buffer_deg: f64,
    /// A transition only counts when one of its adjacent steps is shorter
    /// than this many statute miles.
    pub max_step_miles: f64,
    pub min_year: i32,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            region: Bounds::FLORIDA,
            buffer_deg: 0.05,
            max_step_miles: 100.0,
            min_year: 1900,
        }
    }
}

/// Extract landfall events from `tracks` with `method`.
///
/// Storms before `opts.min_year` (or with a non-numeric year) are skipped.
pub fn detect<'a>(
    tracks: impl IntoIterator<Item = &'a StormTrack>,
    method: DetectionMethod,
    opts: &DetectOptions,
) -> Vec<LandfallEvent> {
    let mut out = Vec::new();
    let mut seen: HashSet<(Option<String>, String, u64, u64)> = HashSet::new();

    for track in tracks {
        if !year_number(&track.year).is_some_and(|y| y >= opts.min_year) {
            continue;
        }
        match method {
            DetectionMethod::UsingIndicator => out.extend(
                track
                    .points
                    .iter()
                    .filter(|p| p.is_landfall_record() && opts.region.contains(p.latitude, p.longitude))
                    .map(|p| event(track, p)),
            ),
            DetectionMethod::FirstOnLand => out.extend(
                track
                    .points
                    .iter()
                    .find(|p| opts.region.contains(p.latitude, p.longitude))
                    .map(|p| event(track, p)),
            ),
            DetectionMethod::WithoutIndicator => {
                for p in transitions(track, opts) {
                    let key = (
                        track.basin.clone(),
                        p.date.clone(),
                        p.latitude.to_bits(),
                        p.longitude.to_bits(),
                    );
                    if seen.insert(key) {
                        out.push(event(track, p));
                    }
                }
            }
        }
    }

    tracing::debug!(?method, landfalls = out.len(), "landfall detection finished");
    out
}

/// Points where the storm moves from open water onto land and stays there
/// for the next sample.
fn transitions<'a>(track: &'a StormTrack, opts: &DetectOptions) -> Vec<&'a TrackPoint> {
    let near = opts.region.expanded(opts.buffer_deg);
    let on_land = |p: &TrackPoint| p.has_position() && near.contains(p.latitude, p.longitude);
    let points = &track.points;

    (0..points.len())
        .filter(|&i| {
            let current = &points[i];
            let Some(next) = points.get(i + 1) else {
                return false;
            };
            let prev = i.checked_sub(1).map(|j| &points[j]);

            let prev_on_land = prev.is_some_and(|p| on_land(p));
            if prev_on_land || !on_land(current) || !on_land(next) {
                return false;
            }

            let short = |a: &TrackPoint, b: &TrackPoint| distance_miles(a, b) < opts.max_step_miles;
            prev.is_some_and(|p| short(p, current)) || short(current, next)
        })
        .map(|i| &points[i])
        .collect()
}

fn event(track: &StormTrack, point: &TrackPoint) -> LandfallEvent {
    LandfallEvent {
        year: track.year.clone(),
        hurricane_name: track.name.clone(),
        date: point.date.clone(),
        time: point.time.clone(),
        latitude: point.latitude,
        longitude: point.longitude,
        wind_speed_knots: point.max_wind_speed.clone(),
    }
}

/// Great-circle distance between two points in statute miles. `NaN` when
/// either position is missing, which compares false against any limit.
pub fn distance_miles(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}
