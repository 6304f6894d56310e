//! HURDAT2 best-track text → storm tracks.
//!
//! A header line (`AL092004,            CHARLEY,     21,`) opens a storm;
//! each following data line with at least eight fields adds a point:
//!
//! ```text
//! 20040813, 1945, L, HU, 26.6N,  82.2W, 130,  941, ...
//! date      time  id st  lat     lon    wind  pressure
//! ```
//!
//! Data lines that do not parse, or whose position is off the globe, are
//! skipped on their own. Storms that end up with no points are dropped.

use crate::{require_content, Result, SourceAdapter, SourceError};
use regex::Regex;
use std::sync::OnceLock;
use stormtrack_core::normalize::{hemisphere_coordinate, trim_field, wrap_longitude};
use stormtrack_core::{StormTrack, TrackPoint, WindSpeed};

const NAME: &str = "hurdat2";

fn storm_id() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(r"^([A-Z]{2})(\d{2})(\d{4})$").expect("storm id pattern is valid"))
}

/// Raw HURDAT2 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hurdat2;

impl SourceAdapter for Hurdat2 {
    type Output = Vec<StormTrack>;

    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<StormTrack>> {
        require_content(NAME, payload)?;
        let text = String::from_utf8_lossy(payload);

        let mut storms = Vec::new();
        let mut current: Option<StormTrack> = None;
        let mut saw_header = false;
        let mut skipped = 0usize;

        for (n, line) in text.lines().enumerate() {
            let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();

            if parts.len() == 4 {
                saw_header = true;
                storms.extend(current.take().filter(|s| !s.points.is_empty()));
                current = parse_header(&parts);
                if current.is_none() {
                    tracing::warn!(line = n + 1, header = line.trim(), "unrecognised storm header");
                }
            } else if parts.len() >= 8 {
                let Some(storm) = current.as_mut() else {
                    continue;
                };
                match parse_point(&parts) {
                    Some(point) => storm.points.push(point),
                    None => skipped += 1,
                }
            }
        }
        storms.extend(current.take().filter(|s| !s.points.is_empty()));

        if !saw_header {
            return Err(SourceError::Hurdat {
                line: 1,
                reason: "no storm header found".to_string(),
            });
        }
        if skipped > 0 {
            tracing::debug!(skipped, "skipped unparseable hurdat2 data lines");
        }
        if storms.is_empty() {
            return Err(SourceError::Empty { source_name: NAME });
        }
        Ok(storms)
    }
}

fn parse_header(parts: &[&str]) -> Option<StormTrack> {
    let caps = storm_id().captures(parts[0])?;
    // The third field is the number of data lines that follow.
    parts[2].parse::<u32>().ok()?;

    let mut storm = StormTrack::new(&caps[3], trim_field(parts[1]), &caps[2]);
    storm.basin = Some(caps[1].to_string());
    Some(storm)
}

fn parse_point(parts: &[&str]) -> Option<TrackPoint> {
    let latitude = hemisphere_coordinate(parts[4])?;
    let longitude = wrap_longitude(hemisphere_coordinate(parts[5])?);
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    let digits = |s: &str| -> Option<i32> {
        (!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .then(|| s.parse().ok())
            .flatten()
    };

    Some(TrackPoint {
        date: parts[0].to_string(),
        time: parts[1].to_string(),
        latitude,
        longitude,
        max_wind_speed: WindSpeed::from(digits(parts[6]).unwrap_or(0)),
        indicator: Some(parts[2].to_string()).filter(|s| !s.is_empty()),
        status: Some(parts[3].to_string()).filter(|s| !s.is_empty()),
        min_pressure: digits(parts[7]),
    })
}
