//! Test builders — ergonomic constructors for tracks, landfalls, and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use stormtrack_core::{
    LandfallEvent, LandfallStore, SourceVariant, StormTrack, TrackPoint, TrackStore, WindSpeed,
};

// ---------------------------------------------------------------------------
// TrackBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`StormTrack`] fixtures.
///
/// # Example
///
/// ```rust
/// let charley = TrackBuilder::new("2004", "CHARLEY")
///     .number("03")
///     .point("20040813", "1200", 24.4, -82.9)
///     .landfall("20040813", "1945", 26.6, -82.2)
///     .build();
/// ```
pub struct TrackBuilder {
    track: StormTrack,
    wind: i32,
}

impl TrackBuilder {
    pub fn new(year: &str, name: &str) -> Self {
        Self {
            track: StormTrack::new(year, name, "01"),
            wind: 100,
        }
    }

    pub fn number(mut self, number: &str) -> Self {
        self.track.cyclone_number = number.to_string();
        self
    }

    pub fn basin(mut self, basin: &str) -> Self {
        self.track.basin = Some(basin.to_string());
        self
    }

    /// Wind speed for points added after this call.
    pub fn wind(mut self, knots: i32) -> Self {
        self.wind = knots;
        self
    }

    pub fn point(mut self, date: &str, time: &str, lat: f64, lon: f64) -> Self {
        self.track
            .points
            .push(TrackPoint::new(date, time, lat, lon, self.wind));
        self
    }

    /// A point carrying the `L` record identifier.
    pub fn landfall(mut self, date: &str, time: &str, lat: f64, lon: f64) -> Self {
        let mut point = TrackPoint::new(date, time, lat, lon, self.wind);
        point.indicator = Some("L".to_string());
        self.track.points.push(point);
        self
    }

    pub fn build(self) -> StormTrack {
        self.track
    }
}

// ---------------------------------------------------------------------------
// LandfallBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LandfallEvent`] fixtures. Defaults to a point in
/// southwest Florida at noon UTC on 1 September of `year`.
pub struct LandfallBuilder {
    event: LandfallEvent,
}

impl LandfallBuilder {
    pub fn new(year: &str, name: &str) -> Self {
        Self {
            event: LandfallEvent {
                year: year.to_string(),
                hurricane_name: name.to_string(),
                date: format!("{year}0901"),
                time: "1200".to_string(),
                latitude: 26.0,
                longitude: -81.7,
                wind_speed_knots: WindSpeed::Knots(100.0),
            },
        }
    }

    pub fn at(mut self, date: &str, time: &str) -> Self {
        self.event.date = date.to_string();
        self.event.time = time.to_string();
        self
    }

    pub fn position(mut self, lat: f64, lon: f64) -> Self {
        self.event.latitude = lat;
        self.event.longitude = lon;
        self
    }

    pub fn wind(mut self, wind: impl Into<WindSpeed>) -> Self {
        self.event.wind_speed_knots = wind.into();
        self
    }

    pub fn build(self) -> LandfallEvent {
        self.event
    }
}

// ---------------------------------------------------------------------------
// Store helpers
// ---------------------------------------------------------------------------

pub fn track_store(tracks: impl IntoIterator<Item = StormTrack>) -> TrackStore {
    let mut store = TrackStore::new();
    store.ingest(tracks);
    store
}

pub fn landfall_store(events: impl IntoIterator<Item = LandfallEvent>) -> LandfallStore {
    landfall_store_as(events, SourceVariant::UsingIndicator)
}

pub fn landfall_store_as(
    events: impl IntoIterator<Item = LandfallEvent>,
    variant: SourceVariant,
) -> LandfallStore {
    let mut store = LandfallStore::new();
    store.ingest(events, variant);
    store
}

/// One landfall per year, named after the year.
pub fn landfalls_in(years: &[&str]) -> Vec<LandfallEvent> {
    years
        .iter()
        .map(|y| LandfallBuilder::new(y, &format!("STORM-{y}")).build())
        .collect()
}
