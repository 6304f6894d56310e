//! Core types for stormtrack-core.
//!
//! This module defines the data structures shared across every layer: the
//! [`StormTrack`] and its [`TrackPoint`]s, the [`LandfallEvent`], the
//! pass-through [`WindSpeed`], and the [`SourceVariant`] discriminant.

use serde::{Deserialize, Serialize};

/// One timestamped position/intensity sample along a storm's path.
///
/// `date` and `time` are kept as the source wrote them (`YYYYMMDD`, `HHMM`
/// UTC); [`crate::time::normalize`] turns them into display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub date: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub max_wind_speed: WindSpeed,
    /// HURDAT2 record identifier (`L` marks a landfall), when the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// System status (`HU`, `TS`, `EX`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Minimum central pressure in millibars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pressure: Option<i32>,
}

impl TrackPoint {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: f64,
        longitude: f64,
        max_wind_speed: impl Into<WindSpeed>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            latitude,
            longitude,
            max_wind_speed: max_wind_speed.into(),
            indicator: None,
            status: None,
            min_pressure: None,
        }
    }

    /// Both coordinates are finite numbers.
    pub fn has_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn is_landfall_record(&self) -> bool {
        self.indicator.as_deref() == Some("L")
    }
}

/// A storm's full path for one season.
///
/// Identity is `(year, name, cyclone_number)`. `points` keeps the order the
/// source supplied and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormTrack {
    pub year: String,
    pub name: String,
    pub cyclone_number: String,
    /// Basin code (`AL`, `EP`, …) when the source carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basin: Option<String>,
    pub points: Vec<TrackPoint>,
}

impl StormTrack {
    pub fn new(
        year: impl Into<String>,
        name: impl Into<String>,
        cyclone_number: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            name: name.into(),
            cyclone_number: cyclone_number.into(),
            basin: None,
            points: Vec::new(),
        }
    }

    pub fn key(&self) -> TrackKey {
        TrackKey {
            year: self.year.clone(),
            name: self.name.clone(),
            cyclone_number: self.cyclone_number.clone(),
        }
    }

    /// `[latitude, longitude]` pairs in source order, ready for a polyline.
    pub fn path(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.latitude, p.longitude]).collect()
    }
}

/// Identity of a [`StormTrack`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackKey {
    pub year: String,
    pub name: String,
    pub cyclone_number: String,
}

/// A recorded point where a storm crossed into the Florida region.
///
/// Independent of [`StormTrack`]: the year/name may have no matching track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandfallEvent {
    pub year: String,
    pub hurricane_name: String,
    pub date: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub wind_speed_knots: WindSpeed,
}

impl LandfallEvent {
    pub fn has_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Wind speed exactly as the source supplied it.
///
/// JSON sources give numbers, tabular files give text. Nothing downstream
/// does arithmetic on the value except landfall detection, which goes
/// through [`WindSpeed::knots`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindSpeed {
    Knots(f64),
    Text(String),
}

impl WindSpeed {
    pub fn knots(&self) -> Option<f64> {
        match self {
            WindSpeed::Knots(k) => Some(*k),
            WindSpeed::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl Default for WindSpeed {
    fn default() -> Self {
        WindSpeed::Knots(0.0)
    }
}

impl From<f64> for WindSpeed {
    fn from(k: f64) -> Self {
        WindSpeed::Knots(k)
    }
}

impl From<i32> for WindSpeed {
    fn from(k: i32) -> Self {
        WindSpeed::Knots(f64::from(k))
    }
}

impl From<&str> for WindSpeed {
    fn from(t: &str) -> Self {
        WindSpeed::Text(t.to_string())
    }
}

impl From<String> for WindSpeed {
    fn from(t: String) -> Self {
        WindSpeed::Text(t)
    }
}

impl std::fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindSpeed::Knots(k) if k.fract() == 0.0 && k.is_finite() => write!(f, "{}", *k as i64),
            WindSpeed::Knots(k) => write!(f, "{k}"),
            WindSpeed::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Which landfall-detection dataset a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceVariant {
    /// Landfalls taken from the HURDAT2 `L` record identifier ("using-L").
    #[serde(rename = "using-l")]
    UsingIndicator,
    /// Landfalls inferred from position changes ("without-L"). May contain
    /// false positives.
    #[serde(rename = "without-l")]
    WithoutIndicator,
}

impl SourceVariant {
    /// Results from this variant may contain false positives due to
    /// approximations in landfall detection.
    pub fn is_approximate(self) -> bool {
        matches!(self, SourceVariant::WithoutIndicator)
    }

    pub fn toggled(self) -> Self {
        match self {
            SourceVariant::UsingIndicator => SourceVariant::WithoutIndicator,
            SourceVariant::WithoutIndicator => SourceVariant::UsingIndicator,
        }
    }
}

impl Default for SourceVariant {
    fn default() -> Self {
        SourceVariant::UsingIndicator
    }
}

impl std::fmt::Display for SourceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceVariant::UsingIndicator => write!(f, "using-l"),
            SourceVariant::WithoutIndicator => write!(f, "without-l"),
        }
    }
}

impl std::str::FromStr for SourceVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "using-l" | "using" | "primary" => Ok(SourceVariant::UsingIndicator),
            "without-l" | "without" | "alternate" => Ok(SourceVariant::WithoutIndicator),
            other => Err(format!("unknown source variant {other:?}")),
        }
    }
}

/// A latitude/longitude rectangle, south-west corner first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// The Florida reference box drawn over the map.
    pub const FLORIDA: Bounds = Bounds {
        south: 24.5,
        west: -87.6,
        north: 31.0,
        east: -79.8,
    };

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.south..=self.north).contains(&latitude) && (self.west..=self.east).contains(&longitude)
    }

    /// The same box grown by `degrees` on every side.
    pub fn expanded(&self, degrees: f64) -> Bounds {
        Bounds {
            south: self.south - degrees,
            west: self.west - degrees,
            north: self.north + degrees,
            east: self.east + degrees,
        }
    }

    /// `[[south, west], [north, east]]`, the shape map layers expect.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}
