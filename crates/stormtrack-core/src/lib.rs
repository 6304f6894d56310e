//! stormtrack-core — hurricane tracks and landfalls, partitioned by year.
//!
//! This crate holds the data model and everything that transforms it, plus
//! the shared configuration. Nothing here does I/O apart from
//! [`config::Config::load`].
//!
//! # Architecture
//!
//! ```text
//! sources ──► TrackStore ───────────────┐
//!        └──► LandfallStore ──► YearIndex├──► select(year) ──► render
//!                    └──────────────────┘
//! ```

pub mod config;
pub mod detect;
pub mod normalize;
pub mod select;
pub mod store;
pub mod time;
pub mod types;
pub mod years;

pub use select::{select, Selection};
pub use store::{LandfallStore, TrackStore};
pub use types::{Bounds, LandfallEvent, SourceVariant, StormTrack, TrackKey, TrackPoint, WindSpeed};
pub use years::YearIndex;
