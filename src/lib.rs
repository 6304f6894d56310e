//! stormtrack — hurricane tracks and Florida landfalls, by year.
//!
//! Loads storm tracks and landfall events from pluggable sources, derives the
//! list of landfall years, and projects the selected year into something a
//! map can draw. The three layers are re-exported here so integration tests
//! and the binary can reach them through one crate.
//!
//! # Architecture
//!
//! ```text
//! sources ──► Loader ──► Controller ──► select(year) ──► RenderFrame
//!                           │
//!                           └──► YearIndex
//! ```
//!
//! Loads run on tokio tasks gathered in a join set; the controller
//! is the only place state changes.

pub use stormtrack_app;
pub use stormtrack_core;
pub use stormtrack_sources;

pub use stormtrack_app::{Controller, Loader, RenderFrame};
pub use stormtrack_core::config::Config;
pub use stormtrack_core::{
    select, Bounds, LandfallEvent, LandfallStore, Selection, SourceVariant, StormTrack, TrackStore,
    YearIndex,
};
