//! Selector — the tracks and landfalls to render for one year.

use crate::store::{LandfallStore, TrackStore};
use crate::types::{LandfallEvent, StormTrack};

/// Everything loaded for one year, borrowed from the stores.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub year: &'a str,
    pub tracks: Vec<&'a StormTrack>,
    pub landfalls: Vec<&'a LandfallEvent>,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.landfalls.is_empty()
    }
}

/// Select `year` from both stores.
///
/// Recomputed on every call; the stores are only borrowed, so selecting
/// can never change what a later selection sees.
pub fn select<'a>(tracks: &'a TrackStore, landfalls: &'a LandfallStore, year: &'a str) -> Selection<'a> {
    Selection {
        year,
        tracks: tracks.tracks_for_year(year),
        landfalls: landfalls.landfalls_for_year(year),
    }
}
