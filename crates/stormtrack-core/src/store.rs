//! Stores — the loaded snapshot of storm tracks and landfall events.
//!
//! Each store holds exactly one snapshot. [`TrackStore::ingest`] and
//! [`LandfallStore::ingest`] replace it wholesale; nothing is merged into or
//! mutated inside a previous snapshot. Readers only ever get shared borrows.

use crate::types::{LandfallEvent, SourceVariant, StormTrack, TrackKey};
use chrono::{DateTime, Utc};
use std::collections::hash_map::{Entry, HashMap};

// ---------------------------------------------------------------------------
// TrackStore
// ---------------------------------------------------------------------------

/// Storm tracks grouped by `(year, name, cyclone_number)`.
#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    tracks: Vec<StormTrack>,
    loaded_at: Option<DateTime<Utc>>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with `records`.
    ///
    /// Records that share an identity are merged into one track, in the
    /// order their identities were first seen, with points concatenated in
    /// arrival order. Points without a finite position are dropped.
    pub fn ingest(&mut self, records: impl IntoIterator<Item = StormTrack>) {
        let mut tracks: Vec<StormTrack> = Vec::new();
        let mut index: HashMap<TrackKey, usize> = HashMap::new();
        let mut dropped = 0usize;

        for mut record in records {
            let before = record.points.len();
            record.points.retain(|p| p.has_position());
            dropped += before - record.points.len();

            match index.entry(record.key()) {
                Entry::Occupied(slot) => tracks[*slot.get()].points.append(&mut record.points),
                Entry::Vacant(slot) => {
                    slot.insert(tracks.len());
                    tracks.push(record);
                }
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, "dropped track points without a usable position");
        }
        tracing::debug!(tracks = tracks.len(), "track snapshot replaced");

        self.tracks = tracks;
        self.loaded_at = Some(Utc::now());
    }

    /// Tracks whose year equals `year` exactly.
    pub fn tracks_for_year(&self, year: &str) -> Vec<&StormTrack> {
        self.tracks.iter().filter(|t| t.year == year).collect()
    }

    pub fn get(&self, key: &TrackKey) -> Option<&StormTrack> {
        self.tracks.iter().find(|t| {
            t.year == key.year && t.name == key.name && t.cyclone_number == key.cyclone_number
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &StormTrack> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// When the current snapshot was ingested; `None` before the first load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

// ---------------------------------------------------------------------------
// LandfallStore
// ---------------------------------------------------------------------------

/// Landfall events from a single source variant.
#[derive(Debug, Clone, Default)]
pub struct LandfallStore {
    events: Vec<LandfallEvent>,
    variant: Option<SourceVariant>,
    loaded_at: Option<DateTime<Utc>>,
}

impl LandfallStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with `events` from `variant`. Events without a
    /// finite position are dropped.
    pub fn ingest(&mut self, events: impl IntoIterator<Item = LandfallEvent>, variant: SourceVariant) {
        let mut dropped = 0usize;
        let events: Vec<LandfallEvent> = events
            .into_iter()
            .filter(|e| {
                let keep = e.has_position();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        if dropped > 0 {
            tracing::warn!(dropped, %variant, "dropped landfalls without a usable position");
        }
        tracing::debug!(events = events.len(), %variant, "landfall snapshot replaced");

        self.events = events;
        self.variant = Some(variant);
        self.loaded_at = Some(Utc::now());
    }

    /// Landfalls whose year equals `year` exactly.
    pub fn landfalls_for_year(&self, year: &str) -> Vec<&LandfallEvent> {
        self.events.iter().filter(|e| e.year == year).collect()
    }

    /// Variant of the loaded snapshot; `None` before the first load.
    pub fn variant(&self) -> Option<SourceVariant> {
        self.variant
    }

    /// The loaded snapshot is the approximate ("without-L") variant.
    pub fn may_contain_false_positives(&self) -> bool {
        self.variant.is_some_and(SourceVariant::is_approximate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LandfallEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
