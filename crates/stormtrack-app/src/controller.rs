//! Controller — the single owner of every piece of mutable state.
//!
//! The stores, the derived [`YearIndex`], the selected year, and the active
//! source variant only change through the named transitions below. Loads
//! are two-phase: `begin_*` issues a [`LoadTicket`], and the finished load is
//! handed back to [`Controller::apply`] as a [`LoadOutcome`].
//!
//! # Request sequencing
//!
//! Loads finish in any order. Every ticket carries a sequence number, and
//! `apply` only accepts an outcome whose ticket is the most recent one
//! issued for that store. A slow response to an older request is discarded
//! instead of overwriting newer data, so the last *request* wins rather than
//! the last completion.

use crate::render::RenderFrame;
use stormtrack_core::config::Config;
use stormtrack_core::{
    select, Bounds, LandfallEvent, LandfallStore, Selection, SourceVariant, StormTrack, TrackStore,
    YearIndex,
};
use stormtrack_sources::SourceError;

// ---------------------------------------------------------------------------
// Load protocol
// ---------------------------------------------------------------------------

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTicket {
    Tracks { seq: u64 },
    Landfalls { seq: u64, variant: SourceVariant },
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        match self {
            LoadTicket::Tracks { seq } | LoadTicket::Landfalls { seq, .. } => *seq,
        }
    }

    /// The landfall variant requested, for landfall tickets.
    pub fn variant(&self) -> Option<SourceVariant> {
        match self {
            LoadTicket::Tracks { .. } => None,
            LoadTicket::Landfalls { variant, .. } => Some(*variant),
        }
    }
}

/// Decoded records from a finished load.
#[derive(Debug)]
pub enum Payload {
    Tracks(Vec<StormTrack>),
    Landfalls(Vec<LandfallEvent>),
}

impl From<Vec<StormTrack>> for Payload {
    fn from(tracks: Vec<StormTrack>) -> Self {
        Payload::Tracks(tracks)
    }
}

impl From<Vec<LandfallEvent>> for Payload {
    fn from(events: Vec<LandfallEvent>) -> Self {
        Payload::Landfalls(events)
    }
}

/// A finished load, successful or not, tagged with the ticket it answers.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Payload, SourceError>,
}

impl LoadOutcome {
    pub fn new(ticket: LoadTicket, result: Result<impl Into<Payload>, SourceError>) -> Self {
        Self {
            ticket,
            result: result.map(Into::into),
        }
    }
}

/// What [`Controller::apply`] did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The track snapshot was replaced.
    Tracks { tracks: usize },
    /// The landfall snapshot was replaced and the year index recomputed.
    Landfalls { events: usize, years: usize },
    /// A newer load for the same store had already been issued.
    Stale,
    /// The load failed; the previous snapshot is kept.
    Failed,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Controller {
    tracks: TrackStore,
    landfalls: LandfallStore,
    years: YearIndex,
    /// A year chosen through [`Controller::select_year`]; `None` means
    /// follow the index default.
    chosen_year: Option<String>,
    /// Variant assumed before any landfall snapshot is loaded.
    default_variant: SourceVariant,
    /// Variant of the landfall load in flight, if any.
    requested_variant: Option<SourceVariant>,
    next_seq: u64,
    pending_tracks: Option<u64>,
    pending_landfalls: Option<u64>,
    min_year: i32,
    fallback_year: String,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self {
            tracks: TrackStore::new(),
            landfalls: LandfallStore::new(),
            years: YearIndex::default(),
            chosen_year: None,
            default_variant: config.sources.variant,
            requested_variant: None,
            next_seq: 0,
            pending_tracks: None,
            pending_landfalls: None,
            min_year: config.display.min_year,
            fallback_year: config.display.fallback_year.clone(),
        }
    }

    // -- transitions --------------------------------------------------------

    /// Issue a track load. Any earlier track load still in flight becomes stale.
    pub fn begin_track_load(&mut self) -> LoadTicket {
        let seq = self.issue();
        self.pending_tracks = Some(seq);
        tracing::debug!(seq, "track load issued");
        LoadTicket::Tracks { seq }
    }

    /// Issue a landfall load for `variant`. The variant becomes active only
    /// once the load is applied.
    pub fn begin_landfall_load(&mut self, variant: SourceVariant) -> LoadTicket {
        let seq = self.issue();
        self.pending_landfalls = Some(seq);
        self.requested_variant = Some(variant);
        tracing::debug!(seq, %variant, "landfall load issued");
        LoadTicket::Landfalls { seq, variant }
    }

    /// Switch to the other source variant. The returned ticket must be
    /// loaded; the current snapshot stays until it arrives.
    ///
    /// The flip is relative to the load in flight, if there is one, so two
    /// quick toggles land back on the loaded variant.
    pub fn toggle_variant(&mut self) -> LoadTicket {
        let from = self.requested_variant.unwrap_or_else(|| self.variant());
        self.begin_landfall_load(from.toggled())
    }

    pub fn select_year(&mut self, year: impl Into<String>) {
        let year = year.into();
        tracing::debug!(%year, "year selected");
        self.chosen_year = Some(year);
    }

    /// Apply a finished load.
    pub fn apply(&mut self, outcome: LoadOutcome) -> Applied {
        let LoadOutcome { ticket, result } = outcome;
        let seq = ticket.seq();

        let pending = match ticket {
            LoadTicket::Tracks { .. } => &mut self.pending_tracks,
            LoadTicket::Landfalls { .. } => &mut self.pending_landfalls,
        };
        if *pending != Some(seq) {
            tracing::debug!(seq, latest = ?*pending, "discarding stale load");
            return Applied::Stale;
        }
        *pending = None;
        if let LoadTicket::Landfalls { .. } = ticket {
            self.requested_variant = None;
        }

        match (ticket, result) {
            (_, Err(err)) => {
                tracing::warn!(seq, error = %err, "load failed; keeping previous data");
                Applied::Failed
            }
            (LoadTicket::Tracks { .. }, Ok(Payload::Tracks(tracks))) => {
                self.tracks.ingest(tracks);
                tracing::info!(
                    seq,
                    tracks = self.tracks.len(),
                    loaded_at = ?self.tracks.loaded_at(),
                    "tracks loaded"
                );
                Applied::Tracks { tracks: self.tracks.len() }
            }
            (LoadTicket::Landfalls { variant, .. }, Ok(Payload::Landfalls(events))) => {
                self.landfalls.ingest(events, variant);
                self.reindex_years();
                tracing::info!(
                    seq,
                    %variant,
                    events = self.landfalls.len(),
                    years = self.years.len(),
                    loaded_at = ?self.landfalls.loaded_at(),
                    "landfalls loaded"
                );
                Applied::Landfalls {
                    events: self.landfalls.len(),
                    years: self.years.len(),
                }
            }
            (ticket, Ok(_)) => {
                tracing::warn!(?ticket, "payload does not match the store it was loaded for");
                Applied::Failed
            }
        }
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn reindex_years(&mut self) {
        self.years = YearIndex::compute_with_min(&self.landfalls, self.min_year);
        let dropped = self
            .chosen_year
            .as_deref()
            .is_some_and(|year| !self.years.contains(year));
        if dropped {
            tracing::debug!(year = ?self.chosen_year, "selected year no longer loaded; using default");
            self.chosen_year = None;
        }
    }

    // -- reads --------------------------------------------------------------

    pub fn years(&self) -> &[String] {
        self.years.as_slice()
    }

    /// The chosen year, or the most recent loaded year, or the fallback.
    pub fn selected_year(&self) -> &str {
        self.chosen_year
            .as_deref()
            .unwrap_or_else(|| self.years.default_year(&self.fallback_year))
    }

    /// Variant of the loaded landfall snapshot, or the configured one
    /// before anything has loaded.
    pub fn variant(&self) -> SourceVariant {
        self.landfalls.variant().unwrap_or(self.default_variant)
    }

    /// A load has been issued whose outcome has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.pending_tracks.is_some() || self.pending_landfalls.is_some()
    }

    pub fn tracks(&self) -> &TrackStore {
        &self.tracks
    }

    pub fn landfalls(&self) -> &LandfallStore {
        &self.landfalls
    }

    pub fn selection(&self) -> Selection<'_> {
        select(&self.tracks, &self.landfalls, self.selected_year())
    }

    /// Render-ready output for the selected year.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::project(&self.selection(), Bounds::FLORIDA, &self.landfalls)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
