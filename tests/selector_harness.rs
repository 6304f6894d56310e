#![allow(unused)]
//! Selector integration harness.
//!
//! # What this covers
//!
//! - **Year partition**: `select(y)` returns only tracks and landfalls whose
//!   year is `y`, in store order.
//! - **Referential transparency**: two calls with the same stores and year
//!   are structurally equal, and selecting never mutates either store.
//! - **Empty halves**: a year with landfalls but no tracks (or the reverse)
//!   selects the half that exists.
//! - **Property: partition is complete**: across every distinct year, the
//!   selections together contain every stored track exactly once.
//!
//! # What this does NOT cover
//!
//! - Rendering the selection (see `controller_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test selector_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stormtrack_core::select;

fn season_2004() -> (stormtrack_core::TrackStore, stormtrack_core::LandfallStore) {
    let tracks = track_store(vec![
        TrackBuilder::new("2004", "CHARLEY").number("03").landfall("20040813", "1945", 26.6, -82.2).build(),
        TrackBuilder::new("1992", "ANDREW").number("04").landfall("19920824", "0905", 25.5, -80.3).build(),
        TrackBuilder::new("2004", "FRANCES").number("06").landfall("20040905", "0430", 27.2, -80.2).build(),
    ]);
    let landfalls = landfall_store(vec![
        LandfallBuilder::new("2004", "CHARLEY").build(),
        LandfallBuilder::new("1992", "ANDREW").build(),
        LandfallBuilder::new("2004", "FRANCES").build(),
        LandfallBuilder::new("2004", "JEANNE").build(),
    ]);
    (tracks, landfalls)
}

#[test]
fn selects_one_year_from_both_stores() {
    let (tracks, landfalls) = season_2004();
    let selection = select(&tracks, &landfalls, "2004");

    assert_selection_year!(selection, "2004");
    assert_selected_names!(
        selection,
        tracks: ["CHARLEY", "FRANCES"],
        landfalls: ["CHARLEY", "FRANCES", "JEANNE"]
    );
}

#[test]
fn selecting_twice_is_identical_and_leaves_stores_alone() {
    let (tracks, landfalls) = season_2004();
    let before = (tracks.clone(), landfalls.clone());

    let first = select(&tracks, &landfalls, "1992");
    let second = select(&tracks, &landfalls, "1992");
    assert_eq!(first, second);

    assert_eq!(tracks.iter().collect::<Vec<_>>(), before.0.iter().collect::<Vec<_>>());
    assert_eq!(landfalls.iter().collect::<Vec<_>>(), before.1.iter().collect::<Vec<_>>());
}

#[test]
fn year_with_only_landfalls() {
    let tracks = track_store(vec![TrackBuilder::new("2004", "CHARLEY").build()]);
    let landfalls = landfall_store(landfalls_in(&["1935"]));

    let selection = select(&tracks, &landfalls, "1935");
    assert!(selection.tracks.is_empty());
    assert_eq!(selection.landfalls.len(), 1);
    assert!(!selection.is_empty());
}

#[test]
fn unknown_year_selects_nothing() {
    let (tracks, landfalls) = season_2004();
    assert!(select(&tracks, &landfalls, "1900").is_empty());
}

proptest! {
    #[test]
    fn partition_is_complete(years in prop::collection::vec(1900u32..1910, 0..30)) {
        let tracks = track_store(
            years
                .iter()
                .enumerate()
                .map(|(i, y)| TrackBuilder::new(&y.to_string(), &format!("S{i}")).build()),
        );
        let landfalls = landfall_store(Vec::new());

        let distinct: std::collections::BTreeSet<String> = years.iter().map(u32::to_string).collect();
        let mut seen = 0;
        for year in &distinct {
            let selection = select(&tracks, &landfalls, year);
            assert_selection_year!(selection, year.as_str());
            seen += selection.tracks.len();
        }
        prop_assert_eq!(seen, tracks.len());
    }
}
