//! Domain-specific assertion macros for stormtrack harnesses.
//!
//! These wrap `pretty_assertions` and say which stormtrack invariant failed
//! rather than just which values differed.

// ---------------------------------------------------------------------------
// Year index assertions
// ---------------------------------------------------------------------------

/// Assert that a year list is strictly descending by numeric value.
///
/// ```rust
/// assert_years_descending!(index.as_slice());
/// ```
#[macro_export]
macro_rules! assert_years_descending {
    ($years:expr) => {{
        let years: &[String] = &$years;
        let numbers: Vec<i64> = years
            .iter()
            .map(|y| y.parse::<i64>().unwrap_or_else(|_| panic!("year {y:?} is not numeric")))
            .collect();
        for pair in numbers.windows(2) {
            if pair[0] <= pair[1] {
                panic!(
                    "assert_years_descending! failed: {} is not after {}\n  years: {:?}",
                    pair[0], pair[1], years
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Selection assertions
// ---------------------------------------------------------------------------

/// Assert that every track and landfall in a selection belongs to `year`.
#[macro_export]
macro_rules! assert_selection_year {
    ($selection:expr, $year:expr) => {{
        let selection: &stormtrack_core::Selection<'_> = &$selection;
        let year: &str = $year;
        for track in &selection.tracks {
            if track.year != year {
                panic!(
                    "assert_selection_year! failed: track {} is from {}, expected {}",
                    track.name, track.year, year
                );
            }
        }
        for event in &selection.landfalls {
            if event.year != year {
                panic!(
                    "assert_selection_year! failed: landfall {} is from {}, expected {}",
                    event.hurricane_name, event.year, year
                );
            }
        }
    }};
}

/// Assert the storm names in a selection, tracks first, in order.
#[macro_export]
macro_rules! assert_selected_names {
    ($selection:expr, tracks: [$($t:expr),* $(,)?], landfalls: [$($l:expr),* $(,)?]) => {{
        let selection: &stormtrack_core::Selection<'_> = &$selection;
        let tracks: Vec<&str> = selection.tracks.iter().map(|t| t.name.as_str()).collect();
        let landfalls: Vec<&str> = selection
            .landfalls
            .iter()
            .map(|e| e.hurricane_name.as_str())
            .collect();
        let expected_tracks: Vec<&str> = vec![$($t),*];
        let expected_landfalls: Vec<&str> = vec![$($l),*];
        pretty_assertions::assert_eq!(tracks, expected_tracks, "selected track names");
        pretty_assertions::assert_eq!(landfalls, expected_landfalls, "selected landfall names");
    }};
}

// ---------------------------------------------------------------------------
// Controller assertions
// ---------------------------------------------------------------------------

/// Assert the controller's year list, default-year choice included.
#[macro_export]
macro_rules! assert_controller_years {
    ($controller:expr, [$($y:expr),* $(,)?], selected: $selected:expr) => {{
        let controller: &stormtrack_app::Controller = &$controller;
        let expected: Vec<&str> = vec![$($y),*];
        let actual: Vec<&str> = controller.years().iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(actual, expected, "controller year index");
        pretty_assertions::assert_eq!(controller.selected_year(), $selected, "selected year");
    }};
}
