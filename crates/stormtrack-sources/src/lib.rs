//! stormtrack-sources — source adapters for storm tracks and landfalls.
//!
//! Each adapter maps one raw payload shape onto the common
//! [`stormtrack_core::StormTrack`] / [`stormtrack_core::LandfallEvent`]
//! model and nothing else. Field normalisation is shared through
//! [`stormtrack_core::normalize`], so adding a source never duplicates it.

pub mod error;
pub mod export;
pub mod fetch;
pub mod hurdat2;
pub mod json;
pub mod table;

use std::path::Path;
use stormtrack_core::LandfallEvent;

pub use error::{Result, SourceError};
pub use hurdat2::Hurdat2;
pub use json::{LandfallJson, TrackJson};
pub use table::LandfallTable;

/// Trait implemented by each source payload shape.
pub trait SourceAdapter: Send + Sync {
    type Output: Send + 'static;

    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Decode a complete payload.
    fn decode(&self, payload: &[u8]) -> Result<Self::Output>;
}

impl<A: SourceAdapter + ?Sized> SourceAdapter for Box<A> {
    type Output = A::Output;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, payload: &[u8]) -> Result<Self::Output> {
        (**self).decode(payload)
    }
}

/// Any adapter that yields landfall events.
pub type LandfallSource = Box<dyn SourceAdapter<Output = Vec<LandfallEvent>>>;

/// Pick the landfall adapter for `path` by extension: `.csv` is tabular
/// (with `year` applied as a load-time row filter), anything else is the
/// JSON endpoint shape.
pub fn landfall_adapter_for(path: &Path, year: Option<&str>) -> LandfallSource {
    let is_table = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_table {
        Box::new(LandfallTable::new(year.map(str::to_string)))
    } else {
        Box::new(LandfallJson)
    }
}

/// Reject payloads that carry nothing but whitespace.
pub(crate) fn require_content(source_name: &'static str, payload: &[u8]) -> Result<()> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        Err(SourceError::Empty { source_name })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a/b.CSV", "landfall-table")]
    #[case("florida_landfalls_without_using_L.csv", "landfall-table")]
    #[case("a/b.json", "landfall-json")]
    #[case("landfalls", "landfall-json")]
    fn adapter_chosen_by_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(landfall_adapter_for(Path::new(path), None).name(), expected);
    }

    #[test]
    fn whitespace_only_payload_is_empty() {
        assert!(matches!(require_content("t", b" \n\t"), Err(SourceError::Empty { .. })));
        assert!(require_content("t", b"[]").is_ok());
    }
}
