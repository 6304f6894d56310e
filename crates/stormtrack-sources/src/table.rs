//! Tabular landfall files ("using-L" / "without-L" exports).
//!
//! The header names the columns; the order is free and extra columns
//! (`Basin`, `Indicator`, `Min_Pressure`, …) are ignored. An optional year
//! filter is applied while reading, so rows for other years never reach the
//! store.

use crate::{require_content, Result, SourceAdapter, SourceError};
use csv::{ReaderBuilder, StringRecord, Trim};
use stormtrack_core::normalize::{coordinate_str, pad_time, trim_field};
use stormtrack_core::{LandfallEvent, WindSpeed};

const NAME: &str = "landfall-table";

/// Column positions resolved from the header row.
struct Columns {
    year: usize,
    name: usize,
    date: usize,
    time: usize,
    latitude: usize,
    longitude: usize,
    wind: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str, aliases: &[&str]| {
            headers
                .iter()
                .position(|h| h == column || aliases.contains(&h))
                .ok_or(SourceError::MissingColumn { source_name: NAME, column })
        };
        Ok(Self {
            year: find("Year", &[])?,
            name: find("Name", &["Hurricane"])?,
            date: find("Date", &[])?,
            time: find("Time", &[])?,
            latitude: find("Latitude", &[])?,
            longitude: find("Longitude", &[])?,
            wind: find("Max_Wind_Speed", &["Max Wind Speed (knots)"])?,
        })
    }

    fn event(&self, row: &StringRecord) -> LandfallEvent {
        let field = |i: usize| row.get(i).unwrap_or_default();
        LandfallEvent {
            year: trim_field(field(self.year)),
            hurricane_name: trim_field(field(self.name)),
            date: trim_field(field(self.date)),
            time: pad_time(field(self.time)),
            latitude: coordinate_str(field(self.latitude)),
            longitude: coordinate_str(field(self.longitude)),
            wind_speed_knots: WindSpeed::Text(trim_field(field(self.wind))),
        }
    }
}

/// Landfall events from a CSV export, optionally limited to one year.
#[derive(Debug, Clone, Default)]
pub struct LandfallTable {
    year: Option<String>,
}

impl LandfallTable {
    pub fn new(year: Option<String>) -> Self {
        Self {
            year: year.map(|y| y.trim().to_string()),
        }
    }

    pub fn for_year(year: impl Into<String>) -> Self {
        Self::new(Some(year.into()))
    }
}

impl SourceAdapter for LandfallTable {
    type Output = Vec<LandfallEvent>;

    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<LandfallEvent>> {
        require_content(NAME, payload)?;
        let csv_err = |error: csv::Error| SourceError::Csv { source_name: NAME, error };

        let mut reader = ReaderBuilder::new().trim(Trim::All).flexible(true).from_reader(payload);
        let columns = Columns::resolve(reader.headers().map_err(csv_err)?)?;

        let mut events = Vec::new();
        let mut rows = 0usize;
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            rows += 1;
            if let Some(year) = &self.year {
                if record.get(columns.year).map(str::trim) != Some(year.as_str()) {
                    continue;
                }
            }
            events.push(columns.event(&record));
        }

        if rows == 0 {
            return Err(SourceError::Empty { source_name: NAME });
        }
        tracing::debug!(rows, kept = events.len(), year = ?self.year, "landfall table decoded");
        Ok(events)
    }
}
