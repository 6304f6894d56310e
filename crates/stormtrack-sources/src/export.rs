//! Writers for the source shapes, so parsed or derived data can be served
//! back to the adapters: tracks as the track-endpoint JSON, landfalls as the
//! tabular file.

use serde_json::{json, Value};
use std::io::Write;
use stormtrack_core::{LandfallEvent, StormTrack};

/// Header row of the tabular landfall file.
pub const TABLE_HEADER: [&str; 7] = [
    "Year",
    "Name",
    "Date",
    "Time",
    "Latitude",
    "Longitude",
    "Max_Wind_Speed",
];

/// Tracks in the track-endpoint JSON shape.
pub fn tracks_to_json(tracks: &[StormTrack]) -> Value {
    Value::Array(
        tracks
            .iter()
            .map(|t| {
                json!({
                    "Basin": t.basin,
                    "Cyclone_Number": t.cyclone_number,
                    "Year": t.year,
                    "Name": t.name,
                    "Data_Count": t.points.len(),
                    "Entries": t.points.iter().map(|p| json!({
                        "Date": p.date,
                        "Time": p.time,
                        "Indicator": p.indicator.as_deref().unwrap_or(" "),
                        "Status": p.status,
                        "Latitude": p.latitude,
                        "Longitude": p.longitude,
                        "Max_Wind_Speed": p.max_wind_speed,
                        "Min_Pressure": p.min_pressure,
                    })).collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

/// Write landfalls as the tabular file, header included.
pub fn write_landfalls_csv<W: Write>(events: &[LandfallEvent], out: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(TABLE_HEADER)?;
    for e in events {
        writer.write_record([
            e.year.clone(),
            e.hurricane_name.clone(),
            e.date.clone(),
            e.time.clone(),
            e.latitude.to_string(),
            e.longitude.to_string(),
            e.wind_speed_knots.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
