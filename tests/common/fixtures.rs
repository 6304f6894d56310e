//! Static source payloads used across harnesses, one per source shape.
//!
//! The storms are real Florida landfalls with rounded positions; wind speeds
//! are in knots.

use std::path::PathBuf;

/// Track endpoint JSON: two storms, one split across two records.
pub const TRACKS_JSON: &str = r#"[
    {"Year": "2004", "Name": "CHARLEY", "Cyclone_Number": "03", "Basin": "AL",
     "Entries": [
        {"Date": "20040813", "Time": "1200", "Latitude": 24.4, "Longitude": -82.9, "Max_Wind_Speed": 95},
        {"Date": "20040813", "Time": "1945", "Latitude": 26.6, "Longitude": -82.2, "Max_Wind_Speed": 130, "Indicator": "L"}
     ]},
    {"Year": "1992", "Name": "ANDREW", "Cyclone_Number": "04",
     "Entries": [
        {"Date": "19920824", "Time": "0905", "Latitude": 25.5, "Longitude": -80.3, "Max_Wind_Speed": 145, "Indicator": "L"}
     ]},
    {"Year": "2004", "Name": "CHARLEY", "Cyclone_Number": "03",
     "Entries": [
        {"Date": "20040814", "Time": "0000", "Latitude": 27.6, "Longitude": -81.6, "Max_Wind_Speed": 110}
     ]}
]"#;

/// Landfall endpoint JSON (`L`-indicator variant).
pub const LANDFALLS_JSON: &str = r#"[
    {"Year": "2004", "Hurricane": "CHARLEY", "Date": "20040813", "Time": "1945",
     "Latitude": 26.6, "Longitude": -82.2, "Max Wind Speed (knots)": 130},
    {"Year": "1992", "Hurricane": "ANDREW", "Date": "19920824", "Time": "0905",
     "Latitude": 25.5, "Longitude": -80.3, "Max Wind Speed (knots)": 145},
    {"Year": "1899", "Hurricane": "UNNAMED", "Date": "18990801", "Time": "0000",
     "Latitude": 25.0, "Longitude": -80.5, "Max Wind Speed (knots)": 90}
]"#;

/// Tabular landfall file (heuristic variant). Times are not zero-padded.
pub const LANDFALLS_CSV: &str = "\
Year,Name,Date,Time,Latitude,Longitude,Max_Wind_Speed
2017,IRMA,20170910,1300,24.7,-81.5,115
2017,IRMA,20170910,1930,25.9,-81.7,100
2018,MICHAEL,20181010,1730,30.0,-85.5,140
1935,UNNAMED,19350903,200,24.8,-80.8,160
";

/// HURDAT2 text for the same storms as [`TRACKS_JSON`], plus one storm that
/// never reaches Florida.
pub const HURDAT2: &str = "\
AL031992,             ANDREW,      3,
19920823, 1800,  , HU, 25.4N,  77.5W, 140,  930,
19920824, 0905, L, HU, 25.5N,  80.3W, 145,  922,
19920824, 1200,  , HU, 25.6N,  81.2W, 115,  951,
AL032004,            CHARLEY,      3,
20040813, 1200,  , HU, 24.4N,  82.9W,  95,  965,
20040813, 1945, L, HU, 26.6N,  82.2W, 130,  941,
20040814, 0000,  , HU, 27.6N,  81.6W, 110,  960,
AL062005,              FRANK,      2,
20050901, 0000,  , TS, 15.0N,  45.0W,  40, 1005,
20050901, 0600,  , TS, 15.5N,  46.0W,  45, 1003,
";

/// Write `contents` to `name` inside a fresh temp dir. Keep the returned
/// dir alive for as long as the path is used.
pub fn write_fixture(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
