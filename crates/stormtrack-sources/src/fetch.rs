//! File fetch — reads a whole payload and hands it to an adapter.

use crate::{Result, SourceAdapter, SourceError};
use std::path::Path;

/// Read the file at `path` in full.
pub async fn read_payload(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|error| SourceError::Io {
        path: path.display().to_string(),
        error,
    })
}

/// Read `path` and decode it with `adapter`.
pub async fn load<A>(adapter: &A, path: &Path) -> Result<A::Output>
where
    A: SourceAdapter + ?Sized,
{
    let payload = read_payload(path).await?;
    tracing::debug!(source = adapter.name(), path = %path.display(), bytes = payload.len(), "payload read");
    adapter.decode(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{landfall_adapter_for, LandfallJson};

    #[tokio::test]
    async fn loads_file_through_adapter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landfalls.json");
        std::fs::write(
            &path,
            r#"[{"Year": "1935", "Hurricane": "UNNAMED", "Date": "19350903", "Time": "0200",
                "Latitude": 24.8, "Longitude": -80.8, "Max Wind Speed (knots)": 160}]"#,
        )
        .unwrap();

        let events = load(&LandfallJson, &path).await.unwrap();
        assert_eq!(events.len(), 1);

        let boxed = landfall_adapter_for(&path, None);
        let events = load(boxed.as_ref(), &path).await.unwrap();
        assert_eq!(events[0].year, "1935");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = read_payload(Path::new("/definitely/not/here.json")).await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
