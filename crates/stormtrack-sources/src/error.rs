use thiserror::Error;

/// Why a source payload could not be turned into model records.
///
/// Every variant aborts only the load it came from; callers keep whatever
/// snapshot they already had.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{source_name}: payload is empty")]
    Empty { source_name: &'static str },

    #[error("{source_name}: malformed JSON: {error}")]
    Json {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("{source_name}: malformed table: {error}")]
    Csv {
        source_name: &'static str,
        #[source]
        error: csv::Error,
    },

    #[error("{source_name}: missing column {column:?}")]
    MissingColumn {
        source_name: &'static str,
        column: &'static str,
    },

    #[error("hurdat2 line {line}: {reason}")]
    Hurdat { line: usize, reason: String },

    /// The task decoding the payload panicked or was cancelled.
    #[error("load task ended without a result: {reason}")]
    Task { reason: String },

    #[error("reading {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SourceError>;
