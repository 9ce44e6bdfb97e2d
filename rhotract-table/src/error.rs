use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for annotation table operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred while reading the table or its index.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The table has no header line.
    #[error("Annotation table is empty: {0:?}")]
    EmptyTable(PathBuf),

    /// A required column is not in the header.
    #[error("Annotation table header has no `{0}` column")]
    MissingColumn(String),

    /// A data line has fewer fields than the header promised.
    #[error("Annotation table line has too few fields: {0}")]
    TruncatedLine(String),

    /// A position that is not a positive integer.
    #[error("Invalid position `{0}` in annotation table")]
    InvalidPosition(String),

    /// A rho value that is neither a float nor `NA`.
    #[error("Invalid rho value `{value}` at {chrom}:{position}")]
    InvalidRho {
        chrom: String,
        position: u64,
        value: String,
    },

    /// The tabix index could not be read.
    #[error("Failed to read tabix index {path:?}: {source}")]
    Index {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The region query against the index failed.
    #[error("Failed to query {chrom}:{start}-{end}: {source}")]
    Query {
        chrom: String,
        start: u64,
        end: u64,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for annotation table operations.
pub type Result<T> = std::result::Result<T, TableError>;
