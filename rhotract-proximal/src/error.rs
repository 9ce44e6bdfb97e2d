use std::path::PathBuf;

use thiserror::Error;

use rhotract_core::CoreError;
use rhotract_table::TableError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting `{0}`")]
    MissingSetting(&'static str),

    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),

    #[error("Config file must be a `.toml` file: {0:?}")]
    InvalidFileType(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum ProximalError {
    #[error("Tract file header has no `{0}` column")]
    MissingTractColumn(String),

    #[error("Malformed tract on line {line}: {message}")]
    TractParse { line: u64, message: String },

    #[error("Invalid tract on line {line}: {source}")]
    InvalidTract {
        line: u64,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProximalError>;
