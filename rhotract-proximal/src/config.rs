use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rhotract_core::models::Split;

use crate::consts::{DEFAULT_RHO_COLUMN, DEFAULT_SPLIT_SIZE};
use crate::error::ConfigError;
use crate::windows::WindowSplitter;

///
/// Settings for a run, as read from a TOML file and/or the command line. Every field
/// is optional here; [`ProximalConfig::validate`] checks that the required ones are set.
///
/// ```toml
/// fname = "tracts.tsv"
/// table = "rho.txt.gz"
/// windowsize = 2000
/// split = "right"
/// outfile = "proximal.tsv"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProximalConfig {
    pub fname: Option<String>,
    pub table: Option<PathBuf>,
    pub windowsize: Option<u64>,
    pub split: Option<Split>,
    pub outfile: Option<PathBuf>,
    pub rho_column: Option<String>,
    pub split_size: Option<u64>,
}

///
/// Validated settings for a run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// tract file, `-` for stdin
    pub fname: String,
    pub table: PathBuf,
    pub windowsize: u64,
    pub split: Split,
    pub outfile: PathBuf,
    pub rho_column: String,
    pub split_size: u64,
}

impl ProximalConfig {
    ///
    /// Overlay `other` on top of `self`: settings present in `other` win.
    ///
    pub fn merge(self, other: ProximalConfig) -> ProximalConfig {
        ProximalConfig {
            fname: other.fname.or(self.fname),
            table: other.table.or(self.table),
            windowsize: other.windowsize.or(self.windowsize),
            split: other.split.or(self.split),
            outfile: other.outfile.or(self.outfile),
            rho_column: other.rho_column.or(self.rho_column),
            split_size: other.split_size.or(self.split_size),
        }
    }

    pub fn validate(self) -> Result<RunConfig, ConfigError> {
        let windowsize = self
            .windowsize
            .ok_or(ConfigError::MissingSetting("windowsize"))?;
        if windowsize == 0 {
            return Err(ConfigError::NotPositive("windowsize"));
        }

        let split_size = self.split_size.unwrap_or(DEFAULT_SPLIT_SIZE);
        if split_size == 0 {
            return Err(ConfigError::NotPositive("split_size"));
        }

        Ok(RunConfig {
            fname: self.fname.ok_or(ConfigError::MissingSetting("fname"))?,
            table: self.table.ok_or(ConfigError::MissingSetting("table"))?,
            windowsize,
            split: self.split.unwrap_or_default(),
            outfile: self.outfile.ok_or(ConfigError::MissingSetting("outfile"))?,
            rho_column: self
                .rho_column
                .unwrap_or_else(|| DEFAULT_RHO_COLUMN.to_string()),
            split_size,
        })
    }
}

impl TryFrom<&Path> for ProximalConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(ConfigError::InvalidFileType(path.to_path_buf()));
        }
        let toml_str = read_to_string(path)?;
        let config: ProximalConfig = toml::from_str(&toml_str)?;

        // relative paths in a config file are relative to the file itself
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(ProximalConfig {
            fname: config.fname.map(|fname| match fname.as_str() {
                "-" => fname,
                _ => base.join(&fname).to_string_lossy().into_owned(),
            }),
            table: config.table.map(|table| base.join(table)),
            outfile: config.outfile.map(|outfile| base.join(outfile)),
            ..config
        })
    }
}

impl RunConfig {
    pub fn splitter(&self) -> WindowSplitter {
        WindowSplitter::new(self.windowsize, self.split).with_split_size(self.split_size)
    }
}
