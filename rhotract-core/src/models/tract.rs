use std::fmt::{self, Display};

use crate::errors::CoreError;

///
/// Tract struct, one intergenic tract from the tract table
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Tract {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Tract {
    ///
    /// Create a new tract, refusing coordinates where `end < start`
    ///
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Result<Self, CoreError> {
        let chrom = chrom.into();
        if end < start {
            return Err(CoreError::InvertedTract { chrom, start, end });
        }
        Ok(Tract { chrom, start, end })
    }

    ///
    /// Length of the tract, `end - start`
    ///
    pub fn tract_size(&self) -> u64 {
        self.end - self.start
    }

    /// Midpoint used when a tract gets bisected. Integer division, so odd
    /// sized tracts put the extra base on the right.
    pub fn mid_point(&self) -> u64 {
        self.start + self.tract_size() / 2
    }

    ///
    /// Get file string of Tract
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}

impl Display for Tract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
