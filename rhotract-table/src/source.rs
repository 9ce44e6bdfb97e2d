use std::path::{Path, PathBuf};

use tracing::{info, warn};

use rhotract_core::models::RhoRecord;

use crate::consts::TABIX_EXTENSION;
use crate::error::Result;
use crate::indexed::IndexedRhoTable;
use crate::memory::InMemoryRhoTable;

///
/// Anything that can answer "which rho records fall in this window".
///
pub trait RhoSource {
    ///
    /// Fetch every record on `chrom` whose 1-based position `p` satisfies
    /// `start < p <= end`, i.e. that lies inside the 0-based half-open window
    /// `[start, end)`. Records come back in table order. An unknown chromosome
    /// or an empty window gives an empty vector.
    ///
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<Vec<RhoRecord>>;
}

impl<T: RhoSource + ?Sized> RhoSource for Box<T> {
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<Vec<RhoRecord>> {
        (**self).fetch(chrom, start, end)
    }
}

///
/// Path of the tabix index that belongs to a table, `<table>.tbi`.
///
pub fn tabix_index_path(path: &Path) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(".");
    index.push(TABIX_EXTENSION);
    PathBuf::from(index)
}

///
/// Open an annotation table. If a tabix index sits next to the table it is queried
/// through the index, otherwise the whole table is read into memory.
///
/// # Arguments
/// - path: path to the table (bgzip'd when indexed; plain or gzip'd otherwise)
/// - rho_column: name of the column holding rho values
///
pub fn open_rho_table(path: &Path, rho_column: &str) -> Result<Box<dyn RhoSource>> {
    let index_path = tabix_index_path(path);

    if index_path.exists() {
        info!("Using tabix index {:?}", index_path);
        let table = IndexedRhoTable::from_path(path, rho_column)?;
        Ok(Box::new(table))
    } else {
        warn!(
            "No tabix index found at {:?}; loading the whole annotation table into memory",
            index_path
        );
        let table = InMemoryRhoTable::from_path(path, rho_column)?;
        info!("Loaded {} annotation records", table.len());
        Ok(Box::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_tabix_index_path() {
        let path = Path::new("data/rho.txt.gz");
        assert_eq!(tabix_index_path(path), PathBuf::from("data/rho.txt.gz.tbi"));
    }

    #[rstest]
    fn test_open_unindexed_table_falls_back_to_memory() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("rho.txt");
        std::fs::write(&path, "chrom\tpos\tld_rho\nchr1\t5\t0.5\nchr1\t6\tNA\n").unwrap();

        let mut table = open_rho_table(&path, "ld_rho").unwrap();
        let records = table.fetch("chr1", 0, 10).unwrap();
        assert_eq!(records.len(), 2);
    }
}
