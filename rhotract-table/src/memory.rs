use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use rhotract_core::models::RhoRecord;
use rhotract_core::utils::get_dynamic_reader;

use crate::error::{Result, TableError};
use crate::layout::{TableLayout, is_skippable};
use crate::source::RhoSource;

///
/// An annotation table held entirely in memory: one position-sorted vector of
/// records per chromosome, queried with binary search.
///
#[derive(Debug, Default, Clone)]
pub struct InMemoryRhoTable {
    records: HashMap<String, Vec<RhoRecord>>,
}

impl InMemoryRhoTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Read a table from a plain or gzip'd tab-separated file with a header line.
    ///
    pub fn from_path(path: &Path, rho_column: &str) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        Self::from_reader(reader, rho_column)
            .map_err(|e| match e {
                TableError::EmptyTable(_) => TableError::EmptyTable(path.to_path_buf()),
                e => e,
            })
    }

    ///
    /// Read a table from any buffered reader. The first line that does not start
    /// with `##` is the header.
    ///
    pub fn from_reader<R: BufRead>(reader: R, rho_column: &str) -> Result<Self> {
        let mut lines = reader.lines();

        let header = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.starts_with("##") && !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(TableError::EmptyTable(Default::default())),
            }
        };
        let layout = TableLayout::from_header(&header, rho_column)?;

        let mut table = InMemoryRhoTable::new();
        for line in lines {
            let line = line?;
            if is_skippable(&line) {
                continue;
            }
            table.insert(layout.parse_record(&line)?);
        }
        table.sort();

        Ok(table)
    }

    ///
    /// Build a table straight from records, mostly useful in tests.
    ///
    pub fn from_records<I: IntoIterator<Item = RhoRecord>>(records: I) -> Self {
        let mut table = InMemoryRhoTable::new();
        for record in records {
            table.insert(record);
        }
        table.sort();
        table
    }

    fn insert(&mut self, record: RhoRecord) {
        self.records
            .entry(record.chrom.clone())
            .or_default()
            .push(record);
    }

    fn sort(&mut self) {
        for records in self.records.values_mut() {
            records.sort_by_key(|r| r.position);
        }
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RhoSource for InMemoryRhoTable {
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<Vec<RhoRecord>> {
        let Some(records) = self.records.get(chrom) else {
            return Ok(Vec::new());
        };
        if end <= start {
            return Ok(Vec::new());
        }

        let lo = records.partition_point(|r| r.position <= start);
        let hi = records.partition_point(|r| r.position <= end);

        Ok(records[lo..hi].to_vec())
    }
}
