use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use noodles::bgzf;
use noodles::core::{Position, Region};
use noodles::csi::{self, BinningIndex};
use noodles::tabix;
use tracing::debug;

use rhotract_core::models::{RhoRecord, Window};

use crate::error::{Result, TableError};
use crate::layout::{TableLayout, is_skippable};
use crate::source::{RhoSource, tabix_index_path};

type TabixReader = csi::io::IndexedReader<bgzf::io::Reader<File>, tabix::Index>;

///
/// A bgzip'd annotation table with a tabix index, queried region by region.
///
/// The table must be indexed on its chromosome and position columns, e.g.
/// `tabix -s 1 -b 2 -e 2 table.txt.gz`.
///
pub struct IndexedRhoTable {
    reader: TabixReader,
    layout: TableLayout,
    chroms: HashSet<String>,
}

impl IndexedRhoTable {
    pub fn from_path(path: &Path, rho_column: &str) -> Result<Self> {
        let index_path = tabix_index_path(path);
        let index = tabix::fs::read(&index_path).map_err(|source| TableError::Index {
            path: index_path.clone(),
            source,
        })?;

        // chromosomes the index knows about; querying any other name is an error in noodles
        let chroms: HashSet<String> = index
            .header()
            .map(|header| {
                header
                    .reference_sequence_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect()
            })
            .unwrap_or_default();
        debug!("Tabix index lists {} chromosomes", chroms.len());

        let layout = read_layout(path, rho_column)?;

        let file = File::open(path)?;
        let reader = csi::io::IndexedReader::new(file, index);

        Ok(IndexedRhoTable {
            reader,
            layout,
            chroms,
        })
    }
}

///
/// Read the header line from the top of a bgzip'd table. `##` lines are metadata,
/// the first line after them is the header.
///
fn read_layout(path: &Path, rho_column: &str) -> Result<TableLayout> {
    let file = File::open(path)?;
    let mut reader = bgzf::io::Reader::new(file);

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(TableError::EmptyTable(path.to_path_buf()));
        }
        if !line.starts_with("##") && !line.trim().is_empty() {
            break;
        }
    }

    TableLayout::from_header(&line, rho_column)
}

fn to_position(n: u64) -> io::Result<Position> {
    usize::try_from(n)
        .ok()
        .and_then(Position::new)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid position"))
}

impl RhoSource for IndexedRhoTable {
    fn fetch(&mut self, chrom: &str, start: u64, end: u64) -> Result<Vec<RhoRecord>> {
        let window = Window::new(start, end);
        if window.is_empty() || !self.chroms.contains(chrom) {
            return Ok(Vec::new());
        }

        let query_err = |source: io::Error| TableError::Query {
            chrom: chrom.to_string(),
            start,
            end,
            source,
        };

        // 0-based half-open [start, end) is 1-based closed [start + 1, end]
        let interval_start = to_position(start + 1).map_err(query_err)?;
        let interval_end = to_position(end).map_err(query_err)?;
        let region = Region::new(chrom, interval_start..=interval_end);

        let query = self.reader.query(&region).map_err(query_err)?;

        let mut records = Vec::new();
        for result in query {
            let record = result.map_err(query_err)?;
            let line: &str = record.as_ref();
            if is_skippable(line) {
                continue;
            }

            let record = self.layout.parse_record(line)?;
            if record.chrom == chrom && window.contains_one_based(record.position) {
                records.push(record);
            }
        }

        Ok(records)
    }
}
