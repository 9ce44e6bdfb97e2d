use std::io::{BufReader, Read};

use serde::Deserialize;

use rhotract_core::models::Tract;
use rhotract_core::utils::get_dynamic_reader_w_stdin;

use crate::consts::{MIN_TRACT_SIZE, REQUIRED_TRACT_COLUMNS};
use crate::error::{ProximalError, Result};

///
/// One row of the tract table. Columns other than these are ignored, and
/// `tract_size` may be left out, in which case it is `end - start`.
///
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TractRow {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    #[serde(default)]
    pub tract_size: Option<i64>,
}

impl TractRow {
    /// The tract size used to decide whether the row is processed at all.
    pub fn declared_size(&self) -> i128 {
        self.tract_size.map_or_else(
            || i128::from(self.end) - i128::from(self.start),
            i128::from,
        )
    }

    /// Rows with a tract size of one base or less are not analysed.
    pub fn is_processable(&self) -> bool {
        self.declared_size() > MIN_TRACT_SIZE
    }

    pub fn to_tract(&self) -> std::result::Result<Tract, rhotract_core::CoreError> {
        Tract::new(self.chrom.as_str(), self.start, self.end)
    }
}

///
/// Reads tract rows, in file order, from a tab-separated table with a header line.
///
pub struct TractReader<R: Read> {
    reader: csv::Reader<R>,
    headers: csv::StringRecord,
    record: csv::StringRecord,
}

impl TractReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a plain or gzip'd tract file, or stdin when the path is `-`.
    ///
    pub fn from_path(path: &str) -> Result<Self> {
        let reader = get_dynamic_reader_w_stdin(path)?;
        TractReader::from_reader(reader)
    }
}

impl<R: Read> TractReader<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_TRACT_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ProximalError::MissingTractColumn(column.to_string()));
            }
        }

        Ok(TractReader {
            reader,
            headers,
            record: csv::StringRecord::new(),
        })
    }

    ///
    /// Read the next row, `None` at the end of the file. Returns the row with the
    /// 1-based line number it came from.
    ///
    pub fn next_row(&mut self) -> Option<Result<(u64, TractRow)>> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(parse_error(&e, 0))),
        }

        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        let row = self
            .record
            .deserialize::<TractRow>(Some(&self.headers))
            .map_err(|e| parse_error(&e, line))
            .map(|row| (line, row));

        Some(row)
    }
}

impl<R: Read> Iterator for TractReader<R> {
    type Item = Result<(u64, TractRow)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

fn parse_error(e: &csv::Error, line: u64) -> ProximalError {
    let line = e.position().map(|p| p.line()).unwrap_or(line);
    ProximalError::TractParse {
        line,
        message: e.to_string(),
    }
}
