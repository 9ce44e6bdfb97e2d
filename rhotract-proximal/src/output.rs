use std::io::Write;
use std::path::Path;

use rhotract_core::models::Tract;
use rhotract_core::utils::{DynamicWriter, get_dynamic_writer};

use crate::aggregate::RhoSum;
use crate::consts::{NA_OUTPUT, OUTPUT_HEADER};
use crate::error::Result;

///
/// Summary of one processed tract: raw sums and counts for both windows, plus
/// their means.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProximalRow {
    pub tract: Tract,
    pub left: RhoSum,
    pub right: RhoSum,
    pub windowsize: u64,
}

impl ProximalRow {
    pub fn to_record(&self) -> [String; 11] {
        [
            self.tract.chrom.clone(),
            self.tract.start.to_string(),
            self.tract.end.to_string(),
            self.tract.tract_size().to_string(),
            format_float(self.left.sum),
            self.left.count.to_string(),
            format_mean(self.left.mean()),
            format_float(self.right.sum),
            self.right.count.to_string(),
            format_mean(self.right.mean()),
            self.windowsize.to_string(),
        ]
    }
}

/// Floats keep at least one decimal, so `0` is written as `0.0`.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| NA_OUTPUT.to_string(), format_float)
}

///
/// Writes [`ProximalRow`]s as a tab-separated table with a header line.
///
pub struct ProximalWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ProximalWriter<DynamicWriter> {
    ///
    /// Create the output file (gzip'd if the path ends in `.gz`) and write the header.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        let writer = get_dynamic_writer(path)?;
        ProximalWriter::from_writer(writer)
    }
}

impl<W: Write> ProximalWriter<DynamicWriter<W>> {
    ///
    /// Flush buffered rows and close the output, writing the gzip trailer if
    /// there is one. A failure here means the output file is incomplete.
    ///
    pub fn finish(self) -> Result<()> {
        self.into_inner()?.finish()?;
        Ok(())
    }
}

impl<W: Write> ProximalWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(OUTPUT_HEADER)?;
        Ok(ProximalWriter { writer })
    }

    pub fn write_row(&mut self, row: &ProximalRow) -> Result<()> {
        self.writer.write_record(row.to_record())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    ///
    /// Flush and hand back the underlying writer.
    ///
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::io::Read;
    use std::rc::Rc;

    use flate2::Compression;
    use flate2::read::MultiGzDecoder;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(3.0, "3.0")]
    #[case(0.125, "0.125")]
    #[case(-2.5, "-2.5")]
    fn test_format_float(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value), expected);
    }

    #[rstest]
    fn test_write_rows() {
        let mut writer = ProximalWriter::from_writer(Vec::new()).unwrap();
        writer
            .write_row(&ProximalRow {
                tract: Tract::new("chr1", 0, 3000).unwrap(),
                left: RhoSum { sum: 3.0, count: 2 },
                right: RhoSum::default(),
                windowsize: 2000,
            })
            .unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "chrom\tstart\tend\ttract_size\tleft_vals\tleft_count\tleft_window\t\
             right_vals\tright_count\tright_window\twindowsize\n\
             chr1\t0\t3000\t3000\t3.0\t2\t1.5\t0.0\t0\tNA\t2000\n"
        );
    }

    /// Accepts writes until `closed` is set, then refuses everything.
    struct ClosingSink {
        closed: Rc<Cell<bool>>,
    }

    impl Write for ClosingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.closed.get() {
                return Err(std::io::Error::other("sink closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn test_finish_reports_gzip_trailer_failure() {
        let closed = Rc::new(Cell::new(false));
        let sink = ClosingSink {
            closed: closed.clone(),
        };
        let encoder = GzEncoder::new(sink, Compression::default());
        let mut writer = ProximalWriter::from_writer(DynamicWriter::Gzip(encoder)).unwrap();
        writer
            .write_row(&ProximalRow {
                tract: Tract::new("chr1", 0, 3000).unwrap(),
                left: RhoSum { sum: 3.0, count: 2 },
                right: RhoSum::default(),
                windowsize: 2000,
            })
            .unwrap();
        writer.flush().unwrap();
        closed.set(true);

        assert!(writer.finish().is_err());
    }

    #[rstest]
    fn test_finish_writes_readable_gzip() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.tsv.gz");

        let writer = ProximalWriter::from_path(&path).unwrap();
        writer.finish().unwrap();

        let mut contents = String::new();
        MultiGzDecoder::new(std::fs::File::open(&path).unwrap())
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, format!("{}\n", OUTPUT_HEADER.join("\t")));
    }
}
