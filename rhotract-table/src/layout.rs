use rhotract_core::models::RhoRecord;
use rhotract_core::models::rho_record::NA;

use crate::consts::{CHROM_COLUMNS, POSITION_COLUMNS};
use crate::error::{Result, TableError};

///
/// Column indices of an annotation table, resolved from its header line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub chrom: usize,
    pub position: usize,
    pub rho: usize,
}

impl TableLayout {
    ///
    /// Resolve the layout from a header line. A leading `#` (as left by tabix-friendly
    /// tables) is ignored, and chromosome/position column names are matched
    /// case-insensitively.
    ///
    /// # Arguments
    /// - header: the header line, tab separated
    /// - rho_column: name of the column holding rho values
    ///
    pub fn from_header(header: &str, rho_column: &str) -> Result<Self> {
        let columns: Vec<String> = header
            .trim_end_matches(['\r', '\n'])
            .trim_start_matches('#')
            .split('\t')
            .map(|c| c.trim().to_lowercase())
            .collect();

        let find_any = |names: &[&str]| columns.iter().position(|c| names.contains(&c.as_str()));

        let chrom = find_any(&CHROM_COLUMNS)
            .ok_or_else(|| TableError::MissingColumn(CHROM_COLUMNS[0].to_string()))?;
        let position = find_any(&POSITION_COLUMNS)
            .ok_or_else(|| TableError::MissingColumn(POSITION_COLUMNS[0].to_string()))?;
        let rho = columns
            .iter()
            .position(|c| *c == rho_column.to_lowercase())
            .ok_or_else(|| TableError::MissingColumn(rho_column.to_string()))?;

        Ok(TableLayout {
            chrom,
            position,
            rho,
        })
    }

    ///
    /// Parse one data line into a [`RhoRecord`].
    ///
    pub fn parse_record(&self, line: &str) -> Result<RhoRecord> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();

        let field = |i: usize| {
            fields
                .get(i)
                .copied()
                .ok_or_else(|| TableError::TruncatedLine(line.to_string()))
        };

        let chrom = field(self.chrom)?;
        let position_str = field(self.position)?;
        let position = position_str
            .trim()
            .parse::<u64>()
            .map_err(|_| TableError::InvalidPosition(position_str.to_string()))?;

        let rho_str = field(self.rho)?.trim();
        let ld_rho = if rho_str == NA {
            None
        } else {
            let value = rho_str.parse::<f64>().map_err(|_| TableError::InvalidRho {
                chrom: chrom.to_string(),
                position,
                value: rho_str.to_string(),
            })?;
            Some(value)
        };

        Ok(RhoRecord::new(chrom, position, ld_rho))
    }
}

/// Lines that carry no data: blanks and `#` comments.
pub(crate) fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn layout() -> TableLayout {
        TableLayout::from_header("#chrom\tpos\tref\tld_rho\n", "ld_rho").unwrap()
    }

    #[rstest]
    fn test_layout_from_header(layout: TableLayout) {
        assert_eq!(
            layout,
            TableLayout {
                chrom: 0,
                position: 1,
                rho: 3
            }
        );
    }

    #[rstest]
    fn test_layout_custom_rho_column() {
        let layout = TableLayout::from_header("Chromosome\tPosition\tpop_rho\tld_rho", "pop_rho")
            .unwrap();
        assert_eq!(layout.rho, 2);
    }

    #[rstest]
    #[case("chrom\tpos\tsomething_else")]
    #[case("contig\tpos\tld_rho")]
    #[case("chrom\tstart\tld_rho")]
    fn test_layout_missing_column(#[case] header: &str) {
        let result = TableLayout::from_header(header, "ld_rho");
        assert!(matches!(result, Err(TableError::MissingColumn(_))));
    }

    #[rstest]
    fn test_parse_record(layout: TableLayout) {
        let record = layout.parse_record("chr1\t1042\tA\t0.0125\n").unwrap();
        assert_eq!(record, RhoRecord::new("chr1", 1042, Some(0.0125)));
    }

    #[rstest]
    fn test_parse_na_record(layout: TableLayout) {
        let record = layout.parse_record("chr1\t1043\tC\tNA").unwrap();
        assert!(record.is_na());
    }

    #[rstest]
    #[case("chr1\t1043\tC\tfoo")]
    #[case("chr1\tabc\tC\t0.1")]
    #[case("chr1\t1043")]
    fn test_parse_bad_record(layout: TableLayout, #[case] line: &str) {
        assert!(layout.parse_record(line).is_err());
    }

    #[rstest]
    #[case("", true)]
    #[case("# comment", true)]
    #[case("chr1\t1\tA\t0.1", false)]
    fn test_is_skippable(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_skippable(line), expected);
    }
}
