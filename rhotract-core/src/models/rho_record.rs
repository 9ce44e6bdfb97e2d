///
/// One row of the annotation table. `ld_rho` is `None` where the table holds
/// the `NA` sentinel.
///
#[derive(PartialEq, Debug, Clone)]
pub struct RhoRecord {
    pub chrom: String,
    /// 1-based position, as written in the table
    pub position: u64,
    pub ld_rho: Option<f64>,
}

/// Literal the annotation tables use for a missing rho value
pub const NA: &str = "NA";

impl RhoRecord {
    pub fn new(chrom: impl Into<String>, position: u64, ld_rho: Option<f64>) -> Self {
        RhoRecord {
            chrom: chrom.into(),
            position,
            ld_rho,
        }
    }

    pub fn is_na(&self) -> bool {
        self.ld_rho.is_none()
    }
}
