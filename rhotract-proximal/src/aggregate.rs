use rhotract_core::models::Window;
use rhotract_table::RhoSource;

use crate::error::Result;

///
/// Running sum and count of the rho values inside one window.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RhoSum {
    pub sum: f64,
    pub count: u64,
}

impl RhoSum {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean rho over the window, `None` when the window held no values.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

///
/// Sum up the non-`NA` rho values that a source holds inside a window.
///
/// # Arguments
/// - source: the annotation table to query
/// - chrom: chromosome of the window
/// - window: 0-based half-open window
///
pub fn aggregate_rho<S: RhoSource + ?Sized>(
    source: &mut S,
    chrom: &str,
    window: &Window,
) -> Result<RhoSum> {
    let mut acc = RhoSum::default();

    for record in source.fetch(chrom, window.start, window.end)? {
        if let Some(rho) = record.ld_rho {
            acc.add(rho);
        }
    }

    Ok(acc)
}
