pub const PROXIMAL_CMD: &str = "proximal";
pub const DEFAULT_SPLIT_SIZE: u64 = 2000;
pub const DEFAULT_RHO_COLUMN: &str = rhotract_table::DEFAULT_RHO_COLUMN;

/// Tracts of this size or smaller are skipped.
pub const MIN_TRACT_SIZE: i128 = 1;

/// Written in place of a mean when a window holds no rho values.
pub const NA_OUTPUT: &str = "NA";

pub const OUTPUT_HEADER: [&str; 11] = [
    "chrom",
    "start",
    "end",
    "tract_size",
    "left_vals",
    "left_count",
    "left_window",
    "right_vals",
    "right_count",
    "right_window",
    "windowsize",
];

pub const REQUIRED_TRACT_COLUMNS: [&str; 3] = ["chrom", "start", "end"];
