pub const DEFAULT_RHO_COLUMN: &str = "ld_rho";
pub const TABIX_EXTENSION: &str = "tbi";
pub const CHROM_COLUMNS: [&str; 3] = ["chrom", "chromosome", "chr"];
pub const POSITION_COLUMNS: [&str; 2] = ["pos", "position"];
