//! # Annotation tables of per-position recombination rates.
//!
//! An annotation table is a tab-separated text file with one row per genomic position
//! and, among others, a chromosome column, a 1-based position column and an `ld_rho`
//! column. Rows with a missing rate carry the literal `NA`.
//!
//! Tables are consumed through the [`RhoSource`] trait, which exposes a single range
//! fetch. Two implementations are provided:
//!
//! - [`IndexedRhoTable`]: a bgzip'd table with a tabix (`.tbi`) index next to it.
//! - [`InMemoryRhoTable`]: the whole table held in memory, for small or unindexed tables.
//!
//! [`open_rho_table`] picks the right one for a path.
//!
pub mod consts;
pub mod error;
pub mod indexed;
pub mod layout;
pub mod memory;
pub mod source;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use indexed::IndexedRhoTable;
pub use layout::TableLayout;
pub use memory::InMemoryRhoTable;
pub use source::{RhoSource, open_rho_table};
