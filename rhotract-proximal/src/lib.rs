//! # Recombination rate at gene-proximal sites in intergenic tracts.
//!
//! Every intergenic tract is flanked by two genes. This crate cuts a window of a given
//! size off each end of a tract (the gene-proximal regions), looks up the per-position
//! `ld_rho` values that fall inside each window, and reports their sum, count and mean.
//!
//! Tracts longer than twice the window size lose their middle; shorter tracts are
//! divided between the two sides, either in half or with a fixed-size carve-out on
//! the side picked by [`Split`](rhotract_core::Split).
//!
//! # Example
//!
//! ```no_run
//! use indicatif::ProgressBar;
//! use rhotract_proximal::{ProximalConfig, run_proximal};
//!
//! let config = ProximalConfig {
//!     fname: Some("tracts.tsv".into()),
//!     table: Some("rho.txt.gz".into()),
//!     windowsize: Some(2000),
//!     outfile: Some("proximal.tsv".into()),
//!     ..Default::default()
//! };
//!
//! let summary = run_proximal(&config.validate().unwrap(), &ProgressBar::hidden()).unwrap();
//! println!("{} tracts written", summary.written);
//! ```
pub mod aggregate;
pub mod config;
pub mod consts;
pub mod error;
pub mod output;
pub mod proximal;
pub mod tracts;
pub mod windows;

// re-exports
pub use aggregate::{RhoSum, aggregate_rho};
pub use config::{ProximalConfig, RunConfig};
pub use error::{ConfigError, ProximalError};
pub use output::{ProximalRow, ProximalWriter};
pub use proximal::{RunSummary, gene_proximal_rho, process_tract, run_proximal};
pub use tracts::{TractReader, TractRow};
pub use windows::WindowSplitter;
