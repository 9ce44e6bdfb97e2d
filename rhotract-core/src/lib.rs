//! # Core models for rhotract
//!
//! Shared types for the rest of the workspace: tracts read from the tract table,
//! the half-open windows cut out of them, and the per-position rho records served
//! by an annotation table. Also holds a couple of small reader/writer helpers that
//! transparently handle gzip'd files.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::CoreError;
pub use models::{RhoRecord, Split, Tract, Window, WindowPair};
