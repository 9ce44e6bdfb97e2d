use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tract {chrom}:{start}-{end} has an end before its start")]
    InvertedTract { chrom: String, start: u64, end: u64 },

    #[error("Unknown split side: {0}. Expected `left` or `right`")]
    InvalidSplit(String),
}
