use std::io::{Read, Write};

use indicatif::ProgressBar;
use tracing::{debug, info};

use rhotract_core::models::Tract;
use rhotract_table::{RhoSource, open_rho_table};

use crate::aggregate::aggregate_rho;
use crate::config::RunConfig;
use crate::error::{ProximalError, Result};
use crate::output::{ProximalRow, ProximalWriter};
use crate::tracts::TractReader;
use crate::windows::WindowSplitter;

///
/// Counts from one run over a tract file.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// rows read from the tract file
    pub read: u64,
    /// rows written to the output
    pub written: u64,
    /// rows skipped for having a tract size of 1 or less
    pub skipped: u64,
}

///
/// Compute the gene-proximal rho summary of a single tract.
///
/// # Arguments
/// - tract: the tract to summarise
/// - splitter: how to cut the tract into left and right windows
/// - source: annotation table to pull rho values from
///
pub fn process_tract<S: RhoSource + ?Sized>(
    tract: &Tract,
    splitter: &WindowSplitter,
    source: &mut S,
) -> Result<ProximalRow> {
    let windows = splitter.split(tract);

    let left = aggregate_rho(source, &tract.chrom, &windows.left)?;
    let right = aggregate_rho(source, &tract.chrom, &windows.right)?;

    Ok(ProximalRow {
        tract: tract.clone(),
        left,
        right,
        windowsize: splitter.windowsize,
    })
}

///
/// Run every tract from `tracts` through [`process_tract`] and write the rows, in input
/// order. Tracts of size 1 or less are skipped. The first error aborts the run.
///
pub fn gene_proximal_rho<R, S, W>(
    tracts: &mut TractReader<R>,
    splitter: &WindowSplitter,
    source: &mut S,
    writer: &mut ProximalWriter<W>,
    pb: &ProgressBar,
) -> Result<RunSummary>
where
    R: Read,
    S: RhoSource + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for result in tracts {
        let (line, row) = result?;
        summary.read += 1;
        pb.inc(1);

        if !row.is_processable() {
            debug!(
                "Skipping tract on line {} ({}:{}-{}), size {}",
                line,
                row.chrom,
                row.start,
                row.end,
                row.declared_size()
            );
            summary.skipped += 1;
            continue;
        }

        let tract = row
            .to_tract()
            .map_err(|e| ProximalError::InvalidTract { line, source: e })?;

        let proximal = process_tract(&tract, splitter, source)?;
        writer.write_row(&proximal)?;
        summary.written += 1;
    }

    writer.flush()?;

    Ok(summary)
}

///
/// Open the inputs and output named by a [`RunConfig`] and run the whole analysis.
///
pub fn run_proximal(config: &RunConfig, pb: &ProgressBar) -> Result<RunSummary> {
    info!(
        "Computing gene-proximal rho: windowsize={}, split={}",
        config.windowsize, config.split
    );

    let mut source = open_rho_table(&config.table, &config.rho_column)?;
    let mut tracts = TractReader::from_path(&config.fname)?;
    let mut writer = ProximalWriter::from_path(&config.outfile)?;

    let summary = gene_proximal_rho(
        &mut tracts,
        &config.splitter(),
        &mut source,
        &mut writer,
        pb,
    )?;

    writer.finish()?;

    info!(
        "Wrote {} of {} tracts to {:?} ({} skipped)",
        summary.written, summary.read, config.outfile, summary.skipped
    );

    Ok(summary)
}
