use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use rhotract_core::models::Split;
use rhotract_proximal::{ProximalConfig, run_proximal};

///
/// Collect the settings given on the command line. Anything left out stays `None`
/// so a config file can fill it in.
///
pub fn config_from_matches(matches: &ArgMatches) -> Result<ProximalConfig> {
    let split = match matches.get_one::<String>("split") {
        Some(split) => Some(Split::from_str(split)?),
        None => None,
    };

    Ok(ProximalConfig {
        fname: matches.get_one::<String>("fname").cloned(),
        table: matches.get_one::<PathBuf>("table").cloned(),
        windowsize: matches.get_one::<u64>("windowsize").copied(),
        split,
        outfile: matches.get_one::<PathBuf>("outfile").cloned(),
        rho_column: matches.get_one::<String>("rho-column").cloned(),
        split_size: matches.get_one::<u64>("split-size").copied(),
    })
}

fn progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} tracts)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Computing gene-proximal rho");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn run_proximal_cmd(matches: &ArgMatches) -> Result<()> {
    let from_cli = config_from_matches(matches)?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ProximalConfig::try_from(path.as_path())
            .with_context(|| format!("Failed to read config file {:?}", path))?
            .merge(from_cli),
        None => from_cli,
    };
    let config = config.validate()?;

    let pb = progress_bar(matches.get_flag("no-progress"));
    let summary = run_proximal(&config, &pb)
        .with_context(|| format!("Failed to process tracts from {}", config.fname))?;
    pb.finish_and_clear();

    info!(
        "Done: {} tracts written, {} skipped",
        summary.written, summary.skipped
    );

    Ok(())
}
