mod proximal;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "rhotract";
    pub const BIN_NAME: &str = "rhotract";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Recombination rate summaries for the gene-proximal portions of intergenic tracts.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More logging (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(proximal::cli::create_proximal_cli())
}

fn log_level(matches: &ArgMatches) -> Level {
    // global flags are propagated down, so the subcommand sees them wherever they were given
    let matches = matches.subcommand().map_or(matches, |(_, sub)| sub);

    if matches.get_flag("quiet") {
        return Level::ERROR;
    }
    match matches.get_count("verbose") {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Logs go to stderr so they never mix with output written to stdout.
/// `RUST_LOG` takes precedence over the command line flags.
fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(log_level(&matches));

    match matches.subcommand() {
        //
        // GENE-PROXIMAL RHO
        //
        Some((proximal::cli::PROXIMAL_CMD, matches)) => {
            proximal::handlers::run_proximal_cmd(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["rhotract", "proximal"], Level::INFO)]
    #[case(&["rhotract", "-v", "proximal"], Level::DEBUG)]
    #[case(&["rhotract", "proximal", "-vv"], Level::TRACE)]
    #[case(&["rhotract", "proximal", "-q"], Level::ERROR)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: Level) {
        let matches = build_parser().try_get_matches_from(args).unwrap();
        assert_eq!(log_level(&matches), expected);
    }

    #[rstest]
    fn test_no_author_attribution() {
        let parser = build_parser();
        assert_eq!(parser.get_author(), None);
        for sub in parser.get_subcommands() {
            assert_eq!(sub.get_author(), None);
        }
    }

    #[rstest]
    fn test_subcommand_required() {
        assert!(build_parser().try_get_matches_from(["rhotract"]).is_err());
    }
}
