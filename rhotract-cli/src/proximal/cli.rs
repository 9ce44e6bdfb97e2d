use clap::{Arg, ArgAction, Command, arg, value_parser};

pub use rhotract_proximal::consts::PROXIMAL_CMD;

pub fn create_proximal_cli() -> Command {
    Command::new(PROXIMAL_CMD)
        .about("Compute mean rho at the gene-proximal ends of intergenic tracts.")
        .long_about(
            "Compute mean rho at the gene-proximal ends of intergenic tracts.\n\n\
             Tracts longer than twice the window size get one window at each end. Shorter \
             tracts are split in half, unless --split is given, in which case tracts between \
             one and two window sizes long get a --split-size window on that side and the rest \
             of the tract on the other.",
        )
        .arg(
            arg!(-f --fname <FILE> "Intergenic tracts tsv (`-` for stdin)")
                .required(false),
        )
        .arg(
            arg!(-t --table <FILE> "Annotation table with an ld_rho column (bgzip'd + tabix indexed, or plain)")
                .required(false)
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            arg!(-w --windowsize <N> "Window considered gene proximal")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(-s --split <SIDE> "Give the carve-out to one side of mid-sized tracts")
                .required(false)
                .value_parser(["left", "right"]),
        )
        .arg(
            arg!(-o --outfile <FILE> "File to write to (`.gz` to compress)")
                .required(false)
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            arg!(--"rho-column" <NAME> "Name of the rho column in the annotation table")
                .required(false),
        )
        .arg(
            arg!(--"split-size" <N> "Size of the carve-out used with --split")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--config <FILE> "TOML file with any of the settings above")
                .required(false)
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Don't show a progress spinner")
                .action(ArgAction::SetTrue),
        )
}
