use crate::os::OsVersion;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rootpatch",
    about = "Work out which root volume patches a legacy Mac needs on a given macOS release",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the system and user files
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Where the hardware facts come from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct HardwareSource {
    /// Probe report (JSON) captured on the target machine
    #[arg(long, value_name = "FILE")]
    pub probe: Option<PathBuf>,

    /// Use the stock configuration of a model identifier (e.g. MacBookPro11,3)
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the hardware fact sheet and capability predicates
    Detect {
        #[command(flatten)]
        source: HardwareSource,
    },

    /// Resolve the patch set for a host OS version
    Resolve {
        #[command(flatten)]
        source: HardwareSource,

        /// Host Darwin version, MAJOR or MAJOR.MINOR (e.g. 22 or 22.4)
        #[arg(long, value_name = "VERSION")]
        os: OsVersion,
    },

    /// List catalog entries and whether each is eligible on a host
    Catalog {
        /// Host Darwin version, MAJOR or MAJOR.MINOR
        #[arg(long, value_name = "VERSION")]
        os: OsVersion,
    },

    /// List known model identifiers
    Models,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: rootpatch completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "rootpatch",
        &mut std::io::stdout(),
    );
}
