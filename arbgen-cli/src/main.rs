mod generate;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use crate::generate::{GenerateOptions, run_generate_command};

/// Generate ARB localization files from a multi-language CSV table.
///
/// Without arguments, settings are read from ./arbgen.toml when it exists,
/// falling back to csv/lang.csv and arb/intl_<lang>.arb.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file to use instead of ./arbgen.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV translation table (overrides the configuration)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Directory holding the ARB files (overrides the configuration)
    #[arg(long)]
    arb_dir: Option<PathBuf>,

    /// ARB file name prefix (overrides the configuration)
    #[arg(long)]
    prefix: Option<String>,

    /// ARB file name extension, dot included (overrides the configuration)
    #[arg(long)]
    extension: Option<String>,

    /// Exit with an error if any language could not be read or written
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    logging::init(args.verbose, args.quiet);

    run_generate_command(GenerateOptions {
        config: args.config,
        csv: args.csv,
        arb_dir: args.arb_dir,
        prefix: args.prefix,
        extension: args.extension,
        strict: args.strict,
    });
}
