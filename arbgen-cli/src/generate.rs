use std::path::PathBuf;

use arbgen::{Config, Generator};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub arb_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub extension: Option<String>,
    pub strict: bool,
}

/// Run the generate command: load configuration, transform the CSV table and
/// write one ARB file per language.
///
/// Fatal errors exit with status 1. Per-language failures are reported on
/// stderr and only change the exit status when `strict` is set.
pub fn run_generate_command(options: GenerateOptions) {
    let config = match build_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!(?config, "effective configuration");

    let report = match Generator::new(config).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for path in &report.written {
        println!("✅ Wrote {}", path.display());
    }
    for failure in &report.failures {
        eprintln!("❌ [{}] {}", failure.language, failure.error);
    }
    println!(
        "Processed {} row(s) for {} language(s)",
        report.rows,
        report.languages.len()
    );

    if options.strict && !report.is_success() {
        eprintln!(
            "Error: {} language failure(s) in strict mode",
            report.failures.len()
        );
        std::process::exit(1);
    }
}

fn build_config(options: &GenerateOptions) -> Result<Config, arbgen::Error> {
    let mut config = Config::load(options.config.as_deref())?;
    if let Some(csv) = &options.csv {
        config.csv_file = csv.clone();
    }
    if let Some(arb_dir) = &options.arb_dir {
        config.arb_dir = arb_dir.clone();
    }
    if let Some(prefix) = &options.prefix {
        config.file_prefix = prefix.clone();
    }
    if let Some(extension) = &options.extension {
        config.file_extension = extension.clone();
    }
    Ok(config)
}
