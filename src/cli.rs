//! Command line front-end.
//!
//! Reads the address and spam text, runs the pipeline and prints or exports
//! the columns.

use crate::config::{Config, OutputFormat};
use crate::output::{export_columns, render};
use crate::{process_ips, process_ips_with_rng};
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Clean, group and shuffle IPv4 addresses into balanced columns
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with the addresses to shuffle ('-' or absent reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File with addresses to remove
    #[arg(short, long)]
    pub spam: Option<PathBuf>,

    /// Number of output columns (2-10)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write each non-empty column to a text file in this directory
    #[arg(short, long)]
    pub export_dir: Option<PathBuf>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the stats banner
    #[arg(short, long)]
    pub quiet: bool,
}

/// Apply command line flags on top of `base`.
pub fn config_from_args(args: &Args, base: Config) -> Config {
    Config {
        columns: args.columns.unwrap_or(base.columns),
        format: args.format.unwrap_or(base.format),
        export_dir: args.export_dir.clone().or(base.export_dir),
        seed: args.seed.or(base.seed),
        quiet: args.quiet || base.quiet,
    }
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Read a text file, or stdin when `path` is absent or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(p) if !is_stdin(Some(p)) => std::fs::read_to_string(p)
            .map_err(|e| format!("Error reading input file {}: {e}", p.display()).into()),
        _ => {
            log::debug!("Reading addresses from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            Ok(text)
        }
    }
}

/// Run the shuffler for parsed arguments.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = config_from_args(args, Config::from_env()?);
    config.validate()?;
    log::info!(
        "#Start run() columns={} format={} seed={:?}",
        config.columns,
        config.format,
        config.seed
    );

    if is_stdin(args.input.as_deref()) && args.spam.is_some() && is_stdin(args.spam.as_deref()) {
        return Err("Input and spam cannot both be read from stdin".into());
    }

    let raw_input = read_text(args.input.as_deref())?;
    let spam_input = match &args.spam {
        Some(path) => read_text(Some(path))?,
        None => String::new(),
    };

    let result = match config.seed {
        Some(seed) => process_ips_with_rng(
            &raw_input,
            &spam_input,
            config.columns,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => process_ips(&raw_input, &spam_input, config.columns),
    };

    print!("{}", render(&result, config.format, config.quiet)?);

    if let Some(dir) = &config.export_dir {
        let files = export_columns(dir, &result.columns)?;
        log::info!(
            "{} {} column file(s) to {}",
            "Exported".green(),
            files.len(),
            dir.display()
        );
    }

    Ok(())
}
