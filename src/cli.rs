use crate::config::{Mode, RleConfig};
use crate::error::RleError;
use crate::job;
use clap::Parser;
use std::path::PathBuf;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(author, version, about, long_about = "Binary run-length compressor")]
struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    mode: Mode,

    /// Input file(s). Compressing writes FILE.rle, decompressing FILE.rle writes FILE.dec
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Skip the comparison against the original file after decompressing
    #[arg(long)]
    no_verify: bool,
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    let mut config = RleConfig::default().with_verify(!cli.no_verify);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    log::debug!("{} {} file(s), {} thread(s), verify={}", cli.mode, cli.files.len(), config.threads, config.verify);
    let results = job::run_all(&cli.files, cli.mode, &config)?;
    let total = results.len();
    let mut failed = 0;

    for result in results {
        match result {
            Ok(report) => println!("{}", report),
            Err(e) if total == 1 => return Err(e),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(RleError::Batch { failed, total });
    }
    Ok(())
}
