//! One compress or decompress of one file.

use crate::config::{Mode, RleConfig};
use crate::error::{Result, RleError};
use crate::paths;
use crate::pipeline::{self, CodecStats};
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of comparing decompressed output against the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrity {
    Ok,
    Failed,
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integrity::Ok => f.write_str("OK"),
            Integrity::Failed => f.write_str("FAILED"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobReport {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: CodecStats,
    /// `None` when no check was made.
    pub integrity: Option<Integrity>,
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.mode {
            Mode::Compress => "Compressed",
            Mode::Decompress => "Decompressed",
        };
        write!(
            f,
            "{} {}: {} -> {} bytes in {:.3} s",
            verb,
            self.input.display(),
            self.stats.input_size,
            self.stats.output_size,
            self.stats.elapsed.as_secs_f64(),
        )?;
        if let Some(integrity) = self.integrity {
            write!(f, "\n  Integrity check: {}", integrity)?;
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Compare `decoded` with the file `input` was presumably made from.
fn check_integrity(input: &Path, decoded: &[u8]) -> Result<Option<Integrity>> {
    let Some(original) = paths::original_path(input) else {
        return Ok(None);
    };
    if !original.is_file() {
        log::debug!("no original at {}, skipping integrity check", original.display());
        return Ok(None);
    }
    let expected = read_file(&original)?;
    if expected == decoded {
        Ok(Some(Integrity::Ok))
    } else {
        log::warn!("{} differs from {}", input.display(), original.display());
        Ok(Some(Integrity::Failed))
    }
}

/// Run `mode` over the file at `input`.
///
/// The output file is written only after the whole transform succeeded, so a
/// missing input or a malformed stream leaves nothing behind.
pub fn run(input: &Path, mode: Mode, config: &RleConfig) -> Result<JobReport> {
    if !input.is_file() {
        return Err(RleError::InputNotFound(input.to_path_buf()));
    }
    let raw = read_file(input)?;
    let out = pipeline::transform(mode, &raw)?;

    let output = match mode {
        Mode::Compress => paths::compressed_path(input),
        Mode::Decompress => paths::decompressed_path(input),
    };
    write_file(&output, &out.data)?;
    log::info!("{} {} -> {}", mode, input.display(), output.display());

    let integrity = match mode {
        Mode::Decompress if config.verify => check_integrity(input, &out.data)?,
        _ => None,
    };

    Ok(JobReport {
        mode,
        input: input.to_path_buf(),
        output,
        stats: out.stats,
        integrity,
    })
}

/// Run `mode` over every file on a pool of `config.threads` workers.
///
/// Jobs are independent; one failing does not stop the others. Results come
/// back in the order of `inputs`.
pub fn run_all(inputs: &[PathBuf], mode: Mode, config: &RleConfig) -> Result<Vec<Result<JobReport>>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| RleError::Config(e.to_string()))?;
    log::debug!("running {} {} job(s) on {} thread(s)", inputs.len(), mode, config.threads);

    Ok(pool.install(|| {
        inputs
            .par_iter()
            .map(|input| run(input, mode, config))
            .collect()
    }))
}
