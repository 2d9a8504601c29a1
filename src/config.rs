use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Compress,
    Decompress,
}

#[derive(Debug, Clone)]
pub struct RleConfig {
    /// Worker threads for multi-file runs.
    pub threads: usize,
    /// Compare decompressed output against the sibling original, if present.
    pub verify: bool,
}

impl Default for RleConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            verify: true,
        }
    }
}

impl RleConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}
