use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("file '{}' not found", .0.display())]
	InputNotFound(PathBuf),

	#[error("malformed stream: chunk at offset {offset} needs {needed} payload bytes, {available} remain")]
	MalformedStream {
		offset: usize,
		needed: usize,
		available: usize,
	},

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("{failed} of {total} files failed")]
	Batch { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, RleError>;
