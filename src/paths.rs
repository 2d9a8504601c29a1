//! Output and sibling paths derived from an input path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const COMPRESSED_EXT: &str = ".rle";
pub const DECOMPRESSED_EXT: &str = ".dec";

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// `path` with a trailing `.rle` removed, if it has one and something is left.
fn strip_compressed_ext(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(COMPRESSED_EXT)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

/// `a.txt` -> `a.txt.rle`
pub fn compressed_path(input: &Path) -> PathBuf {
    with_suffix(input, COMPRESSED_EXT)
}

/// `a.txt.rle` -> `a.txt.dec`; inputs without `.rle` get `.dec` appended.
pub fn decompressed_path(input: &Path) -> PathBuf {
    match strip_compressed_ext(input) {
        Some(stem) => with_suffix(&stem, DECOMPRESSED_EXT),
        None => with_suffix(input, DECOMPRESSED_EXT),
    }
}

/// `a.txt.rle` -> `a.txt`, the file a decompressed output is checked against.
pub fn original_path(input: &Path) -> Option<PathBuf> {
    strip_compressed_ext(input)
}
