//! Writing export files into an output directory.

use crate::error::ExportResult;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `contents` to `dir/file_name`, creating the directory if needed.
pub fn write_output(dir: &Path, file_name: &str, contents: &str) -> ExportResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let mut file = fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export file");
    Ok(path)
}
