//! Output file handling: temp file in the target directory, fsync, rename.
//!
//! The target is either fully replaced or left untouched. Concurrent runs are
//! last-writer-wins.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::CvError;

/// Replaces `path` with `contents`, creating parent directories as needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CvError> {
    let write_err = |source| CvError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(contents).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    debug!("Wrote {} bytes to {}", contents.len(), temp.path().display());

    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
