//! Where squared images are written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_OUTPUT_SUBDIR;
use crate::error::{Result, SquareError};

/// The explicit folder if one was chosen, otherwise `square_output/` beside
/// the source file.
pub fn resolve_output_folder(explicit: Option<&Path>, source: &Path) -> PathBuf {
    match explicit {
        Some(dir) => dir.to_path_buf(),
        None => source
            .parent()
            .unwrap_or(Path::new("."))
            .join(DEFAULT_OUTPUT_SUBDIR),
    }
}

/// Output keeps the source's file name (stem and extension) inside `folder`.
pub fn output_path(source: &Path, folder: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        SquareError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", source.display()),
        ))
    })?;
    Ok(folder.join(name))
}

/// Resolve the output path for `source` and create its folder.
///
/// Fails with [`SquareError::WouldOverwriteSource`] when the output folder is
/// the source's own folder, since the output name equals the source name.
pub fn prepare_output(source: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    let folder = resolve_output_folder(explicit, source);
    let out = output_path(source, &folder)?;

    if is_same_file(source, &out) {
        return Err(SquareError::WouldOverwriteSource(out));
    }

    fs::create_dir_all(&folder)?;
    Ok(out)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
