//! Sample library lookup.
//!
//! A sample name is looked up under the samples directory first and then as
//! a plain path. Directories resolve to one of their files, picked at random.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SamplerError};

pub const LIBRARY_DIR_NAME: &str = "bookSampler";
pub const SAMPLES_DIR_NAME: &str = "samples";

/// `<data dir>/bookSampler/samples`, e.g. `~/.local/share/bookSampler/samples`.
pub fn default_samples_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(LIBRARY_DIR_NAME).join(SAMPLES_DIR_NAME))
}

/// Resolve a sample name to a readable file.
pub fn resolve_source<R: Rng + ?Sized>(
    name: &Path,
    samples_dir: Option<&Path>,
    rng: &mut R,
) -> Result<PathBuf> {
    let in_library = samples_dir
        .map(|dir| dir.join(name))
        .filter(|path| path.exists());

    let path = match in_library {
        Some(path) => path,
        None if name.exists() => name.to_path_buf(),
        None => return Err(SamplerError::NotFound(name.to_path_buf())),
    };

    if path.is_dir() {
        pick_file(&path, rng)
    } else {
        Ok(path)
    }
}

fn pick_file<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    // read_dir order is platform dependent
    files.sort();

    let picked = files
        .choose(rng)
        .cloned()
        .ok_or_else(|| SamplerError::EmptyDirectory(dir.to_path_buf()))?;
    tracing::debug!(dir = %dir.display(), file = %picked.display(), candidates = files.len(), "picked sample file");
    Ok(picked)
}

/// Read a whole document into memory.
pub fn load_document(path: &Path) -> Result<String> {
    let text = read_text(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}

/// `read_to_string` with a missing file reported as [`SamplerError::NotFound`].
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SamplerError::NotFound(path.to_path_buf()),
        _ => SamplerError::Io(err),
    })
}
