//! Candidate discovery in the screenshot directory.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image_processor::ImageFormat;
use tracing::trace;

/// A file directly inside the target directory with a supported extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub format: ImageFormat,
}

impl Candidate {
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy())
    }
}

/// List the image files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into. Symlinks count when they point at
/// a regular file.
pub fn find_candidates(dir: &Path) -> io::Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match ImageFormat::from_path(&path) {
            Some(format) => candidates.push(Candidate { path, format }),
            None => trace!(path = %path.display(), "Skipping non-image file"),
        }
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}
