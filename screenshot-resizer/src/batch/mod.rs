//! The batch pass: resize every candidate in place and tally the results.
//!
//! Each file is handled independently. A failure is reported and counted,
//! then the pass moves on to the next file. Nothing is retried or rolled back.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use image_processor::{Dimensions, ProcessResult, open_image, resize_exact, write_image};
use tracing::{debug, info, warn};

use crate::config::ResizerConfig;
use crate::scan::{Candidate, find_candidates};

#[cfg(test)]
mod tests;

/// Result of resizing a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    Resized {
        file_name: String,
        original: Dimensions,
        target: Dimensions,
    },
    Failed {
        file_name: String,
        error: String,
    },
}

impl ResizeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Resized { .. })
    }
}

impl fmt::Display for ResizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resized {
                file_name,
                original,
                target,
            } => write!(f, "✓ {file_name}: {original} → {target}"),
            Self::Failed { file_name, error } => write!(f, "✗ {file_name}: Error - {error}"),
        }
    }
}

/// Successes over candidates for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &ResizeOutcome) {
        self.total += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Completed: {}/{} images resized", self.succeeded, self.total)
    }
}

/// How a run ended. All three are normal terminations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRun {
    MissingDirectory(PathBuf),
    NoCandidates(PathBuf),
    Completed(BatchSummary),
}

pub struct BatchResizer {
    config: ResizerConfig,
}

impl BatchResizer {
    pub fn new(config: ResizerConfig) -> Self {
        Self { config }
    }

    /// Run the whole batch, writing the human-readable report to `out`.
    ///
    /// Errors are limited to listing an existing directory and writing the
    /// report. Per-file failures are part of the returned summary.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<BatchRun> {
        let dir = &self.config.target_dir;

        if !dir.is_dir() {
            warn!(dir = %dir.display(), "Target directory missing");
            writeln!(out, "Error: Directory {} not found", dir.display())?;
            return Ok(BatchRun::MissingDirectory(dir.clone()));
        }

        let candidates = find_candidates(dir)?;
        if candidates.is_empty() {
            info!(dir = %dir.display(), "No image files to resize");
            writeln!(out, "No image files found")?;
            return Ok(BatchRun::NoCandidates(dir.clone()));
        }

        let target = self.config.target;
        writeln!(out, "Found {} image(s)", candidates.len())?;
        writeln!(out, "Resizing to {} × {}px", target.width, target.height)?;
        writeln!(out)?;

        let mut summary = BatchSummary::default();
        for candidate in &candidates {
            let outcome = self.process(candidate);
            writeln!(out, "{outcome}")?;
            summary.record(&outcome);
        }

        writeln!(out)?;
        writeln!(out, "{summary}")?;

        if summary.failed() > 0 {
            warn!(
                failed = summary.failed(),
                total = summary.total,
                "Batch finished with failures"
            );
        } else {
            info!(total = summary.total, "Batch finished");
        }
        Ok(BatchRun::Completed(summary))
    }

    /// Resize one file in place, returning its original dimensions.
    pub fn resize_file(&self, candidate: &Candidate) -> ProcessResult<Dimensions> {
        let img = open_image(&candidate.path)?;
        let original = Dimensions::of(&img);
        let resized = resize_exact(&img, self.config.target)?;
        drop(img);

        write_image(
            &resized,
            &candidate.path,
            candidate.format,
            &self.config.encode,
        )?;
        Ok(original)
    }

    fn process(&self, candidate: &Candidate) -> ResizeOutcome {
        let file_name = candidate.file_name().into_owned();
        match self.resize_file(candidate) {
            Ok(original) => {
                debug!(file = %file_name, %original, "Resized");
                ResizeOutcome::Resized {
                    file_name,
                    original,
                    target: self.config.target,
                }
            }
            Err(e) => {
                warn!(file = %file_name, "Resize failed: {e}");
                ResizeOutcome::Failed {
                    file_name,
                    error: e.to_string(),
                }
            }
        }
    }
}
