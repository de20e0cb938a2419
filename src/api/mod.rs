//! High-level, ergonomic library API: generate a complete batch script from
//! `JobParams`, then write or submit it. Prefer these entrypoints over the
//! low-level `core` modules when embedding sbatchgen.
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::naming::unique_script_name;
use crate::core::params::JobParams;
use crate::core::script::{check_paired_counts, render_script};
use crate::error::Result;
use crate::io::matcher::sorted_matches;

/// A generated batch script: a collision-free path and the full text body.
///
/// Created once per invocation; nothing exists on disk until [`write`] is
/// called.
///
/// [`write`]: GeneratedScript::write
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub path: PathBuf,
    pub body: String,
}

impl GeneratedScript {
    /// Write the script text verbatim to its path.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.body)?;
        Ok(())
    }
}

/// Generate a batch script for `params`: match array patterns relative to
/// `root`, validate paired counts, assemble the text, and choose a script
/// name that does not collide with files already in `root`.
///
/// Fails with [`Error::PairedCountMismatch`] when the paired pattern matches
/// a different number of files than the primary pattern; no script text is
/// produced in that case.
///
/// [`Error::PairedCountMismatch`]: crate::error::Error::PairedCountMismatch
pub fn generate_script(params: &JobParams, root: &Path) -> Result<GeneratedScript> {
    let filenames = match params.sarray_file_pattern.as_deref() {
        Some(pattern) => sorted_matches(pattern, root)?,
        None => Vec::new(),
    };
    let paired_filenames = match params.sarray_paired_file_pattern.as_deref() {
        Some(pattern) => sorted_matches(pattern, root)?,
        None => Vec::new(),
    };

    if params.sarray_paired_file_pattern.is_some() {
        check_paired_counts(&filenames, &paired_filenames)?;
    }

    let path = root.join(unique_script_name(root, &params.job));
    let body = render_script(params, &filenames, &paired_filenames);

    Ok(GeneratedScript { path, body })
}
