//! Submission of finished scripts to the scheduler.
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::Result;

/// Hand a finished script to `sbatch`, with its stdout/stderr inherited so
/// the scheduler's response reaches the user verbatim.
///
/// The exit status is returned as-is; interpreting or retrying a failed
/// submission is up to the caller. A blocking `sbatch` blocks this call.
pub fn submit_script(script: &Path) -> Result<ExitStatus> {
    let status = Command::new("sbatch")
        .arg(script)
        .stdin(Stdio::null())
        .status()?;

    Ok(status)
}
