//! Script naming: normalize a job name into an identifier and pick a script
//! file name that does not collide with anything already on disk.
use std::path::Path;

/// Replace every character that is not a letter, digit, or underscore with an
/// underscore. Total over all inputs; output length equals input length.
pub fn normalize_job_name(job: &str) -> String {
    job.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Build a script file name for `job` that does not collide with an existing
/// file in `dir`: `<name>.sbatch`, then `<name>.sbatch.1`, `.sbatch.2`, ...
///
/// Query-only: the file is not created here, so two invocations racing on the
/// same job name can pick the same path. Known limitation; an exclusive-create
/// open would close the window but the check-then-create shape is kept.
pub fn unique_script_name(dir: &Path, job: &str) -> String {
    let name = normalize_job_name(job);
    let mut version = 0u32;
    let mut script_name = format!("{name}.sbatch");

    while dir.join(&script_name).is_file() {
        version += 1;
        script_name = format!("{name}.sbatch.{version}");
    }

    script_name
}
