//! Batch-script assembly: the SLURM directive header, optional job-array
//! blocks, and the command body. Pure functions from `JobParams` plus
//! pre-fetched file-match results to the final script text.
use crate::core::params::JobParams;
use crate::error::{Error, Result};

/// Longest prefix of `a` that is also a prefix of `b`.
///
/// Grows a candidate prefix of `a` one character at a time while `b` still
/// starts with it; empty when `a` is empty or the first characters differ.
pub fn common_prefix(a: &str, b: &str) -> String {
    let mut end = 0;

    for (idx, ch) in a.char_indices() {
        let candidate = idx + ch.len_utf8();
        if b.starts_with(&a[..candidate]) {
            end = candidate;
        } else {
            break;
        }
    }

    a[..end].to_string()
}

/// Succeeds only when both match lists have the same length. A mismatch is
/// fatal for the whole invocation; no script may be generated from it.
pub fn check_paired_counts(primary: &[String], paired: &[String]) -> Result<()> {
    if primary.len() == paired.len() {
        Ok(())
    } else {
        Err(Error::PairedCountMismatch {
            primary: primary.len(),
            paired: paired.len(),
        })
    }
}

/// Diagnostic for a paired-count mismatch: one line per index,
/// `<primary> (<paired>)`, with `--not found--` standing in for the shorter side.
pub fn mismatch_report(primary: &[String], paired: &[String]) -> String {
    let count = primary.len().max(paired.len());
    let mut lines = Vec::with_capacity(count);

    for idx in 0..count {
        let first = primary.get(idx).map_or("--not found--", String::as_str);
        let second = paired.get(idx).map_or("--not found--", String::as_str);
        lines.push(format!("{first} ({second})"));
    }

    lines.join("\n")
}

/// Put each `;`-separated statement of the wrapped command on its own line.
fn split_statements(wrap: &str) -> String {
    wrap.split(';')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full batch script for `params`.
///
/// `filenames` and `paired_filenames` are the pre-fetched, sorted match
/// results for the array patterns (empty when the pattern is unset); paired
/// counts must already have been validated with [`check_paired_counts`].
pub fn render_script(
    params: &JobParams,
    filenames: &[String],
    paired_filenames: &[String],
) -> String {
    let mut script = String::new();

    script.push_str("#!/bin/env bash\n");
    script.push_str(&format!("#SBATCH -J {}\n", params.job));
    script.push_str(&format!("#SBATCH --mem {}\n", params.mem));
    script.push_str(&format!("#SBATCH --cpus-per-task {}\n", params.cpu));
    script.push_str("#SBATCH --ntasks 1\n");
    script.push_str("#SBATCH --nodes 1\n");
    script.push_str(&format!("#SBATCH --time {}\n", params.time));

    if let Some(ref partition) = params.partition {
        script.push_str(&format!("#SBATCH --partition {partition}\n"));
    }
    if let Some(ref dependency) = params.dependency {
        script.push_str(&format!("#SBATCH --dependency {dependency}\n"));
    }

    if params.sarray_file_pattern.is_some() {
        script.push_str(&format!(
            "#SBATCH -o {}/{}.oe_%A_%a\n",
            params.job_files_dir, params.job
        ));

        // One array task per matched file; 0 matches renders as 0--1.
        let mut range = format!("0-{}", filenames.len() as i64 - 1);
        if let Some(limit) = params.sarray_limit {
            range.push_str(&format!("%{limit}"));
        }
        script.push_str(&format!("#SBATCH --array={range}\n"));

        script.push_str(&format!("FILES=({})\n\n", filenames.join(" ")));
        script.push_str("FILE=${FILES[$SLURM_ARRAY_TASK_ID]}\n");

        if params.sarray_paired_file_pattern.is_some() {
            script.push_str(&format!("PAIRED_FILES=({})\n\n", paired_filenames.join(" ")));
            script.push_str("PAIRED_FILE=${PAIRED_FILES[$SLURM_ARRAY_TASK_ID]}\n");

            let prefixes: Vec<String> = filenames
                .iter()
                .zip(paired_filenames)
                .map(|(file, paired)| common_prefix(file, paired))
                .collect();
            script.push_str(&format!("FILENAME_PREFIXES=({})\n\n", prefixes.join(" ")));
            script.push_str("FILENAME_PREFIX=${FILENAME_PREFIXES[$SLURM_ARRAY_TASK_ID]}\n");
        }
    } else {
        script.push_str(&format!(
            "#SBATCH -o {}/{}.oe_%j\n",
            params.job_files_dir, params.job
        ));
    }

    script.push_str("\n# list all loaded modules\nmodule list\n");

    script.push('\n');
    script.push_str(&split_statements(&params.wrap));
    script.push('\n');

    script
}
