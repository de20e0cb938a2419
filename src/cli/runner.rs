use std::fs;
use std::path::Path;

use tracing::info;

use sbatchgen::core::naming::unique_script_name;
use sbatchgen::core::params::JobParams;
use sbatchgen::core::script::{check_paired_counts, mismatch_report, render_script};
use sbatchgen::io::matcher::sorted_matches;
use sbatchgen::io::submit::submit_script;

use super::args::CliArgs;
use super::errors::AppError;

fn params_from_args(args: &CliArgs) -> JobParams {
    JobParams {
        job: args.job.clone(),
        wrap: args.wrap.clone(),
        cpu: args.cpu,
        mem: args.mem.clone(),
        time: args.time.clone(),
        partition: args.partition.clone(),
        job_files_dir: args.job_files_dir.clone(),
        dependency: args.dependency.clone(),
        sarray_file_pattern: args.sarray_file_pattern.clone(),
        sarray_paired_file_pattern: args.sarray_paired_file_pattern.clone(),
        script_only: args.script_only,
        sarray_limit: args.sarray_limit,
    }
}

fn matches_for(pattern: Option<&str>, root: &Path) -> Result<Vec<String>, AppError> {
    match pattern {
        Some(pattern) => {
            sorted_matches(pattern, root).map_err(|source| AppError::PatternMatch {
                pattern: pattern.to_string(),
                source,
            })
        }
        None => Ok(Vec::new()),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = params_from_args(&args);
    let root = Path::new(".");

    fs::create_dir_all(&params.job_files_dir).map_err(AppError::Io)?;

    let filenames = matches_for(params.sarray_file_pattern.as_deref(), root)?;
    let paired_filenames = matches_for(params.sarray_paired_file_pattern.as_deref(), root)?;

    if params.sarray_paired_file_pattern.is_some() {
        if let Err(err) = check_paired_counts(&filenames, &paired_filenames) {
            eprintln!("{err}");
            eprintln!("File name (paired file name):");
            eprintln!("{}", mismatch_report(&filenames, &paired_filenames));
            eprintln!("Exiting ...");
            std::process::exit(1);
        }
    }

    let script_name = unique_script_name(root, &params.job);
    let body = render_script(&params, &filenames, &paired_filenames);

    println!("{script_name}");
    fs::write(&script_name, &body).map_err(AppError::Io)?;
    info!("Wrote batch script: {}", script_name);

    if !params.script_only {
        info!("Submitting {} via sbatch", script_name);
        let status = submit_script(Path::new(&script_name))?;
        if !status.success() {
            // Propagate the scheduler's own exit code, not a generic failure.
            std::process::exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}
