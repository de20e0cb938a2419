//! Integration tests over the library API: glob matching, script naming, and
//! end-to-end script generation in temporary directories.
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use sbatchgen::{Error, JobParams, generate_script, sorted_matches, unique_script_name};

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        if let Some(parent) = Path::new(name).parent() {
            fs::create_dir_all(dir.join(parent)).unwrap();
        }
        fs::write(dir.join(name), "").unwrap();
    }
}

fn params(job: &str, wrap: &str) -> JobParams {
    JobParams {
        job: job.to_string(),
        wrap: wrap.to_string(),
        ..Default::default()
    }
}

#[test]
fn matches_are_sorted_lexicographically() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["b.fq", "a.fq", "c.fq", "notes.txt"]);

    let matched = sorted_matches("*.fq", dir.path()).unwrap();
    assert_eq!(matched, vec!["a.fq", "b.fq", "c.fq"]);
}

#[test]
fn matches_do_not_cross_directories() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["a.fq", "sub/b.fq"]);

    let matched = sorted_matches("*.fq", dir.path()).unwrap();
    assert_eq!(matched, vec!["a.fq"]);

    let matched = sorted_matches("sub/*.fq", dir.path()).unwrap();
    assert_eq!(matched, vec!["sub/b.fq"]);
}

#[test]
fn zero_matches_is_not_an_error() {
    let dir = tempdir().unwrap();
    assert!(sorted_matches("*.fq", dir.path()).unwrap().is_empty());
}

#[test]
fn invalid_pattern_is_an_error() {
    let dir = tempdir().unwrap();
    let err = sorted_matches("[", dir.path()).unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}

#[test]
fn script_names_version_past_collisions() {
    let dir = tempdir().unwrap();

    assert_eq!(unique_script_name(dir.path(), "foo"), "foo.sbatch");
    fs::write(dir.path().join("foo.sbatch"), "").unwrap();
    assert_eq!(unique_script_name(dir.path(), "foo"), "foo.sbatch.1");
    fs::write(dir.path().join("foo.sbatch.1"), "").unwrap();
    assert_eq!(unique_script_name(dir.path(), "foo"), "foo.sbatch.2");
}

#[test]
fn end_to_end_plain_job() {
    let dir = tempdir().unwrap();

    let script = generate_script(&params("test job", "echo hi"), dir.path()).unwrap();
    assert_eq!(script.path, dir.path().join("test_job.sbatch"));
    script.write().unwrap();

    let written = fs::read_to_string(dir.path().join("test_job.sbatch")).unwrap();
    assert!(written.starts_with("#!/bin/env bash\n"));
    assert!(written.contains("#SBATCH -J test job\n"));
    assert!(written.contains("#SBATCH --mem 10G\n"));
    assert!(written.contains("#SBATCH --cpus-per-task 1\n"));
    assert!(written.contains("#SBATCH --ntasks 1\n"));
    assert!(written.contains("#SBATCH --nodes 1\n"));
    assert!(written.contains("#SBATCH --time 1-00:00:00\n"));
    assert!(written.contains("#SBATCH -o job_files.dir/test job.oe_%j\n"));
    assert!(written.contains("# list all loaded modules\nmodule list\n"));
    assert!(written.ends_with("\necho hi\n"));

    // A second generation in the same directory picks the versioned name.
    let script = generate_script(&params("test job", "echo hi"), dir.path()).unwrap();
    assert_eq!(script.path, dir.path().join("test_job.sbatch.1"));
}

#[test]
fn end_to_end_array_job() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["s2_R1.fq", "s1_R1.fq", "s3_R1.fq"]);

    let mut p = params("align", "bwa mem ref.fa $FILE");
    p.sarray_file_pattern = Some("*_R1.fq".to_string());
    p.sarray_limit = Some(5);

    let script = generate_script(&p, dir.path()).unwrap();
    assert!(script.body.contains("#SBATCH --array=0-2%5\n"));
    assert!(script.body.contains("#SBATCH -o job_files.dir/align.oe_%A_%a\n"));
    assert!(script.body.contains("FILES=(s1_R1.fq s2_R1.fq s3_R1.fq)\n"));
    assert!(script.body.contains("FILE=${FILES[$SLURM_ARRAY_TASK_ID]}\n"));
}

#[test]
fn end_to_end_paired_array_job() {
    let dir = tempdir().unwrap();
    touch(
        dir.path(),
        &["s1_R1.fq", "s1_R2.fq", "s2_R1.fq", "s2_R2.fq"],
    );

    let mut p = params("align", "bwa mem ref.fa $FILE $PAIRED_FILE");
    p.sarray_file_pattern = Some("*_R1.fq".to_string());
    p.sarray_paired_file_pattern = Some("*_R2.fq".to_string());

    let script = generate_script(&p, dir.path()).unwrap();
    assert!(script.body.contains("PAIRED_FILES=(s1_R2.fq s2_R2.fq)\n"));
    assert!(script.body.contains("FILENAME_PREFIXES=(s1_R s2_R)\n"));
    assert!(
        script
            .body
            .contains("FILENAME_PREFIX=${FILENAME_PREFIXES[$SLURM_ARRAY_TASK_ID]}\n")
    );
}

#[test]
fn paired_count_mismatch_aborts_generation() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["s1_R1.fq", "s2_R1.fq", "s1_R2.fq"]);

    let mut p = params("align", "bwa mem ref.fa $FILE $PAIRED_FILE");
    p.sarray_file_pattern = Some("*_R1.fq".to_string());
    p.sarray_paired_file_pattern = Some("*_R2.fq".to_string());

    let err = generate_script(&p, dir.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::PairedCountMismatch {
            primary: 2,
            paired: 1
        }
    ));
}
