#![doc = r##"
sbatchgen — generate and submit SLURM sbatch scripts.

This crate turns a plain job description (name, command, resource requests,
optional file patterns) into a complete sbatch batch script: a SLURM directive
header, optional job-array plumbing driven by files matched on disk, and the
command body split into one statement per line. It powers the `sbatchgen` CLI
and can be embedded in your own Rust applications.

Array jobs
----------
When a file pattern is given, every matching file becomes one array task. The
generated script binds `$FILE` to the task's file; with a paired pattern it
also binds `$PAIRED_FILE` and `$FILENAME_PREFIX` (the longest shared leading
substring of the two names, useful as a sample identifier). Both patterns must
match the same number of files; a count mismatch aborts before anything is
written.

Quick start: generate a script
------------------------------
```rust,no_run
use std::path::Path;
use sbatchgen::{generate_script, JobParams};

fn main() -> sbatchgen::Result<()> {
    let params = JobParams {
        job: "align reads".to_string(),
        wrap: "module load bwa; bwa mem ref.fa $FILE".to_string(),
        cpu: 8,
        mem: "32G".to_string(),
        sarray_file_pattern: Some("*_R1.fq".to_string()),
        ..Default::default()
    };

    let script = generate_script(&params, Path::new("."))?;
    println!("{}", script.path.display());
    script.write()
}
```

Pure helpers
------------
The assembler itself is a pure function of the parameters plus pre-fetched
match results, so script text can be produced (and tested) without touching
the filesystem:

```rust
use sbatchgen::{common_prefix, render_script, JobParams};

let params = JobParams {
    job: "hello".to_string(),
    wrap: "echo hi".to_string(),
    ..Default::default()
};
let text = render_script(&params, &[], &[]);
assert!(text.starts_with("#!/bin/env bash\n"));
assert_eq!(common_prefix("sample_R1.fq", "sample_R2.fq"), "sample_R");
```

Error handling
--------------
All public functions return `sbatchgen::Result<T>`; match on `sbatchgen::Error`
to handle specific cases, e.g. an invalid glob or a paired-file count mismatch.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — parameter record, script naming, and the batch-script assembler.
- [`io`] — file matching and `sbatch` submission.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use core::naming::{normalize_job_name, unique_script_name};
pub use core::params::JobParams;
pub use core::script::{common_prefix, mismatch_report, render_script};
pub use error::{Error, Result};

pub use io::matcher::sorted_matches;
pub use io::submit::submit_script;

// High-level API re-exports
pub use api::{GeneratedScript, generate_script};
