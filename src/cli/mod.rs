//! Command Line Interface (CLI) layer for sbatchgen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that matches array files, writes
//! the batch script, and hands it to `sbatch`. It wires user-provided options
//! to the underlying library functionality exposed via `sbatchgen::api`.
//!
//! If you are embedding sbatchgen into another application, prefer using
//! the high-level `sbatchgen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
