//! Core building blocks: the job parameter record, script naming, and the
//! batch-script assembler. These are pure helpers consumed by the high-level
//! `api` module; filesystem and process interaction live in `io`.
pub mod naming;
pub mod params;
pub mod script;
