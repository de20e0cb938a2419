//! Filesystem and process edges: glob matching against the working tree and
//! handing finished scripts to `sbatch`.
pub mod matcher;
pub use matcher::sorted_matches;

pub mod submit;
pub use submit::submit_script;
