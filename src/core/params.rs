use serde::{Deserialize, Serialize};

/// Job parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobParams {
    /// Job name; non-word characters become underscores in the script name
    pub job: String,
    /// Command to execute; `;`-separated statements run on separate lines
    pub wrap: String,
    pub cpu: u32,
    pub mem: String,
    pub time: String,
    pub partition: Option<String>,
    /// Directory the scheduler writes job logs into
    pub job_files_dir: String,
    pub dependency: Option<String>,
    pub sarray_file_pattern: Option<String>,
    /// Requires `sarray_file_pattern`; both patterns must match equally many files
    pub sarray_paired_file_pattern: Option<String>,
    pub script_only: bool,
    /// Cap on the number of array tasks running at once
    pub sarray_limit: Option<u32>,
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            job: String::new(),
            wrap: String::new(),
            cpu: 1,
            mem: "10G".to_string(),
            time: "1-00:00:00".to_string(),
            partition: None,
            job_files_dir: "job_files.dir".to_string(),
            dependency: None,
            sarray_file_pattern: None,
            sarray_paired_file_pattern: None,
            script_only: false,
            sarray_limit: None,
        }
    }
}
