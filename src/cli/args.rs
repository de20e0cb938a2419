use clap::Parser;

#[derive(Parser)]
#[command(name = "sbatchgen", version, about = "Create and run an sbatch script")]
pub struct CliArgs {
    /// Job name (non-word characters are replaced with underscores)
    pub job: String,

    /// Command to execute; `;`-separated statements run on separate lines
    pub wrap: String,

    /// Number of CPU cores to use
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub cpu: u32,

    /// Total RAM to allocate
    #[arg(long, default_value = "10G")]
    pub mem: String,

    /// Time limit ("1-00:00:00" means 1 day, 0 hours, 00 minutes, 00 seconds)
    #[arg(long, default_value = "1-00:00:00")]
    pub time: String,

    /// Partition to use
    #[arg(long)]
    pub partition: Option<String>,

    /// Job log directory, created if absent
    #[arg(long = "job_files_dir", default_value = "job_files.dir")]
    pub job_files_dir: String,

    /// List of jobs that must finish before this one starts
    #[arg(long)]
    pub dependency: Option<String>,

    /// Pattern of files to include in the job array; each task sees its
    /// file as $FILE
    #[arg(long = "sarray_file_pattern")]
    pub sarray_file_pattern: Option<String>,

    /// Pattern of paired files to include in the job array (use $PAIRED_FILE
    /// and $FILENAME_PREFIX in your script)
    #[arg(long = "sarray_paired_file_pattern", requires = "sarray_file_pattern")]
    pub sarray_paired_file_pattern: Option<String>,

    /// Create the script, but don't run it
    #[arg(long = "script_only", default_value_t = false)]
    pub script_only: bool,

    /// Number of array tasks to allow to run at the same time
    #[arg(long = "sarray_limit", value_parser = clap::value_parser!(u32).range(1..))]
    pub sarray_limit: Option<u32>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
