use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Terminal dashboard for reviewing payables and staging invoice uploads.
#[derive(Debug, Parser)]
#[command(name = "payables", version)]
pub struct Args {
    /// RON configuration file. A missing file means built-in defaults.
    #[arg(long, default_value = "payables.ron")]
    pub config: PathBuf,

    /// Directory receiving hand-off manifests; overrides the config file.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Evaluate due dates against this day (YYYY-MM-DD) instead of the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
