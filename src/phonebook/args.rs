use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
#[command(about = "File-backed contact directory", long_about = None)]
pub struct Cli {
    /// Phone book file (asked for interactively when omitted)
    pub file: Option<PathBuf>,

    /// Rows per page when listing (0 lists everything at once)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Directory holding config.json
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
