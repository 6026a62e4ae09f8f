use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carebook", bin_name = "carebook", version)]
#[command(about = "Patient records and session notes with undo", long_about = None)]
pub struct Cli {
    /// Run a single command (e.g. "viewnotes all") instead of the shell
    #[arg(short, long, value_name = "COMMAND")]
    pub command: Option<String>,

    /// Patient data file, overriding config.json
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
