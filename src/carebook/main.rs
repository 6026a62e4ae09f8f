//! # Carebook CLI
//!
//! The binary is thin: the CLI lives in `cli/`, and this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ```text
//! carebook                      interactive shell, one command per line
//! carebook -c "viewnotes all"   run one command and exit
//! carebook --data clinic.json   use a specific data file
//! carebook -v                   debug logging on stderr
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
