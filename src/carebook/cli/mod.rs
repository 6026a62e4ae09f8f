//! # CLI Layer
//!
//! One possible UI client for carebook. This is the only place that reads
//! stdin, writes stdout/stderr or decides exit codes.
//!
//! ## Modes
//!
//! - **Shell** (default): prints a prompt, reads one command per line and
//!   keeps going after failed commands. Ends on `exit` or end of input.
//! - **One-shot** (`-c "<command>"`): runs a single command. A failed
//!   command is returned as an error, so the process exits with status 1.
//!
//! ## Context Setup
//!
//! The data file is `--data` if given, otherwise `data_file` from
//! `config.json` in the config directory (`--config-dir` or the platform
//! default). Logging goes to stderr through `env_logger`; `-v` enables debug
//! output and `RUST_LOG` overrides both.

mod render;
mod setup;

use carebook::api::CarebookApi;
use carebook::commands::session::usage_lines;
use carebook::commands::CmdResult;
use carebook::config::{default_config_dir, CarebookConfig};
use carebook::error::Result;
use carebook::store::fs::FileStore;
use clap::Parser;
use log::{debug, info};
use render::{render_error, render_help, render_messages, render_notes, render_patient_list};
use setup::Cli;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "carebook> ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_path = resolve_data_path(&cli)?;
    info!("using data file {}", data_path.display());
    let mut api = CarebookApi::open(FileStore::new(data_path))?;

    match cli.command {
        Some(line) => run_once(&mut api, &line),
        None => run_shell(&mut api),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn resolve_data_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.data {
        return Ok(path.clone());
    }
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = CarebookConfig::load(&config_dir)?;
    Ok(config.data_path(&config_dir))
}

fn run_once(api: &mut CarebookApi<FileStore>, line: &str) -> Result<()> {
    let result = api.execute(line)?;
    print_result(&result);
    Ok(())
}

fn run_shell(api: &mut CarebookApi<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!(
        "carebook: {} patients loaded. Type 'help' for commands.",
        api.book().patients().len()
    );
    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match api.execute(&line) {
            Ok(result) => {
                print_result(&result);
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                debug!("command failed: {:?}", e);
                eprintln!("{}", render_error(&e.to_string()));
            }
        }
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    if !result.listed_patients.is_empty() {
        println!("{}", render_patient_list(&result.listed_patients));
    }
    if let Some(notes) = &result.notes {
        println!("{}", render_notes(notes));
    }
    if result.show_help {
        println!("{}", render_help(&usage_lines()));
    }
    if !result.messages.is_empty() {
        println!("{}", render_messages(&result.messages));
    }
}
