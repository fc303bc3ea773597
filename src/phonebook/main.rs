use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::PhoneBookApi;
use phonebook::config::PhoneBookConfig;
use phonebook::error::{PhoneBookError, Result};
use phonebook::store::fs::CsvFileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod cli;
use args::Cli;
use cli::{Prompter, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli);
    let page_size = cli.page_size.unwrap_or(config.page_size);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.say("Phone book")?;

    let path = match cli.file {
        Some(path) => path,
        None => ask_file(&mut prompter, &config.default_file)?,
    };
    if !path.is_file() {
        return Err(PhoneBookError::InvalidFile(path));
    }

    let api = PhoneBookApi::open(CsvFileStore::new(path))?;
    Session::new(api, prompter, page_size).run()
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(cli: &Cli) -> PhoneBookConfig {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "phonebook", "phonebook").map(|d| d.config_dir().to_path_buf())
    });
    let Some(config_dir) = config_dir else {
        return PhoneBookConfig::default();
    };
    PhoneBookConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!("ignoring config in {}: {}", config_dir.display(), e);
        PhoneBookConfig::default()
    })
}

/// Asks for the phone book file; an empty answer (or no input) picks `default_file`.
fn ask_file<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_file: &str,
) -> Result<PathBuf> {
    let prompt = format!(
        "Enter the phone book file name (Enter for default - {}): ",
        default_file
    );
    let answer = prompter.ask(&prompt)?.unwrap_or_default();
    let name = if answer.is_empty() {
        default_file
    } else {
        answer.as_str()
    };
    Ok(PathBuf::from(name))
}
