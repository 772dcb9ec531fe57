use anyhow::{anyhow, Result};
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Sum that a qualifying combination of entries must reach.
pub const TARGET_SUM: i64 = 2020;
/// Subset size of the first search.
pub const PAIR_SIZE: usize = 2;
/// Subset size of the second search.
pub const TRIPLE_SIZE: usize = 3;

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
}

/// Load `config/default.toml` only, with no environment or command-line
/// overrides. Used by tests that need a reproducible starting point.
pub fn load_default_config() -> Result<Settings> {
    let root_dir = retrieve_project_root();
    let default_config_file = root_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .map_err(|err| anyhow!("Failed to load configuration: {}", err))?;

    let config: Settings = settings
        .try_deserialize()
        .map_err(|err| anyhow!("Failed to deserialize configuration: {}", err))?;

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root_dir = retrieve_project_root();

    let default_config_file = root_dir.join("config/default.toml");
    let local_config = root_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        eprintln!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        eprintln!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("ksum"))
        .build()
        .map_err(|err| anyhow!("Failed to load configuration: {}", err))?;

    let mut config: Settings = settings
        .try_deserialize()
        .map_err(|err| anyhow!("Failed to deserialize configuration: {}", err))?;

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(input) = args.input {
        config.input = input;
    }

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the KSUM_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> PathBuf {
    let root_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("KSUM_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        PathBuf::from(path)
    } else {
        // Fallback: try to find the nearest directory containing a "config" subdirectory
        // Start from the executable directory and walk upward
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();
        let mut found = false;

        while !found && current_dir.parent().is_some() {
            if current_dir.join("config").is_dir() {
                found = true;
            } else {
                current_dir = current_dir.parent().unwrap().to_path_buf();
            }
        }

        if found {
            current_dir
        } else {
            panic!("Could not find project root directory");
        }
    };
    root_dir
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ksum - products of the entry pair and triple that sum to 2020"
)]
pub struct CliArgs {
    /// File path to the puzzle input. Plain text, one integer per line,
    /// surrounding whitespace allowed.
    #[arg(short, long)]
    input: Option<PathBuf>,
}
