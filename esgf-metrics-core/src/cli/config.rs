use crate::conf::{ConfigError, DEFAULT_CONFIG_PATH, load_config};
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

pub fn run_config(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
    }
}

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ logs: {} ({})", cfg.logs.root.display(), cfg.logs.pattern);
            println!("✔ serving root: {}", cfg.pipeline.serving_root);
            println!(
                "✔ dedup window: {}s",
                cfg.pipeline.dedup_window.as_secs()
            );
            println!("✔ reference offset: {}", cfg.pipeline.reference_offset);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

pub fn print_config_error(err: &ConfigError) {
    eprintln!();
    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{}", hint);
    }
}

/// Prints a command failure to stderr, with a hint when the root cause is a
/// configuration problem.
pub fn print_error(err: &anyhow::Error) {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => print_config_error(config_err),
        None => {
            eprintln!();
            eprintln!("{}: {:#}", "error".red().bold(), err);
        }
    }
}
