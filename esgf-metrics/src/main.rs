use clap::{Parser, Subcommand};
use esgf_metrics_core::cli::{
    ConfigCmd, DEFAULT_TOP_CLIENTS, print_error, run_config, run_inventory, run_metrics,
};
use esgf_metrics_core::conf::DEFAULT_CONFIG_PATH;
use esgf_metrics_core::logging::{OutputMode, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "esgf-metrics",
    version,
    about = "Download metrics from ESGF data node access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate the access logs and print the report (default)
    Run {
        /// Path to the config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "pretty")]
        json: bool,

        /// Output as formatted text
        #[arg(long)]
        pretty: bool,

        /// Number of top downloaders to list
        #[arg(long, default_value_t = DEFAULT_TOP_CLIENTS)]
        top: usize,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Report log coverage per month and node
    Inventory {
        /// Path to the config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: anyhow::Result<()> = match cli.command {
        Some(Command::Run {
            config,
            json,
            pretty,
            top,
        }) => {
            init_logging();
            run_metrics(&config, OutputMode::from_flags(json, pretty), top)
        }

        Some(Command::Config { cmd }) => run_config(cmd),

        Some(Command::Inventory { config, json }) => {
            init_logging();
            run_inventory(&config, OutputMode::from_flags(json, false))
        }

        None => {
            init_logging();
            run_metrics(
                &PathBuf::from(DEFAULT_CONFIG_PATH),
                OutputMode::from_flags(false, false),
                DEFAULT_TOP_CLIENTS,
            )
        }
    };

    if let Err(err) = result {
        print_error(&err);
        std::process::exit(1);
    }
}
