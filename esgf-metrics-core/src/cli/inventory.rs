use crate::conf::load_config;
use crate::inventory::{CoverageRow, coverage, discover_logs};
use crate::logging::OutputMode;
use owo_colors::OwoColorize;
use std::path::Path;

/// `esgf-metrics inventory`: log coverage per month and node.
pub fn run_inventory(config_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let files = discover_logs(&config.logs.root, &config.logs.pattern)?;
    let rows = coverage(&files);

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputMode::Pretty => print!("{}", render_coverage(&rows)),
    }

    Ok(())
}

pub fn render_coverage(rows: &[CoverageRow]) -> String {
    let mut out = String::new();

    let incomplete = rows.iter().filter(|r| !r.complete).count();
    out.push_str(&format!(
        "{} month/node pairs, {} incomplete\n\n",
        rows.len(),
        incomplete
    ));

    for row in rows {
        let status = if row.complete {
            "ok".green().to_string()
        } else {
            "incomplete".yellow().bold().to_string()
        };
        out.push_str(&format!(
            "  {:<8} {:<16} {:>4} logs  {}\n",
            row.month.to_string(),
            row.node,
            row.log_count,
            status
        ));
    }

    out
}
