use crate::aggregate::{BucketKey, ClientTotal, ReportRow};
use crate::diagnostics::{Diagnostics, FailureKind};
use crate::pipeline::{BatchOutcome, BatchStats};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct RunJson<'a> {
    stats: &'a BatchStats,
    rows: &'a [ReportRow],
    top_clients: Vec<&'a ClientTotal>,
    diagnostics: &'a Diagnostics,
}

pub fn render_json(outcome: &BatchOutcome, top: usize) -> serde_json::Result<String> {
    let json = RunJson {
        stats: &outcome.stats,
        rows: outcome.report.rows(),
        top_clients: outcome.report.top_clients(top),
        diagnostics: &outcome.diagnostics,
    };

    serde_json::to_string_pretty(&json)
}

/// Human-readable summary: the ALL series, project and facet breakdown for
/// the most recent quarter, top downloaders and exclusion counts.
pub fn render_pretty(outcome: &BatchOutcome, top: usize) -> String {
    let mut out = String::new();
    let stats = &outcome.stats;
    let report = &outcome.report;

    out.push_str(&format!(
        "{} sources, {} lines read, {} downloads, {} excluded\n\n",
        stats.sources,
        stats.lines_read,
        stats.aggregated.green().bold(),
        outcome.diagnostics.total().yellow()
    ));

    //-------------------------------------------------------------------------
    // ALL
    //-------------------------------------------------------------------------
    out.push_str(&format!("{}\n", "ALL".bold()));
    for row in report.series(&BucketKey::All) {
        out.push_str(&format!(
            "  {}  {:<10} {:>8} req {:>10}   cumulative {:>8} req {:>10}\n",
            row.period,
            row.fiscal_period,
            row.request_count,
            format_bytes(row.total_bytes),
            row.cumulative_requests,
            format_bytes(row.cumulative_bytes)
        ));
    }

    //-------------------------------------------------------------------------
    // Projects and facets, latest quarter
    //-------------------------------------------------------------------------
    if let Some(latest) = report.periods().last().copied() {
        let mut projects: Vec<&ReportRow> = Vec::new();
        let mut by_facet: BTreeMap<(&str, &str), Vec<(&str, &ReportRow)>> = BTreeMap::new();
        for row in report.rows().iter().filter(|r| r.period == latest) {
            match &row.key {
                BucketKey::Project { .. } => projects.push(row),
                BucketKey::Facet {
                    project,
                    name,
                    value,
                } => by_facet
                    .entry((project.as_str(), name.as_str()))
                    .or_default()
                    .push((value.as_str(), row)),
                BucketKey::All => {}
            }
        }

        if !projects.is_empty() {
            out.push_str(&format!("\n{} {}\n", "Projects".bold(), latest));
        }
        for row in projects {
            out.push_str(&format!(
                "  {:<40} {:>8} req {:>10}   cumulative {:>8} req {:>10}\n",
                row.key.to_string(),
                row.request_count,
                format_bytes(row.total_bytes),
                row.cumulative_requests,
                format_bytes(row.cumulative_bytes)
            ));
        }

        if !by_facet.is_empty() {
            out.push_str(&format!("\n{} {}\n", "Facets".bold(), latest));
        }
        for ((project, name), mut rows) in by_facet {
            rows.sort_by(|a, b| b.1.total_bytes.cmp(&a.1.total_bytes));
            out.push_str(&format!("  {} {}\n", project.dimmed(), name.cyan()));
            for (value, row) in rows.into_iter().filter(|(_, r)| r.request_count > 0) {
                out.push_str(&format!(
                    "    {:<40} {:>8} req {:>10}\n",
                    value,
                    row.request_count,
                    format_bytes(row.total_bytes)
                ));
            }
        }
    }

    //-------------------------------------------------------------------------
    // Top downloaders
    //-------------------------------------------------------------------------
    let clients = report.top_clients(top);
    if !clients.is_empty() {
        out.push_str(&format!("\n{}\n", "Top downloaders".bold()));
        for client in clients {
            out.push_str(&format!(
                "  {:<40} {:>8} req {:>10}\n",
                client.client,
                client.request_count,
                format_bytes(client.total_bytes)
            ));
        }
    }

    //-------------------------------------------------------------------------
    // Exclusions by kind
    //-------------------------------------------------------------------------
    if !outcome.diagnostics.is_empty() {
        let mut by_kind: BTreeMap<FailureKind, u64> = BTreeMap::new();
        for entry in outcome.diagnostics.entries() {
            *by_kind.entry(entry.key.kind).or_insert(0) += entry.count;
        }

        out.push_str(&format!("\n{}\n", "Excluded".bold()));
        for (kind, count) in by_kind {
            let label = match kind {
                FailureKind::StatusExcluded(code) => format!("status {code}"),
                other => other.to_string(),
            };
            out.push_str(&format!("  {:<24} {:>8}\n", label, count.yellow()));
        }
    }

    out
}

/// Decimal units, one fractional digit above bytes.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];

    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}
