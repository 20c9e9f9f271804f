//! Plain-text rendering for the CLI and the shell.

use netdim_core::{format_number, Breakdown, NetworkType, ParameterSet, ResultSet};
use netdim_report::{format_amount, Indicators, ProjectRecord};
use std::fmt::Write;

const PLACEHOLDER: &str = "-";

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<20} {}", label, value);
}

/// Result card for one network.
pub fn render_results(network: NetworkType, results: &ResultSet, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", network.name(), network.description());

    let sites = if results.sites > 0 {
        results.sites.to_string()
    } else {
        PLACEHOLDER.to_string()
    };
    let coverage = if results.coverage > 0 {
        format!("{}%", results.coverage)
    } else {
        format!("{}%", PLACEHOLDER)
    };
    let cost = if results.cost > 0 {
        format_amount(results.cost, currency)
    } else {
        PLACEHOLDER.to_string()
    };

    row(&mut out, "Sites nécessaires", &sites);
    row(&mut out, "Capacité totale", &results.capacity.to_string());
    row(&mut out, "Couverture", &coverage);
    row(&mut out, "Coût estimé", &cost);
    row(&mut out, results.extra.label(), &results.extra.to_string());
    out
}

/// Parameter table with current values, units and suggested ranges.
pub fn render_parameters(params: &ParameterSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] parameters", params.network().name());
    for (def, value) in params.entries() {
        let range = def
            .range_label()
            .map(|r| format!("  [{}]", r))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<12} {:>10} {:<6} {}{}",
            def.name,
            format_number(value),
            def.unit,
            def.label,
            range
        );
    }
    out
}

/// Intermediate quantities, one per line.
pub fn render_breakdown(breakdown: &Breakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] breakdown", breakdown.network().name());
    for (name, value) in breakdown.rows() {
        row(&mut out, name, &value);
    }
    out
}

/// Chart data as text.
pub fn render_indicators(indicators: &Indicators) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Indicateurs de performance");
    for indicator in &indicators.performance {
        row(&mut out, &indicator.name, &format_number(indicator.value));
    }
    let _ = writeln!(out, "  Dimensionnement");
    for indicator in &indicators.dimensioning {
        row(&mut out, &indicator.name, &format_number(indicator.value));
    }
    row(&mut out, "Sites sur la carte", &indicators.site_icons.to_string());
    out
}

/// Summary of a saved project.
pub fn render_project(record: &ProjectRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (saved {})",
        record.name,
        record.saved.format("%d/%m/%Y %H:%M:%S UTC")
    );
    out.push_str(&render_parameters(&record.parameters));
    out.push_str(&render_results(
        record.network,
        &record.results,
        &record.metadata.currency,
    ));
    out
}
