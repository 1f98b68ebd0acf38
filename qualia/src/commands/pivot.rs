// qualia/src/commands/pivot.rs
//
// USE CASE: dynamic pivot over an asset snapshot — flat table or
// hierarchical rollup, caller-chosen dimensions and measures.

use anyhow::Context;
use chrono::Utc;
use comfy_table::{Table, presets::UTF8_FULL};
use std::path::Path;
use std::str::FromStr;

use qualia_core::application::QualityReport;
use qualia_core::domain::{Dimension, Measure, RollupNode};
use qualia_core::infrastructure::config::load_scoring_config_or_default;
use qualia_core::infrastructure::snapshot::load_assets;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    snapshot: &Path,
    by: &[String],
    measures: &[String],
    nested: bool,
    config_dir: &Path,
    profile: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    // A. Parse the requested dimensions/measures (closed enums)
    let dimensions: Vec<Dimension> = by
        .iter()
        .map(|s| Dimension::from_str(s).map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<_>>()?;
    let measure_list: Vec<Measure> = measures
        .iter()
        .map(|s| Measure::from_str(s).map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<_>>()?;

    // B. Load inputs (Infra)
    let assets = load_assets(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    let config = load_scoring_config_or_default(config_dir);

    // C. Aggregate (Application)
    let report = QualityReport::new(&config, profile, Utc::now())?;

    if nested {
        let forest = report.nested_pivot(&assets, &dimensions, &measure_list);
        if format.eq_ignore_ascii_case("json") {
            println!("{}", serde_json::to_string_pretty(&forest)?);
        } else {
            println!(
                "🧮 Rollup of {} assets by [{}]",
                assets.len(),
                dimensions
                    .iter()
                    .map(Dimension::key)
                    .collect::<Vec<_>>()
                    .join(" → ")
            );
            for node in &forest {
                print_node(node, &measure_list);
            }
        }
        return Ok(());
    }

    let table = report.pivot(&assets, &dimensions, &measure_list);
    if format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "🧮 {} groups over {} assets",
        table.rows.len(),
        table.total_assets()
    );

    let mut out = Table::new();
    let mut header: Vec<String> = table.dimensions.iter().map(|d| d.key().to_string()).collect();
    header.extend(table.measures.iter().map(|m| m.key().to_string()));
    out.load_preset(UTF8_FULL).set_header(header);

    for row in &table.rows {
        let mut cells = row.keys.clone();
        for measure in &table.measures {
            cells.push(format_value(row.value(*measure)));
        }
        out.add_row(cells);
    }
    println!("{out}");

    Ok(())
}

fn print_node(node: &RollupNode, measures: &[Measure]) {
    let indent = "    ".repeat(node.depth);
    let rendered: Vec<String> = measures
        .iter()
        .map(|m| format!("{}={}", m.key(), format_value(node.value_of(*m))))
        .collect();
    println!(
        "{indent}➜ {} ({} assets) {}",
        node.value,
        node.asset_count,
        rendered.join("  ")
    );
    for child in &node.children {
        print_node(child, measures);
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        // Every measure value is rounded by the engine; display as integers.
        Some(v) => format!("{}", v.round() as i64),
        None => "-".to_string(),
    }
}
