// qualia/src/commands/score.rs
//
// USE CASE: score every asset of a snapshot and list the worst first.

use anyhow::Context;
use chrono::Utc;
use comfy_table::{Table, presets::UTF8_FULL};
use std::path::Path;

use qualia_core::application::QualityReport;
use qualia_core::infrastructure::config::load_scoring_config_or_default;
use qualia_core::infrastructure::snapshot::load_assets;

pub fn execute(
    snapshot: &Path,
    config_dir: &Path,
    profile: Option<&str>,
    limit: usize,
    format: &str,
) -> anyhow::Result<()> {
    // A. Load inputs (Infra)
    let assets = load_assets(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    let config = load_scoring_config_or_default(config_dir);

    // B. Build the report service (Application)
    let report = QualityReport::new(&config, profile, Utc::now())?;
    let lines = report.score_assets(&assets);

    if format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    println!(
        "📊 Scored {} assets (profile: {})",
        lines.len(),
        profile.or(config.active_profile.as_deref()).unwrap_or("default")
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Name", "Type", "Connection", "Compl", "Accur", "Timel", "Consi", "Usabi", "Overall",
        "Band",
    ]);

    for line in lines.iter().take(limit) {
        table.add_row(vec![
            line.name.clone(),
            line.type_name.clone(),
            line.connector_name.clone().unwrap_or_else(|| "-".into()),
            line.score.completeness.to_string(),
            line.score.accuracy.to_string(),
            line.score.timeliness.to_string(),
            line.score.consistency.to_string(),
            line.score.usability.to_string(),
            line.score.overall.to_string(),
            line.band.to_string(),
        ]);
    }

    println!("{table}");
    if lines.len() > limit {
        println!("   ... {} more (use --limit to show them)", lines.len() - limit);
    }

    Ok(())
}
