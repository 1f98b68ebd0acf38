// qualia-core/src/application/report.rs
//
// USE CASE: turn an in-memory asset snapshot into quality reports.
// Wires configuration -> scorer -> pivot/rollup. All inputs are explicit
// parameters; nothing is read from ambient state, so re-running with the
// same snapshot always reproduces the same report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::asset::AssetRecord;
use crate::domain::dimension::Dimension;
use crate::domain::measure::{Measure, MeasureKind};
use crate::domain::pivot::{HierarchyBuilder, PivotAggregator, PivotTable, RollupNode};
use crate::domain::scoring::{QualityBand, QualityBands, QualityScore, QualityScorer, ScoreMap};
use crate::error::QualiaError;
use crate::infrastructure::config::ScoringConfig;

/// One line of the per-asset score listing (the shape the dashboard's
/// score table and exports consume).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetScoreLine {
    pub guid: String,
    pub name: String,
    pub type_name: String,
    pub connector_name: Option<String>,
    pub score: QualityScore,
    pub band: QualityBand,
}

pub struct QualityReport {
    scorer: QualityScorer,
    bands: QualityBands,
}

impl QualityReport {
    /// Builds the report service from a scoring configuration and an
    /// explicit reference instant. Profile weights are validated here,
    /// once, so the scoring hot path stays total.
    pub fn new(
        config: &ScoringConfig,
        profile: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, QualiaError> {
        let weights = config.weights_for_profile(profile)?;
        weights.validate(profile.unwrap_or("default"))?;

        Ok(Self {
            scorer: QualityScorer::new(weights, config.timeliness, now),
            bands: config.bands,
        })
    }

    pub fn score(&self, asset: &AssetRecord) -> QualityScore {
        self.scorer.score(asset)
    }

    pub fn band(&self, score: u8) -> QualityBand {
        self.bands.band_for(score)
    }

    /// Precomputes the score map once per snapshot, mirroring the shared
    /// score cache the dashboard keeps between widgets.
    pub fn score_map(&self, assets: &[AssetRecord]) -> ScoreMap {
        assets
            .iter()
            .map(|a| (a.guid.clone(), self.scorer.score(a)))
            .collect()
    }

    /// Per-asset listing, worst overall score first.
    pub fn score_assets(&self, assets: &[AssetRecord]) -> Vec<AssetScoreLine> {
        let mut lines: Vec<AssetScoreLine> = assets
            .iter()
            .map(|asset| {
                let score = self.scorer.score(asset);
                AssetScoreLine {
                    guid: asset.guid.clone(),
                    name: asset.name.clone(),
                    type_name: asset.type_name.clone(),
                    connector_name: asset.connector_name.clone(),
                    score,
                    band: self.bands.band_for(score.overall),
                }
            })
            .collect();
        // Tie-break on guid to keep the listing deterministic.
        lines.sort_by(|a, b| {
            a.score
                .overall
                .cmp(&b.score.overall)
                .then_with(|| a.guid.cmp(&b.guid))
        });
        lines
    }

    /// Flat dynamic pivot. Scores are precomputed once when any score
    /// measure is requested, so N measures never re-score N times.
    pub fn pivot(
        &self,
        assets: &[AssetRecord],
        dimensions: &[Dimension],
        measures: &[Measure],
    ) -> PivotTable {
        let precomputed = self.maybe_score_map(assets, measures);
        PivotAggregator::aggregate(
            assets,
            dimensions,
            measures,
            precomputed.as_ref(),
            &self.scorer,
        )
    }

    /// Flat pivot against an externally supplied score cache.
    pub fn pivot_with_scores(
        &self,
        assets: &[AssetRecord],
        dimensions: &[Dimension],
        measures: &[Measure],
        scores: &ScoreMap,
    ) -> PivotTable {
        PivotAggregator::aggregate(assets, dimensions, measures, Some(scores), &self.scorer)
    }

    /// Hierarchical rollup of the flat pivot.
    pub fn nested_pivot(
        &self,
        assets: &[AssetRecord],
        dimensions: &[Dimension],
        measures: &[Measure],
    ) -> Vec<RollupNode> {
        let table = self.pivot(assets, dimensions, measures);
        HierarchyBuilder::build(&table)
    }

    fn maybe_score_map(&self, assets: &[AssetRecord], measures: &[Measure]) -> Option<ScoreMap> {
        let needs_scores = measures.iter().any(|m| m.kind() == MeasureKind::Score);
        if !needs_scores {
            return None;
        }
        debug!(assets = assets.len(), "Precomputing quality scores for pivot");
        Some(self.score_map(assets))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn asset(guid: &str, connector: &str, described: bool) -> AssetRecord {
        AssetRecord {
            guid: guid.into(),
            name: guid.into(),
            type_name: "Table".into(),
            connector_name: Some(connector.into()),
            description: described.then(|| "documented".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_with_default_config() {
        let report = QualityReport::new(&ScoringConfig::default(), None, now()).unwrap();
        let assets = vec![asset("g1", "A", true), asset("g2", "B", false)];

        let table = report.pivot(
            &assets,
            &[Dimension::Connection],
            &[Measure::AssetCount, Measure::Overall],
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.total_assets(), 2);
    }

    #[test]
    fn test_unknown_profile_fails_construction() {
        let res = QualityReport::new(&ScoringConfig::default(), Some("nope"), now());
        assert!(res.is_err());
    }

    #[test]
    fn test_pivot_with_and_without_precomputed_scores_agree() {
        let report = QualityReport::new(&ScoringConfig::default(), None, now()).unwrap();
        let assets = vec![
            asset("g1", "A", true),
            asset("g2", "A", false),
            asset("g3", "B", true),
        ];
        let dims = [Dimension::Connection];
        let measures = [Measure::Overall, Measure::Completeness];

        let direct = report.pivot(&assets, &dims, &measures);
        let cache = report.score_map(&assets);
        let cached = report.pivot_with_scores(&assets, &dims, &measures, &cache);
        assert_eq!(direct, cached);
    }

    #[test]
    fn test_score_listing_sorted_worst_first() {
        let report = QualityReport::new(&ScoringConfig::default(), None, now()).unwrap();
        let mut good = asset("g-good", "A", true);
        good.owner_users = vec!["alice".into()];
        good.tags = vec!["gold".into(), "x".into(), "y".into()];
        good.certificate_status = Some("VERIFIED".into());
        good.updated_at = Some(now().timestamp_millis());
        let bad = asset("g-bad", "A", false);

        let lines = report.score_assets(&[good, bad]);
        assert_eq!(lines[0].guid, "g-bad");
        assert!(lines[0].score.overall <= lines[1].score.overall);
    }

    #[test]
    fn test_nested_pivot_conserves_totals() {
        let report = QualityReport::new(&ScoringConfig::default(), None, now()).unwrap();
        let mut assets = Vec::new();
        for i in 0..6 {
            let conn = if i % 2 == 0 { "A" } else { "B" };
            let mut a = asset(&format!("g{i}"), conn, i < 3);
            a.type_name = if i < 4 { "Table".into() } else { "View".into() };
            assets.push(a);
        }

        let forest = report.nested_pivot(
            &assets,
            &[Dimension::Connection, Dimension::AssetType],
            &[Measure::AssetCount, Measure::DescriptionCoverage],
        );
        let total: usize = forest.iter().map(|n| n.asset_count).sum();
        assert_eq!(total, 6);
    }
}
