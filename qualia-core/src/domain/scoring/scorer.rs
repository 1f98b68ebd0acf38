// qualia-core/src/domain/scoring/scorer.rs

use crate::domain::asset::AssetRecord;
use crate::domain::scoring::weights::{DimensionWeights, TimelinessBands};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Names that look machine-generated or malformed fail the accuracy
/// naming check (same rule the warehouse-side rollup applies).
const NAMING_PATTERN: &str = r"^[\w.\-]+$";

/// The five dimension scores plus the weighted overall, all in [0, 100].
/// Rounded to integers at computation time so every downstream average
/// operates on the same values (reproducibility over float precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub completeness: u8,
    pub accuracy: u8,
    pub timeliness: u8,
    pub consistency: u8,
    pub usability: u8,
    pub overall: u8,
}

/// Precomputed scores keyed by asset guid, as shared by an external
/// score-cache collaborator. When present, the measure calculator uses
/// it instead of re-scoring.
pub type ScoreMap = HashMap<String, QualityScore>;

/// Scores one asset along the five quality dimensions.
///
/// The scorer carries an explicit reference instant so that scoring stays
/// a pure function of (asset, configuration): `Utc::now()` is resolved
/// once at the boundary, never inside the checks.
///
/// Every check degrades gracefully: data the catalog does not track
/// earns a documented partial credit instead of zero, so assets are
/// penalized for missing governance, not missing instrumentation.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    weights: DimensionWeights,
    timeliness_bands: TimelinessBands,
    now_ms: i64,
    naming: Option<Regex>,
}

impl QualityScorer {
    pub fn new(
        weights: DimensionWeights,
        timeliness_bands: TimelinessBands,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            weights,
            timeliness_bands,
            now_ms: now.timestamp_millis(),
            // Pattern is a compile-time literal; if it ever fails to build,
            // the naming check falls back to partial credit.
            naming: Regex::new(NAMING_PATTERN).ok(),
        }
    }

    pub fn with_defaults(now: DateTime<Utc>) -> Self {
        Self::new(DimensionWeights::default(), TimelinessBands::default(), now)
    }

    pub fn weights(&self) -> &DimensionWeights {
        &self.weights
    }

    pub fn score(&self, asset: &AssetRecord) -> QualityScore {
        let completeness = self.score_completeness(asset);
        let accuracy = self.score_accuracy(asset);
        let timeliness = self.score_timeliness(asset);
        let consistency = self.score_consistency(asset);
        let usability = self.score_usability(asset);

        QualityScore {
            completeness,
            accuracy,
            timeliness,
            consistency,
            usability,
            overall: self
                .weights
                .overall(completeness, accuracy, timeliness, consistency, usability),
        }
    }

    // --- COMPLETENESS (weights: 25 + 20 + 15 + 10 + 20 + 10 = 100) ---
    fn score_completeness(&self, asset: &AssetRecord) -> u8 {
        let mut score: u32 = 0;

        if asset.has_description() {
            score += 25;
        }
        if asset.has_owner() {
            score += 20;
        }
        // Tag coverage is graded: a single token tag is weaker governance
        // than a curated set.
        score += match asset.tags.len() {
            0 => 0,
            1..=2 => 8,
            _ => 15,
        };
        if !asset.custom_properties.is_empty() {
            score += 10;
        }
        score += Self::column_documentation_credit(asset);
        if asset.readme_guid.is_some() {
            score += 10;
        }

        Self::clamp(score)
    }

    /// Column documentation ratio, worth up to 20 points.
    /// Zero columns (schemas, connections) means the check does not apply:
    /// full credit. Unreported column counts earn partial credit (10).
    fn column_documentation_credit(asset: &AssetRecord) -> u32 {
        match (asset.column_count, asset.documented_column_count) {
            (Some(0), _) => 20,
            (Some(total), Some(documented)) => {
                let ratio = f64::from(documented.min(total)) / f64::from(total);
                (20.0 * ratio).round() as u32
            }
            _ => 10,
        }
    }

    // --- ACCURACY (weights: 30 + 20 + 25 + 15 + 10 = 100) ---
    fn score_accuracy(&self, asset: &AssetRecord) -> u8 {
        let mut score: u32 = 0;

        score += match &self.naming {
            Some(re) if re.is_match(&asset.name) => 30,
            Some(_) => 0,
            None => 15,
        };
        if asset.has_owner() {
            score += 20;
        }
        if asset.has_certificate() {
            score += 25;
        }
        if !asset.tags.is_empty() {
            score += 15;
        }
        // Machine-generated provenance is not tracked in the snapshot:
        // default credit rather than a blanket penalty.
        score += 10;

        Self::clamp(score)
    }

    // --- TIMELINESS (single banded check, weight 100) ---
    // Freshest of the three clocks wins: metadata update, source system
    // update, certificate review.
    fn score_timeliness(&self, asset: &AssetRecord) -> u8 {
        let freshest_age = [
            asset.updated_at,
            asset.source_updated_at,
            asset.certificate_updated_at,
        ]
        .into_iter()
        .flatten()
        .map(|ts| self.age_days(ts))
        .min();

        match freshest_age {
            Some(age) => self.timeliness_bands.score_for_age_days(age),
            // No clock at all: partial credit, the asset may simply not
            // be instrumented for change tracking.
            None => 25,
        }
    }

    // --- CONSISTENCY (weights: 30 + 25 + 25 + 20 = 100) ---
    fn score_consistency(&self, asset: &AssetRecord) -> u8 {
        let mut score: u32 = 0;

        if !asset.term_guids.is_empty() {
            score += 30;
        }
        if !asset.tags.is_empty() {
            score += 25;
        }
        // A well-formed asset sits inside a connection/database hierarchy.
        if asset.path_depth() >= 2 {
            score += 25;
        }
        if asset.connector_name.is_some() {
            score += 20;
        }

        Self::clamp(score)
    }

    // --- USABILITY (weights: 35 + 35 + 30 = 100) ---
    fn score_usability(&self, asset: &AssetRecord) -> u8 {
        let mut score: u32 = 0;

        if asset.popularity_score.unwrap_or(0.0) > 0.0 {
            score += 35;
        }
        let has_activity = asset.read_count.unwrap_or(0) > 0
            || asset.view_count.unwrap_or(0) > 0
            || asset.last_read_at.is_some();
        if has_activity {
            score += 35;
        }
        // All snapshot assets are discoverable in the catalog UI.
        score += 30;

        Self::clamp(score)
    }

    fn age_days(&self, timestamp_ms: i64) -> i64 {
        // Clock skew can put a timestamp slightly in the future: clamp to fresh.
        (self.now_ms - timestamp_ms).max(0) / MILLIS_PER_DAY
    }

    fn clamp(score: u32) -> u8 {
        score.min(100) as u8
    }
}
