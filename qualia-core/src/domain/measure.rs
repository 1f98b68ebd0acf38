// qualia-core/src/domain/measure.rs

use crate::domain::asset::AssetRecord;
use crate::domain::scoring::{QualityScore, QualityScorer, ScoreMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of computable quantities. The numeric *kind* (not the
/// identifier) decides how a value is aggregated and rolled up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    // Raw counts
    AssetCount,

    // Coverage percentages over a boolean predicate
    DescriptionCoverage,
    OwnerCoverage,
    CertificationCoverage,
    LineageCoverage,
    HasUpstream,
    HasDownstream,
    FullLineage,
    Orphaned,

    // Averaged 0-100 quality scores
    Completeness,
    Accuracy,
    Timeliness,
    Consistency,
    Usability,
    Overall,
    AvgCompleteness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    Count,
    Coverage,
    Score,
}

impl Measure {
    pub const ALL: [Measure; 16] = [
        Measure::AssetCount,
        Measure::DescriptionCoverage,
        Measure::OwnerCoverage,
        Measure::CertificationCoverage,
        Measure::LineageCoverage,
        Measure::HasUpstream,
        Measure::HasDownstream,
        Measure::FullLineage,
        Measure::Orphaned,
        Measure::Completeness,
        Measure::Accuracy,
        Measure::Timeliness,
        Measure::Consistency,
        Measure::Usability,
        Measure::Overall,
        Measure::AvgCompleteness,
    ];

    pub fn kind(&self) -> MeasureKind {
        match self {
            Measure::AssetCount => MeasureKind::Count,

            Measure::DescriptionCoverage
            | Measure::OwnerCoverage
            | Measure::CertificationCoverage
            | Measure::LineageCoverage
            | Measure::HasUpstream
            | Measure::HasDownstream
            | Measure::FullLineage
            | Measure::Orphaned => MeasureKind::Coverage,

            Measure::Completeness
            | Measure::Accuracy
            | Measure::Timeliness
            | Measure::Consistency
            | Measure::Usability
            | Measure::Overall
            | Measure::AvgCompleteness => MeasureKind::Score,
        }
    }

    /// Stable wire identifier (camelCase, catalog API convention).
    pub fn key(&self) -> &'static str {
        match self {
            Measure::AssetCount => "assetCount",
            Measure::DescriptionCoverage => "descriptionCoverage",
            Measure::OwnerCoverage => "ownerCoverage",
            Measure::CertificationCoverage => "certificationCoverage",
            Measure::LineageCoverage => "lineageCoverage",
            Measure::HasUpstream => "hasUpstream",
            Measure::HasDownstream => "hasDownstream",
            Measure::FullLineage => "fullLineage",
            Measure::Orphaned => "orphaned",
            Measure::Completeness => "completeness",
            Measure::Accuracy => "accuracy",
            Measure::Timeliness => "timeliness",
            Measure::Consistency => "consistency",
            Measure::Usability => "usability",
            Measure::Overall => "overall",
            Measure::AvgCompleteness => "avgCompleteness",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .iter()
            .find(|m| m.key().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = Measure::ALL.iter().map(|m| m.key()).collect();
                format!("Unknown measure '{}'. Known: {}", s, known.join(", "))
            })
    }
}

/// Computes one numeric measure value for a group of assets.
///
/// Total over its whole input domain: an empty group yields 0 for every
/// kind — never a division by zero, never an error. When a precomputed
/// score map is supplied it takes precedence over re-scoring, keeping
/// results consistent with an external score cache.
pub struct MeasureCalculator<'a> {
    scorer: &'a QualityScorer,
    precomputed: Option<&'a ScoreMap>,
}

impl<'a> MeasureCalculator<'a> {
    pub fn new(scorer: &'a QualityScorer, precomputed: Option<&'a ScoreMap>) -> Self {
        Self {
            scorer,
            precomputed,
        }
    }

    pub fn calculate(&self, measure: Measure, group: &[&AssetRecord]) -> f64 {
        if group.is_empty() {
            return 0.0;
        }

        match measure.kind() {
            MeasureKind::Count => group.len() as f64,
            MeasureKind::Coverage => {
                let hits = group
                    .iter()
                    .filter(|asset| Self::coverage_predicate(measure, asset))
                    .count();
                // Rounded percentage over the group.
                (100.0 * hits as f64 / group.len() as f64).round()
            }
            MeasureKind::Score => {
                let sum: f64 = group
                    .iter()
                    .map(|asset| f64::from(self.score_value(measure, asset)))
                    .sum();
                // Average first, round after — per-asset values are already
                // integers, the group mean is rounded exactly once.
                (sum / group.len() as f64).round()
            }
        }
    }

    /// Boolean predicate behind each coverage measure.
    ///
    /// The lineage family (hasUpstream/hasDownstream/fullLineage) all
    /// derive from the single lineage-presence flag: the snapshot carries
    /// no directional lineage, so the three are numerically identical by
    /// construction. Orphaned is its complement.
    fn coverage_predicate(measure: Measure, asset: &AssetRecord) -> bool {
        match measure {
            Measure::DescriptionCoverage => asset.has_description(),
            Measure::OwnerCoverage => asset.has_owner(),
            Measure::CertificationCoverage => asset.is_certified(),
            Measure::LineageCoverage
            | Measure::HasUpstream
            | Measure::HasDownstream
            | Measure::FullLineage => asset.lineage_present(),
            Measure::Orphaned => !asset.lineage_present(),
            // Count/score measures never reach this path.
            _ => false,
        }
    }

    fn score_value(&self, measure: Measure, asset: &AssetRecord) -> u8 {
        let score: QualityScore = match self
            .precomputed
            .and_then(|map| map.get(&asset.guid))
        {
            Some(cached) => *cached,
            None => self.scorer.score(asset),
        };

        match measure {
            Measure::Completeness | Measure::AvgCompleteness => score.completeness,
            Measure::Accuracy => score.accuracy,
            Measure::Timeliness => score.timeliness,
            Measure::Consistency => score.consistency,
            Measure::Usability => score.usability,
            Measure::Overall => score.overall,
            // Count/coverage measures never reach this path.
            _ => 0,
        }
    }
}
