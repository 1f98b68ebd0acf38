// qualia-core/src/domain/scoring/weights.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single source of truth for the overall quality score.
/// Every caller that needs an aggregate score goes through this vector;
/// it is never re-derived ad hoc elsewhere.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DimensionWeights {
    pub completeness: f64,
    pub accuracy: f64,
    pub timeliness: f64,
    pub consistency: f64,
    pub usability: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            completeness: 0.30,
            accuracy: 0.25,
            timeliness: 0.20,
            consistency: 0.15,
            usability: 0.10,
        }
    }
}

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.completeness + self.accuracy + self.timeliness + self.consistency + self.usability
    }

    /// Composes the overall score from the five already-rounded sub-scores.
    /// Rounded once, here, so downstream consumers always agree on the value.
    pub fn overall(
        &self,
        completeness: u8,
        accuracy: u8,
        timeliness: u8,
        consistency: u8,
        usability: u8,
    ) -> u8 {
        let weighted = self.completeness * f64::from(completeness)
            + self.accuracy * f64::from(accuracy)
            + self.timeliness * f64::from(timeliness)
            + self.consistency * f64::from(consistency)
            + self.usability * f64::from(usability);
        weighted.round().clamp(0.0, 100.0) as u8
    }

    /// Custom profiles must still describe a convex combination.
    pub fn validate(&self, profile: &str) -> Result<(), DomainError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(DomainError::InvalidWeightVector {
                profile: profile.to_string(),
                sum,
            });
        }
        Ok(())
    }
}

/// Freshness bands in days, mapped to fixed scores:
/// fresh -> 100, recent -> 75, aging -> 50, stale -> 25, beyond -> 0.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TimelinessBands {
    pub fresh: i64,
    pub recent: i64,
    pub aging: i64,
    pub stale: i64,
}

impl Default for TimelinessBands {
    fn default() -> Self {
        Self {
            fresh: 7,
            recent: 30,
            aging: 90,
            stale: 180,
        }
    }
}

impl TimelinessBands {
    pub fn score_for_age_days(&self, age_days: i64) -> u8 {
        if age_days <= self.fresh {
            100
        } else if age_days <= self.recent {
            75
        } else if age_days <= self.aging {
            50
        } else if age_days <= self.stale {
            25
        } else {
            0
        }
    }
}

/// Thresholds used to label a 0-100 score for reporting.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct QualityBands {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
    pub poor: u8,
}

impl Default for QualityBands {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            fair: 40,
            poor: 20,
        }
    }
}

impl QualityBands {
    pub fn band_for(&self, score: u8) -> QualityBand {
        if score >= self.excellent {
            QualityBand::Excellent
        } else if score >= self.good {
            QualityBand::Good
        } else if score >= self.fair {
            QualityBand::Fair
        } else if score >= self.poor {
            QualityBand::Poor
        } else {
            QualityBand::Critical
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityBand::Excellent => "Excellent",
            QualityBand::Good => "Good",
            QualityBand::Fair => "Fair",
            QualityBand::Poor => "Poor",
            QualityBand::Critical => "Critical",
        };
        f.write_str(label)
    }
}
