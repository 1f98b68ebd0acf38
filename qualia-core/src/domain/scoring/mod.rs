// qualia-core/src/domain/scoring/mod.rs

pub mod scorer;
pub mod weights;

// Re-exports
pub use scorer::{QualityScore, QualityScorer, ScoreMap};
pub use weights::{DimensionWeights, QualityBand, QualityBands, TimelinessBands};
