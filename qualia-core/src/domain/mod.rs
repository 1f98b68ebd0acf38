pub mod asset;
pub mod dimension;
pub mod error;
pub mod measure;
pub mod pivot;
pub mod scoring;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use asset::AssetRecord;
pub use dimension::Dimension;
pub use error::DomainError;
pub use measure::{Measure, MeasureCalculator, MeasureKind};
pub use pivot::{HierarchyBuilder, PivotAggregator, PivotRow, PivotTable, RollupNode};
pub use scoring::{DimensionWeights, QualityBand, QualityScore, QualityScorer, ScoreMap};
