// qualia-core/src/domain/pivot/mod.rs

pub mod aggregator;
pub mod rollup;

// Re-exports
pub use aggregator::{PivotAggregator, PivotRow, PivotTable};
pub use rollup::{HierarchyBuilder, RollupNode};
