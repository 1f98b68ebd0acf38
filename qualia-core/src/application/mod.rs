// qualia-core/src/application/mod.rs

pub mod cache;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use qualia_core::application::{QualityReport, PivotCache};`
// sans avoir à connaître la structure interne des fichiers.

pub use cache::PivotCache;
pub use report::{AssetScoreLine, QualityReport};
