// qualia-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::{ScoringConfig, load_scoring_config};
pub use error::InfrastructureError;
pub use snapshot::load_assets;
