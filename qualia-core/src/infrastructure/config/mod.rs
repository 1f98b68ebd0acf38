pub mod scoring;

pub use scoring::{ScoringConfig, load_scoring_config, load_scoring_config_or_default};
