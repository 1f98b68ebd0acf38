// qualia-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(qualia::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(qualia::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- SNAPSHOT / JSON ---
    #[error("Snapshot Parsing Error: {0}")]
    #[diagnostic(
        code(qualia::infra::snapshot),
        help("The asset snapshot must be a JSON array of assets or an object with an 'assets' array.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Scoring configuration not found at '{0}'")]
    #[diagnostic(code(qualia::infra::config_missing))]
    ConfigNotFound(String),
}
