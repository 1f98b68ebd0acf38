// qualia-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid dimension weight vector for profile '{profile}': weights sum to {sum:.4}")]
    #[diagnostic(
        code(qualia::domain::weights),
        help("The five dimension weights (completeness..usability) must sum to 1.0.")
    )]
    InvalidWeightVector { profile: String, sum: f64 },

    #[error("Unknown scoring profile '{0}'")]
    #[diagnostic(code(qualia::domain::profile_not_found))]
    ProfileNotFound(String),
}
