// qualia-core/src/infrastructure/config/scoring.rs
//
// Loads scoring weights from a shared scoring-weights.yaml so that every
// consumer (engine, CLI, exports) scores with the same vector.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::scoring::{DimensionWeights, QualityBands, TimelinessBands};
use crate::infrastructure::error::InfrastructureError;

/// A named override of the default weight vector (e.g. a stricter
/// "regulatory" profile that leans on completeness).
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ScoringProfile {
    pub dimension_weights: DimensionWeights,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: String,
    pub dimension_weights: DimensionWeights,
    pub timeliness: TimelinessBands,
    pub bands: QualityBands,
    pub active_profile: Option<String>,
    pub profiles: HashMap<String, ScoringProfile>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: "2.0".to_string(),
            dimension_weights: DimensionWeights::default(),
            timeliness: TimelinessBands::default(),
            bands: QualityBands::default(),
            active_profile: None,
            profiles: HashMap::new(),
        }
    }
}

impl ScoringConfig {
    /// Weight vector for an explicit profile, or the active one, or the
    /// base vector. Asking for a profile that does not exist is a caller
    /// bug and surfaces as an error rather than a silent default.
    pub fn weights_for_profile(
        &self,
        profile: Option<&str>,
    ) -> Result<DimensionWeights, DomainError> {
        let requested = profile.or(self.active_profile.as_deref());
        match requested {
            None => Ok(self.dimension_weights),
            Some(name) => self
                .profiles
                .get(name)
                .map(|p| p.dimension_weights)
                .ok_or_else(|| DomainError::ProfileNotFound(name.to_string())),
        }
    }

    /// Every weight vector in the file must be a convex combination.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.dimension_weights.validate("default")?;
        for (name, profile) in &self.profiles {
            profile.dimension_weights.validate(name)?;
        }
        Ok(())
    }
}

/// Strict loader for an explicit path: any problem is the caller's to handle.
#[instrument]
pub fn load_scoring_config(path: &Path) -> Result<ScoringConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    // 1. Chargement YAML
    let content = fs::read_to_string(path)?;
    let mut config: ScoringConfig = serde_yaml::from_str(&content)?;
    info!(path = ?path, version = %config.version, "Loaded scoring config");

    // 2. Validation des vecteurs de poids
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    // 3. Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: QUALIA_SCORING_PROFILE=regulatory qualia pivot ...
    apply_env_overrides(&mut config);

    Ok(config)
}

/// Lenient loader for the conventional locations: a missing or broken
/// file falls back to the built-in defaults with a warning, the way the
/// dashboard behaves when no tenant configuration was deployed.
pub fn load_scoring_config_or_default(base_dir: &Path) -> ScoringConfig {
    match find_config_file(base_dir) {
        None => {
            warn!(dir = ?base_dir, "scoring-weights.yaml not found, using defaults");
            let mut config = ScoringConfig::default();
            apply_env_overrides(&mut config);
            config
        }
        Some(path) => match load_scoring_config(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = ?path, error = %e, "Invalid scoring config, using defaults");
                let mut config = ScoringConfig::default();
                apply_env_overrides(&mut config);
                config
            }
        },
    }
}

fn find_config_file(base_dir: &Path) -> Option<PathBuf> {
    let candidates = ["scoring-weights.yaml", "config/scoring-weights.yaml"];
    candidates
        .iter()
        .map(|c| base_dir.join(c))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut ScoringConfig) {
    if let Ok(profile) = std::env::var("QUALIA_SCORING_PROFILE") {
        info!(old = ?config.active_profile, new = %profile, "Overriding active profile via ENV");
        config.active_profile = Some(profile);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("scoring-weights.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
version: "2.1"
dimension_weights:
  completeness: 0.40
  accuracy: 0.20
  timeliness: 0.20
  consistency: 0.10
  usability: 0.10
timeliness:
  fresh: 3
  recent: 14
  aging: 60
  stale: 120
profiles:
  regulatory:
    dimension_weights:
      completeness: 0.50
      accuracy: 0.30
      timeliness: 0.10
      consistency: 0.05
      usability: 0.05
"#,
        );

        let config = load_scoring_config(&path).unwrap();
        assert_eq!(config.version, "2.1");
        assert_eq!(config.dimension_weights.completeness, 0.40);
        assert_eq!(config.timeliness.fresh, 3);

        let regulatory = config.weights_for_profile(Some("regulatory")).unwrap();
        assert_eq!(regulatory.completeness, 0.50);

        let base = config.weights_for_profile(None).unwrap();
        assert_eq!(base.completeness, 0.40);
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let config = ScoringConfig::default();
        let res = config.weights_for_profile(Some("nope"));
        assert!(matches!(res, Err(DomainError::ProfileNotFound(ref n)) if n == "nope"));
    }

    #[test]
    fn test_invalid_weights_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
dimension_weights:
  completeness: 0.90
  accuracy: 0.90
  timeliness: 0.20
  consistency: 0.15
  usability: 0.10
"#,
        );
        let res = load_scoring_config(&path);
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let res = load_scoring_config(&dir.path().join("nope.yaml"));
        assert!(matches!(res, Err(InfrastructureError::ConfigNotFound(_))));
    }

    #[test]
    fn test_lenient_loader_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_scoring_config_or_default(dir.path());
        assert_eq!(config.dimension_weights, DimensionWeights::default());
        assert_eq!(config.version, "2.0");
    }

    #[test]
    fn test_partial_config_keeps_defaults_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "version: \"3.0\"\n");
        let config = load_scoring_config(&path).unwrap();
        assert_eq!(config.version, "3.0");
        assert_eq!(config.dimension_weights, DimensionWeights::default());
        assert_eq!(config.bands, QualityBands::default());
    }
}
