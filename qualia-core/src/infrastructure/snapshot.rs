// qualia-core/src/infrastructure/snapshot.rs
//
// Reads an asset snapshot exported by the catalog's browse API. The
// export is either a bare JSON array of assets or the search-response
// wrapper object ({ "assets": [...] }).

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::asset::AssetRecord;
use crate::infrastructure::error::InfrastructureError;

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Bare(Vec<AssetRecord>),
    Wrapped { assets: Vec<AssetRecord> },
}

#[instrument]
pub fn load_assets(path: &Path) -> Result<Vec<AssetRecord>, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    let snapshot: SnapshotFile = serde_json::from_str(&content)?;

    let assets = match snapshot {
        SnapshotFile::Bare(assets) => assets,
        SnapshotFile::Wrapped { assets } => assets,
    };

    info!(path = ?path, count = assets.len(), "Loaded asset snapshot");
    Ok(assets)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_snapshot(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("assets.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(
            dir.path(),
            r#"[
                {"guid": "g1", "name": "ORDERS", "typeName": "Table",
                 "connectorName": "snowflake-prod", "ownerUsers": ["alice"]},
                {"guid": "g2", "name": "CUSTOMERS", "typeName": "View"}
            ]"#,
        );
        let assets = load_assets(&path).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].guid, "g1");
        assert_eq!(assets[0].connector_name.as_deref(), Some("snowflake-prod"));
        assert_eq!(assets[1].owner_users.len(), 0);
    }

    #[test]
    fn test_load_wrapped_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(
            dir.path(),
            r#"{"assets": [{"guid": "g1", "name": "ORDERS", "typeName": "Table"}],
                "totalCount": 1}"#,
        );
        let assets = load_assets(&path).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "ORDERS");
    }

    #[test]
    fn test_malformed_snapshot_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(dir.path(), "{not json");
        let res = load_assets(&path);
        assert!(matches!(res, Err(InfrastructureError::JsonError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = load_assets(Path::new("/does/not/exist.json"));
        assert!(matches!(res, Err(InfrastructureError::Io(_))));
    }
}
