// qualia-core/src/domain/dimension.rs

use crate::domain::asset::AssetRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback value when an asset carries no usable data for a dimension.
/// Extraction is total: callers never see an error, they see this bucket.
pub const UNKNOWN: &str = "Unknown";

/// Closed set of pivot dimensions. One variant = one extraction rule,
/// checked exhaustively at compile time (no open string unions).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Connection,
    Database,
    Schema,
    AssetType,
    Owner,
    OwnerGroup,
    Domain,
    CertificateStatus,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Connection,
        Dimension::Database,
        Dimension::Schema,
        Dimension::AssetType,
        Dimension::Owner,
        Dimension::OwnerGroup,
        Dimension::Domain,
        Dimension::CertificateStatus,
    ];

    /// Stable wire identifier (matches the catalog API's camelCase keys).
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Connection => "connection",
            Dimension::Database => "database",
            Dimension::Schema => "schema",
            Dimension::AssetType => "assetType",
            Dimension::Owner => "owner",
            Dimension::OwnerGroup => "ownerGroup",
            Dimension::Domain => "domain",
            Dimension::CertificateStatus => "certificateStatus",
        }
    }

    /// Extracts the grouping value for one asset. Pure and total:
    /// missing or blank source data lands in the "Unknown" bucket.
    ///
    /// Database and schema come from the hierarchical qualified name
    /// (`connection/database/schema/...`) since the snapshot carries no
    /// direct fields for them.
    pub fn extract(&self, asset: &AssetRecord) -> String {
        let value: Option<&str> = match self {
            Dimension::Connection => asset.connector_name.as_deref(),
            Dimension::Database => asset.path_segment(1),
            Dimension::Schema => asset.path_segment(2),
            Dimension::AssetType => Some(asset.type_name.as_str()),
            Dimension::Owner => asset.owner_users.first().map(String::as_str),
            Dimension::OwnerGroup => asset.owner_groups.first().map(String::as_str),
            Dimension::Domain => asset.domain_name.as_deref(),
            Dimension::CertificateStatus => asset.certificate_status.as_deref(),
        };

        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => UNKNOWN.to_string(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .find(|d| d.key().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
                format!("Unknown dimension '{}'. Known: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn table_asset() -> AssetRecord {
        AssetRecord {
            guid: "g-1".into(),
            name: "ORDERS".into(),
            type_name: "Table".into(),
            qualified_name: Some("snowflake-prod/SALES/PUBLIC/ORDERS".into()),
            connector_name: Some("snowflake-prod".into()),
            owner_users: vec!["alice".into()],
            domain_name: Some("Finance".into()),
            certificate_status: Some("VERIFIED".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_direct_fields() {
        let asset = table_asset();
        assert_eq!(Dimension::Connection.extract(&asset), "snowflake-prod");
        assert_eq!(Dimension::AssetType.extract(&asset), "Table");
        assert_eq!(Dimension::Owner.extract(&asset), "alice");
        assert_eq!(Dimension::Domain.extract(&asset), "Finance");
        assert_eq!(Dimension::CertificateStatus.extract(&asset), "VERIFIED");
    }

    #[test]
    fn test_extract_from_qualified_path() {
        let asset = table_asset();
        assert_eq!(Dimension::Database.extract(&asset), "SALES");
        assert_eq!(Dimension::Schema.extract(&asset), "PUBLIC");
    }

    #[test]
    fn test_extract_falls_back_to_unknown() {
        // Blank type_name counts as missing too, not just None fields.
        let empty = AssetRecord::default();
        for dim in Dimension::ALL {
            assert_eq!(dim.extract(&empty), UNKNOWN, "dimension {}", dim);
        }
    }

    #[test]
    fn test_parse_keys_round_trip() {
        for dim in Dimension::ALL {
            let parsed: Dimension = dim.key().parse().unwrap();
            assert_eq!(parsed, dim);
        }
        assert!("popularity".parse::<Dimension>().is_err());
        assert_eq!(
            "OWNERGROUP".parse::<Dimension>().unwrap(),
            Dimension::OwnerGroup
        );
    }
}
