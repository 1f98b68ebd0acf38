// qualia-core/src/domain/asset.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One catalog entity (connection, database, schema or table) as exported
/// by the metadata lakehouse. The core treats this as an immutable DTO:
/// it is deserialized once per aggregation request and never mutated.
///
/// Field names follow the catalog API payloads (camelCase on the wire).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetRecord {
    pub guid: String,
    pub name: String,
    pub type_name: String,
    pub qualified_name: Option<String>,

    // Connectivity / ownership references
    pub connector_name: Option<String>,
    pub owner_users: Vec<String>,
    pub owner_groups: Vec<String>,
    pub domain_name: Option<String>,

    // Documentation & governance
    pub description: Option<String>,
    pub readme_guid: Option<String>,
    pub certificate_status: Option<String>,
    pub certificate_updated_at: Option<i64>,
    pub tags: Vec<String>,
    pub term_guids: Vec<String>,
    pub custom_properties: HashMap<String, String>,

    // Lineage (presence flag only; real traversal is an external concern)
    pub has_lineage: Option<bool>,

    // Engagement counters
    pub popularity_score: Option<f64>,
    pub view_count: Option<u64>,
    pub read_count: Option<u64>,

    // Column documentation (tables only; None when not instrumented)
    pub column_count: Option<u32>,
    pub documented_column_count: Option<u32>,

    // Lifecycle timestamps (epoch milliseconds, catalog convention)
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub source_updated_at: Option<i64>,
    pub last_read_at: Option<i64>,
}

impl AssetRecord {
    /// A description counts only if it is non-blank after trimming.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    pub fn has_owner(&self) -> bool {
        !self.owner_users.is_empty() || !self.owner_groups.is_empty()
    }

    pub fn has_certificate(&self) -> bool {
        self.certificate_status
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Certified means the governance team explicitly verified the asset,
    /// not merely that *some* certificate state (e.g. DEPRECATED) is set.
    pub fn is_certified(&self) -> bool {
        self.certificate_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("VERIFIED"))
    }

    /// Absent flag is treated as "no lineage", never as an error.
    pub fn lineage_present(&self) -> bool {
        self.has_lineage.unwrap_or(false)
    }

    /// Segment of the hierarchical qualified name
    /// (`connection/database/schema/...`), if present and non-blank.
    pub fn path_segment(&self, index: usize) -> Option<&str> {
        self.qualified_name
            .as_deref()?
            .split('/')
            .nth(index)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn path_depth(&self) -> usize {
        self.qualified_name
            .as_deref()
            .map(|q| q.split('/').filter(|s| !s.trim().is_empty()).count())
            .unwrap_or(0)
    }
}
