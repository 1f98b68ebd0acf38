// qualia-core/src/domain/pivot/aggregator.rs

use crate::domain::asset::AssetRecord;
use crate::domain::dimension::Dimension;
use crate::domain::measure::{Measure, MeasureCalculator};
use crate::domain::scoring::{QualityScorer, ScoreMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// One group of the pivot: its dimension-value tuple, its members and
/// every requested measure value (already rounded per measure kind).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    /// Extracted dimension values, in the table's dimension order.
    pub keys: Vec<String>,
    /// Member guids, sorted so the row is identical whatever the input order.
    pub asset_guids: Vec<String>,
    pub asset_count: usize,
    pub values: BTreeMap<Measure, f64>,
}

impl PivotRow {
    pub fn value(&self, measure: Measure) -> Option<f64> {
        self.values.get(&measure).copied()
    }
}

/// Immutable snapshot of one aggregation request. Any change in inputs
/// produces a wholly new table; rows are never patched in place.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PivotTable {
    pub dimensions: Vec<Dimension>,
    pub measures: Vec<Measure>,
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_assets(&self) -> usize {
        self.rows.iter().map(|r| r.asset_count).sum()
    }
}

pub struct PivotAggregator;

impl PivotAggregator {
    /// Partitions `assets` into groups keyed by the extracted values of
    /// `dimensions` (in caller order) and computes every requested
    /// measure per group.
    ///
    /// Rows come out sorted lexicographically, dimension by dimension in
    /// the caller's order — the hierarchy builder depends on adjacent
    /// rows sharing a common parent prefix. Grouping through a BTreeMap
    /// makes the output independent of the input iteration order.
    ///
    /// Degenerate inputs (no assets, no dimensions or no measures) yield
    /// an empty table, not an error.
    pub fn aggregate(
        assets: &[AssetRecord],
        dimensions: &[Dimension],
        measures: &[Measure],
        precomputed: Option<&ScoreMap>,
        scorer: &QualityScorer,
    ) -> PivotTable {
        if assets.is_empty() || dimensions.is_empty() || measures.is_empty() {
            return PivotTable {
                dimensions: dimensions.to_vec(),
                measures: measures.to_vec(),
                rows: Vec::new(),
            };
        }

        // 1. Grouping: ordered key tuple -> member assets.
        let mut groups: BTreeMap<Vec<String>, Vec<&AssetRecord>> = BTreeMap::new();
        for asset in assets {
            let key: Vec<String> = dimensions.iter().map(|d| d.extract(asset)).collect();
            groups.entry(key).or_default().push(asset);
        }

        // 2. Measures per group.
        let calculator = MeasureCalculator::new(scorer, precomputed);
        let rows: Vec<PivotRow> = groups
            .into_iter()
            .map(|(keys, members)| {
                let values: BTreeMap<Measure, f64> = measures
                    .iter()
                    .map(|m| (*m, calculator.calculate(*m, &members)))
                    .collect();

                let mut asset_guids: Vec<String> =
                    members.iter().map(|a| a.guid.clone()).collect();
                asset_guids.sort();

                PivotRow {
                    keys,
                    asset_guids,
                    asset_count: members.len(),
                    values,
                }
            })
            .collect();

        PivotTable {
            dimensions: dimensions.to_vec(),
            measures: measures.to_vec(),
            rows,
        }
    }
}
