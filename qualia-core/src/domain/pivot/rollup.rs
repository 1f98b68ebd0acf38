// qualia-core/src/domain/pivot/rollup.rs

use crate::domain::measure::{Measure, MeasureKind};
use crate::domain::pivot::aggregator::{PivotRow, PivotTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// One node of the hierarchical rollup: a dimension value at a given
/// depth, its aggregated measures and its children (empty at leaf depth).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RollupNode {
    pub value: String,
    pub depth: usize,
    pub asset_count: usize,
    pub values: BTreeMap<Measure, f64>,
    pub children: Vec<RollupNode>,
}

impl RollupNode {
    pub fn value_of(&self, measure: Measure) -> Option<f64> {
        self.values.get(&measure).copied()
    }
}

pub struct HierarchyBuilder;

impl HierarchyBuilder {
    /// Re-expresses a flat pivot as a forest, one tree level per
    /// dimension in the table's dimension order.
    ///
    /// Parent values are recomputed from child rows only — count measures
    /// sum, score and coverage measures take the count-weighted average —
    /// never by rescanning raw assets, so rollup cost is proportional to
    /// the row count. A node with a single child still recomputes, which
    /// keeps output identical whether or not levels get collapsed later.
    pub fn build(table: &PivotTable) -> Vec<RollupNode> {
        if table.rows.is_empty() || table.dimensions.is_empty() {
            return Vec::new();
        }
        let rows: Vec<&PivotRow> = table.rows.iter().collect();
        Self::build_level(&rows, 0, table)
    }

    fn build_level(rows: &[&PivotRow], depth: usize, table: &PivotTable) -> Vec<RollupNode> {
        let leaf_depth = table.dimensions.len() - 1;
        let mut nodes = Vec::new();

        // Rows arrive sorted dimension-by-dimension, so each node is a
        // contiguous run of rows sharing the value at this depth.
        let mut start = 0;
        while start < rows.len() {
            let value = rows[start].keys[depth].clone();
            let mut end = start;
            while end < rows.len() && rows[end].keys[depth] == value {
                end += 1;
            }
            let run = &rows[start..end];

            if depth == leaf_depth {
                // Full keys are unique: a leaf run is exactly one row.
                for row in run {
                    nodes.push(RollupNode {
                        value: row.keys[depth].clone(),
                        depth,
                        asset_count: row.asset_count,
                        values: row.values.clone(),
                        children: Vec::new(),
                    });
                }
            } else {
                let children = Self::build_level(run, depth + 1, table);
                nodes.push(Self::parent_node(value, depth, children, &table.measures));
            }

            start = end;
        }

        nodes
    }

    fn parent_node(
        value: String,
        depth: usize,
        children: Vec<RollupNode>,
        measures: &[Measure],
    ) -> RollupNode {
        let total: usize = children.iter().map(|c| c.asset_count).sum();

        let values: BTreeMap<Measure, f64> = measures
            .iter()
            .map(|measure| {
                let aggregated = match measure.kind() {
                    MeasureKind::Count => children
                        .iter()
                        .filter_map(|c| c.value_of(*measure))
                        .sum(),
                    MeasureKind::Coverage | MeasureKind::Score => {
                        if total == 0 {
                            0.0
                        } else {
                            let weighted: f64 = children
                                .iter()
                                .filter_map(|c| {
                                    c.value_of(*measure).map(|v| v * c.asset_count as f64)
                                })
                                .sum();
                            (weighted / total as f64).round()
                        }
                    }
                };
                (*measure, aggregated)
            })
            .collect();

        RollupNode {
            value,
            depth,
            asset_count: total,
            values,
            children,
        }
    }
}
