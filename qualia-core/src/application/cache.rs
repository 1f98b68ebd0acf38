// qualia-core/src/application/cache.rs
//
// Optional memoization of pivot results, kept OUTSIDE the pure
// aggregation functions: the domain stays trivially testable and the
// cache is an opt-in decorator for callers that re-render the same
// selection repeatedly.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::application::report::QualityReport;
use crate::domain::asset::AssetRecord;
use crate::domain::dimension::Dimension;
use crate::domain::measure::Measure;
use crate::domain::pivot::PivotTable;

#[derive(Default)]
pub struct PivotCache {
    entries: HashMap<u64, PivotTable>,
}

impl PivotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the memoized table for (asset set, dimensions, measures),
    /// computing it through `report` on a miss.
    pub fn get_or_compute(
        &mut self,
        report: &QualityReport,
        assets: &[AssetRecord],
        dimensions: &[Dimension],
        measures: &[Measure],
    ) -> &PivotTable {
        let key = Self::cache_key(assets, dimensions, measures);
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                debug!(key, "Pivot cache hit");
                entry.into_mut()
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                debug!(key, "Pivot cache miss, computing");
                entry.insert(report.pivot(assets, dimensions, measures))
            }
        }
    }

    /// Key over the asset *set* (guids sorted), so two snapshots holding
    /// the same assets in a different order share one entry — matching
    /// the aggregator's own order-independence.
    fn cache_key(assets: &[AssetRecord], dimensions: &[Dimension], measures: &[Measure]) -> u64 {
        let mut guids: Vec<&str> = assets.iter().map(|a| a.guid.as_str()).collect();
        guids.sort_unstable();

        let mut hasher = DefaultHasher::new();
        guids.hash(&mut hasher);
        dimensions.hash(&mut hasher);
        measures.hash(&mut hasher);
        hasher.finish()
    }
}
