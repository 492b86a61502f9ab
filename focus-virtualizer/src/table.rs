use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{CenterZones, Error, ScrollBehavior, ScrollOffsetPolicy, SizeModel};

/// Precomputed scroll offsets (and item starts) for every index of a list.
///
/// Built in one pass: item starts are accumulated as a running prefix sum, then each offset is
/// evaluated with O(1) cumulative lookups. Recomputing `cumulative_extent` from zero for every
/// index would be quadratic for dynamic extents.
///
/// The table is immutable and cheap to clone. A rebuild produces a new table; holders replace
/// their copy in a single assignment, so no reader ever sees a partially built table.
#[derive(Clone, Debug, Default)]
pub struct OffsetTable {
    offsets: Arc<[i64]>,
    starts: Arc<[u64]>, // len + 1 entries
}

impl OffsetTable {
    /// Builds the table for `size.count()` items.
    pub fn build(
        behavior: ScrollBehavior,
        size: &SizeModel,
        viewport_extent: u32,
        center_zones: Option<CenterZones>,
    ) -> Result<Self, Error> {
        let policy = ScrollOffsetPolicy::new(behavior, size, viewport_extent, center_zones)?;
        Ok(Self::from_policy(&policy, size))
    }

    /// Builds the table for an already measured policy.
    pub fn from_policy(policy: &ScrollOffsetPolicy, size: &SizeModel) -> Self {
        let count = size.count();
        vdebug!(
            count,
            behavior = policy.behavior().as_str(),
            viewport_extent = policy.viewport_extent(),
            "OffsetTable::build"
        );

        let mut starts = Vec::with_capacity(count + 1);
        let mut acc = 0u64;
        starts.push(acc);
        for i in 0..count {
            acc = acc.saturating_add(size.item_extent(i) as u64);
            starts.push(acc);
        }

        let offsets: Vec<i64> = (0..count)
            .map(|i| {
                policy.offset_with(
                    i,
                    |j| starts[j],
                    |j| (starts[j + 1] - starts[j]) as u32,
                )
            })
            .collect();

        Self {
            offsets: Arc::from(offsets),
            starts: Arc::from(starts),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset for `index`.
    ///
    /// An index past the end is clamped to the last entry: focus can lag one frame behind a data
    /// mutation. An empty table yields `0`.
    pub fn lookup(&self, index: usize) -> i64 {
        match self.offsets.len() {
            0 => 0,
            len => self.offsets[index.min(len - 1)],
        }
    }

    /// Start of `index` in content coordinates.
    pub fn item_start(&self, index: usize) -> Option<u64> {
        if index >= self.len() {
            return None;
        }
        self.starts.get(index).copied()
    }

    pub fn item_extent(&self, index: usize) -> Option<u32> {
        let start = self.item_start(index)?;
        let end = self.starts.get(index + 1)?;
        Some((end - start) as u32)
    }

    pub fn total_extent(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }
}
