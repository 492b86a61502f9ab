use alloc::sync::Arc;
use core::fmt;

use crate::Error;

/// A per-index extent function.
pub type ExtentFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Item extent along the scroll axis.
#[derive(Clone)]
pub enum ItemExtent {
    /// Every item has the same extent. Must be non-zero.
    Fixed(u32),
    /// Extents are computed per index. The function must be pure for the lifetime of a build.
    /// Results below `1` are read as `1`.
    Dynamic(ExtentFn),
}

impl ItemExtent {
    pub fn dynamic(f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Returns the constant extent in fixed mode.
    pub fn fixed_extent(&self) -> Option<u32> {
        match self {
            Self::Fixed(extent) => Some(*extent),
            Self::Dynamic(_) => None,
        }
    }

    pub fn get(&self, index: usize) -> u32 {
        match self {
            Self::Fixed(extent) => *extent,
            Self::Dynamic(f) => f(index).max(1),
        }
    }

    /// `true` when both are the same fixed extent or share the same function.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.fixed_extent() == Some(0) {
            return Err(Error::InvalidConfiguration("fixed item extent must be non-zero"));
        }
        Ok(())
    }
}

impl fmt::Debug for ItemExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(extent) => f.debug_tuple("Fixed").field(extent).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Item sizing for a list of `count` items.
///
/// Fixed extents answer every query in O(1). Dynamic extents evaluate the extent function over the
/// queried range; use [`crate::OffsetTable`] when many queries are needed.
#[derive(Clone, Debug)]
pub struct SizeModel {
    count: usize,
    extent: ItemExtent,
}

impl SizeModel {
    pub fn new(count: usize, extent: ItemExtent) -> Result<Self, Error> {
        extent.validate()?;
        Ok(Self { count, extent })
    }

    pub(crate) fn from_validated(count: usize, extent: ItemExtent) -> Self {
        debug_assert!(extent.validate().is_ok());
        Self { count, extent }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn extent(&self) -> &ItemExtent {
        &self.extent
    }

    pub fn item_extent(&self, index: usize) -> u32 {
        self.extent.get(index)
    }

    /// Number of items needed to fill `viewport_extent`, counted from index 0.
    ///
    /// Fixed mode rounds up (a partially visible item counts). Dynamic mode accumulates extents
    /// until the viewport is covered and never returns more than `count`.
    pub fn visible_count(&self, viewport_extent: u32) -> usize {
        if self.count == 0 || viewport_extent == 0 {
            return 0;
        }
        let target = viewport_extent as u64;
        match &self.extent {
            ItemExtent::Fixed(extent) => target.div_ceil(*extent as u64) as usize,
            ItemExtent::Dynamic(_) => {
                let mut acc = 0u64;
                for i in 0..self.count {
                    acc = acc.saturating_add(self.extent.get(i) as u64);
                    if acc >= target {
                        return i + 1;
                    }
                }
                self.count
            }
        }
    }

    /// Sum of extents over `from..to` (bounds are clamped to `count`).
    pub fn cumulative_extent(&self, from: usize, to: usize) -> u64 {
        let to = to.min(self.count);
        let from = from.min(to);
        match &self.extent {
            ItemExtent::Fixed(extent) => (to - from) as u64 * *extent as u64,
            ItemExtent::Dynamic(_) => (from..to).fold(0u64, |acc, i| {
                acc.saturating_add(self.extent.get(i) as u64)
            }),
        }
    }

    pub fn total_extent(&self) -> u64 {
        self.cumulative_extent(0, self.count)
    }
}
