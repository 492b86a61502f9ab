use crate::{Error, ItemExtent, ScrollBehavior, SizeModel};

/// Lengths of the two free zones of [`ScrollBehavior::Center`].
///
/// Indexes below `head` are not scrolled at all. Indexes at or beyond `count - tail` are pinned to
/// the trailing edge as in [`ScrollBehavior::StickToEnd`]. Both default to
/// `floor(visible_count / 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterZones {
    pub head: usize,
    pub tail: usize,
}

impl CenterZones {
    pub fn symmetric(len: usize) -> Self {
        Self {
            head: len,
            tail: len,
        }
    }
}

/// Maps a focused index to a scroll offset for one list geometry.
///
/// Offsets are non-positive translations of the content and are always clamped to
/// `[-(total_extent - viewport_extent), 0]`, so the content never leaves blank space at either end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOffsetPolicy {
    behavior: ScrollBehavior,
    count: usize,
    visible_count: usize,
    viewport_extent: u32,
    max_scroll: u64,
    center_zones: CenterZones,
    page_extent: Option<u32>,
}

impl ScrollOffsetPolicy {
    /// Measures `size` against `viewport_extent` for `behavior`.
    ///
    /// Fails with [`Error::UnsupportedConfiguration`] for jump-on-scroll with dynamic extents.
    pub fn new(
        behavior: ScrollBehavior,
        size: &SizeModel,
        viewport_extent: u32,
        center_zones: Option<CenterZones>,
    ) -> Result<Self, Error> {
        Self::validate(behavior, size.extent())?;
        Ok(Self::measure(behavior, size, viewport_extent, center_zones))
    }

    pub(crate) fn validate(behavior: ScrollBehavior, extent: &ItemExtent) -> Result<(), Error> {
        extent.validate()?;
        if behavior == ScrollBehavior::JumpOnScroll && !extent.is_fixed() {
            return Err(Error::UnsupportedConfiguration(
                "jump-on-scroll requires a fixed item extent",
            ));
        }
        Ok(())
    }

    pub(crate) fn measure(
        behavior: ScrollBehavior,
        size: &SizeModel,
        viewport_extent: u32,
        center_zones: Option<CenterZones>,
    ) -> Self {
        let visible_count = size.visible_count(viewport_extent);
        let max_scroll = size.total_extent().saturating_sub(viewport_extent as u64);
        Self {
            behavior,
            count: size.count(),
            visible_count,
            viewport_extent,
            max_scroll,
            center_zones: center_zones.unwrap_or(CenterZones::symmetric(visible_count / 2)),
            page_extent: size.extent().fixed_extent(),
        }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    pub fn center_zones(&self) -> CenterZones {
        self.center_zones
    }

    /// Largest scroll distance (`total_extent - viewport_extent`, or `0`).
    pub fn max_scroll(&self) -> u64 {
        self.max_scroll
    }

    /// Last index that can be aligned to the leading edge without overshooting the last page.
    pub fn max_left_aligned_index(&self) -> usize {
        self.count.saturating_sub(self.visible_count)
    }

    /// Last index that still fits on the first page when aligned to the trailing edge.
    pub fn max_right_aligned_index(&self) -> usize {
        self.count.saturating_sub(self.visible_count)
    }

    /// Computes the offset for `index` directly from `size`.
    ///
    /// With dynamic extents this is O(index); prefer [`crate::OffsetTable`] for repeated lookups.
    pub fn offset(&self, size: &SizeModel, index: usize) -> i64 {
        self.offset_with(
            index,
            |i| size.cumulative_extent(0, i),
            |i| size.item_extent(i),
        )
    }

    /// Shared by direct evaluation and table builds so both always agree.
    pub(crate) fn offset_with(
        &self,
        index: usize,
        cumulative: impl Fn(usize) -> u64,
        extent: impl Fn(usize) -> u32,
    ) -> i64 {
        if self.count == 0 || self.visible_count == 0 {
            return 0;
        }
        let index = index.min(self.count - 1);

        let raw = match self.behavior {
            ScrollBehavior::StickToStart => self.stick_to_start(index, &cumulative),
            ScrollBehavior::StickToEnd => self.stick_to_end(index, &cumulative, &extent),
            ScrollBehavior::Center => {
                let zones = self.center_zones;
                if index < zones.head {
                    0
                } else if index >= self.count.saturating_sub(zones.tail) {
                    self.stick_to_end(index, &cumulative, &extent)
                } else {
                    let start = cumulative(index) as i64;
                    let slack = self.viewport_extent as i64 - extent(index) as i64;
                    -(start - slack / 2)
                }
            }
            ScrollBehavior::JumpOnScroll => match self.page_extent {
                Some(page_extent) => {
                    let page = index / self.visible_count;
                    let left = page
                        .saturating_mul(self.visible_count)
                        .min(self.max_left_aligned_index());
                    -(left as i64 * page_extent as i64)
                }
                // Rejected by `validate`.
                None => self.stick_to_start(index, &cumulative),
            },
        };

        raw.clamp(-(self.max_scroll as i64), 0)
    }

    fn stick_to_start(&self, index: usize, cumulative: &impl Fn(usize) -> u64) -> i64 {
        -(cumulative(index.min(self.max_left_aligned_index())) as i64)
    }

    fn stick_to_end(
        &self,
        index: usize,
        cumulative: &impl Fn(usize) -> u64,
        extent: &impl Fn(usize) -> u32,
    ) -> i64 {
        if index <= self.max_right_aligned_index() {
            return 0;
        }
        let end = cumulative(index) as i64 + extent(index) as i64;
        -(end - self.viewport_extent as i64)
    }
}
