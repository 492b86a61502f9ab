use alloc::sync::Arc;

use crate::virtualizer::FocusVirtualizer;
use crate::{CenterZones, ItemExtent, ScrollBehavior};

/// A callback fired after the virtualizer recomputed its frame.
///
/// Inside [`FocusVirtualizer::batch_update`] it fires once, when the outermost batch ends.
pub type OnChangeCallback = Arc<dyn Fn(&FocusVirtualizer) + Send + Sync>;

/// Configuration for [`crate::FocusVirtualizer`].
///
/// This type is cheap to clone: the extent function and callback are stored in `Arc`s so adapters
/// can tweak a few fields and call `FocusVirtualizer::set_options` without reallocating closures.
pub struct VirtualizerOptions {
    pub count: usize,
    pub item_extent: ItemExtent,

    /// Scroll behavior. `None` is rejected with `Error::InvalidConfiguration`.
    pub behavior: Option<ScrollBehavior>,

    /// Viewport extent along the scroll axis. `0` means "not measured yet": the render window is
    /// empty and the offset is `0` until a real value arrives.
    pub viewport_extent: u32,

    /// Extra items rendered on each side of the visible set (ignored by jump-on-scroll, which
    /// always double-buffers a full page).
    pub additional_rendered: usize,

    /// How many items before the end of the data `fetch_more` starts reporting `true`.
    pub fetch_threshold: usize,

    /// Overrides the free zones of [`ScrollBehavior::Center`].
    pub center_zones: Option<CenterZones>,

    /// Optional callback fired when the virtualizer's frame changes.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for VirtualizerOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_extent: self.item_extent.clone(),
            behavior: self.behavior,
            viewport_extent: self.viewport_extent,
            additional_rendered: self.additional_rendered,
            fetch_threshold: self.fetch_threshold,
            center_zones: self.center_zones,
            on_change: self.on_change.clone(),
        }
    }
}

impl VirtualizerOptions {
    pub fn new(count: usize, item_extent: ItemExtent, behavior: ScrollBehavior) -> Self {
        Self {
            count,
            item_extent,
            behavior: Some(behavior),
            viewport_extent: 0,
            additional_rendered: 1,
            fetch_threshold: 0,
            center_zones: None,
            on_change: None,
        }
    }

    /// Shorthand for fixed extents.
    pub fn fixed(count: usize, extent: u32, behavior: ScrollBehavior) -> Self {
        Self::new(count, ItemExtent::Fixed(extent), behavior)
    }

    /// Shorthand for per-index extents.
    pub fn dynamic(
        count: usize,
        extent: impl Fn(usize) -> u32 + Send + Sync + 'static,
        behavior: ScrollBehavior,
    ) -> Self {
        Self::new(count, ItemExtent::dynamic(extent), behavior)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_extent(mut self, item_extent: ItemExtent) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_behavior(mut self, behavior: Option<ScrollBehavior>) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: u32) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_additional_rendered(mut self, additional_rendered: usize) -> Self {
        self.additional_rendered = additional_rendered;
        self
    }

    pub fn with_fetch_threshold(mut self, fetch_threshold: usize) -> Self {
        self.fetch_threshold = fetch_threshold;
        self
    }

    pub fn with_center_zones(mut self, center_zones: Option<CenterZones>) -> Self {
        self.center_zones = center_zones;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FocusVirtualizer) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for VirtualizerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualizerOptions")
            .field("count", &self.count)
            .field("item_extent", &self.item_extent)
            .field("behavior", &self.behavior)
            .field("viewport_extent", &self.viewport_extent)
            .field("additional_rendered", &self.additional_rendered)
            .field("fetch_threshold", &self.fetch_threshold)
            .field("center_zones", &self.center_zones)
            .finish_non_exhaustive()
    }
}
