use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    CenterZones, Error, FocusFrame, FrameState, ItemExtent, OffsetTable, RenderWindow,
    RenderedItem, ScrollBehavior, ScrollOffsetPolicy, SizeModel, VirtualizerOptions,
    should_fetch_more, window_for,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Pending {
    table: bool,
    frame: bool,
}

impl Pending {
    fn any(self) -> bool {
        self.table || self.frame
    }
}

/// A headless, focus-driven virtualization engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never decides focus itself.
/// - Your adapter drives it with viewport measurements and focus notifications.
/// - Every notification yields a [`FocusFrame`]: the render window, the scroll offset and the
///   pagination signal for the focused index.
///
/// Geometry changes (count, extents, viewport, behavior) rebuild the [`OffsetTable`] wholesale;
/// focus changes only read from it.
///
/// For animated scrolling and focus anchoring, see the `focus-virtualizer-adapter` crate.
#[derive(Clone, Debug)]
pub struct FocusVirtualizer {
    options: VirtualizerOptions,
    behavior: ScrollBehavior,
    focus_index: usize,

    size: SizeModel,
    policy: ScrollOffsetPolicy,
    table: OffsetTable,
    frame: FocusFrame,

    batch_depth: usize,
    pending: Pending,
}

impl FocusVirtualizer {
    /// Creates a new virtualizer from options.
    ///
    /// Configuration errors are reported here rather than on the first focus change. Focus starts
    /// at index 0.
    pub fn new(options: VirtualizerOptions) -> Result<Self, Error> {
        let behavior = Self::validate(&options)?;
        vdebug!(
            count = options.count,
            behavior = behavior.as_str(),
            viewport_extent = options.viewport_extent,
            "FocusVirtualizer::new"
        );
        let size = SizeModel::from_validated(options.count, options.item_extent.clone());
        let policy = ScrollOffsetPolicy::measure(
            behavior,
            &size,
            options.viewport_extent,
            options.center_zones,
        );
        let table = OffsetTable::from_policy(&policy, &size);
        let mut v = Self {
            options,
            behavior,
            focus_index: 0,
            size,
            policy,
            table,
            frame: FocusFrame::default(),
            batch_depth: 0,
            pending: Pending::default(),
        };
        v.frame = v.compute_frame();
        Ok(v)
    }

    fn validate(options: &VirtualizerOptions) -> Result<ScrollBehavior, Error> {
        let behavior = options
            .behavior
            .ok_or(Error::InvalidConfiguration("scroll behavior is required"))?;
        ScrollOffsetPolicy::validate(behavior, &options.item_extent)?;
        Ok(behavior)
    }

    pub fn options(&self) -> &VirtualizerOptions {
        &self.options
    }

    /// Replaces all options.
    ///
    /// On error the virtualizer keeps its previous options. The offset table is only rebuilt
    /// when a geometry input changed.
    pub fn set_options(&mut self, options: VirtualizerOptions) -> Result<(), Error> {
        let behavior = Self::validate(&options)?;
        let prev = &self.options;
        let geometry_changed = prev.count != options.count
            || !prev.item_extent.same_as(&options.item_extent)
            || prev.viewport_extent != options.viewport_extent
            || prev.center_zones != options.center_zones
            || self.behavior != behavior;
        vtrace!(
            count = options.count,
            behavior = behavior.as_str(),
            geometry_changed,
            "FocusVirtualizer::set_options"
        );

        self.options = options;
        self.behavior = behavior;
        if geometry_changed {
            self.pending.table = true;
        } else {
            self.pending.frame = true;
        }
        self.commit();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualizerOptions)) -> Result<(), Error> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Self) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Batches multiple updates into a single recomputation and a single `on_change`
    /// notification.
    ///
    /// A typical frame may deliver a new viewport extent, a new count and a new focus index at
    /// once; without batching each setter would rebuild the offset table.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);
        f(self);
        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        self.commit();
    }

    /// Notifies the virtualizer of a new focused index and returns the resulting frame.
    ///
    /// Indexes past the end are clamped in the returned frame. Inside `batch_update` the frame is
    /// only recomputed when the batch ends; the returned value is then the previous frame.
    pub fn set_focus_index(&mut self, index: usize) -> FocusFrame {
        if self.focus_index == index && !self.pending.any() {
            return self.frame;
        }
        vtrace!(index, "set_focus_index");
        self.focus_index = index;
        self.pending.frame = true;
        self.commit();
        self.frame
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        if self.options.viewport_extent == viewport_extent {
            return;
        }
        self.options.viewport_extent = viewport_extent;
        self.pending.table = true;
        self.commit();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.pending.table = true;
        self.commit();
    }

    pub fn set_item_extent(&mut self, item_extent: ItemExtent) -> Result<(), Error> {
        ScrollOffsetPolicy::validate(self.behavior, &item_extent)?;
        self.options.item_extent = item_extent;
        self.pending.table = true;
        self.commit();
        Ok(())
    }

    pub fn set_behavior(&mut self, behavior: ScrollBehavior) -> Result<(), Error> {
        if self.behavior == behavior {
            return Ok(());
        }
        ScrollOffsetPolicy::validate(behavior, &self.options.item_extent)?;
        self.behavior = behavior;
        self.options.behavior = Some(behavior);
        self.pending.table = true;
        self.commit();
        Ok(())
    }

    pub fn set_center_zones(&mut self, center_zones: Option<CenterZones>) {
        if self.options.center_zones == center_zones {
            return;
        }
        self.options.center_zones = center_zones;
        self.pending.table = true;
        self.commit();
    }

    pub fn set_additional_rendered(&mut self, additional_rendered: usize) {
        if self.options.additional_rendered == additional_rendered {
            return;
        }
        self.options.additional_rendered = additional_rendered;
        self.pending.frame = true;
        self.commit();
    }

    pub fn set_fetch_threshold(&mut self, fetch_threshold: usize) {
        if self.options.fetch_threshold == fetch_threshold {
            return;
        }
        self.options.fetch_threshold = fetch_threshold;
        self.pending.frame = true;
        self.commit();
    }

    /// Returns a lightweight snapshot of the host-provided inputs.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport_extent: self.options.viewport_extent,
            focus_index: self.focus_index,
        }
    }

    /// Restores viewport and focus from a previously captured snapshot in one update.
    pub fn restore_frame_state(&mut self, state: FrameState) -> FocusFrame {
        self.batch_update(|v| {
            v.set_viewport_extent(state.viewport_extent);
            v.set_focus_index(state.focus_index);
        });
        self.frame
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// The focus index as last reported (not clamped). See [`FocusFrame::focus_index`] for the
    /// clamped value.
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn viewport_extent(&self) -> u32 {
        self.options.viewport_extent
    }

    pub fn visible_count(&self) -> usize {
        self.policy.visible_count()
    }

    pub fn total_extent(&self) -> u64 {
        self.table.total_extent()
    }

    pub fn frame(&self) -> FocusFrame {
        self.frame
    }

    pub fn render_window(&self) -> RenderWindow {
        self.frame.window
    }

    pub fn scroll_offset(&self) -> i64 {
        self.frame.offset
    }

    pub fn should_fetch_more(&self) -> bool {
        self.frame.fetch_more
    }

    /// Offset the list would use if `index` were focused. O(1).
    pub fn offset_for(&self, index: usize) -> i64 {
        self.table.lookup(index)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        self.table.item_start(index)
    }

    pub fn item_extent(&self, index: usize) -> Option<u32> {
        self.table.item_extent(index)
    }

    pub fn size_model(&self) -> &SizeModel {
        &self.size
    }

    pub fn policy(&self) -> &ScrollOffsetPolicy {
        &self.policy
    }

    /// The current offset table. Cloning it is cheap and yields a snapshot that later rebuilds
    /// do not affect.
    pub fn table(&self) -> &OffsetTable {
        &self.table
    }

    /// Iterates over the items of the render window without allocations.
    pub fn for_each_rendered_item(&self, mut f: impl FnMut(RenderedItem)) {
        for index in self.frame.window.as_range() {
            let (Some(start), Some(extent)) =
                (self.table.item_start(index), self.table.item_extent(index))
            else {
                return;
            };
            f(RenderedItem {
                index,
                start,
                extent,
            });
        }
    }

    /// Collects the items of the render window into `out` (clears `out` first).
    pub fn collect_rendered_items(&self, out: &mut Vec<RenderedItem>) {
        out.clear();
        self.for_each_rendered_item(|it| out.push(it));
    }

    fn commit(&mut self) {
        if self.batch_depth > 0 {
            return;
        }
        let pending = core::mem::take(&mut self.pending);
        if !pending.any() {
            return;
        }
        if pending.table {
            self.rebuild();
        }
        self.frame = self.compute_frame();
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn rebuild(&mut self) {
        self.size = SizeModel::from_validated(self.options.count, self.options.item_extent.clone());
        self.policy = ScrollOffsetPolicy::measure(
            self.behavior,
            &self.size,
            self.options.viewport_extent,
            self.options.center_zones,
        );
        self.table = OffsetTable::from_policy(&self.policy, &self.size);
    }

    fn compute_frame(&self) -> FocusFrame {
        let count = self.size.count();
        if count > 0 && self.focus_index >= count {
            vwarn!(
                focus_index = self.focus_index,
                count,
                "focus index out of range; clamping"
            );
        }
        let focus_index = self.focus_index.min(count.saturating_sub(1));
        let window = window_for(
            self.behavior,
            count,
            focus_index,
            self.policy.visible_count(),
            self.options.additional_rendered,
        );
        FocusFrame {
            focus_index,
            count,
            window,
            offset: self.table.lookup(focus_index),
            fetch_more: should_fetch_more(focus_index, count, self.options.fetch_threshold),
        }
    }
}
