use focus_virtualizer::{Error, FocusFrame, FocusVirtualizer, VirtualizerOptions};

use crate::{Easing, FetchGate, FocusAnchor, Tween, apply_focus_anchor, capture_focus_anchor};

/// How focus-driven offset changes are animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub duration_ms: u64,
    pub easing: Easing,
}

/// A framework-neutral controller that wraps a `focus_virtualizer::FocusVirtualizer` and provides
/// common adapter workflows (animated scrolling, focus anchoring, fetch de-duplication).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_extent` when the layout system measures the scroll container
/// - `on_focus` when the focus engine moves focus
/// - `on_count` when the data length changes
/// - `tick(now_ms)` each frame while an animation runs
///
/// The render window is applied immediately on focus changes; only the offset is animated, so the
/// target items are already mounted when the tween reaches them.
#[derive(Clone, Debug)]
pub struct Controller {
    v: FocusVirtualizer,
    animation: Option<Animation>,
    tween: Option<Tween>,
    fetch: FetchGate,
}

impl Controller {
    pub fn new(options: VirtualizerOptions) -> Result<Self, Error> {
        Ok(Self::from_virtualizer(FocusVirtualizer::new(options)?))
    }

    pub fn from_virtualizer(v: FocusVirtualizer) -> Self {
        Self {
            v,
            animation: None,
            tween: None,
            fetch: FetchGate::new(),
        }
    }

    pub fn with_animation(mut self, animation: Option<Animation>) -> Self {
        self.animation = animation;
        self
    }

    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
        if animation.is_none() {
            self.cancel_animation();
        }
    }

    pub fn virtualizer(&self) -> &FocusVirtualizer {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut FocusVirtualizer {
        &mut self.v
    }

    pub fn into_virtualizer(self) -> FocusVirtualizer {
        self.v
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<Tween> {
        self.tween
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the layout system reports a new viewport extent.
    ///
    /// Geometry changes snap to the new offset and cancel any active tween.
    pub fn on_viewport_extent(&mut self, viewport_extent: u32) -> FocusFrame {
        self.cancel_animation();
        self.v.set_viewport_extent(viewport_extent);
        self.v.frame()
    }

    /// Call this when the data length changes. Snaps like `on_viewport_extent`.
    pub fn on_count(&mut self, count: usize) -> FocusFrame {
        self.cancel_animation();
        self.v.set_count(count);
        self.v.frame()
    }

    /// Call this when the focus engine reports a new focused index.
    ///
    /// With an animation configured, a tween starts from the offset currently on screen (which may
    /// be mid-way through a previous tween) toward the new target.
    pub fn on_focus(&mut self, index: usize, now_ms: u64) -> FocusFrame {
        let from = self.offset_at(now_ms);
        let frame = self.v.set_focus_index(index);
        self.tween = match self.animation {
            Some(animation) if from != frame.offset => Some(Tween::new(
                from,
                frame.offset,
                now_ms,
                animation.duration_ms,
                animation.easing,
            )),
            _ => None,
        };
        frame
    }

    /// Advances the controller.
    ///
    /// Returns the offset to apply while a tween is active (including the final frame), and
    /// `None` once there is nothing left to animate.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }

    /// The target offset of the current frame (where any running tween ends).
    pub fn scroll_offset(&self) -> i64 {
        self.v.scroll_offset()
    }

    /// The offset that should be on screen at `now_ms`.
    pub fn offset_at(&self, now_ms: u64) -> i64 {
        match self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.v.scroll_offset(),
        }
    }

    /// Returns `true` once per data length when focus is near the end of the data.
    pub fn poll_fetch(&mut self) -> bool {
        let frame = self.v.frame();
        self.fetch.poll(&frame)
    }

    pub fn fetch_gate_mut(&mut self) -> &mut FetchGate {
        &mut self.fetch
    }

    pub fn capture_focus_anchor<K>(
        &self,
        key_for: impl FnOnce(usize) -> K,
    ) -> Option<FocusAnchor<K>> {
        capture_focus_anchor(&self.v, key_for)
    }

    /// Re-focuses an anchored item after a data change. Snaps (no animation).
    pub fn apply_focus_anchor<K>(
        &mut self,
        anchor: &FocusAnchor<K>,
        key_to_index: impl FnOnce(&K) -> Option<usize>,
    ) -> bool {
        self.cancel_animation();
        apply_focus_anchor(&mut self.v, anchor, key_to_index)
    }
}
