use core::fmt;

use focus_virtualizer::FocusVirtualizer;

/// A focus anchor that keeps focus on the same item identity across data changes.
///
/// Typical use cases:
/// - items inserted or removed before the focused one (focus would otherwise drift)
/// - a refresh that reorders rows while the user is browsing
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusAnchor<K> {
    pub key: K,
    /// Focused index at capture time, used when the key is gone.
    pub index: usize,
}

impl<K: fmt::Debug> fmt::Debug for FocusAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusAnchor")
            .field("key", &self.key)
            .field("index", &self.index)
            .finish()
    }
}

/// Captures an anchor for the focused item.
///
/// `key_for` maps an index of the *current* dataset to a stable identity. Returns `None` for an
/// empty list.
pub fn capture_focus_anchor<K>(
    v: &FocusVirtualizer,
    key_for: impl FnOnce(usize) -> K,
) -> Option<FocusAnchor<K>> {
    let frame = v.frame();
    if frame.count == 0 {
        return None;
    }
    Some(FocusAnchor {
        key: key_for(frame.focus_index),
        index: frame.focus_index,
    })
}

/// Re-focuses the anchored item after a data change.
///
/// The adapter must provide a `key_to_index` mapping for the *new* dataset. When the key is no
/// longer present, focus falls back to the captured index (clamped to the new count).
///
/// Returns `true` when the anchored item was found.
pub fn apply_focus_anchor<K>(
    v: &mut FocusVirtualizer,
    anchor: &FocusAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    match key_to_index(&anchor.key) {
        Some(index) => {
            v.set_focus_index(index);
            true
        }
        None => {
            v.set_focus_index(anchor.index);
            false
        }
    }
}
