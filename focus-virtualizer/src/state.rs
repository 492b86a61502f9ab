/// A lightweight, serializable snapshot of the inputs a host feeds the virtualizer.
///
/// Everything else (window, offset) is derived, so restoring these two values reproduces the
/// exact same frame for the same options.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport_extent: u32,
    pub focus_index: usize,
}
