use focus_virtualizer::FocusFrame;

/// Turns the level-triggered `fetch_more` signal into one request per data length.
///
/// `FocusFrame::fetch_more` stays `true` for every focus change near the end of the data. The gate
/// lets the first one through and swallows the rest until the item count changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchGate {
    requested_for: Option<usize>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a fetch should be issued for `frame`.
    pub fn poll(&mut self, frame: &FocusFrame) -> bool {
        if !frame.fetch_more || self.requested_for == Some(frame.count) {
            return false;
        }
        self.requested_for = Some(frame.count);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "focus_virtualizer_adapter",
            count = frame.count,
            focus_index = frame.focus_index,
            "fetch more"
        );
        true
    }

    /// The item count the last request was issued for.
    pub fn requested_for(&self) -> Option<usize> {
        self.requested_for
    }

    /// Allows a new request for the same count (e.g. after a failed fetch).
    pub fn reset(&mut self) {
        self.requested_for = None;
    }
}
