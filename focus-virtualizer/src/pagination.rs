/// Returns `true` when `focus_index` is within `threshold` items of the end of the data.
///
/// This is level-triggered: it stays `true` for every focus change inside the threshold.
/// De-duplicating fetch requests is left to the caller.
pub fn should_fetch_more(focus_index: usize, count: usize, threshold: usize) -> bool {
    count > 0 && focus_index >= count.saturating_sub(1).saturating_sub(threshold)
}
