use crate::{RenderWindow, ScrollBehavior};

/// Number of items to materialize around the focused item.
///
/// Jump-on-scroll always double-buffers a full page so the next page is mounted before the offset
/// snaps; `additional_rendered` is ignored for it.
pub fn overscan_count(
    behavior: ScrollBehavior,
    visible_count: usize,
    additional_rendered: usize,
) -> usize {
    match behavior {
        ScrollBehavior::JumpOnScroll => visible_count.saturating_mul(2),
        ScrollBehavior::StickToStart | ScrollBehavior::StickToEnd | ScrollBehavior::Center => {
            visible_count.saturating_add(additional_rendered.saturating_mul(2))
        }
    }
}

/// A window of `window_size` items centered on `focus_index` and clamped to `0..count`.
///
/// `focus_index` past the end is treated as the last item.
pub fn render_window(count: usize, focus_index: usize, window_size: usize) -> RenderWindow {
    if count == 0 || window_size == 0 {
        return RenderWindow::EMPTY;
    }
    let focus_index = focus_index.min(count - 1);
    let max_start = count.saturating_sub(window_size);
    let start = focus_index.saturating_sub(window_size / 2).min(max_start);
    let end = start.saturating_add(window_size).min(count);
    RenderWindow { start, end }
}

/// Convenience composition of [`overscan_count`] and [`render_window`].
///
/// Returns an empty window while nothing is visible (unmeasured viewport or no data).
pub fn window_for(
    behavior: ScrollBehavior,
    count: usize,
    focus_index: usize,
    visible_count: usize,
    additional_rendered: usize,
) -> RenderWindow {
    if visible_count == 0 {
        return RenderWindow::EMPTY;
    }
    let size = overscan_count(behavior, visible_count, additional_rendered);
    render_window(count, focus_index, size)
}
