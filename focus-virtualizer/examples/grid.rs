// Example: a poster grid with a header row, virtualized as a list of rows.
use focus_virtualizer::{GridOptions, GridVirtualizer, ItemExtent, ScrollBehavior, VirtualizerOptions};

fn main() {
    let grid = GridOptions::new(1_000, 6, ItemExtent::Fixed(320)).with_header(120);
    let list = VirtualizerOptions::fixed(0, 1, ScrollBehavior::StickToStart)
        .with_viewport_extent(1080)
        .with_fetch_threshold(12);
    let mut g = GridVirtualizer::new(grid, list).expect("valid grid");

    println!(
        "rows={} first_rows={:?}",
        g.layout().row_count(),
        g.layout().rows().take(3).collect::<Vec<_>>()
    );

    // Moving down one row is a jump of `columns` in flat index space.
    for focus in [0usize, 6, 12, 500, 990, 999] {
        let frame = g.set_focus_index(focus);
        println!(
            "focus={focus} row={} col={} rows={:?} items={:?} offset={} fetch_more={}",
            frame.focus_row,
            frame.focus_column,
            frame.rows.window,
            frame.items,
            frame.rows.offset,
            frame.fetch_more
        );
    }
}
