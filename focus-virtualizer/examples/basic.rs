// Example: a 10k-item row driven by focus notifications.
use focus_virtualizer::{FocusVirtualizer, ScrollBehavior, VirtualizerOptions};

fn main() {
    let opts = VirtualizerOptions::fixed(10_000, 50, ScrollBehavior::Center)
        .with_additional_rendered(2)
        .with_fetch_threshold(10);
    let mut v = FocusVirtualizer::new(opts).expect("valid options");

    // The layout system has not measured the viewport yet: nothing to render.
    println!("before measurement: {:?}", v.set_focus_index(0));

    v.set_viewport_extent(1920);
    println!("visible_count={} total_extent={}", v.visible_count(), v.total_extent());

    // A focus engine would deliver these as the user holds the right key.
    for focus in [0usize, 1, 15, 16, 5_000, 9_985, 9_990, 9_999] {
        let frame = v.set_focus_index(focus);
        println!(
            "focus={focus} window={:?} offset={} fetch_more={}",
            frame.window, frame.offset, frame.fetch_more
        );
    }

    let mut mounted = 0usize;
    v.for_each_rendered_item(|_| mounted += 1);
    println!("mounted_items={mounted}");
}
