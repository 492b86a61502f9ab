use std::collections::HashMap;

use focus_virtualizer::{FocusVirtualizer, ScrollBehavior, VirtualizerOptions};
use focus_virtualizer_adapter::{apply_focus_anchor, capture_focus_anchor};

fn main() {
    // Example: a "recently watched" row gets new entries inserted at the front while the user is
    // browsing. Focus should stay on the same title, not on the same index.
    let mut keys: Vec<u64> = (0..100).map(|i| 1_000 + i).collect();

    let opts = VirtualizerOptions::fixed(keys.len(), 240, ScrollBehavior::StickToStart)
        .with_viewport_extent(1920);
    let mut v = FocusVirtualizer::new(opts).expect("valid options");
    v.set_focus_index(42);

    let anchor = capture_focus_anchor(&v, |i| keys[i]).expect("non-empty list");
    println!("before: focus={} key={}", v.frame().focus_index, anchor.key);

    // Five new titles arrive at the front.
    keys.splice(0..0, (0..5).map(|i| 9_000 + i));
    v.set_count(keys.len());

    let index_of: HashMap<u64, usize> = keys.iter().enumerate().map(|(i, &k)| (k, i)).collect();
    let found = apply_focus_anchor(&mut v, &anchor, |k| index_of.get(k).copied());

    let frame = v.frame();
    println!(
        "after: found={found} focus={} key={} window={:?} offset={}",
        frame.focus_index, keys[frame.focus_index], frame.window, frame.offset
    );
}
