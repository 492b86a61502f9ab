// Example: per-item extents and the precomputed offset table.
use focus_virtualizer::{ItemExtent, OffsetTable, ScrollBehavior, ScrollOffsetPolicy, SizeModel};

fn main() {
    // Every tenth row is a taller section title.
    let size = SizeModel::new(
        20_000,
        ItemExtent::dynamic(|i| if i % 10 == 0 { 96 } else { 48 }),
    )
    .expect("valid extent");

    let policy = ScrollOffsetPolicy::new(ScrollBehavior::StickToStart, &size, 1080, None)
        .expect("supported behavior");
    let table = OffsetTable::from_policy(&policy, &size);

    println!(
        "visible_count={} max_scroll={} total_extent={}",
        policy.visible_count(),
        policy.max_scroll(),
        table.total_extent()
    );
    for i in [0usize, 9, 10, 11, 12_345, 19_999, 25_000] {
        println!(
            "i={i} start={:?} offset={}",
            table.item_start(i),
            table.lookup(i)
        );
    }

    // Jump-on-scroll needs a fixed extent.
    let err = OffsetTable::build(ScrollBehavior::JumpOnScroll, &size, 1080, None).unwrap_err();
    println!("jump-on-scroll: {err}");
}
