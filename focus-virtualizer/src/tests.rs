use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

const ALL_BEHAVIORS: [ScrollBehavior; 4] = [
    ScrollBehavior::StickToStart,
    ScrollBehavior::StickToEnd,
    ScrollBehavior::Center,
    ScrollBehavior::JumpOnScroll,
];

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn expected_visible_count(sizes: &[u32], fixed: bool, viewport: u32) -> usize {
    if sizes.is_empty() || viewport == 0 {
        return 0;
    }
    if fixed {
        let e = sizes[0] as u64;
        return ((viewport as u64 + e - 1) / e) as usize;
    }
    let mut acc = 0u64;
    for (i, &s) in sizes.iter().enumerate() {
        acc += s as u64;
        if acc >= viewport as u64 {
            return i + 1;
        }
    }
    sizes.len()
}

fn expected_offset(
    behavior: ScrollBehavior,
    sizes: &[u32],
    fixed: bool,
    viewport: u32,
    index: usize,
) -> i64 {
    let n = sizes.len();
    let vc = expected_visible_count(sizes, fixed, viewport);
    if n == 0 || vc == 0 {
        return 0;
    }
    let i = index.min(n - 1);
    let cum = |k: usize| sizes[..k].iter().map(|&s| s as i64).sum::<i64>();
    let v = viewport as i64;
    let max_scroll = (cum(n) - v).max(0);
    let max_aligned = n.saturating_sub(vc);
    let stick_end = |i: usize| {
        if i <= max_aligned {
            0
        } else {
            -(cum(i) + sizes[i] as i64 - v)
        }
    };

    let raw = match behavior {
        ScrollBehavior::StickToStart => -cum(i.min(max_aligned)),
        ScrollBehavior::StickToEnd => stick_end(i),
        ScrollBehavior::Center => {
            let half = vc / 2;
            if i < half {
                0
            } else if i >= n.saturating_sub(half) {
                stick_end(i)
            } else {
                -(cum(i) - (v - sizes[i] as i64) / 2)
            }
        }
        ScrollBehavior::JumpOnScroll => -cum(((i / vc) * vc).min(max_aligned)),
    };
    raw.clamp(-max_scroll, 0)
}

fn fixed_list(count: usize, behavior: ScrollBehavior) -> FocusVirtualizer {
    FocusVirtualizer::new(
        VirtualizerOptions::fixed(count, 50, behavior).with_viewport_extent(500),
    )
    .unwrap()
}

fn random_sizes(rng: &mut Lcg, n: usize, fixed: bool) -> Vec<u32> {
    if fixed {
        vec![rng.gen_range_u32(1, 120); n]
    } else {
        (0..n).map(|_| rng.gen_range_u32(1, 120)).collect()
    }
}

fn size_model(sizes: &[u32], fixed: bool) -> SizeModel {
    let extent = if fixed && !sizes.is_empty() {
        ItemExtent::Fixed(sizes[0])
    } else if fixed {
        ItemExtent::Fixed(1)
    } else {
        let owned: Vec<u32> = sizes.to_vec();
        ItemExtent::dynamic(move |i| owned[i])
    };
    SizeModel::new(sizes.len(), extent).unwrap()
}

#[test]
fn fixed_visible_count_rounds_up() {
    let m = SizeModel::new(1000, ItemExtent::Fixed(50)).unwrap();
    assert_eq!(m.visible_count(500), 10);
    assert_eq!(m.visible_count(510), 11);
    assert_eq!(m.visible_count(0), 0);

    let empty = SizeModel::new(0, ItemExtent::Fixed(50)).unwrap();
    assert_eq!(empty.visible_count(500), 0);
}

#[test]
fn dynamic_visible_count_accumulates_until_covered() {
    let m = SizeModel::new(
        10,
        ItemExtent::dynamic(|i| if i % 2 == 0 { 100 } else { 50 }),
    )
    .unwrap();
    // 100 + 50 + 100 + 50 = 300
    assert_eq!(m.visible_count(300), 4);
    assert_eq!(m.visible_count(301), 5);

    let short = SizeModel::new(3, ItemExtent::dynamic(|_| 10)).unwrap();
    assert_eq!(short.visible_count(1000), 3);
}

#[test]
fn cumulative_extent_fixed_and_dynamic() {
    let fixed = SizeModel::new(10, ItemExtent::Fixed(50)).unwrap();
    assert_eq!(fixed.cumulative_extent(2, 5), 150);
    assert_eq!(fixed.cumulative_extent(5, 2), 0);
    assert_eq!(fixed.cumulative_extent(8, 100), 100);
    assert_eq!(fixed.total_extent(), 500);

    let dynamic = SizeModel::new(5, ItemExtent::dynamic(|i| (i as u32 + 1) * 10)).unwrap();
    assert_eq!(dynamic.cumulative_extent(0, 5), 150);
    assert_eq!(dynamic.cumulative_extent(1, 3), 50);
    assert_eq!(dynamic.item_extent(4), 50);
}

#[test]
fn zero_fixed_extent_is_rejected() {
    assert!(matches!(
        SizeModel::new(10, ItemExtent::Fixed(0)),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        FocusVirtualizer::new(VirtualizerOptions::fixed(10, 0, ScrollBehavior::Center)),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn overscan_count_per_behavior() {
    assert_eq!(overscan_count(ScrollBehavior::Center, 10, 2), 14);
    assert_eq!(overscan_count(ScrollBehavior::StickToStart, 10, 0), 10);
    assert_eq!(overscan_count(ScrollBehavior::StickToEnd, 10, 3), 16);
    // Jump-on-scroll ignores `additional_rendered`.
    assert_eq!(overscan_count(ScrollBehavior::JumpOnScroll, 10, 5), 20);
    assert_eq!(overscan_count(ScrollBehavior::JumpOnScroll, 10, 0), 20);
}

#[test]
fn render_window_is_centered_and_clamped() {
    let w = |focus, size| render_window(100, focus, size);
    assert_eq!(w(0, 10), RenderWindow { start: 0, end: 10 });
    assert_eq!(w(50, 10), RenderWindow { start: 45, end: 55 });
    assert_eq!(w(99, 10), RenderWindow { start: 90, end: 100 });
    // Stale focus past the end clamps to the last item.
    assert_eq!(w(500, 10), RenderWindow { start: 90, end: 100 });
    assert_eq!(w(50, 200), RenderWindow { start: 0, end: 100 });
    assert!(render_window(0, 0, 10).is_empty());
    assert!(render_window(100, 5, 0).is_empty());
}

#[test]
fn focused_item_is_always_inside_render_window() {
    let mut rng = Lcg::new(7);
    for behavior in ALL_BEHAVIORS {
        for _ in 0..30 {
            let n = rng.gen_range_usize(1, 150);
            let vc = rng.gen_range_usize(1, 30);
            let add = rng.gen_range_usize(0, 4);
            for i in 0..n {
                let w = window_for(behavior, n, i, vc, add);
                assert!(
                    w.start <= i && i < w.end && w.end <= n,
                    "behavior={behavior:?} n={n} vc={vc} add={add} i={i} window={w:?}"
                );
            }
        }
    }
}

#[test]
fn engine_window_contains_focus_for_every_index() {
    for behavior in ALL_BEHAVIORS {
        let mut v = fixed_list(137, behavior);
        for i in 0..137 {
            let frame = v.set_focus_index(i);
            assert_eq!(frame.focus_index, i);
            assert!(frame.window.contains(i), "{behavior:?} i={i} {frame:?}");
        }
    }
}

#[test]
fn repeated_focus_is_idempotent() {
    for behavior in ALL_BEHAVIORS {
        let mut v = fixed_list(1000, behavior);
        let a = v.set_focus_index(321);
        let b = v.set_focus_index(321);
        assert_eq!(a, b);
        v.set_focus_index(10);
        assert_eq!(v.set_focus_index(321), a);
    }
}

#[test]
fn stick_to_start_slides_then_freezes() {
    let v = fixed_list(100, ScrollBehavior::StickToStart);
    assert_eq!(v.offset_for(0), 0);
    assert_eq!(v.offset_for(3), -150);

    let mut prev = 0;
    for i in 0..100 {
        let off = v.offset_for(i);
        assert!(off <= prev, "offset increased at {i}");
        prev = off;
    }

    // The last page starts at 90: no trailing blank space.
    assert_eq!(v.policy().max_left_aligned_index(), 90);
    assert_eq!(v.offset_for(90), -4500);
    assert_eq!(v.offset_for(99), -4500);
}

#[test]
fn stick_to_end_waits_for_last_page() {
    let v = fixed_list(100, ScrollBehavior::StickToEnd);
    let max_right = v.policy().max_right_aligned_index();
    assert_eq!(max_right, 90);
    for i in 0..=max_right {
        assert_eq!(v.offset_for(i), 0, "i={i}");
    }
    // Item 91 ends at 4600; pinned to the 500px trailing edge.
    assert_eq!(v.offset_for(91), -4100);
    assert_eq!(v.offset_for(99), -4500);
}

#[test]
fn center_scenario() {
    let v = fixed_list(1000, ScrollBehavior::Center);
    assert_eq!(v.visible_count(), 10);
    assert_eq!(v.offset_for(4), 0);

    let off = v.offset_for(500);
    let item_center = 500 * 50 + 25 + off;
    assert!((item_center - 250).abs() <= 50, "center={item_center}");
    assert_eq!(off, -24_775);

    // Tail degrades to stick-to-end and never scrolls past the content.
    assert_eq!(v.offset_for(999), -49_500);
    assert!(v.offset_for(995) >= -49_500);
}

#[test]
fn center_zones_are_configurable() {
    let opts = VirtualizerOptions::fixed(1000, 50, ScrollBehavior::Center)
        .with_viewport_extent(500)
        .with_center_zones(Some(CenterZones::symmetric(0)));
    let v = FocusVirtualizer::new(opts).unwrap();
    // Centering item 1 would need a positive offset; it is clamped.
    assert_eq!(v.offset_for(1), 0);
    assert_eq!(v.offset_for(10), -275);
    // No tail zone: the last item is centered as far as the content allows.
    assert_eq!(v.offset_for(999), -49_500);
}

#[test]
fn jump_on_scroll_snaps_by_page() {
    let v = fixed_list(1000, ScrollBehavior::JumpOnScroll);
    for i in 0..10 {
        assert_eq!(v.offset_for(i), 0, "i={i}");
    }
    assert_eq!(v.offset_for(10), -500);
    assert_eq!(v.offset_for(15), -500);
    assert_eq!(v.offset_for(19), -500);
    assert_eq!(v.offset_for(20), -1000);
    assert_eq!(v.offset_for(999), -49_500);
}

#[test]
fn jump_on_scroll_window_double_buffers_pages() {
    let mut v = fixed_list(1000, ScrollBehavior::JumpOnScroll);
    let frame = v.set_focus_index(15);
    assert_eq!(frame.window.len(), 20);
    // The whole current page is mounted.
    assert!(frame.window.start <= 10 && frame.window.end >= 20);
}

#[test]
fn jump_on_scroll_rejects_dynamic_extents() {
    let opts = VirtualizerOptions::dynamic(100, |_| 40, ScrollBehavior::JumpOnScroll);
    assert!(matches!(
        FocusVirtualizer::new(opts),
        Err(Error::UnsupportedConfiguration(_))
    ));

    let size = SizeModel::new(100, ItemExtent::dynamic(|_| 40)).unwrap();
    assert!(matches!(
        OffsetTable::build(ScrollBehavior::JumpOnScroll, &size, 400, None),
        Err(Error::UnsupportedConfiguration(_))
    ));

    let mut v = fixed_list(100, ScrollBehavior::JumpOnScroll);
    assert!(matches!(
        v.set_item_extent(ItemExtent::dynamic(|_| 40)),
        Err(Error::UnsupportedConfiguration(_))
    ));
    assert!(v.options().item_extent.is_fixed());

    let mut v = FocusVirtualizer::new(VirtualizerOptions::dynamic(
        100,
        |_| 40,
        ScrollBehavior::Center,
    ))
    .unwrap();
    assert!(v.set_behavior(ScrollBehavior::JumpOnScroll).is_err());
    assert_eq!(v.behavior(), ScrollBehavior::Center);
}

#[test]
fn missing_or_unknown_behavior_is_invalid() {
    let opts = VirtualizerOptions::fixed(10, 50, ScrollBehavior::Center).with_behavior(None);
    assert!(matches!(
        FocusVirtualizer::new(opts),
        Err(Error::InvalidConfiguration(_))
    ));

    assert!(matches!(
        "sideways".parse::<ScrollBehavior>(),
        Err(Error::InvalidConfiguration(_))
    ));
    for behavior in ALL_BEHAVIORS {
        assert_eq!(behavior.as_str().parse::<ScrollBehavior>(), Ok(behavior));
    }
}

#[test]
fn rejected_options_keep_previous_state() {
    let mut v = fixed_list(100, ScrollBehavior::Center);
    v.set_focus_index(42);
    let before = v.frame();

    let res = v.update_options(|o| {
        o.count = 5;
        o.behavior = None;
    });
    assert!(res.is_err());
    assert_eq!(v.count(), 100);
    assert_eq!(v.frame(), before);
}

#[test]
fn table_matches_direct_policy_and_reference() {
    let mut rng = Lcg::new(42);
    for behavior in ALL_BEHAVIORS {
        for _ in 0..40 {
            let n = rng.gen_range_usize(0, 200);
            let fixed = behavior == ScrollBehavior::JumpOnScroll || rng.gen_bool();
            let viewport = if rng.gen_range_u32(0, 8) == 0 {
                0
            } else {
                rng.gen_range_u32(1, 2000)
            };
            let sizes = random_sizes(&mut rng, n, fixed);
            let size = size_model(&sizes, fixed);

            let policy = ScrollOffsetPolicy::new(behavior, &size, viewport, None).unwrap();
            let table = OffsetTable::build(behavior, &size, viewport, None).unwrap();
            assert_eq!(table.len(), n);

            for i in 0..n {
                let direct = policy.offset(&size, i);
                assert_eq!(table.lookup(i), direct, "{behavior:?} n={n} vp={viewport} i={i}");
                assert_eq!(
                    direct,
                    expected_offset(behavior, &sizes, fixed, viewport, i),
                    "{behavior:?} n={n} vp={viewport} i={i}"
                );
            }
        }
    }
}

#[test]
fn offsets_stay_within_content_bounds() {
    let mut rng = Lcg::new(9001);
    for behavior in ALL_BEHAVIORS {
        for _ in 0..30 {
            let n = rng.gen_range_usize(1, 300);
            let fixed = behavior == ScrollBehavior::JumpOnScroll || rng.gen_bool();
            let viewport = rng.gen_range_u32(1, 3000);
            let sizes = random_sizes(&mut rng, n, fixed);
            let size = size_model(&sizes, fixed);
            let table = OffsetTable::build(behavior, &size, viewport, None).unwrap();
            let max_scroll = size.total_extent().saturating_sub(viewport as u64) as i64;
            for &off in table.offsets() {
                assert!(off <= 0 && off >= -max_scroll, "{behavior:?} off={off}");
            }
        }
    }
}

#[test]
fn table_lookup_clamps_out_of_range() {
    let size = SizeModel::new(100, ItemExtent::Fixed(50)).unwrap();
    let table = OffsetTable::build(ScrollBehavior::StickToStart, &size, 500, None).unwrap();
    assert_eq!(table.lookup(100), table.lookup(99));
    assert_eq!(table.lookup(usize::MAX), table.lookup(99));
    assert_eq!(table.item_start(10), Some(500));
    assert_eq!(table.item_extent(10), Some(50));
    assert_eq!(table.item_start(100), None);
    assert_eq!(table.total_extent(), 5000);

    let empty = OffsetTable::default();
    assert!(empty.is_empty());
    assert_eq!(empty.lookup(3), 0);
}

#[test]
fn large_dynamic_list_builds_in_one_pass() {
    let extent = |i: usize| 40 + (i % 13) as u32 * 3;
    let size = SizeModel::new(20_000, ItemExtent::dynamic(extent)).unwrap();
    let policy = ScrollOffsetPolicy::new(ScrollBehavior::Center, &size, 1080, None).unwrap();
    let table = OffsetTable::from_policy(&policy, &size);
    assert_eq!(table.len(), 20_000);
    for i in [0usize, 1, 11, 500, 10_000, 19_990, 19_999] {
        assert_eq!(table.lookup(i), policy.offset(&size, i), "i={i}");
    }
}

#[test]
fn unmeasured_viewport_yields_empty_window() {
    let mut v =
        FocusVirtualizer::new(VirtualizerOptions::fixed(100, 50, ScrollBehavior::Center)).unwrap();
    let frame = v.set_focus_index(30);
    assert!(frame.window.is_empty());
    assert_eq!(frame.offset, 0);

    v.set_viewport_extent(500);
    let frame = v.frame();
    assert!(frame.window.contains(30));
    assert_eq!(frame.offset, v.offset_for(30));
}

#[test]
fn empty_data_yields_empty_frame() {
    let mut v = fixed_list(0, ScrollBehavior::StickToStart);
    let frame = v.set_focus_index(5);
    assert_eq!(frame.focus_index, 0);
    assert!(frame.window.is_empty());
    assert_eq!(frame.offset, 0);
    assert!(!frame.fetch_more);
    assert_eq!(v.total_extent(), 0);
}

#[test]
fn pagination_trigger_threshold() {
    assert!(should_fetch_more(996, 1000, 3));
    assert!(!should_fetch_more(995, 1000, 3));
    assert!(should_fetch_more(999, 1000, 0));
    assert!(!should_fetch_more(998, 1000, 0));
    assert!(!should_fetch_more(0, 0, 3));
    assert!(should_fetch_more(0, 3, 10));
}

#[test]
fn engine_reports_fetch_more_near_end() {
    let opts = VirtualizerOptions::fixed(1000, 50, ScrollBehavior::Center)
        .with_viewport_extent(500)
        .with_fetch_threshold(3);
    let mut v = FocusVirtualizer::new(opts).unwrap();
    assert!(!v.set_focus_index(995).fetch_more);
    assert!(v.set_focus_index(996).fetch_more);
    // Level-triggered: stays on.
    assert!(v.set_focus_index(999).fetch_more);

    // More data arrived.
    v.set_count(2000);
    assert!(!v.should_fetch_more());
}

#[test]
fn batch_update_recomputes_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = VirtualizerOptions::fixed(100, 50, ScrollBehavior::Center)
        .with_viewport_extent(500)
        .with_on_change(Some({
            let calls = Arc::clone(&calls);
            move |_: &FocusVirtualizer| {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        }));
    let mut v = FocusVirtualizer::new(opts).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    v.batch_update(|v| {
        v.set_viewport_extent(600);
        v.set_count(200);
        v.set_focus_index(150);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(v.frame().focus_index, 150);
    assert_eq!(v.visible_count(), 12);

    v.set_viewport_extent(700);
    v.set_count(300);
    v.set_focus_index(250);
    assert_eq!(calls.load(Ordering::Relaxed), 4);

    // Nested batches still notify once.
    v.batch_update(|v| {
        v.set_focus_index(1);
        v.batch_update(|v| {
            v.set_focus_index(2);
        });
    });
    assert_eq!(calls.load(Ordering::Relaxed), 5);
    assert_eq!(v.frame().focus_index, 2);
}

#[test]
fn table_snapshot_survives_rebuild() {
    let mut v = fixed_list(100, ScrollBehavior::StickToStart);
    let snapshot = v.table().clone();
    v.set_viewport_extent(250);
    assert_eq!(snapshot.lookup(95), -4500);
    assert_eq!(v.offset_for(95), -4750);
}

#[test]
fn stale_focus_is_clamped_after_shrink() {
    let mut v = fixed_list(100, ScrollBehavior::Center);
    v.set_focus_index(99);
    v.set_count(50);
    let frame = v.frame();
    assert_eq!(v.focus_index(), 99);
    assert_eq!(frame.focus_index, 49);
    assert!(frame.window.contains(49));
    assert_eq!(frame.offset, v.offset_for(49));
}

#[test]
fn rendered_items_carry_positions() {
    let mut v = fixed_list(100, ScrollBehavior::StickToStart);
    v.set_focus_index(50);
    let mut items = Vec::new();
    v.collect_rendered_items(&mut items);
    assert_eq!(items.len(), v.render_window().len());
    for it in &items {
        assert_eq!(it.start, it.index as u64 * 50);
        assert_eq!(it.extent, 50);
    }

    let mut v = FocusVirtualizer::new(
        VirtualizerOptions::dynamic(200, |i| 20 + (i % 7) as u32 * 5, ScrollBehavior::Center)
            .with_viewport_extent(300),
    )
    .unwrap();
    v.set_focus_index(120);
    v.collect_rendered_items(&mut items);
    assert!(!items.is_empty());
    for pair in items.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start);
        assert_eq!(pair[0].index + 1, pair[1].index);
    }
}

#[test]
fn frame_state_restores_identical_frame() {
    let opts = VirtualizerOptions::fixed(1000, 50, ScrollBehavior::Center);
    let mut a = FocusVirtualizer::new(opts.clone()).unwrap();
    a.set_viewport_extent(480);
    a.set_focus_index(700);
    let state = a.frame_state();
    assert_eq!(
        state,
        FrameState {
            viewport_extent: 480,
            focus_index: 700
        }
    );

    let mut b = FocusVirtualizer::new(opts).unwrap();
    assert_eq!(b.restore_frame_state(state), a.frame());
}

#[test]
fn grid_chunks_rows_without_padding() {
    let layout = GridLayout::new(&GridOptions::new(24, 5, ItemExtent::Fixed(100))).unwrap();
    let rows = layout.chunk();
    assert_eq!(rows.len(), 5);
    assert_eq!(layout.row_count(), 5);
    assert_eq!(rows[0].items, 0..5);
    assert_eq!(rows[4].items, 20..24);
    assert!(rows.iter().all(|r| !r.is_header));
    assert_eq!(layout.row_of(12), 2);
    assert_eq!(layout.column_of(12), 2);
}

#[test]
fn grid_header_shifts_rows() {
    let layout = GridLayout::new(
        &GridOptions::new(24, 5, ItemExtent::Fixed(100)).with_header(40),
    )
    .unwrap();
    let rows = layout.chunk();
    assert_eq!(rows.len(), 6);
    assert!(rows[0].is_header);
    assert!(rows[0].items.is_empty());
    assert_eq!(rows[1].items, 0..5);
    assert_eq!(rows[5].items, 20..24);
    assert_eq!(layout.row_of(12), 3);

    assert_eq!(layout.row_extent(0), 40);
    assert_eq!(layout.row_extent(1), 100);

    let rows_size = layout.row_size_model();
    assert_eq!(rows_size.count(), 6);
    assert!(!rows_size.extent().is_fixed());
    assert_eq!(rows_size.item_extent(0), 40);
    assert_eq!(rows_size.total_extent(), 540);
}

#[test]
fn grid_row_extent_is_tallest_item() {
    let layout = GridLayout::new(&GridOptions::new(
        7,
        3,
        ItemExtent::dynamic(|i| 10 * (i as u32 + 1)),
    ))
    .unwrap();
    assert_eq!(layout.row_extent(0), 30);
    assert_eq!(layout.row_extent(1), 60);
    assert_eq!(layout.row_extent(2), 70);

    let plain = GridLayout::new(&GridOptions::new(7, 3, ItemExtent::Fixed(90))).unwrap();
    assert_eq!(plain.row_size_model().extent().fixed_extent(), Some(90));
}

#[test]
fn grid_configuration_errors() {
    let base = GridOptions::new(10, 5, ItemExtent::Fixed(100));
    let invalid = |o: GridOptions| matches!(GridLayout::new(&o), Err(Error::InvalidConfiguration(_)));
    assert!(invalid(base.clone().with_columns(None)));
    assert!(invalid(base.clone().with_columns(Some(0))));
    assert!(invalid(base.clone().with_header_flag(true)));
    assert!(invalid(base.clone().with_header_extent(Some(40))));
    assert!(invalid(base.clone().with_header(0)));
    assert!(GridLayout::new(&base.with_header(40)).is_ok());
}

#[test]
fn grid_virtualizer_windows_rows() {
    let grid = GridOptions::new(1000, 5, ItemExtent::Fixed(100));
    let list = VirtualizerOptions::fixed(0, 1, ScrollBehavior::Center)
        .with_viewport_extent(300)
        .with_fetch_threshold(5);
    let mut g = GridVirtualizer::new(grid, list).unwrap();
    assert_eq!(g.rows().count(), 200);
    assert_eq!(g.rows().visible_count(), 3);

    let frame = g.set_focus_index(503);
    assert_eq!(frame.focus_row, 100);
    assert_eq!(frame.focus_column, 3);
    assert_eq!(frame.rows.window, RenderWindow { start: 98, end: 103 });
    assert_eq!(frame.items, 490..515);
    assert!(frame.items.contains(&503));
    assert!(!frame.fetch_more);

    assert!(g.set_focus_index(995).fetch_more);
}

#[test]
fn grid_virtualizer_follows_layout_changes() {
    let grid = GridOptions::new(20, 4, ItemExtent::Fixed(100));
    let list = VirtualizerOptions::fixed(0, 1, ScrollBehavior::JumpOnScroll)
        .with_viewport_extent(200);
    let mut g = GridVirtualizer::new(grid.clone(), list.clone()).unwrap();
    g.set_focus_index(19);
    assert_eq!(g.frame().focus_row, 4);

    g.set_grid(GridOptions { count: 40, ..grid.clone() }).unwrap();
    assert_eq!(g.rows().count(), 10);
    assert_eq!(g.frame().focus_row, 4);

    // Rows of different extents cannot jump by page.
    assert!(matches!(
        g.set_grid(grid.clone().with_header(30)),
        Err(Error::UnsupportedConfiguration(_))
    ));
    assert!(matches!(
        GridVirtualizer::new(grid.with_header(30), list),
        Err(Error::UnsupportedConfiguration(_))
    ));
    assert_eq!(g.layout().count(), 40);
}

#[test]
fn set_grid_notifies_once_with_final_focus_row() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen_focus = Arc::new(AtomicUsize::new(usize::MAX));
    let grid = GridOptions::new(20, 4, ItemExtent::Fixed(100));
    let list = VirtualizerOptions::fixed(0, 1, ScrollBehavior::Center)
        .with_viewport_extent(300)
        .with_on_change(Some({
            let calls = Arc::clone(&calls);
            let seen_focus = Arc::clone(&seen_focus);
            move |v: &FocusVirtualizer| {
                calls.fetch_add(1, Ordering::Relaxed);
                seen_focus.store(v.frame().focus_index, Ordering::Relaxed);
            }
        }));
    let mut g = GridVirtualizer::new(grid.clone(), list).unwrap();
    g.set_focus_index(19);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(seen_focus.load(Ordering::Relaxed), 4);

    // The header pushes item 19 from row 4 to row 5.
    g.set_grid(grid.clone().with_header(100)).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(seen_focus.load(Ordering::Relaxed), 5);
    assert_eq!(g.frame().focus_row, 5);
    assert_eq!(g.rows().frame().focus_index, 5);

    // Rejected layouts leave rows and callbacks untouched.
    assert!(g.set_grid(grid.with_columns(None)).is_err());
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(g.rows().count(), 6);
}

#[test]
fn grid_row_frame_uses_flat_fetch_signal() {
    let grid = GridOptions::new(1000, 5, ItemExtent::Fixed(100));
    let list = VirtualizerOptions::fixed(0, 1, ScrollBehavior::StickToStart)
        .with_viewport_extent(300)
        .with_fetch_threshold(5);
    let mut g = GridVirtualizer::new(grid, list).unwrap();
    assert_eq!(g.fetch_threshold(), 5);

    // Row 198 is within 5 rows of the end but item 990 is not within 5 items.
    for (focus, expected) in [(0usize, false), (990, false), (993, false), (994, true), (999, true)]
    {
        let frame = g.set_focus_index(focus);
        assert_eq!(frame.fetch_more, expected, "focus={focus}");
        assert_eq!(frame.rows.fetch_more, expected, "focus={focus}");
    }

    g.set_focus_index(985);
    assert!(!g.set_fetch_threshold(0).fetch_more);
    let frame = g.set_fetch_threshold(20);
    assert!(frame.fetch_more && frame.rows.fetch_more);
}

#[test]
fn dynamic_extents_below_one_read_as_one() {
    let m = SizeModel::new(1000, ItemExtent::dynamic(|i| if i < 10 { 0 } else { 20 })).unwrap();
    assert_eq!(m.item_extent(3), 1);
    assert_eq!(m.cumulative_extent(0, 10), 10);
    assert_eq!(m.visible_count(50), 12);
    assert_eq!(m.total_extent(), 10 + 990 * 20);

    let table = OffsetTable::build(ScrollBehavior::StickToStart, &m, 50, None).unwrap();
    assert_eq!(table.item_extent(0), Some(1));
    assert_eq!(table.item_start(10), Some(10));

    let layout = GridLayout::new(&GridOptions::new(6, 3, ItemExtent::dynamic(|_| 0))).unwrap();
    assert_eq!(layout.row_extent(0), 1);
    assert_eq!(layout.row_size_model().total_extent(), 2);
}
