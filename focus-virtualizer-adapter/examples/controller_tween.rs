use focus_virtualizer::{ScrollBehavior, VirtualizerOptions};
use focus_virtualizer_adapter::{Animation, Controller, Easing};

fn main() {
    // Example: a controller animating the offset while focus moves, without holding UI objects.
    //
    // An adapter would:
    // - forward focus notifications from its focus engine to `on_focus`
    // - mount the items of the returned render window right away
    // - call tick(now_ms) in a frame loop and translate the scroll container by the result
    // - issue a data request whenever `poll_fetch` returns true
    let opts = VirtualizerOptions::fixed(10_000, 90, ScrollBehavior::Center)
        .with_viewport_extent(1080)
        .with_fetch_threshold(20);
    let mut c = Controller::new(opts)
        .expect("valid options")
        .with_animation(Some(Animation {
            duration_ms: 240,
            easing: Easing::EaseOutCubic,
        }));

    let mut now_ms = 0u64;
    for focus in [1usize, 2, 3, 10, 9_985] {
        let frame = c.on_focus(focus, now_ms);
        println!(
            "focus={focus} window={:?} target_offset={}",
            frame.window, frame.offset
        );
        while let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("  t={now_ms} off={off}");
            }
            now_ms += 16;
        }
        if c.poll_fetch() {
            println!("  -> request next page");
        }
    }
}
