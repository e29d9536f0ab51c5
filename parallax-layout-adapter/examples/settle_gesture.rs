use parallax_layout::LayoutConfig;
use parallax_layout_adapter::{Controller, Easing};

fn main() {
    // Example: an adapter releasing a drag mid-card and animating the settle.
    //
    // An adapter would:
    // - forward every scroll event via on_scroll()
    // - call on_gesture_end() when the finger lifts
    // - call tick(now_ms) in a frame loop and apply the returned offset to the scroll view
    // - render cards using layout_result()/card_style()
    let mut c = Controller::new(LayoutConfig::new(8, 320.0, 568.0)).expect("valid config");

    for offset in [0.0, 40.0, 95.0, 130.0] {
        c.on_scroll(offset);
    }

    let target = c.on_gesture_end(130.0, 0, 240, Easing::SmoothStep);
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        let focused = c.frame(1).expect("row 1 exists");
        println!(
            "t={now_ms} off={off:.1} row1 y={:.1} h={:.1}",
            focused.origin_y, focused.height
        );
        now_ms += 16;
    }

    let selected = c.select_row(4, now_ms).expect("row 4 exists");
    println!("select_row(4) started_scroll={selected}");
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }
    println!("done: off={} style={:?}", c.scroll_offset(), c.card_style(4));
}
