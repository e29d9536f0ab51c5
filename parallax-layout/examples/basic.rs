// Example: compute frames at rest and mid-drag, then settle.
use parallax_layout::{LayoutConfig, ParallaxLayout, Rect, ScrollState};

fn main() {
    let layout = ParallaxLayout::new(LayoutConfig::new(5, 320.0, 568.0)).expect("valid config");

    for offset in [0.0, 90.0, 180.0] {
        let result = layout.compute_layout(ScrollState::new(offset));
        println!("offset={offset} content_height={}", result.content_height);
        for f in &result.frames {
            println!("  #{} y={:.1} h={:.1} z={}", f.index, f.origin_y, f.height, f.z_order);
        }
    }

    let viewport = Rect::new(0.0, 90.0, 320.0, 568.0);
    let result = layout.compute_layout(ScrollState::new(90.0));
    let visible: Vec<usize> = result.visible_frames(&viewport).map(|f| f.index).collect();
    println!("visible at 90: {visible:?}");

    println!("settle(100)={}", layout.settle_offset(100.0));
}
