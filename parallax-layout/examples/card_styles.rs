// Example: drive card styling (title scale, detail fade, image cover) from the layout.
use parallax_layout::{LayoutConfig, ParallaxLayout, ScrollState, StyleConfig};

fn main() {
    let config = LayoutConfig::new(4, 375.0, 667.0)
        .with_heights(260.0, 96.0)
        .with_style(StyleConfig::default().with_cover_alphas(0.6, 0.1));
    let layout = ParallaxLayout::new(config).expect("valid config");

    for step in 0..=6 {
        let offset = step as f32 * 30.0;
        let scroll = ScrollState::new(offset);
        let s0 = layout.style_factors(scroll, 0).expect("row 0");
        let s1 = layout.card_style(scroll, 1).expect("row 1");
        println!(
            "offset={offset:>5} row0 scale={:.2} row1 scale={:.2} alpha={:.2} cover={:.2} detail_y={:.1}",
            s0.scale,
            s1.factors.scale,
            s1.factors.label_alpha,
            s1.factors.cover_alpha,
            s1.detail_center_y,
        );
    }
}
