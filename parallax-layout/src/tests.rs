use crate::*;

use proptest::prelude::*;

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
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }
}

const EPS: f32 = 1e-3;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= EPS,
        "expected {expected}, got {actual}"
    );
}

fn stock(item_count: usize) -> ParallaxLayout {
    ParallaxLayout::new(LayoutConfig::new(item_count, 320.0, 568.0)).unwrap()
}

fn with_drag_interval(drag_interval: f32) -> ParallaxLayout {
    let config = LayoutConfig::new(5, 320.0, 568.0).with_drag_interval(drag_interval);
    ParallaxLayout::new(config).unwrap()
}

fn at(offset: f32) -> ScrollState {
    ScrollState::new(offset)
}

/// Straightforward per-item reference: every item is placed from scratch by walking the stack.
fn expected_frames(c: &LayoutConfig, offset: f32) -> Vec<(f32, f32)> {
    let position = offset / c.drag_interval;
    let focus = position.floor();
    let interp = position - focus;
    let focus = focus as i64;

    let mut out: Vec<(f32, f32)> = Vec::new();
    let mut prev_bottom = c.compact_height;
    for i in 0..c.item_count as i64 {
        let (y, h) = if i == focus {
            (offset - c.compact_height * interp, c.focused_height)
        } else if i == focus + 1 {
            let h = c.compact_height + (c.focused_height - c.compact_height) * interp;
            (prev_bottom + c.compact_height - h, h)
        } else {
            (prev_bottom, c.compact_height)
        };
        prev_bottom = y + h;
        out.push((y, h));
    }
    out
}

#[test]
fn stock_layout_at_rest_focuses_first_item() {
    let layout = stock(5);
    let result = layout.compute_layout(at(0.0));
    assert_eq!(result.len(), 5);

    let f0 = result.frames[0];
    assert_close(f0.origin_y, 0.0);
    assert_close(f0.height, 240.0);

    // bottom pinned at 240 + 88 = 328, zero growth
    let f1 = result.frames[1];
    assert_close(f1.origin_y, 240.0);
    assert_close(f1.height, 88.0);

    let f2 = result.frames[2];
    assert_close(f2.origin_y, 328.0);
    assert_close(f2.height, 88.0);

    assert_close(result.content_height, 5.0 * 180.0 + (568.0 - 180.0));
}

#[test]
fn midway_drag_glides_focus_and_grows_successor() {
    let layout = stock(5);
    let result = layout.compute_layout(at(90.0));

    let f0 = result.frames[0];
    assert_close(f0.origin_y, 90.0 - 88.0 * 0.5);
    assert_close(f0.height, 240.0);

    let f1 = result.frames[1];
    assert_close(f1.height, 88.0 + 76.0);
    // bottom stays where a compact successor would end
    assert_close(f1.bottom(), f0.bottom() + 88.0);

    let f2 = result.frames[2];
    assert_close(f2.origin_y, f1.bottom());
    assert_close(f2.height, 88.0);
}

#[test]
fn items_above_focus_stack_after_the_sentinel() {
    let layout = stock(5);
    let result = layout.compute_layout(at(360.0));

    assert_close(result.frames[0].origin_y, 88.0);
    assert_close(result.frames[1].origin_y, 176.0);
    assert_close(result.frames[2].origin_y, 360.0);
    assert_close(result.frames[2].height, 240.0);
}

#[test]
fn focused_last_item_has_no_successor() {
    let layout = stock(3);
    let result = layout.compute_layout(at(2.5 * 180.0));
    assert_eq!(result.len(), 3);

    let last = result.frames[2];
    assert_close(last.height, 240.0);
    assert_close(last.origin_y, 450.0 - 88.0 * 0.5);
    assert_close(result.frames[1].height, 88.0);
}

#[test]
fn focus_past_the_end_lays_out_everything_compact() {
    let layout = stock(2);
    let result = layout.compute_layout(at(10.0 * 180.0));
    assert!(result.frames.iter().all(|f| (f.height - 88.0).abs() <= EPS));
}

#[test]
fn overscroll_above_top_grows_first_item() {
    let layout = stock(3);
    let focus = layout.focus(at(-90.0));
    assert_eq!(focus.index, -1);
    assert_close(focus.interpolation, 0.5);

    let f0 = layout.frame(at(-90.0), 0).unwrap();
    assert_close(f0.height, 164.0);
}

#[test]
fn zero_items_is_empty_and_clamps_content_height() {
    let layout = stock(0);
    let result = layout.compute_layout(at(0.0));
    assert!(result.is_empty());
    assert_close(result.content_height, 568.0 - 180.0);

    let short = ParallaxLayout::new(LayoutConfig::new(0, 320.0, 100.0)).unwrap();
    assert_close(short.compute_layout(at(0.0)).content_height, 0.0);
    assert_close(short.max_scroll_offset(), 0.0);
}

#[test]
fn focus_position_splits_into_index_and_interpolation() {
    let layout = stock(5);
    assert_close(layout.current_focus_position(at(450.0)), 2.5);

    let focus = layout.focus(at(450.0));
    assert_eq!(focus.index, 2);
    assert_close(focus.interpolation, 0.5);
}

#[test]
fn frames_iterator_matches_compute_layout_and_lookup() {
    let layout = stock(7);
    let scroll = at(512.0);
    let result = layout.compute_layout(scroll);

    let iter = layout.frames(scroll);
    assert_eq!(iter.len(), 7);
    let collected: Vec<ItemFrame> = iter.collect();
    assert_eq!(collected, result.frames);

    for i in 0..7 {
        assert_eq!(layout.frame(scroll, i).unwrap(), result.frames[i]);
        assert_eq!(result.frame(i).unwrap(), &result.frames[i]);
    }
}

#[test]
fn compute_layout_into_reuses_buffer() {
    let layout = stock(4);
    let mut out = LayoutResult::default();
    layout.compute_layout_into(at(0.0), &mut out);
    assert_eq!(out.len(), 4);

    layout.compute_layout_into(at(180.0), &mut out);
    assert_eq!(out, layout.compute_layout(at(180.0)));
}

#[test]
fn out_of_range_lookups_are_reported() {
    let layout = stock(3);
    let err = LayoutError::IndexOutOfBounds { index: 3, count: 3 };
    assert_eq!(layout.frame(at(0.0), 3), Err(err));
    assert_eq!(layout.style_factors(at(0.0), 3), Err(err));
    assert_eq!(layout.card_style(at(0.0), 3), Err(err));
    assert_eq!(layout.compute_layout(at(0.0)).frame(3), Err(err));
}

#[test]
fn invalid_configs_are_rejected_at_construction() {
    let base = LayoutConfig::new(3, 320.0, 568.0);

    for d in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = ParallaxLayout::new(base.with_drag_interval(d)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDragInterval(_)));
    }

    assert!(matches!(
        ParallaxLayout::new(base.with_heights(80.0, 100.0)),
        Err(LayoutError::InvalidHeights { .. })
    ));
    assert!(matches!(
        ParallaxLayout::new(base.with_heights(240.0, -1.0)),
        Err(LayoutError::InvalidHeights { .. })
    ));
    assert!(matches!(
        ParallaxLayout::new(base.with_viewport(-1.0, 568.0)),
        Err(LayoutError::InvalidViewport { .. })
    ));
    assert_eq!(
        ParallaxLayout::new(base.with_style(StyleConfig::default().with_cover_alphas(1.5, 0.2)))
            .unwrap_err(),
        LayoutError::InvalidAlpha {
            name: "compact_cover_alpha",
            value: 1.5
        }
    );
}

#[test]
fn rejected_updates_keep_previous_config() {
    let mut layout = stock(3);
    assert!(layout.set_viewport(f32::NAN, 10.0).is_err());
    assert_close(layout.config().viewport_width, 320.0);

    layout.set_viewport(400.0, 700.0).unwrap();
    assert_eq!(
        layout.viewport_state(),
        ViewportState {
            width: 400.0,
            height: 700.0
        }
    );
    assert!(layout.should_invalidate_for_bounds_change());
    assert!(layout.compute_layout(at(0.0)).frames.iter().all(|f| f.width == 400.0));
}

#[test]
fn set_item_count_changes_frame_count_and_content() {
    let mut layout = stock(3);
    layout.set_item_count(6);
    assert_eq!(layout.compute_layout(at(0.0)).len(), 6);
    assert_close(layout.content_height(), 6.0 * 180.0 + 388.0);
    assert_close(layout.max_scroll_offset(), 5.0 * 180.0);
}

#[test]
fn visible_frames_filters_by_strict_intersection() {
    let layout = stock(5);
    let result = layout.compute_layout(at(0.0));

    let viewport = Rect::new(0.0, 0.0, 320.0, 568.0);
    assert_eq!(result.visible_frames(&viewport).count(), 5);

    let band = Rect::new(0.0, 300.0, 320.0, 100.0);
    let idx: Vec<usize> = result.visible_frames(&band).map(|f| f.index).collect();
    assert_eq!(idx, vec![1, 2]);

    // Shared edges do not count.
    let exact = Rect::new(0.0, 240.0, 320.0, 88.0);
    let idx: Vec<usize> = result.visible_frames(&exact).map(|f| f.index).collect();
    assert_eq!(idx, vec![1]);

    let mut out = Vec::new();
    result.collect_visible_frames(&band, &mut out);
    let mut streamed = Vec::new();
    layout.for_each_visible_frame(at(0.0), &band, |f| streamed.push(f));
    assert_eq!(out, streamed);

    assert_eq!(result.visible_frames(&Rect::default()).count(), 0);
}

#[test]
fn settle_rounds_forward_to_item_boundary() {
    let layout = stock(5);
    assert_close(layout.settle_offset(0.0), 0.0);
    assert_close(layout.settle_offset(1.0), 180.0);
    assert_close(layout.settle_offset(179.0), 180.0);
    assert_close(layout.settle_offset(180.0), 180.0);
    assert_close(layout.settle_offset(181.0), 360.0);
    // Unclamped: past the end and above the top pass straight through.
    assert_close(layout.settle_offset(5000.0), 5040.0);
    assert_close(layout.settle_offset(-200.0), -180.0);

    assert_close(layout.row_offset(3), 540.0);
    assert_close(layout.clamp_scroll_offset(5040.0), layout.max_scroll_offset());
    assert_close(layout.clamp_scroll_offset(-10.0), 0.0);
}

#[test]
fn settle_is_stable_for_fractional_intervals() {
    let layout = with_drag_interval(33.3);
    let once = layout.settle_offset(4201.461);
    assert_close(once, 4229.1);
    assert_eq!(layout.settle_offset(once), once);

    let layout = with_drag_interval(0.1);
    let once = layout.settle_offset(1.221);
    assert_close(once, 1.3);
    assert_eq!(layout.settle_offset(once), once);

    let mut rng = Lcg::new(0x5e77_1e00);
    for d in [0.1f32, 0.3, 1.1, 7.7, 33.3, 100.3, 179.7] {
        let layout = with_drag_interval(d);
        for n in 0..2000 {
            let boundary = n as f32 * d;
            assert_eq!(layout.settle_offset(boundary), boundary, "d={d} n={n}");
        }
        for _ in 0..2000 {
            let x = rng.gen_range_f32(-2000.0, 18000.0);
            let once = layout.settle_offset(x);
            assert_eq!(layout.settle_offset(once), once, "d={d} x={x}");
        }
    }
}

#[test]
fn style_factors_track_item_height() {
    let layout = stock(5);

    let focused = layout.style_factors(at(0.0), 0).unwrap();
    assert_close(focused.scale, 1.0);
    assert_close(focused.label_alpha, 1.0);
    assert_close(focused.cover_alpha, 0.2);

    let compact = layout.style_factors(at(0.0), 1).unwrap();
    assert_close(compact.scale, 0.5);
    assert_close(compact.label_alpha, 0.0);
    assert_close(compact.cover_alpha, 0.5);

    // Successor halfway grown: growth 0.5 eased to sin(pi/4).
    let half = layout.style_factors(at(90.0), 1).unwrap();
    let eased = core::f32::consts::FRAC_1_SQRT_2;
    assert_close(half.label_alpha, eased);
    assert_close(half.scale, eased);
    assert_close(half.cover_alpha, 0.5 - 0.3 * eased);
}

#[test]
fn equal_heights_style_as_fully_focused() {
    let layout =
        ParallaxLayout::new(LayoutConfig::new(3, 320.0, 568.0).with_heights(100.0, 100.0))
            .unwrap();
    let s = layout.style_factors(at(45.0), 1).unwrap();
    assert_close(s.label_alpha, 1.0);
    assert_close(s.cover_alpha, 0.2);
}

#[test]
fn card_style_positions_labels_inside_the_card() {
    let layout = stock(3);
    let card = layout.card_style(at(0.0), 0).unwrap();
    assert_close(card.title_center_y, 120.0);
    assert_close(card.detail_center_y, 160.0);
    assert_close(card.detail_inset_x, 20.0);
    assert_close(card.detail_width, 280.0);
    assert_close(card.factors.label_alpha, 1.0);
}

#[test]
fn randomized_configs_match_reference_layout() {
    let mut rng = Lcg::new(0x5eed_cafe);
    for _ in 0..500 {
        let compact = rng.gen_range_f32(10.0, 120.0);
        let focused = compact + rng.gen_range_f32(0.0, 300.0);
        let config = LayoutConfig::new(
            rng.gen_range_usize(0, 30),
            rng.gen_range_f32(0.0, 800.0),
            rng.gen_range_f32(0.0, 1200.0),
        )
        .with_heights(focused, compact)
        .with_drag_interval(rng.gen_range_f32(1.0, 400.0));
        let layout = ParallaxLayout::new(config).unwrap();
        let offset = rng.gen_range_f32(-500.0, 8000.0);

        let result = layout.compute_layout(at(offset));
        let expected = expected_frames(&config, offset);
        assert_eq!(result.len(), expected.len());
        for (frame, (y, h)) in result.frames.iter().zip(expected) {
            assert_close(frame.origin_y, y);
            assert_close(frame.height, h);
            assert_eq!(frame.width, config.viewport_width);
        }
    }
}

#[test]
fn focused_item_glides_and_successor_grows_across_one_interval() {
    let layout = stock(6);
    let k = 2usize;
    let mut last_successor = 0.0f32;
    for step in 0..=100 {
        let t = step as f32 / 100.0;
        let offset = (k as f32 + t) * 180.0;
        let focus = layout.focus(at(offset));
        if focus.index != k as i64 {
            // t == 1.0 lands exactly on the next item.
            assert_eq!(focus.index, k as i64 + 1);
            continue;
        }

        let focused = layout.frame(at(offset), k).unwrap();
        assert_close(focused.height, 240.0);
        assert_close(focused.origin_y - offset, -88.0 * t);

        let successor = layout.frame(at(offset), k + 1).unwrap();
        assert!(successor.height + EPS >= last_successor);
        last_successor = successor.height;
    }
    assert!(last_successor > 230.0);
}

fn arb_config() -> impl Strategy<Value = LayoutConfig> {
    (
        0usize..40,
        0.0f32..1000.0,
        0.0f32..1500.0,
        1.0f32..200.0,
        0.0f32..300.0,
        1.0f32..400.0,
    )
        .prop_map(|(count, width, height, compact, extra, drag)| {
            LayoutConfig::new(count, width, height)
                .with_heights(compact + extra, compact)
                .with_drag_interval(drag)
        })
}

proptest! {
    #[test]
    fn layout_emits_one_bounded_frame_per_item(config in arb_config(), offset in -2000.0f32..20000.0) {
        let layout = ParallaxLayout::new(config).unwrap();
        let result = layout.compute_layout(at(offset));
        prop_assert_eq!(result.len(), config.item_count);

        for (i, frame) in result.frames.iter().enumerate() {
            prop_assert_eq!(frame.index, i);
            prop_assert_eq!(frame.z_order, i);
            prop_assert_eq!(frame.width, config.viewport_width);
            prop_assert!(frame.height >= config.compact_height - EPS);
            prop_assert!(frame.height <= config.focused_height + EPS);
        }
        prop_assert!(result.content_height >= 0.0);
    }

    #[test]
    fn stock_layout_origins_never_decrease(count in 1usize..40, offset in 0.0f32..10000.0) {
        let layout = stock(count);
        let result = layout.compute_layout(at(offset));
        for pair in result.frames.windows(2) {
            prop_assert!(pair[1].origin_y + EPS >= pair[0].origin_y);
        }
    }

    #[test]
    fn settle_is_idempotent_and_on_a_boundary(drag in 0.1f32..400.0, x in -100000.0f32..100000.0) {
        let config = LayoutConfig::new(5, 320.0, 568.0).with_drag_interval(drag);
        let layout = ParallaxLayout::new(config).unwrap();
        let once = layout.settle_offset(x);
        prop_assert_eq!(layout.settle_offset(once), once);
        prop_assert!(once >= x - x.abs() * 1e-6 - EPS);
        prop_assert!(once < x + drag + x.abs() * 1e-6 + EPS);

        prop_assert_eq!((once / drag).round() * drag, once);
    }

    #[test]
    fn style_factors_stay_in_range(config in arb_config(), offset in -2000.0f32..20000.0) {
        let layout = ParallaxLayout::new(config).unwrap();
        for i in 0..config.item_count {
            let s = layout.style_factors(at(offset), i).unwrap();
            prop_assert!(s.scale >= 0.5 && s.scale <= 1.0);
            prop_assert!((0.0..=1.0).contains(&s.label_alpha));
            prop_assert!((0.0..=1.0).contains(&s.cover_alpha));
        }
    }
}
