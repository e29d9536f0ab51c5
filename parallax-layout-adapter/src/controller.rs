use parallax_layout::{
    CardStyle, ItemFrame, LayoutConfig, LayoutError, LayoutResult, ParallaxLayout, Rect, Result,
    ScrollState, StyleFactors,
};

use crate::{Easing, Tween};

/// Default duration for animated scroll-to-row.
const ROW_ANIMATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`ParallaxLayout`] and owns the scroll offset.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `on_gesture_end` when a drag or fling is released
/// - `tick(now_ms)` each frame/timer tick while a settle or row animation is running
///
/// For UI scroll containers, apply the offset returned from `tick()` to the real scroll
/// position, then render using `layout_result()`.
#[derive(Clone, Debug)]
pub struct Controller {
    layout: ParallaxLayout,
    scroll: ScrollState,
    tween: Option<Tween>,
    scrolls_to_compact_rows_on_selection: bool,
    row_animation_ms: u64,
    row_easing: Easing,
}

impl Controller {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        Ok(Self::from_layout(ParallaxLayout::new(config)?))
    }

    pub fn from_layout(layout: ParallaxLayout) -> Self {
        Self {
            layout,
            scroll: ScrollState::default(),
            tween: None,
            scrolls_to_compact_rows_on_selection: true,
            row_animation_ms: ROW_ANIMATION_MS,
            row_easing: Easing::SmoothStep,
        }
    }

    pub fn with_scrolls_to_compact_rows_on_selection(mut self, enabled: bool) -> Self {
        self.scrolls_to_compact_rows_on_selection = enabled;
        self
    }

    pub fn with_row_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.row_animation_ms = duration_ms;
        self.row_easing = easing;
        self
    }

    pub fn layout(&self) -> &ParallaxLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut ParallaxLayout {
        &mut self.layout
    }

    pub fn into_layout(self) -> ParallaxLayout {
        self.layout
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset
    }

    pub fn scrolls_to_compact_rows_on_selection(&self) -> bool {
        self.scrolls_to_compact_rows_on_selection
    }

    pub fn set_scrolls_to_compact_rows_on_selection(&mut self, enabled: bool) {
        self.scrolls_to_compact_rows_on_selection = enabled;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset the active animation is heading to, if any.
    pub fn target_offset(&self) -> Option<f32> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Updates the viewport bounds. The scroll offset is left untouched.
    pub fn on_viewport_size(&mut self, width: f32, height: f32) -> Result<()> {
        self.layout.set_viewport(width, height)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag).
    ///
    /// This cancels any active animation.
    pub fn on_scroll(&mut self, offset: f32) {
        self.cancel_animation();
        self.scroll.offset = offset;
    }

    /// Settles a released drag/fling onto the next item boundary and starts a tween toward it.
    ///
    /// The settle target is clamped to the scrollable range. Returns the clamped target.
    pub fn on_gesture_end(
        &mut self,
        proposed_offset: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        let settled = self.layout.settle_offset(proposed_offset);
        let to = self.layout.clamp_scroll_offset(settled);
        adebug!(proposed_offset, settled, to, "on_gesture_end");
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween from the current offset to `offset` (unclamped).
    ///
    /// When already at `offset`, no tween is started. Returns `offset`.
    pub fn start_tween_to_offset(
        &mut self,
        offset: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        if self.scroll.offset == offset {
            self.tween = None;
            return offset;
        }
        self.tween = Some(Tween::new(
            self.scroll.offset,
            offset,
            now_ms,
            duration_ms,
            easing,
        ));
        offset
    }

    /// Advances the active animation.
    ///
    /// Returns the new offset while an animation is running (including the final frame), and
    /// `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.scroll.offset = tween.sample(now_ms);
        atrace!(offset = self.scroll.offset, now_ms, "tick");
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.scroll.offset)
    }

    /// Scrolls so `row` is exactly focused.
    ///
    /// Returns `None` when `row` is already focused at rest; otherwise the applied (or animated
    /// toward) offset.
    pub fn scroll_to_row(&mut self, row: usize, animated: bool, now_ms: u64) -> Option<f32> {
        let target = self.layout.row_offset(row);
        if self.scroll.offset == target && self.tween.is_none() {
            return None;
        }
        adebug!(row, target, animated, "scroll_to_row");
        if animated {
            Some(self.start_tween_to_offset(
                target,
                now_ms,
                self.row_animation_ms,
                self.row_easing,
            ))
        } else {
            self.cancel_animation();
            self.scroll.offset = target;
            Some(target)
        }
    }

    /// Handles a tap on `row`.
    ///
    /// When `scrolls_to_compact_rows_on_selection` is enabled, the tapped row is animated into
    /// focus. Returns whether a scroll was started.
    pub fn select_row(&mut self, row: usize, now_ms: u64) -> Result<bool> {
        let count = self.layout.item_count();
        if row >= count {
            return Err(LayoutError::IndexOutOfBounds { index: row, count });
        }
        if !self.scrolls_to_compact_rows_on_selection {
            return Ok(false);
        }
        Ok(self.scroll_to_row(row, true, now_ms).is_some())
    }

    pub fn layout_result(&self) -> LayoutResult {
        self.layout.compute_layout(self.scroll)
    }

    pub fn frame(&self, index: usize) -> Result<ItemFrame> {
        self.layout.frame(self.scroll, index)
    }

    pub fn for_each_visible_frame(&self, rect: &Rect, f: impl FnMut(ItemFrame)) {
        self.layout.for_each_visible_frame(self.scroll, rect, f);
    }

    /// The frames intersecting the current viewport, in index order.
    pub fn for_each_frame_in_viewport(&self, f: impl FnMut(ItemFrame)) {
        let viewport = self.layout.viewport_state();
        let rect = Rect::new(0.0, self.scroll.offset, viewport.width, viewport.height);
        self.for_each_visible_frame(&rect, f);
    }

    pub fn style_factors(&self, index: usize) -> Result<StyleFactors> {
        self.layout.style_factors(self.scroll, index)
    }

    pub fn card_style(&self, index: usize) -> Result<CardStyle> {
        self.layout.card_style(self.scroll, index)
    }
}
