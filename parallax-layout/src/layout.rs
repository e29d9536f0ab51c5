use core::f32::consts::FRAC_PI_2;
use core::iter::FusedIterator;

use crate::{
    Focus, ItemFrame, LayoutConfig, LayoutError, LayoutResult, Rect, Result, ScrollState, Size,
    StyleFactors, ViewportState,
};

/// The title never shrinks below half size.
const MIN_TITLE_SCALE: f32 = 0.5;

/// A headless parallax card layout engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or scroll state.
/// - Your adapter passes the current [`ScrollState`] into every query.
/// - Every query is a pure function of the config and the scroll offset, so results are never
///   stale and no invalidation bookkeeping is needed.
///
/// For settle animation and row selection, see the `parallax-layout-adapter` crate.
#[derive(Clone, Debug)]
pub struct ParallaxLayout {
    config: LayoutConfig,
}

impl ParallaxLayout {
    /// Creates a layout from a config, rejecting invalid geometry up front.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            pwarn!(error = %err, "ParallaxLayout::new rejected config");
            return Err(err);
        }
        pdebug!(
            item_count = config.item_count,
            focused_height = config.focused_height,
            compact_height = config.compact_height,
            drag_interval = config.drag_interval,
            "ParallaxLayout::new"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the config. On error the previous config is kept.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            pwarn!(error = %err, "set_config rejected config");
            return Err(err);
        }
        pdebug!(item_count = config.item_count, "set_config");
        self.config = config;
        Ok(())
    }

    /// Copies the current config, applies `f`, then delegates to `set_config`.
    pub fn update_config(&mut self, f: impl FnOnce(&mut LayoutConfig)) -> Result<()> {
        let mut next = self.config;
        f(&mut next);
        self.set_config(next)
    }

    pub fn item_count(&self) -> usize {
        self.config.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        pdebug!(item_count, "set_item_count");
        self.config.item_count = item_count;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<()> {
        self.update_config(|c| {
            c.viewport_width = width;
            c.viewport_height = height;
        })
    }

    /// Returns a lightweight snapshot of the current viewport geometry.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            width: self.config.viewport_width,
            height: self.config.viewport_height,
        }
    }

    /// Whether a host that caches a [`LayoutResult`] must recompute it after the viewport bounds
    /// change.
    ///
    /// Always `true`: frame widths follow the viewport width and the content height follows the
    /// viewport height, so no bounds change leaves a cached result valid. Scroll-driven hosts can
    /// call this where their toolkit asks for a bounds invalidation decision.
    pub fn should_invalidate_for_bounds_change(&self) -> bool {
        true
    }

    /// The continuous focus coordinate: `offset / drag_interval`.
    pub fn current_focus_position(&self, scroll: ScrollState) -> f32 {
        scroll.offset / self.config.drag_interval
    }

    pub fn focus(&self, scroll: ScrollState) -> Focus {
        let position = self.current_focus_position(scroll);
        let floor = position.floor();
        Focus {
            index: floor as i64,
            interpolation: position - floor,
        }
    }

    /// Lazily yields every frame in index order, without allocating.
    pub fn frames(&self, scroll: ScrollState) -> FrameIter<'_> {
        FrameIter::new(&self.config, scroll.offset, self.focus(scroll))
    }

    pub fn for_each_frame(&self, scroll: ScrollState, f: impl FnMut(ItemFrame)) {
        self.frames(scroll).for_each(f);
    }

    /// Computes every item frame plus the content height.
    pub fn compute_layout(&self, scroll: ScrollState) -> LayoutResult {
        let mut out = LayoutResult::default();
        self.compute_layout_into(scroll, &mut out);
        out
    }

    /// Same as [`Self::compute_layout`], reusing `out`'s frame buffer.
    pub fn compute_layout_into(&self, scroll: ScrollState, out: &mut LayoutResult) {
        ptrace!(
            offset = scroll.offset,
            item_count = self.config.item_count,
            "compute_layout"
        );
        out.frames.clear();
        out.frames.extend(self.frames(scroll));
        out.content_height = self.content_height();
    }

    /// Looks up a single frame without building the whole layout.
    pub fn frame(&self, scroll: ScrollState, index: usize) -> Result<ItemFrame> {
        self.check_index(index)?;
        self.frames(scroll)
            .nth(index)
            .ok_or(LayoutError::IndexOutOfBounds {
                index,
                count: self.config.item_count,
            })
    }

    /// Iterates frames intersecting `rect` without allocating.
    pub fn for_each_visible_frame(
        &self,
        scroll: ScrollState,
        rect: &Rect,
        mut f: impl FnMut(ItemFrame),
    ) {
        for frame in self.frames(scroll) {
            if frame.rect().intersects(rect) {
                f(frame);
            }
        }
    }

    /// One drag interval per item, plus enough headroom for the last item to reach the top.
    ///
    /// With no items the headroom alone is used, clamped to zero.
    pub fn content_height(&self) -> f32 {
        let c = &self.config;
        let headroom = c.viewport_height - c.drag_interval;
        if c.item_count == 0 {
            return headroom.max(0.0);
        }
        c.item_count as f32 * c.drag_interval + headroom
    }

    pub fn content_size(&self) -> Size {
        Size {
            width: self.config.viewport_width,
            height: self.content_height(),
        }
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_height() - self.config.viewport_height).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Snaps a post-gesture offset forward to the next item boundary.
    ///
    /// This always rounds up, independent of drag direction. The result is not clamped to the
    /// scrollable range; see [`Self::clamp_scroll_offset`]. An offset that is already settled is
    /// returned unchanged, for fractional drag intervals too.
    pub fn settle_offset(&self, proposed_offset: f32) -> f32 {
        let d = self.config.drag_interval;
        let mut steps = (proposed_offset / d).ceil();
        // `steps * d` divided back by `d` can land an ulp above `steps`. Step back when the
        // lower boundary still covers the proposal.
        if (steps - 1.0) * d >= proposed_offset {
            steps -= 1.0;
        }
        let settled = steps * d;
        ptrace!(proposed_offset, settled, "settle_offset");
        settled
    }

    /// The scroll offset at which `row` is exactly focused.
    pub fn row_offset(&self, row: usize) -> f32 {
        row as f32 * self.config.drag_interval
    }

    /// Styling factors for an item at its current height.
    pub fn style_factors(&self, scroll: ScrollState, index: usize) -> Result<StyleFactors> {
        let frame = self.frame(scroll, index)?;
        Ok(self.style_factors_for_height(frame.height))
    }

    /// Styling factors for an arbitrary card height (clamped into the compact..focused range).
    pub fn style_factors_for_height(&self, height: f32) -> StyleFactors {
        let c = &self.config;
        let range = c.height_range();
        let growth = if range > 0.0 {
            let grown = c.focused_height - height;
            (1.0 - grown / range).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = (growth * FRAC_PI_2).sin().clamp(0.0, 1.0);
        let compact = c.style.compact_cover_alpha;
        let focused = c.style.focused_cover_alpha;
        StyleFactors {
            scale: eased.max(MIN_TITLE_SCALE),
            label_alpha: eased,
            cover_alpha: compact + (focused - compact) * eased,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.config.item_count;
        if index >= count {
            pwarn!(index, count, "item index out of bounds");
            return Err(LayoutError::IndexOutOfBounds { index, count });
        }
        Ok(())
    }
}

/// Iterator over item frames for one scroll offset. See [`ParallaxLayout::frames`].
#[derive(Clone, Debug)]
pub struct FrameIter<'a> {
    config: &'a LayoutConfig,
    offset: f32,
    focus: Focus,
    next: usize,
    previous: ItemFrame,
}

impl<'a> FrameIter<'a> {
    fn new(config: &'a LayoutConfig, offset: f32, focus: Focus) -> Self {
        // Sentinel so the first item stacks as if preceded by a compact item.
        let previous = ItemFrame {
            index: 0,
            origin_y: 0.0,
            height: config.compact_height,
            width: config.viewport_width,
            z_order: 0,
        };
        Self {
            config,
            offset,
            focus,
            next: 0,
            previous,
        }
    }
}

impl Iterator for FrameIter<'_> {
    type Item = ItemFrame;

    fn next(&mut self) -> Option<ItemFrame> {
        let index = self.next;
        if index >= self.config.item_count {
            return None;
        }
        self.next += 1;

        let c = self.config;
        let interp = self.focus.interpolation;
        let (origin_y, height) = if index as i64 == self.focus.index {
            // Tracks the scroll offset directly, not the accumulated stack.
            (self.offset - c.compact_height * interp, c.focused_height)
        } else if index as i64 == self.focus.index + 1 {
            // Bottom edge stays where a compact item would end; growth extends upward.
            let grown = (c.height_range() * interp).max(0.0);
            let height = c.compact_height + grown;
            let bottom = self.previous.bottom() + c.compact_height;
            (bottom - height, height)
        } else {
            (self.previous.bottom(), c.compact_height)
        };

        let frame = ItemFrame {
            index,
            origin_y,
            height,
            width: c.viewport_width,
            z_order: index,
        };
        self.previous = frame;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.item_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameIter<'_> {}

impl FusedIterator for FrameIter<'_> {}
