use crate::{ItemFrame, ParallaxLayout, Result, ScrollState, StyleFactors};

/// Derived card geometry for renderers, in the card's local coordinates (origin at its top-left).
///
/// The title is centred in the card; the detail label sits a fixed distance below it and is
/// inset horizontally by the configured text padding.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardStyle {
    pub factors: StyleFactors,
    pub title_center_y: f32,
    pub detail_center_y: f32,
    pub detail_inset_x: f32,
    pub detail_width: f32,
}

impl CardStyle {
    pub fn for_frame(layout: &ParallaxLayout, frame: &ItemFrame) -> Self {
        let style = &layout.config().style;
        let title_center_y = frame.height / 2.0;
        Self {
            factors: layout.style_factors_for_height(frame.height),
            title_center_y,
            detail_center_y: title_center_y + style.detail_label_offset,
            detail_inset_x: style.text_padding,
            detail_width: (frame.width - style.text_padding * 2.0).max(0.0),
        }
    }
}

impl ParallaxLayout {
    /// Card geometry for the item at `index` at the given scroll offset.
    pub fn card_style(&self, scroll: ScrollState, index: usize) -> Result<CardStyle> {
        let frame = self.frame(scroll, index)?;
        Ok(CardStyle::for_frame(self, &frame))
    }
}
