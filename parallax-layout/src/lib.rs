//! A headless layout engine for parallax card lists.
//!
//! For adapter-level utilities (settle tweens, scroll-to-row, selection), see the
//! `parallax-layout-adapter` crate.
//!
//! One card is "focused" (tall, full detail) while the rest are "compact". As the scroll offset
//! advances by one drag interval, the focus sweeps from one card to the next: the focused card
//! glides upward while its successor grows from compact to focused height underneath it.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (width/height)
//! - scroll offset
//! - item count and the focused/compact heights (see [`LayoutConfig`])
//!
//! and consumes per-item [`ItemFrame`]s, the content height, settle offsets and
//! [`StyleFactors`] for card rendering.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod card;
mod config;
mod error;
mod layout;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use card::CardStyle;
pub use config::{
    DEFAULT_COMPACT_HEIGHT, DEFAULT_DRAG_INTERVAL, DEFAULT_FOCUSED_HEIGHT, LayoutConfig,
    StyleConfig,
};
pub use error::{LayoutError, Result};
pub use layout::{FrameIter, ParallaxLayout};
pub use state::{ScrollState, ViewportState};
pub use types::{Focus, ItemFrame, LayoutResult, Rect, Size, StyleFactors};
