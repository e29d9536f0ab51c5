/// A lightweight, serializable snapshot of the viewport geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

/// The current content offset of the scroll surface.
///
/// The engine only reads it; the scroll surface (or the adapter controller) owns it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
}

impl ScrollState {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }
}
