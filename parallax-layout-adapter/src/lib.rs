//! Adapter utilities for the `parallax-layout` crate.
//!
//! The `parallax-layout` crate is UI-agnostic and only does geometry. This crate provides the
//! small, framework-neutral workflow most card-list adapters need on top of it:
//!
//! - Owning the live scroll offset and feeding it to the layout
//! - Settling a drag gesture onto the next card boundary with a tween
//! - Scroll-to-row and selection handling
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod tween;


pub use controller::Controller;
pub use tween::{Easing, Tween};
