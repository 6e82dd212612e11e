//! # focustv
//!
//! TV-style focusable button widgets for Rust, built around a small
//! retained-mode widget layer and a shared render-layer model.
//!
//! The crate provides two widgets:
//!
//! - [`FocusableButton`](widget::widgets::FocusableButton): a button that
//!   reacts to directional focus with a coordinated scale, shadow, and
//!   gradient transition, and to press events with a press-down animation.
//! - [`GradientBackgroundView`](widget::widgets::GradientBackgroundView): a
//!   passive view that fills its bounds with a two-color linear gradient.
//!
//! # Example
//!
//! ```
//! use focustv::prelude::*;
//!
//! let mut button = FocusableButton::with_frame(Rect::new(0.0, 0.0, 300.0, 80.0));
//! button.set_title("Play");
//!
//! button.focus_state_changed.connect(|&focused| {
//!     println!("focused: {focused}");
//! });
//!
//! // The host's focus engine drives focus transitions through a
//! // coordinator that batches the resulting animations.
//! let mut coordinator = CoordinatedAnimations::new();
//! button.focus_changed(true, &mut coordinator);
//! coordinator.run();
//! ```
//!
//! # Architecture
//!
//! `focustv` is split into layered crates:
//!
//! - `focustv-core`: object identity and the signal/slot system
//! - `focustv-render`: geometry, color, gradient, shadow, and [`render::Layer`]
//! - `focustv` (this crate): the widget layer and the two widgets
//!
//! Widgets own a [`render::Layer`] and mutate its properties; the embedding
//! host reads layers each frame and interpolates animated changes toward the
//! stored model values.

pub use focustv_core::*;

/// Render model re-exports.
pub mod render {
    pub use focustv_render::*;
}

pub mod prelude;
pub mod widget;
