//! Concrete widget implementations.

mod focusable_button;
mod gradient_view;

pub use focusable_button::{ButtonStyle, FocusableButton, StyleError, VisualState};
pub use gradient_view::GradientBackgroundView;
