//! Prelude module for focustv.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use focustv::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Object System
// ============================================================================

pub use crate::object::{Object, ObjectId};
pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    ButtonStyle, FocusableButton, GradientBackgroundView, StyleError, VisualState,
};

// ============================================================================
// Animation
// ============================================================================

pub use crate::widget::animation::{
    Animation, AnimationScope, Animator, CoordinatedAnimations, Easing,
};

// ============================================================================
// Geometry and Graphics Types
// ============================================================================

pub use crate::render::{
    BoxShadow, Color, Layer, LinearGradient, Point, Rect, Size, Transform2D, WeakLayer,
};

// ============================================================================
// Event Types
// ============================================================================

pub use crate::widget::{PressEvent, PressPhase, ResizeEvent, WidgetEvent};

#[cfg(test)]
mod tests {
    #![allow(unused)]
    use super::*;

    /// Verify that all prelude exports are accessible.
    #[test]
    fn test_prelude_types_exist() {
        let _signal: Signal<bool> = Signal::new();
        let _point = Point::new(0.0, 0.0);
        let _size = Size::new(100.0, 100.0);
        let _rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let _color = Color::from_rgb8(255, 255, 255);
        let _style = ButtonStyle::default();
        let _coordinator = CoordinatedAnimations::new();
    }

    #[allow(dead_code)]
    fn _widget_types_check() {
        fn _takes_widget<W: Widget>(_w: &W) {}

        fn _button() -> FocusableButton {
            FocusableButton::new()
        }
        fn _gradient_view() -> GradientBackgroundView {
            GradientBackgroundView::new()
        }
    }
}
