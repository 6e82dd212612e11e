//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in focustv.
//!
//! There is no paint method here. Widgets describe themselves by mutating
//! their render [`Layer`](focustv_render::Layer); the embedding host reads
//! the layer tree each frame and composites it.

use focustv_core::Object;
use focustv_render::{Layer, Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::{SizeHint, SizePolicyPair};

/// The core trait for all widgets.
///
/// # Required Methods
///
/// Implementors must provide:
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut):
///   access to the underlying [`WidgetBase`]
/// - [`size_hint()`](Self::size_hint): the widget's preferred size for layout
///
/// Most other methods have default implementations that delegate to
/// [`WidgetBase`].
pub trait Widget: Object + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle an event.
    ///
    /// Return `true` if the event was handled; unhandled events propagate to
    /// the parent widget.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    fn size_policy(&self) -> SizePolicyPair {
        self.widget_base().size_policy()
    }

    /// Set the widget's size policy.
    fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.widget_base_mut().set_size_policy(policy);
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget can receive directional focus.
    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    /// Check if the widget currently has focus.
    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    // =========================================================================
    // Render Layer
    // =========================================================================

    /// The widget's render layer.
    fn layer(&self) -> &Layer {
        self.widget_base().layer()
    }
}
