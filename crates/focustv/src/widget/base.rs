//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details for
//! all widgets. It handles geometry, visibility, enabled state, focus flags,
//! and the widget's render layer.

use focustv_core::{ObjectId, Signal};
use focustv_render::{Layer, Point, Rect, Size};

use super::geometry::{SizePolicy, SizePolicyPair};

/// The base implementation for all widgets.
///
/// This struct provides common functionality that all widgets need:
/// - Object identity and parent linkage
/// - Geometry management (position, size)
/// - Size policies for layout
/// - Visibility, enabled, and focus state
/// - The render [`Layer`] the host composites
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
pub struct WidgetBase {
    /// The widget's unique object ID.
    id: ObjectId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// The widget's size policy for layout.
    size_policy: SizePolicyPair,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget can receive directional focus.
    focusable: bool,

    /// Whether the widget currently has focus.
    focused: bool,

    /// Whether the widget participates in input delivery at all.
    accepts_input: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// The render layer the host composites for this widget.
    layer: Layer,

    /// The parent widget's object ID, if any.
    parent: Option<ObjectId>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base with a fresh object ID and layer.
    pub fn new() -> Self {
        Self {
            id: ObjectId::allocate(),
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            accepts_input: true,
            needs_repaint: true,
            layer: Layer::new(),
            parent: None,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Object Identity
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    /// Get the parent widget's object ID.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Set the parent widget.
    pub fn set_parent(&mut self, parent: Option<ObjectId>) {
        self.parent = parent;
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` and syncs the render layer bounds if the
    /// geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.layer.set_bounds(rect);
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size, keeping its position.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect {
            origin: self.geometry.origin,
            size,
        });
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Set the widget's size policy.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    /// Set horizontal size policy.
    pub fn set_horizontal_policy(&mut self, policy: SizePolicy) {
        self.size_policy.horizontal = policy;
    }

    /// Set vertical size policy.
    pub fn set_vertical_policy(&mut self, policy: SizePolicy) {
        self.size_policy.vertical = policy;
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget can receive directional focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    /// Set whether the widget can receive directional focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Check if the widget currently has focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the focus management system).
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Input Delivery
    // =========================================================================

    /// Check if the widget participates in input delivery.
    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.accepts_input
    }

    /// Set whether the widget participates in input delivery.
    ///
    /// Purely decorative widgets opt out so events fall through to whatever
    /// is behind them.
    pub fn set_accepts_input(&mut self, accepts: bool) {
        self.accepts_input = accepts;
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub(crate) fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Render Layer
    // =========================================================================

    /// The widget's render layer.
    #[inline]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unique_ids() {
        let a = WidgetBase::new();
        let b = WidgetBase::new();
        assert_ne!(a.object_id(), b.object_id());
    }

    #[test]
    fn test_set_geometry_syncs_layer() {
        let mut base = WidgetBase::new();
        let rect = Rect::new(10.0, 20.0, 300.0, 80.0);
        base.set_geometry(rect);

        assert_eq!(base.geometry(), rect);
        assert_eq!(base.layer().bounds(), rect);
    }

    #[test]
    fn test_geometry_changed_signal() {
        let mut base = WidgetBase::new();
        let fired = Arc::new(AtomicBool::new(false));

        let fired_clone = fired.clone();
        base.geometry_changed.connect(move |_| {
            fired_clone.store(true, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(fired.load(Ordering::SeqCst));

        // Setting the same geometry again does not re-emit.
        fired.store(false, Ordering::SeqCst);
        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_focusable_requires_enabled_and_visible() {
        let mut base = WidgetBase::new();
        base.set_focusable(true);
        assert!(base.is_focusable());

        base.set_enabled(false);
        assert!(!base.is_focusable());

        base.set_enabled(true);
        base.set_visible(false);
        assert!(!base.is_focusable());
    }

    #[test]
    fn test_update_marks_repaint() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());

        base.update();
        assert!(base.needs_repaint());
    }
}
