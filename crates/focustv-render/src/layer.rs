//! Shared render layers.
//!
//! A [`Layer`] is a cloneable handle to a bag of composited visual
//! properties: bounds, transform, corner rounding, drop shadow, and an
//! optional background gradient. Widgets mutate their layer; the embedding
//! host reads it each frame and interpolates animated properties toward the
//! model values stored here.
//!
//! Handles share state, so deferred work (animation closures) can capture a
//! [`WeakLayer`] and mutate the same layer the widget owns without borrowing
//! the widget itself. A `WeakLayer` does not keep the layer alive; upgrading
//! after the owning widget is dropped yields `None` and the work is skipped.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::paint::{BoxShadow, LinearGradient};
use crate::transform::Transform2D;
use crate::types::{Color, Point, Rect, Size};

const LOG_TARGET: &str = "focustv_render::layer";

#[derive(Debug, Clone)]
struct LayerState {
    bounds: Rect,
    transform: Transform2D,
    corner_radius: f32,
    masks_to_bounds: bool,
    shadow: BoxShadow,
    gradient_start: Point,
    gradient_end: Point,
    gradient_colors: Option<[Color; 2]>,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            transform: Transform2D::IDENTITY,
            corner_radius: 0.0,
            masks_to_bounds: false,
            shadow: BoxShadow::default(),
            // Top-left to bottom-right diagonal.
            gradient_start: Point::new(0.0, 0.0),
            gradient_end: Point::new(1.0, 1.0),
            gradient_colors: None,
        }
    }
}

/// A cloneable handle to shared layer state.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    state: Arc<RwLock<LayerState>>,
}

impl Layer {
    /// Create a layer with default properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a non-owning handle to this layer.
    pub fn downgrade(&self) -> WeakLayer {
        WeakLayer {
            state: Arc::downgrade(&self.state),
        }
    }

    /// Whether two handles refer to the same layer.
    pub fn ptr_eq(&self, other: &Layer) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    // ====== Geometry ======

    /// The layer's bounds in its parent's coordinate space.
    pub fn bounds(&self) -> Rect {
        self.state.read().bounds
    }

    /// Set the layer's bounds.
    pub fn set_bounds(&self, bounds: Rect) {
        self.state.write().bounds = bounds;
    }

    /// The transform applied about the layer's center.
    pub fn transform(&self) -> Transform2D {
        self.state.read().transform
    }

    /// Set the layer's transform.
    pub fn set_transform(&self, transform: Transform2D) {
        tracing::trace!(
            target: LOG_TARGET,
            scale = ?transform.scale_factors(),
            "layer transform changed"
        );
        self.state.write().transform = transform;
    }

    // ====== Clipping and rounding ======

    /// Corner radius for rounded clipping.
    pub fn corner_radius(&self) -> f32 {
        self.state.read().corner_radius
    }

    /// Set the corner radius.
    pub fn set_corner_radius(&self, radius: f32) {
        self.state.write().corner_radius = radius;
    }

    /// Whether content and shadow are clipped to the layer's bounds.
    pub fn masks_to_bounds(&self) -> bool {
        self.state.read().masks_to_bounds
    }

    /// Set bounds clipping. While enabled, the drop shadow is invisible.
    pub fn set_masks_to_bounds(&self, masks: bool) {
        self.state.write().masks_to_bounds = masks;
    }

    // ====== Shadow ======

    /// The layer's drop shadow.
    pub fn shadow(&self) -> BoxShadow {
        self.state.read().shadow
    }

    /// Replace the drop shadow.
    pub fn set_shadow(&self, shadow: BoxShadow) {
        self.state.write().shadow = shadow;
    }

    /// Set only the shadow offset, keeping color, blur, and opacity.
    pub fn set_shadow_offset(&self, offset: Size) {
        self.state.write().shadow.offset = offset;
    }

    // ====== Gradient ======

    /// The gradient axis in unit-square coordinates.
    pub fn gradient_points(&self) -> (Point, Point) {
        let state = self.state.read();
        (state.gradient_start, state.gradient_end)
    }

    /// Set the gradient axis. Out-of-range points are stored as given.
    pub fn set_gradient_points(&self, start: Point, end: Point) {
        let mut state = self.state.write();
        state.gradient_start = start;
        state.gradient_end = end;
    }

    /// The current gradient color pair, if any.
    pub fn gradient_colors(&self) -> Option<[Color; 2]> {
        self.state.read().gradient_colors
    }

    /// Set the gradient color pair, or `None` to clear the gradient.
    pub fn set_gradient_colors(&self, colors: Option<[Color; 2]>) {
        self.state.write().gradient_colors = colors;
    }

    /// Build the paint definition for the current gradient, if colors are set.
    pub fn gradient(&self) -> Option<LinearGradient> {
        let state = self.state.read();
        state.gradient_colors.map(|[from, to]| {
            LinearGradient::two_color(state.gradient_start, state.gradient_end, from, to)
        })
    }
}

/// A non-owning handle to a [`Layer`].
#[derive(Debug, Clone, Default)]
pub struct WeakLayer {
    state: Weak<RwLock<LayerState>>,
}

impl WeakLayer {
    /// Attempt to recover a strong handle. Returns `None` if the layer's
    /// owner has been dropped.
    pub fn upgrade(&self) -> Option<Layer> {
        self.state.upgrade().map(|state| Layer { state })
    }
}

static_assertions::assert_impl_all!(Layer: Send, Sync);
static_assertions::assert_impl_all!(WeakLayer: Send, Sync);
