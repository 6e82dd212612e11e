//! Gradient background view.

use focustv_core::{Object, ObjectId};
use focustv_render::{Color, Point, Rect, Size};

use crate::widget::base::WidgetBase;
use crate::widget::geometry::{SizeHint, SizePolicyPair};
use crate::widget::traits::Widget;

/// A passive view that fills its bounds with a two-color linear gradient.
///
/// The view is a thin wrapper over its render layer: the color pair and
/// gradient axis live on the layer, so deferred animation work that writes
/// the layer is immediately visible through this view's accessors.
///
/// The view never handles input. It is meant to sit behind an interactive
/// parent (such as [`FocusableButton`](super::FocusableButton)), sized to
/// the parent's bounds, with events falling through to the parent.
pub struct GradientBackgroundView {
    base: WidgetBase,
}

impl Default for GradientBackgroundView {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientBackgroundView {
    /// Create a gradient view with a zero-size frame and no colors.
    pub fn new() -> Self {
        Self::with_frame(Rect::ZERO)
    }

    /// Create a gradient view with the given frame.
    pub fn with_frame(frame: Rect) -> Self {
        let mut base = WidgetBase::new();
        base.set_geometry(frame);
        base.set_accepts_input(false);
        base.set_size_policy(SizePolicyPair::expanding());
        Self { base }
    }

    /// The current color pair (start, end), or `None` if never set.
    pub fn colors(&self) -> Option<[Color; 2]> {
        self.base.layer().gradient_colors()
    }

    /// Set the color pair, replacing the rendered fill.
    pub fn set_colors(&mut self, colors: [Color; 2]) {
        self.base.layer().set_gradient_colors(Some(colors));
        self.base.update();
    }

    /// The gradient axis as (start, end) normalized points.
    pub fn gradient_points(&self) -> (Point, Point) {
        self.base.layer().gradient_points()
    }

    /// Set the gradient axis. Points outside the unit square extrapolate
    /// the direction; they are forwarded to the layer unvalidated.
    pub fn set_gradient_points(&mut self, start: Point, end: Point) {
        self.base.layer().set_gradient_points(start, end);
        self.base.update();
    }

    /// The view's corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.base.layer().corner_radius()
    }

    /// Set the corner radius so the gradient clips like its parent.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.base.layer().set_corner_radius(radius);
        self.base.update();
    }
}

impl Object for GradientBackgroundView {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for GradientBackgroundView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        // Sized by the parent, no intrinsic preference.
        SizeHint::new(Size::ZERO)
    }
}

static_assertions::assert_impl_all!(GradientBackgroundView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = GradientBackgroundView::new();
        assert!(view.colors().is_none());
        assert_eq!(
            view.gradient_points(),
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0))
        );
        assert!(!view.widget_base().accepts_input());
    }

    #[test]
    fn test_set_colors_reflected_in_layer() {
        let mut view = GradientBackgroundView::new();
        view.set_colors([Color::RED, Color::BLUE]);

        assert_eq!(view.colors(), Some([Color::RED, Color::BLUE]));
        let gradient = view.layer().gradient().unwrap();
        assert_eq!(gradient.stops[0].color, Color::RED);
        assert_eq!(gradient.stops[1].color, Color::BLUE);
    }

    #[test]
    fn test_out_of_range_points_forwarded_untouched() {
        let mut view = GradientBackgroundView::new();
        view.set_gradient_points(Point::new(-0.5, 0.0), Point::new(1.5, 2.0));
        assert_eq!(
            view.gradient_points(),
            (Point::new(-0.5, 0.0), Point::new(1.5, 2.0))
        );
    }

    #[test]
    fn test_layer_write_visible_through_view() {
        // Deferred animation work mutates the layer directly; the view's
        // accessors must observe the change.
        let view = GradientBackgroundView::new();
        let weak = view.layer().downgrade();

        if let Some(layer) = weak.upgrade() {
            layer.set_gradient_colors(Some([Color::GREEN, Color::GREEN]));
        }
        assert_eq!(view.colors(), Some([Color::GREEN, Color::GREEN]));
    }
}
