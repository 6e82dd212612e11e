//! Paint definitions: gradients and shadows.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Point, Size};

/// A color stop along a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis, nominally in 0.0-1.0.
    pub offset: f32,
    pub color: Color,
}

/// A linear gradient between two points in unit-square coordinates.
///
/// The start and end points are normalized to the bounds of whatever surface
/// the gradient fills: (0, 0) is the top-left corner, (1, 1) the bottom-right.
/// Out-of-range points are legal and simply extend the axis beyond the
/// surface; the renderer decides how to treat them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create a gradient from a list of stops.
    pub fn new(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self { start, end, stops }
    }

    /// Create a simple two-color gradient spanning the full axis.
    pub fn two_color(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Sample the gradient color at position `t` along the axis.
    ///
    /// Positions outside the outermost stops clamp to the nearest stop.
    /// Returns transparent if the gradient has no stops.
    pub fn sample(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }

        last.color
    }
}

/// A drop shadow cast behind a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub color: Color,
    /// Displacement of the shadow from the layer, width then height.
    pub offset: Size,
    pub blur_radius: f32,
    /// Shadow opacity in 0.0-1.0, multiplied with the color's alpha.
    pub opacity: f32,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            offset: Size::ZERO,
            blur_radius: 0.0,
            opacity: 0.0,
        }
    }
}

impl BoxShadow {
    /// Create a shadow with the given parameters.
    pub fn new(color: Color, offset: Size, blur_radius: f32, opacity: f32) -> Self {
        Self {
            color,
            offset,
            blur_radius,
            opacity,
        }
    }

    /// Whether the shadow would be visible at all.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.color.a > 0.0
    }
}

static_assertions::assert_impl_all!(LinearGradient: Send, Sync);
static_assertions::assert_impl_all!(BoxShadow: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_color_gradient() {
        let g = LinearGradient::two_color(
            Point::ZERO,
            Point::new(1.0, 1.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.sample(0.0), Color::BLACK);
        assert_eq!(g.sample(1.0), Color::WHITE);

        let mid = g.sample(0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_sample_clamps_outside_stops() {
        let g = LinearGradient::two_color(
            Point::ZERO,
            Point::new(1.0, 0.0),
            Color::RED,
            Color::BLUE,
        );
        assert_eq!(g.sample(-0.5), Color::RED);
        assert_eq!(g.sample(1.5), Color::BLUE);
    }

    #[test]
    fn test_sample_empty_gradient() {
        let g = LinearGradient::new(Point::ZERO, Point::new(1.0, 1.0), vec![]);
        assert_eq!(g.sample(0.5), Color::TRANSPARENT);
    }

    #[test]
    fn test_out_of_range_points_preserved() {
        let g = LinearGradient::two_color(
            Point::new(-0.5, 0.0),
            Point::new(1.5, 2.0),
            Color::RED,
            Color::BLUE,
        );
        assert_eq!(g.start, Point::new(-0.5, 0.0));
        assert_eq!(g.end, Point::new(1.5, 2.0));
    }

    #[test]
    fn test_shadow_visibility() {
        let shadow = BoxShadow::default();
        assert!(!shadow.is_visible());

        let visible = BoxShadow::new(Color::BLACK, Size::new(0.0, 27.0), 10.0, 0.25);
        assert!(visible.is_visible());
    }
}
