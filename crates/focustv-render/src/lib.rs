//! Render model for focustv.
//!
//! This crate defines the visual vocabulary the widget layer speaks and the
//! host compositor reads: geometry and color primitives, 2D affine
//! transforms, gradient and shadow paint definitions, and the shared
//! [`Layer`] property bag that widgets mutate and the host renders.
//!
//! There is deliberately no GPU code here. Rasterization, interpolation of
//! animated properties, and presentation are the embedding host's side of
//! the contract; this crate only models the properties it composites.

pub mod layer;
pub mod paint;
pub mod transform;
pub mod types;

pub use layer::{Layer, WeakLayer};
pub use paint::{BoxShadow, GradientStop, LinearGradient};
pub use transform::Transform2D;
pub use types::{Color, ParseColorError, Point, Rect, Size};
