//! Widget system for focustv.
//!
//! This module provides the foundational widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation for widget functionality
//! - Size hints and policies for layout negotiation
//! - Press and resize events for input handling
//! - [`animation`]: deferred animation scheduling
//!
//! # Overview
//!
//! Each widget implements the [`Widget`] trait and contains a [`WidgetBase`]
//! that handles common functionality, including the render
//! [`Layer`](focustv_render::Layer) the embedding host composites. Widgets
//! never draw directly; they describe themselves through layer properties
//! and the host renders and interpolates them.
//!
//! # Creating a Widget
//!
//! ```
//! use focustv::widget::{SizeHint, Widget, WidgetBase};
//! use focustv::{Object, ObjectId};
//!
//! struct Badge {
//!     base: WidgetBase,
//! }
//!
//! impl Object for Badge {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.object_id()
//!     }
//! }
//!
//! impl Widget for Badge {
//!     fn widget_base(&self) -> &WidgetBase {
//!         &self.base
//!     }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase {
//!         &mut self.base
//!     }
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(24.0, 24.0)
//!     }
//! }
//! ```

pub mod animation;
mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{EventBase, PressEvent, PressPhase, ResizeEvent, WidgetEvent};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::Widget;

// Re-export widgets for convenience
pub use widgets::{ButtonStyle, FocusableButton, GradientBackgroundView, StyleError, VisualState};
