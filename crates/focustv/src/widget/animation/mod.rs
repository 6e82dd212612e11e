//! Animation support for focustv.
//!
//! This module provides easing functions and the deferred animation
//! scheduling model widgets use for focus and press transitions.
//!
//! # Example
//!
//! ```
//! use focustv::widget::animation::{ease, Easing};
//!
//! let progress = 0.5;
//! let eased = ease(Easing::EaseInOut, progress);
//! ```

mod easing;
mod scope;

pub use easing::{ease, lerp_eased, Easing};
pub use scope::{Animation, AnimationScope, Animator, CoordinatedAnimations};
