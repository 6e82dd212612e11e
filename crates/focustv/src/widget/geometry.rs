//! Size hints and size policies for widget layout.
//!
//! These types drive layout negotiation between widgets and their parent
//! containers, in the style of Qt's QSizePolicy system.

use focustv_render::Size;

/// Size policy determines how a widget should behave when space is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink. It always stays at its size hint.
    Fixed = 0,

    /// The size hint is preferred but the widget can both grow and shrink.
    /// This is the default policy for most widgets.
    #[default]
    Preferred = 1,

    /// The widget wants to grow and take up as much space as possible.
    /// It can also shrink if needed.
    Expanding = 2,
}

impl SizePolicy {
    /// Returns true if the policy allows the widget to grow.
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed)
    }

    /// Returns true if the policy allows the widget to shrink.
    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed)
    }

    /// Returns true if the widget actively wants more space.
    #[inline]
    pub fn wants_to_grow(self) -> bool {
        matches!(self, Self::Expanding)
    }
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal size policy.
    pub horizontal: SizePolicy,

    /// Vertical size policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new size policy pair with the specified policies.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Create a policy with the same value for both dimensions.
    pub fn uniform(policy: SizePolicy) -> Self {
        Self::new(policy, policy)
    }

    /// Create a fixed size policy (widget cannot resize).
    pub fn fixed() -> Self {
        Self::uniform(SizePolicy::Fixed)
    }

    /// Create a preferred size policy (default).
    pub fn preferred() -> Self {
        Self::uniform(SizePolicy::Preferred)
    }

    /// Create an expanding size policy (widget wants more space).
    pub fn expanding() -> Self {
        Self::uniform(SizePolicy::Expanding)
    }
}

/// Size hint containing the preferred, minimum, and maximum sizes for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the widget has no minimum
    /// constraint (can shrink to zero).
    pub minimum: Option<Size>,

    /// The maximum size the widget should be. If `None`, the widget has no
    /// maximum constraint (can grow indefinitely).
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set minimum dimensions.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.minimum.unwrap_or(Size::ZERO);
        let max = self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX));

        Size::new(
            size.width.clamp(min.width, max.width),
            size.height.clamp(min.height, max.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_policy_growth() {
        assert!(!SizePolicy::Fixed.can_grow());
        assert!(SizePolicy::Preferred.can_grow());
        assert!(SizePolicy::Expanding.can_grow());

        assert!(!SizePolicy::Preferred.wants_to_grow());
        assert!(SizePolicy::Expanding.wants_to_grow());
    }

    #[test]
    fn test_size_policy_pair_default() {
        let policy = SizePolicyPair::default();
        assert_eq!(policy.horizontal, SizePolicy::Preferred);
        assert_eq!(policy.vertical, SizePolicy::Preferred);
    }

    #[test]
    fn test_size_hint_constrain() {
        let hint = SizeHint::new(Size::new(100.0, 100.0))
            .with_minimum(Size::new(50.0, 50.0))
            .with_maximum(Size::new(200.0, 200.0));

        assert_eq!(
            hint.constrain(Size::new(150.0, 150.0)),
            Size::new(150.0, 150.0)
        );
        assert_eq!(hint.constrain(Size::new(25.0, 25.0)), Size::new(50.0, 50.0));
        assert_eq!(
            hint.constrain(Size::new(300.0, 300.0)),
            Size::new(200.0, 200.0)
        );
    }
}
