//! 2D affine transforms.

/// A 2D affine transform stored as a row-major 2x3 matrix.
///
/// ```text
/// | m0 m1 m2 |   | x |
/// | m3 m4 m5 | * | y |
///               | 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Create a uniform scale transform.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scale transform.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        }
    }

    /// Create a translation transform.
    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self {
            m: [1.0, 0.0, dx, 0.0, 1.0, dy],
        }
    }

    /// Compose with another transform, applying `self` first, then `other`.
    pub fn then(&self, other: &Self) -> Self {
        let a = &other.m;
        let b = &self.m;
        Self {
            m: [
                a[0] * b[0] + a[1] * b[3],
                a[0] * b[1] + a[1] * b[4],
                a[0] * b[2] + a[1] * b[5] + a[2],
                a[3] * b[0] + a[4] * b[3],
                a[3] * b[1] + a[4] * b[4],
                a[3] * b[2] + a[4] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.m[0] * x + self.m[1] * y + self.m[2],
            self.m[3] * x + self.m[4] * y + self.m[5],
        )
    }

    /// Check whether this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The x and y scale components.
    #[inline]
    pub fn scale_factors(&self) -> (f32, f32) {
        (self.m[0], self.m[4])
    }
}

static_assertions::assert_impl_all!(Transform2D: Send, Sync);
