//! 2D affine transformations.
//!
//! Widgets receive a [`Transform2D`] on every draw call. Its translation is
//! the widget's center on screen and its scale stretches the widget's
//! logical size into screen pixels.

use crate::types::{Point, Size};

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix in column-major order:
/// ```text
/// | m00 m10 m20 |   | scale_x  skew_x   translate_x |
/// | m01 m11 m21 | = | skew_y   scale_y  translate_y |
/// ```
///
/// # Example
///
/// ```
/// use mtk_render::{Point, Transform2D};
///
/// // Transforms compose right-to-left with `then`
/// // (first translate, then scale).
/// let transform = Transform2D::scale(2.0).then(&Transform2D::translate(10.0, 0.0));
/// let p = transform.transform_point(Point::new(5.0, 0.0));
/// assert_eq!(p, Point::new(30.0, 0.0));
///
/// // Builder-style: move a child 20px to the right of its parent's center.
/// let child = Transform2D::translate(100.0, 100.0).translated(20.0, 0.0);
/// assert_eq!(child.translation(), Point::new(120.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Create a translation transform to a point.
    #[inline]
    pub const fn at(point: Point) -> Self {
        Self::translate(point.x, point.y)
    }

    /// Create a uniform scaling transform.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scaling transform.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Concatenate this transform with another (self * other).
    ///
    /// The resulting transform first applies `other`, then `self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self {
            m: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Move the transform's origin by a screen-space offset.
    ///
    /// The offset is not affected by the transform's own scale, so a child
    /// placed with `translated` lands the same number of pixels away from
    /// its parent regardless of zoom.
    #[inline]
    pub fn translated(&self, tx: f32, ty: f32) -> Self {
        Self::translate(tx, ty).then(self)
    }

    /// Move the transform's origin by an offset given as a point.
    #[inline]
    pub fn moved(&self, offset: Point) -> Self {
        self.translated(offset.x, offset.y)
    }

    /// Apply a uniform scale to this transform.
    #[inline]
    pub fn scaled(&self, s: f32) -> Self {
        self.then(&Self::scale(s))
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.m[0] * p.x + self.m[2] * p.y + self.m[4],
            y: self.m[1] * p.x + self.m[3] * p.y + self.m[5],
        }
    }

    /// Transform a size (ignores translation and skew).
    #[inline]
    pub fn transform_size(&self, size: Size) -> Size {
        let (sx, sy) = self.scale_factors();
        size.scaled(sx, sy)
    }

    /// Get the translation component.
    #[inline]
    pub fn translation(&self) -> Point {
        Point::new(self.m[4], self.m[5])
    }

    /// Get the length of the transformed x and y unit vectors.
    #[inline]
    pub fn scale_factors(&self) -> (f32, f32) {
        let sx = (self.m[0] * self.m[0] + self.m[1] * self.m[1]).sqrt();
        let sy = (self.m[2] * self.m[2] + self.m[3] * self.m[3]).sqrt();
        (sx, sy)
    }

    /// Check if this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Transform2D::IDENTITY.transform_point(p), p);
        assert!(Transform2D::default().is_identity());
    }

    #[test]
    fn test_translated_ignores_scale() {
        let t = Transform2D::translate(100.0, 50.0).scaled(2.0).translated(10.0, 0.0);
        assert_eq!(t.translation(), Point::new(110.0, 50.0));
        assert_eq!(t.scale_factors(), (2.0, 2.0));
    }

    #[test]
    fn test_transform_size() {
        let t = Transform2D::scale_xy(2.0, 3.0);
        assert_eq!(t.transform_size(Size::new(10.0, 10.0)), Size::new(20.0, 30.0));
    }
}
