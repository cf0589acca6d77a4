// halftone/geometry/src/rect.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D axis-aligned rectangles.

use crate::vector::Vector2F;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    origin: Vector2F,
    lower_right: Vector2F,
}

impl RectF {
    #[inline]
    pub fn new(origin: Vector2F, size: Vector2F) -> RectF {
        RectF { origin, lower_right: origin + size }
    }

    #[inline]
    pub fn from_points(origin: Vector2F, lower_right: Vector2F) -> RectF {
        RectF { origin, lower_right }
    }

    #[inline]
    pub fn origin(&self) -> Vector2F {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Vector2F {
        self.lower_right - self.origin
    }

    #[inline]
    pub fn lower_right(&self) -> Vector2F {
        self.lower_right
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y()
    }

    #[inline]
    pub fn center(&self) -> Vector2F {
        self.origin.lerp(self.lower_right, 0.5)
    }

    /// True if the rectangle covers no area along at least one axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    #[inline]
    pub fn contains_point(&self, point: Vector2F) -> bool {
        let min = self.origin.min(self.lower_right);
        let max = self.origin.max(self.lower_right);
        min.x() <= point.x() && point.x() <= max.x() && min.y() <= point.y() && point.y() <= max.y()
    }
}

#[cfg(test)]
mod test {
    use super::RectF;
    use crate::vector::Vector2F;

    #[test]
    fn test_size_and_center() {
        let rect = RectF::new(Vector2F::new(-1.0, -2.0), Vector2F::new(2.0, 4.0));
        assert_eq!(rect.lower_right(), Vector2F::new(1.0, 2.0));
        assert_eq!(rect.center(), Vector2F::zero());
        assert!(rect.contains_point(Vector2F::new(0.5, -1.5)));
        assert!(!rect.contains_point(Vector2F::new(1.5, 0.0)));
        assert!(!rect.is_empty());
    }

    #[test]
    fn test_flipped_rect_contains() {
        let rect = RectF::from_points(Vector2F::new(0.0, 1.0), Vector2F::new(1.0, 0.0));
        assert!(rect.contains_point(Vector2F::new(0.5, 0.5)));
        assert_eq!(rect.height(), -1.0);
    }

    #[test]
    fn test_empty() {
        assert!(RectF::default().is_empty());
        assert!(RectF::new(Vector2F::zero(), Vector2F::new(3.0, 0.0)).is_empty());
    }
}
