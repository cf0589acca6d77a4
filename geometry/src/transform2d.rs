// halftone/geometry/src/transform2d.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D affine transforms.

use crate::angle::Angle;
use crate::rect::RectF;
use crate::vector::Vector2F;
use std::ops::Mul;

/// A 2x2 matrix in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2F {
    m11: f32,
    m12: f32,
    m21: f32,
    m22: f32,
}

impl Default for Matrix2x2F {
    #[inline]
    fn default() -> Matrix2x2F {
        Self::from_scale(Vector2F::splat(1.0))
    }
}

impl Matrix2x2F {
    #[inline]
    pub fn from_scale(scale: Vector2F) -> Matrix2x2F {
        Matrix2x2F::row_major(scale.x(), 0.0, 0.0, scale.y())
    }

    #[inline]
    pub fn from_rotation(theta: Angle) -> Matrix2x2F {
        let (sin, cos) = theta.sin_cos();
        Matrix2x2F::row_major(cos, -sin, sin, cos)
    }

    #[inline]
    pub fn row_major(m11: f32, m12: f32, m21: f32, m22: f32) -> Matrix2x2F {
        Matrix2x2F { m11, m12, m21, m22 }
    }

    /// Returns `self * other`.
    #[inline]
    pub fn post_mul(&self, other: &Matrix2x2F) -> Matrix2x2F {
        Matrix2x2F::row_major(self.m11 * other.m11 + self.m12 * other.m21,
                              self.m11 * other.m12 + self.m12 * other.m22,
                              self.m21 * other.m11 + self.m22 * other.m21,
                              self.m21 * other.m12 + self.m22 * other.m22)
    }

    #[inline]
    pub fn pre_mul(&self, other: &Matrix2x2F) -> Matrix2x2F {
        other.post_mul(self)
    }

    #[inline]
    pub fn adjugate(&self) -> Matrix2x2F {
        Matrix2x2F::row_major(self.m22, -self.m12, -self.m21, self.m11)
    }

    #[inline]
    pub fn transform_point(&self, point: Vector2F) -> Vector2F {
        Vector2F::new(self.m11 * point.x() + self.m12 * point.y(),
                      self.m21 * point.x() + self.m22 * point.y())
    }

    #[inline]
    pub fn det(&self) -> f32 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// A singular matrix produces non-finite entries.
    #[inline]
    pub fn inverse(&self) -> Matrix2x2F {
        let inv_det = 1.0 / self.det();
        let adjugate = self.adjugate();
        Matrix2x2F::row_major(adjugate.m11 * inv_det,
                              adjugate.m12 * inv_det,
                              adjugate.m21 * inv_det,
                              adjugate.m22 * inv_det)
    }

    #[inline]
    pub fn m11(&self) -> f32 {
        self.m11
    }
    #[inline]
    pub fn m12(&self) -> f32 {
        self.m12
    }
    #[inline]
    pub fn m21(&self) -> f32 {
        self.m21
    }
    #[inline]
    pub fn m22(&self) -> f32 {
        self.m22
    }
}

/// An affine transform: a linear part followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2F {
    pub matrix: Matrix2x2F,
    pub vector: Vector2F,
}

impl Default for Transform2F {
    #[inline]
    fn default() -> Transform2F {
        Self::from_scale(Vector2F::splat(1.0))
    }
}

impl Transform2F {
    #[inline]
    pub fn from_scale(scale: Vector2F) -> Transform2F {
        Transform2F { matrix: Matrix2x2F::from_scale(scale), vector: Vector2F::default() }
    }

    #[inline]
    pub fn from_uniform_scale(scale: f32) -> Transform2F {
        Transform2F::from_scale(Vector2F::splat(scale))
    }

    #[inline]
    pub fn from_rotation(theta: Angle) -> Transform2F {
        Transform2F { matrix: Matrix2x2F::from_rotation(theta), vector: Vector2F::default() }
    }

    #[inline]
    pub fn from_translation(vector: Vector2F) -> Transform2F {
        Transform2F { matrix: Matrix2x2F::default(), vector }
    }

    #[inline]
    pub fn row_major(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Transform2F {
        Transform2F {
            matrix: Matrix2x2F::row_major(m11, m12, m21, m22),
            vector: Vector2F::new(m31, m32),
        }
    }

    #[inline]
    pub fn transform_point(&self, point: Vector2F) -> Vector2F {
        self.matrix.transform_point(point) + self.vector
    }

    /// Returns the axis-aligned bounds of the transformed rectangle.
    pub fn transform_rect(&self, rect: &RectF) -> RectF {
        let lower_left = Vector2F::new(rect.origin().x(), rect.lower_right().y());
        let upper_right = Vector2F::new(rect.lower_right().x(), rect.origin().y());
        let corners = [
            self.transform_point(rect.origin()),
            self.transform_point(upper_right),
            self.transform_point(lower_left),
            self.transform_point(rect.lower_right()),
        ];
        let mut min_point = corners[0];
        let mut max_point = corners[0];
        for corner in &corners[1..] {
            min_point = min_point.min(*corner);
            max_point = max_point.max(*corner);
        }
        RectF::from_points(min_point, max_point)
    }

    /// Returns a transform that applies `self` and then `other`.
    #[inline]
    pub fn then(&self, other: &Transform2F) -> Transform2F {
        Transform2F {
            matrix: other.matrix.post_mul(&self.matrix),
            vector: other.transform_point(self.vector),
        }
    }

    /// The inverse transform. A singular transform yields non-finite results.
    #[inline]
    pub fn inverse(&self) -> Transform2F {
        let matrix_inv = self.matrix.inverse();
        let vector_inv = -matrix_inv.transform_point(self.vector);
        Transform2F { matrix: matrix_inv, vector: vector_inv }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Transform2F::default()
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.matrix.det();
        det != 0.0 && det.is_finite()
    }

    #[inline]
    pub fn translate(&self, vector: Vector2F) -> Transform2F {
        self.then(&Transform2F::from_translation(vector))
    }

    #[inline]
    pub fn rotate(&self, theta: Angle) -> Transform2F {
        self.then(&Transform2F::from_rotation(theta))
    }

    #[inline]
    pub fn scale(&self, scale: Vector2F) -> Transform2F {
        self.then(&Transform2F::from_scale(scale))
    }

    #[inline]
    pub fn translation(&self) -> Vector2F {
        self.vector
    }
}

impl Mul<Vector2F> for Transform2F {
    type Output = Vector2F;
    #[inline]
    fn mul(self, point: Vector2F) -> Vector2F {
        self.transform_point(point)
    }
}
