// halftone/geometry/src/vector.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Two-dimensional vectors.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D points and vectors with 32-bit floating point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2F {
    x: f32,
    y: f32,
}

impl Vector2F {
    #[inline]
    pub fn new(x: f32, y: f32) -> Vector2F {
        Vector2F { x, y }
    }

    #[inline]
    pub fn splat(value: f32) -> Vector2F {
        Vector2F { x: value, y: value }
    }

    #[inline]
    pub fn zero() -> Vector2F {
        Vector2F::default()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    #[inline]
    pub fn min(&self, other: Vector2F) -> Vector2F {
        Vector2F::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(&self, other: Vector2F) -> Vector2F {
        Vector2F::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn det(&self, other: Vector2F) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(&self, other: Vector2F) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn scale(&self, factor: f32) -> Vector2F {
        Vector2F::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn scale_xy(&self, factors: Vector2F) -> Vector2F {
        Vector2F::new(self.x * factors.x, self.y * factors.y)
    }

    #[inline]
    pub fn abs(&self) -> Vector2F {
        Vector2F::new(self.x.abs(), self.y.abs())
    }

    /// Treats this point as a vector and calculates its squared length.
    #[inline]
    pub fn square_length(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Treats this point as a vector and calculates its length.
    #[inline]
    pub fn length(&self) -> f32 {
        f32::sqrt(self.square_length())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Vector2F::default()
    }

    #[inline]
    pub fn lerp(&self, other: Vector2F, t: f32) -> Vector2F {
        *self + (other - *self).scale(t)
    }

    #[inline]
    pub fn to_i32(&self) -> Vector2I {
        Vector2I::new(self.x as i32, self.y as i32)
    }
}

impl Add<Vector2F> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn add(self, other: Vector2F) -> Vector2F {
        Vector2F::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vector2F> for Vector2F {
    #[inline]
    fn add_assign(&mut self, other: Vector2F) {
        *self = *self + other
    }
}

impl Sub<Vector2F> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn sub(self, other: Vector2F) -> Vector2F {
        Vector2F::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign<Vector2F> for Vector2F {
    #[inline]
    fn sub_assign(&mut self, other: Vector2F) {
        *self = *self - other
    }
}

impl Mul<Vector2F> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn mul(self, other: Vector2F) -> Vector2F {
        self.scale_xy(other)
    }
}

impl Mul<f32> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn mul(self, factor: f32) -> Vector2F {
        self.scale(factor)
    }
}

impl Div<Vector2F> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn div(self, other: Vector2F) -> Vector2F {
        Vector2F::new(self.x / other.x, self.y / other.y)
    }
}

impl Neg for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn neg(self) -> Vector2F {
        Vector2F::new(-self.x, -self.y)
    }
}

/// 2D points with 32-bit signed integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2I {
    x: i32,
    y: i32,
}

impl Vector2I {
    #[inline]
    pub fn new(x: i32, y: i32) -> Vector2I {
        Vector2I { x, y }
    }

    #[inline]
    pub fn splat(value: i32) -> Vector2I {
        Vector2I { x: value, y: value }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn area(&self) -> i32 {
        self.x * self.y
    }

    #[inline]
    pub fn to_f32(&self) -> Vector2F {
        Vector2F::new(self.x as f32, self.y as f32)
    }
}

impl Add<Vector2I> for Vector2I {
    type Output = Vector2I;
    #[inline]
    fn add(self, other: Vector2I) -> Vector2I {
        Vector2I::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Vector2I> for Vector2I {
    type Output = Vector2I;
    #[inline]
    fn sub(self, other: Vector2I) -> Vector2I {
        Vector2I::new(self.x - other.x, self.y - other.y)
    }
}
