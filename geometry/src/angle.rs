// halftone/geometry/src/angle.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Angles with an explicit unit.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

/// An angle, stored in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    #[inline]
    pub fn from_radians(radians: f32) -> Angle {
        Angle(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f32) -> Angle {
        Angle(degrees * (PI / 180.0))
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0 * (180.0 / PI)
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }

    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
}

impl Add<Angle> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle(self.0 + other.0)
    }
}

impl Sub<Angle> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle(self.0 - other.0)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, factor: f32) -> Angle {
        Angle(self.0 * factor)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

#[cfg(test)]
mod test {
    use super::Angle;

    #[test]
    fn test_degree_conversion() {
        let angle = Angle::from_degrees(30.0) * 2.0;
        assert!((angle.degrees() - 60.0).abs() < 1e-4);
        assert!((Angle::from_degrees(90.0).sin() - 1.0).abs() < 1e-6);
        assert_eq!((-Angle::from_radians(0.5)).radians(), -0.5);
    }
}
