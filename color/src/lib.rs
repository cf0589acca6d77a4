// halftone/color/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Color handling: 8-bit and floating point colors, blending, and color separation.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, Not, Sub, SubAssign};

pub mod blend;
pub mod matrix;

pub use crate::blend::BlendMethod;
pub use crate::matrix::SeparationMatrix;

/// Differences in alpha below this are treated as zero when blending.
pub const COLOR_EPSILON: f32 = 0.000001;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> ColorU {
        ColorU { r, g, b, a }
    }

    #[inline]
    pub fn from_u32(rgba: u32) -> ColorU {
        ColorU {
            r: (rgba >> 24) as u8,
            g: ((rgba >> 16) & 0xff) as u8,
            b: ((rgba >> 8) & 0xff) as u8,
            a: (rgba & 0xff) as u8,
        }
    }

    #[inline]
    pub fn transparent_black() -> ColorU {
        ColorU::default()
    }

    #[inline]
    pub fn to_f32(&self) -> ColorF {
        let scale = 1.0 / 255.0;
        ColorF::new(self.r as f32 * scale,
                    self.g as f32 * scale,
                    self.b as f32 * scale,
                    self.a as f32 * scale)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl Debug for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.a == 255 {
            write!(formatter, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(formatter,
                   "rgba({}, {}, {}, {})",
                   self.r,
                   self.g,
                   self.b,
                   self.a as f32 / 255.0)
        }
    }
}

/// A straight-alpha RGBA color with floating point components.
///
/// Components are nominally in `[0, 1]` but are not clamped; intermediate results of
/// compositing may leave that range.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct ColorF(pub [f32; 4]);

impl ColorF {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> ColorF {
        ColorF([r, g, b, a])
    }

    #[inline]
    pub fn transparent_black() -> ColorF {
        ColorF::default()
    }

    #[inline]
    pub fn white() -> ColorF {
        ColorF::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn black() -> ColorF {
        ColorF::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn red() -> ColorF {
        ColorF::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn green() -> ColorF {
        ColorF::new(0.0, 1.0, 0.0, 1.0)
    }

    #[inline]
    pub fn blue() -> ColorF {
        ColorF::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn cyan() -> ColorF {
        ColorF::new(0.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn magenta() -> ColorF {
        ColorF::new(1.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn yellow() -> ColorF {
        ColorF::new(1.0, 1.0, 0.0, 1.0)
    }

    #[inline]
    pub fn to_u8(&self) -> ColorU {
        let channel = |value: f32| (value.max(0.0).min(1.0) * 255.0).round() as u8;
        ColorU {
            r: channel(self.r()),
            g: channel(self.g()),
            b: channel(self.b()),
            a: channel(self.a()),
        }
    }

    #[inline]
    pub fn lerp(&self, other: ColorF, t: f32) -> ColorF {
        *self + (other - *self) * t
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    #[inline]
    pub fn set_a(&mut self, a: f32) {
        self.0[3] = a;
    }

    #[inline]
    pub fn with_alpha(mut self, a: f32) -> ColorF {
        self.set_a(a);
        self
    }

    /// Maps each color channel through `f`, leaving alpha alone.
    #[inline]
    pub fn map_rgb<F>(self, f: F) -> ColorF where F: Fn(f32) -> f32 {
        ColorF::new(f(self.r()), f(self.g()), f(self.b()), self.a())
    }

    #[inline]
    pub fn is_fully_transparent(&self) -> bool {
        self.a() == 0.0
    }

    /// Shorthand for `method.blend(src, dest, amount)`.
    #[inline]
    pub fn blend(src: ColorF, dest: ColorF, amount: f32, method: BlendMethod) -> ColorF {
        method.blend(src, dest, amount)
    }
}

impl Debug for ColorF {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter,
               "rgbaf({}, {}, {}, {})",
               self.r(),
               self.g(),
               self.b(),
               self.a())
    }
}

impl Add<ColorF> for ColorF {
    type Output = ColorF;
    #[inline]
    fn add(self, other: ColorF) -> ColorF {
        ColorF([self.0[0] + other.0[0],
                self.0[1] + other.0[1],
                self.0[2] + other.0[2],
                self.0[3] + other.0[3]])
    }
}

impl AddAssign<ColorF> for ColorF {
    #[inline]
    fn add_assign(&mut self, other: ColorF) {
        *self = *self + other
    }
}

impl Sub<ColorF> for ColorF {
    type Output = ColorF;
    #[inline]
    fn sub(self, other: ColorF) -> ColorF {
        ColorF([self.0[0] - other.0[0],
                self.0[1] - other.0[1],
                self.0[2] - other.0[2],
                self.0[3] - other.0[3]])
    }
}

impl SubAssign<ColorF> for ColorF {
    #[inline]
    fn sub_assign(&mut self, other: ColorF) {
        *self = *self - other
    }
}

/// Scales all four components, alpha included.
impl Mul<f32> for ColorF {
    type Output = ColorF;
    #[inline]
    fn mul(self, factor: f32) -> ColorF {
        ColorF([self.0[0] * factor, self.0[1] * factor, self.0[2] * factor, self.0[3] * factor])
    }
}

impl Div<f32> for ColorF {
    type Output = ColorF;
    #[inline]
    fn div(self, divisor: f32) -> ColorF {
        ColorF([self.0[0] / divisor, self.0[1] / divisor, self.0[2] / divisor, self.0[3] / divisor])
    }
}

/// The complement: `1 - c` per color channel, alpha unchanged.
impl Not for ColorF {
    type Output = ColorF;
    #[inline]
    fn not(self) -> ColorF {
        self.map_rgb(|value| 1.0 - value)
    }
}

#[cfg(test)]
mod test {
    use super::{ColorF, ColorU};

    #[test]
    fn test_complement_keeps_alpha() {
        let color = ColorF::new(0.25, 0.5, 1.0, 0.3);
        assert_eq!(!color, ColorF::new(0.75, 0.5, 0.0, 0.3));
        assert_eq!(!ColorF::cyan(), ColorF::red());
        assert_eq!(!ColorF::magenta(), ColorF::green());
        assert_eq!(!ColorF::yellow(), ColorF::blue());
    }

    #[test]
    fn test_scalar_multiply_scales_alpha() {
        assert_eq!(ColorF::white() * 0.5, ColorF::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_u8_conversion() {
        let color = ColorU::from_u32(0xff8000cc);
        assert_eq!(color, ColorU::new(255, 128, 0, 204));
        assert_eq!(color.to_f32().to_u8(), color);
        assert_eq!(ColorF::new(1.5, -0.5, 0.5, 1.0).to_u8(), ColorU::new(255, 0, 128, 255));
        assert!(ColorF::black().to_u8().is_opaque());
        assert_eq!(format!("{:?}", ColorU::new(255, 0, 16, 255)), "#ff0010");
    }

    quickcheck! {
        fn prop_complement_is_involution(r: u8, g: u8, b: u8, a: u8) -> bool {
            let color = ColorU::new(r, g, b, a).to_f32();
            (!!color).to_u8() == color.to_u8()
        }
    }
}
