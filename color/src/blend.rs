// halftone/color/src/blend.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Blend methods for compositing a layer's output onto what lies beneath it.
//!
//! All methods operate on straight (non-premultiplied) colors. `amount` scales the effect of
//! the source; an amount of zero leaves the destination untouched for every method.

use crate::{ColorF, COLOR_EPSILON};

/// How a filtered color is combined with the color underneath.
///
/// The discriminants are the integer codes used by the parameter protocol.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BlendMethod {
    /// The source is placed over the destination, the usual "normal" mode.
    Composite = 0,
    /// The source replaces the destination, alpha included.
    Straight = 1,
    /// Each channel becomes the lighter of source and destination.
    Brighten = 2,
    /// Each channel becomes the darker of source and destination.
    Darken = 3,
    /// The source is added to the destination.
    Add = 4,
    /// The source is subtracted from the destination.
    Subtract = 5,
    /// The destination is multiplied by the source.
    Multiply = 6,
    /// The destination is divided by the source.
    Divide = 7,
    /// The source is placed underneath the destination.
    Behind = 12,
    /// Like `Composite`, but the destination keeps its alpha.
    Onto = 13,
    /// Multiplies the complements of source and destination, then complements the result.
    Screen = 16,
    /// Multiplies or screens depending on the source value.
    HardLight = 17,
    /// The absolute difference of source and destination.
    Difference = 18,
    /// Like `Straight`, but only where the destination is opaque.
    StraightOnto = 21,
}

impl Default for BlendMethod {
    #[inline]
    fn default() -> BlendMethod {
        BlendMethod::Composite
    }
}

static ALL_BLEND_METHODS: [BlendMethod; 14] = [
    BlendMethod::Composite,
    BlendMethod::Straight,
    BlendMethod::Brighten,
    BlendMethod::Darken,
    BlendMethod::Add,
    BlendMethod::Subtract,
    BlendMethod::Multiply,
    BlendMethod::Divide,
    BlendMethod::Behind,
    BlendMethod::Onto,
    BlendMethod::Screen,
    BlendMethod::HardLight,
    BlendMethod::Difference,
    BlendMethod::StraightOnto,
];

impl BlendMethod {
    #[inline]
    pub fn all() -> &'static [BlendMethod] {
        &ALL_BLEND_METHODS
    }

    pub fn from_i32(code: i32) -> Option<BlendMethod> {
        ALL_BLEND_METHODS.iter().cloned().find(|method| *method as i32 == code)
    }

    #[inline]
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            BlendMethod::Composite => "composite",
            BlendMethod::Straight => "straight",
            BlendMethod::Brighten => "brighten",
            BlendMethod::Darken => "darken",
            BlendMethod::Add => "add",
            BlendMethod::Subtract => "subtract",
            BlendMethod::Multiply => "multiply",
            BlendMethod::Divide => "divide",
            BlendMethod::Behind => "behind",
            BlendMethod::Onto => "onto",
            BlendMethod::Screen => "screen",
            BlendMethod::HardLight => "hard_light",
            BlendMethod::Difference => "difference",
            BlendMethod::StraightOnto => "straight_onto",
        }
    }

    pub fn from_name(name: &str) -> Option<BlendMethod> {
        ALL_BLEND_METHODS.iter().cloned().find(|method| method.name() == name)
    }

    /// Combines `src` with `dest`.
    pub fn blend(self, src: ColorF, dest: ColorF, amount: f32) -> ColorF {
        match self {
            BlendMethod::Composite => composite(src, dest, amount),
            BlendMethod::Straight => straight(src, dest, amount),
            BlendMethod::Onto => onto(src, dest, amount),
            BlendMethod::StraightOnto => {
                let src = src.with_alpha(src.a() * dest.a());
                straight(src, dest, amount)
            }
            BlendMethod::Behind => {
                let alpha = if src.a() == 0.0 { COLOR_EPSILON * amount } else { src.a() * amount };
                composite(dest, src.with_alpha(alpha), 1.0)
            }
            BlendMethod::Brighten => {
                let alpha = src.a() * amount;
                zip_rgb(src, dest, |s, d| d.max(s * alpha))
            }
            BlendMethod::Darken => {
                let alpha = src.a() * amount;
                zip_rgb(src, dest, |s, d| d.min((s - 1.0) * alpha + 1.0))
            }
            BlendMethod::Add => {
                let alpha = src.a() * amount;
                zip_rgb(src, dest, |s, d| d + s * alpha)
            }
            BlendMethod::Subtract => {
                let alpha = src.a() * amount;
                zip_rgb(src, dest, |s, d| d - s * alpha)
            }
            BlendMethod::Difference => {
                let alpha = src.a() * amount;
                zip_rgb(src, dest, |s, d| (d - s * alpha).abs())
            }
            BlendMethod::Multiply => {
                let (src, amount) = invert_negative_amount(src, amount);
                let amount = amount * src.a();
                zip_rgb(src, dest, |s, d| (d * s - d) * amount + d)
            }
            BlendMethod::Divide => {
                let (src, amount) = invert_negative_amount(src, amount);
                let amount = amount * src.a();
                zip_rgb(src, dest, |s, d| {
                    if s.abs() > COLOR_EPSILON { (d / s - d) * amount + d } else { d }
                })
            }
            BlendMethod::Screen => {
                let (src, amount) = invert_negative_amount(src, amount);
                let screened = zip_rgb(dest, src, |d, s| 1.0 - (1.0 - s) * (1.0 - d));
                onto(screened, dest, amount)
            }
            BlendMethod::HardLight => {
                let (src, amount) = invert_negative_amount(src, amount);
                let lit = zip_rgb(dest, src, |d, s| {
                    if s > 0.5 {
                        1.0 - (1.0 - (s * 2.0 - 1.0)) * (1.0 - d)
                    } else {
                        s * 2.0 * d
                    }
                });
                onto(lit, dest, amount)
            }
        }
    }
}

/// Computes `f(src, dest)` per color channel, keeping the alpha of `dest`.
#[inline]
fn zip_rgb<F>(src: ColorF, dest: ColorF, f: F) -> ColorF where F: Fn(f32, f32) -> f32 {
    ColorF::new(f(src.r(), dest.r()), f(src.g(), dest.g()), f(src.b(), dest.b()), dest.a())
}

#[inline]
fn invert_negative_amount(src: ColorF, amount: f32) -> (ColorF, f32) {
    if amount < 0.0 {
        (!src, -amount)
    } else {
        (src, amount)
    }
}

fn composite(src: ColorF, dest: ColorF, amount: f32) -> ColorF {
    let a_src = src.a() * amount;
    let a_dest = dest.a();
    let color = src * a_src + dest * a_dest * (1.0 - a_src);
    let a_out = a_src + a_dest * (1.0 - a_src);
    if a_out.abs() > COLOR_EPSILON {
        (color / a_out).with_alpha(a_out)
    } else {
        ColorF::transparent_black()
    }
}

fn straight(src: ColorF, dest: ColorF, amount: f32) -> ColorF {
    let a_out = (src.a() - dest.a()) * amount + dest.a();
    if a_out.abs() > COLOR_EPSILON {
        let color = (src * src.a() - dest * dest.a()) * amount + dest * dest.a();
        (color / a_out).with_alpha(a_out)
    } else {
        ColorF::transparent_black()
    }
}

fn onto(src: ColorF, dest: ColorF, amount: f32) -> ColorF {
    composite(src, dest.with_alpha(1.0), amount).with_alpha(dest.a())
}
