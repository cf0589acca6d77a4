// halftone/content/src/composite.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recombining three screened channels into a color.

use crate::mask::ToneMask;
use crate::params::{Channel, CHANNEL_COUNT};
use halftone_color::{ColorF, SeparationMatrix};
use halftone_geometry::vector::Vector2F;

/// Three primaries, the compositing model, and the separation matrix derived from them.
///
/// The matrix is rebuilt inside every mutator, so it always matches the primaries and mode.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColorSeparation {
    colors: [ColorF; CHANNEL_COUNT],
    subtractive: bool,
    matrix: SeparationMatrix,
}

impl ColorSeparation {
    /// Separates into the given primaries.
    pub fn new(colors: [ColorF; CHANNEL_COUNT], subtractive: bool) -> ColorSeparation {
        let matrix = SeparationMatrix::build(&colors, subtractive);
        ColorSeparation { colors, subtractive, matrix }
    }

    /// Cyan, magenta and yellow inks.
    #[inline]
    pub fn cmy() -> ColorSeparation {
        ColorSeparation::new([ColorF::cyan(), ColorF::magenta(), ColorF::yellow()], true)
    }

    /// Red, green and blue lights.
    #[inline]
    pub fn rgb() -> ColorSeparation {
        ColorSeparation::new([ColorF::red(), ColorF::green(), ColorF::blue()], false)
    }

    /// The primary color of `channel`.
    #[inline]
    pub fn color(&self, channel: Channel) -> ColorF {
        self.colors[channel.index()]
    }

    /// All three primaries.
    #[inline]
    pub fn colors(&self) -> &[ColorF; CHANNEL_COUNT] {
        &self.colors
    }

    /// True if primaries are inks subtracted from white.
    #[inline]
    pub fn is_subtractive(&self) -> bool {
        self.subtractive
    }

    /// The matrix mapping RGB to channel intensities.
    #[inline]
    pub fn matrix(&self) -> &SeparationMatrix {
        &self.matrix
    }

    /// Replaces one primary and rebuilds the matrix.
    pub fn set_color(&mut self, channel: Channel, color: ColorF) {
        self.colors[channel.index()] = color;
        self.rebuild();
    }

    /// Switches the compositing model and rebuilds the matrix.
    pub fn set_subtractive(&mut self, subtractive: bool) {
        self.subtractive = subtractive;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.matrix = SeparationMatrix::build(&self.colors, self.subtractive);
    }

    /// The intensity of each channel in `color`.
    #[inline]
    pub fn intensities(&self, color: ColorF) -> [f32; CHANNEL_COUNT] {
        self.matrix.separate(color, self.subtractive)
    }

    /// Screens `in_color` at `mask_point` through one mask per channel.
    #[inline]
    pub fn evaluate<M>(&self,
                       masks: &[M; CHANNEL_COUNT],
                       mask_point: Vector2F,
                       in_color: ColorF,
                       supersample: f32)
                       -> ColorF
                       where M: ToneMask {
        let chan = self.intensities(in_color);
        let tones = [
            masks[0].tone(mask_point, chan[0], supersample),
            masks[1].tone(mask_point, chan[1], supersample),
            masks[2].tone(mask_point, chan[2], supersample),
        ];
        self.composite(tones, in_color.a())
    }

    /// Combines per-channel coverages into a color with the given alpha.
    #[inline]
    pub fn composite(&self, tones: [f32; CHANNEL_COUNT], alpha: f32) -> ColorF {
        if self.subtractive {
            composite_subtractive(&self.colors, tones, alpha)
        } else {
            composite_additive(&self.colors, tones, alpha)
        }
    }
}

impl Default for ColorSeparation {
    #[inline]
    fn default() -> ColorSeparation {
        ColorSeparation::cmy()
    }
}

/// Paper white minus the complement of each ink, weighted by its coverage.
#[inline]
pub fn composite_subtractive(colors: &[ColorF; CHANNEL_COUNT],
                             tones: [f32; CHANNEL_COUNT],
                             alpha: f32)
                             -> ColorF {
    let mut color = ColorF::white();
    color -= !colors[0] * tones[0];
    color -= !colors[1] * tones[1];
    color -= !colors[2] * tones[2];
    color.with_alpha(alpha)
}

/// Black plus each light, weighted by its coverage.
#[inline]
pub fn composite_additive(colors: &[ColorF; CHANNEL_COUNT],
                          tones: [f32; CHANNEL_COUNT],
                          alpha: f32)
                          -> ColorF {
    let mut color = ColorF::black();
    color += colors[0] * tones[0];
    color += colors[1] * tones[1];
    color += colors[2] * tones[2];
    color.with_alpha(alpha)
}
