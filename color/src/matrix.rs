// halftone/color/src/matrix.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Color separation into three primaries.

use crate::ColorF;
use std::ops::Deref;

/// Maps an RGB triple to one intensity per primary color.
///
/// Row `i` is derived from primary `i`: its RGB components (complemented in subtractive
/// mode) divided by the squared Euclidean length of that vector. A black primary, or a
/// white one in subtractive mode, yields an all-zero row.
///
/// Dividing by the squared length rather than the length is the behavior existing
/// documents were authored against; see DESIGN.md before changing it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparationMatrix(pub [[f32; 3]; 3]);

impl Default for SeparationMatrix {
    #[inline]
    fn default() -> SeparationMatrix {
        SeparationMatrix::identity()
    }
}

impl SeparationMatrix {
    #[inline]
    pub fn identity() -> SeparationMatrix {
        SeparationMatrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Builds the matrix for the given primaries.
    pub fn build(colors: &[ColorF; 3], subtractive: bool) -> SeparationMatrix {
        let mut rows = [[0.0; 3]; 3];
        for (row, color) in rows.iter_mut().zip(colors.iter()) {
            *row = if subtractive { (!*color).rgb() } else { color.rgb() };
            let mult = f32::sqrt(row[0] * row[0] + row[1] * row[1] + row[2] * row[2]);
            if mult != 0.0 {
                for _ in 0..2 {
                    for value in row.iter_mut() {
                        *value /= mult;
                    }
                }
            }
        }
        debug!("built {} separation matrix {:?}",
               if subtractive { "subtractive" } else { "additive" },
               rows);
        SeparationMatrix(rows)
    }

    /// Row-major matrix-vector product.
    #[inline]
    pub fn apply(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// The per-primary intensities of `color` in the given mode.
    #[inline]
    pub fn separate(&self, color: ColorF, subtractive: bool) -> [f32; 3] {
        if subtractive {
            self.apply((!color).rgb())
        } else {
            self.apply(color.rgb())
        }
    }

    #[inline]
    pub fn row(&self, index: usize) -> [f32; 3] {
        self.0[index]
    }
}

impl Deref for SeparationMatrix {
    type Target = [[f32; 3]; 3];

    #[inline]
    fn deref(&self) -> &[[f32; 3]; 3] {
        &self.0
    }
}
