// halftone/renderer/src/surface.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A CPU-side buffer of floating point pixels.

use crate::error::RenderError;
use halftone_color::{ColorF, ColorU};

const BYTES_PER_PIXEL: usize = 4;

/// A row-major grid of colors.
#[derive(Clone, PartialEq, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<ColorF>,
}

impl Surface {
    /// A surface filled with one color.
    pub fn new(width: u32, height: u32, fill: ColorF) -> Surface {
        Surface { width, height, pixels: vec![fill; width as usize * height as usize] }
    }

    /// Wraps `pixels`, which must hold exactly `width * height` colors.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<ColorF>)
                       -> Result<Surface, RenderError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::BufferSizeMismatch {
                expected: expected * BYTES_PER_PIXEL,
                found: pixels.len() * BYTES_PER_PIXEL,
            });
        }
        Ok(Surface { width, height, pixels })
    }

    /// Decodes straight-alpha 8-bit RGBA data.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Surface, RenderError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(RenderError::BufferSizeMismatch { expected, found: data.len() });
        }
        let pixels = data.chunks_exact(BYTES_PER_PIXEL)
                         .map(|rgba| ColorU::new(rgba[0], rgba[1], rgba[2], rgba[3]).to_f32())
                         .collect();
        Ok(Surface { width, height, pixels })
    }

    /// Encodes as straight-alpha 8-bit RGBA, clamping out-of-range components.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for pixel in &self.pixels {
            let color = pixel.to_u8();
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        data
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[ColorF] {
        &self.pixels
    }

    /// The pixels of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[ColorF] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..(start + self.width as usize)]
    }

    /// The pixel at `(x, y)`, or `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorF> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Replaces the pixel at `(x, y)`. Returns false outside the surface.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: ColorF) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.pixels[index] = color;
                true
            }
            None => false,
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::Surface;
    use crate::error::RenderError;
    use halftone_color::ColorF;

    #[test]
    fn test_rgba8_conversion() {
        let data = [255, 0, 0, 255, 0, 0, 255, 128, 0, 0, 0, 0];
        let surface = Surface::from_rgba8(3, 1, &data).unwrap();
        assert_eq!(surface.pixel(0, 0), Some(ColorF::red()));
        assert_eq!(surface.pixel(2, 0), Some(ColorF::transparent_black()));
        assert!((surface.pixel(1, 0).unwrap().a() - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(surface.to_rgba8(), data.to_vec());
    }

    #[test]
    fn test_rgba8_size_mismatch() {
        assert_eq!(Surface::from_rgba8(2, 2, &[0; 12]),
                   Err(RenderError::BufferSizeMismatch { expected: 16, found: 12 }));
    }

    #[test]
    fn test_pixel_bounds() {
        let mut surface = Surface::new(2, 3, ColorF::white());
        assert!(surface.set_pixel(1, 2, ColorF::black()));
        assert!(!surface.set_pixel(2, 0, ColorF::black()));
        assert_eq!(surface.pixel(1, 2), Some(ColorF::black()));
        assert_eq!(surface.pixel(0, 3), None);
        assert_eq!(surface.row(2), &[ColorF::white(), ColorF::black()]);
    }

    #[test]
    fn test_out_of_range_colors_are_clamped() {
        let surface = Surface::new(1, 1, ColorF::new(1.5, -0.25, 0.5, 1.0));
        assert_eq!(surface.to_rgba8(), vec![255, 0, 128, 255]);
    }
}
