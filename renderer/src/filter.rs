// halftone/renderer/src/filter.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs a per-pixel color filter over a surface.

use crate::concurrent::executor::Executor;
use crate::error::RenderError;
use crate::surface::Surface;
use halftone_color::{BlendMethod, ColorF};
use halftone_geometry::rect::RectF;
use halftone_geometry::vector::Vector2F;

/// Something that recolors one pixel at a time.
pub trait PixelFilter {
    /// The filtered color at the unit-space `point`, given the source color there.
    fn get_color(&self, point: Vector2F, in_color: ColorF) -> ColorF;

    /// The opacity the filtered color is blended with.
    fn amount(&self) -> f32;

    /// How the filtered color is blended over the source color.
    fn blend_method(&self) -> BlendMethod;
}

/// Where the surface lies in unit space.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RunParams {
    /// The unit-space rectangle covered by the whole surface.
    pub viewport: RectF,
}

impl RunParams {
    /// A viewport anchored at the unit-space origin with `pixels_per_unit` pixels along each
    /// unit of both axes.
    pub fn for_surface(surface: &Surface, pixels_per_unit: f32) -> RunParams {
        let size = Vector2F::new(surface.width() as f32, surface.height() as f32);
        RunParams { viewport: RectF::new(Vector2F::zero(), size / Vector2F::splat(pixels_per_unit)) }
    }
}

/// Applies a filter to every pixel of a surface.
pub trait FilterPixels {
    fn run<E>(&self, executor: &E, source: &Surface, params: &RunParams)
              -> Result<Surface, RenderError>
              where E: Executor;
}

impl<F> FilterPixels for F where F: PixelFilter + Sync {
    #[inline]
    fn run<E>(&self, executor: &E, source: &Surface, params: &RunParams)
              -> Result<Surface, RenderError>
              where E: Executor {
        run_filter(executor, self, source, params)
    }
}

/// Filters `source` row by row. Rows are independent; each one reads only the source and
/// the filter.
pub fn run_filter<E, F>(executor: &E, filter: &F, source: &Surface, params: &RunParams)
                        -> Result<Surface, RenderError>
                        where E: Executor, F: PixelFilter + Sync {
    if source.is_empty() {
        return Err(RenderError::EmptySurface);
    }
    let viewport = params.viewport;
    let finite = viewport.origin().x().is_finite() && viewport.origin().y().is_finite() &&
        viewport.width().is_finite() && viewport.height().is_finite();
    if viewport.is_empty() || !finite {
        return Err(RenderError::EmptyViewport);
    }

    let (width, height) = (source.width(), source.height());
    let pixel_size = viewport.size() / Vector2F::new(width as f32, height as f32);
    let origin = viewport.origin();
    let amount = filter.amount();
    let blend_method = filter.blend_method();
    let straight = amount == 1.0 && blend_method == BlendMethod::Straight;
    debug!("run_filter({}x{}, viewport={:?}, amount={}, blend={:?})",
           width,
           height,
           viewport,
           amount,
           blend_method);

    let pixels = executor.flatten_into_vector(height as usize, |y| {
        let center_y = y as f32 + 0.5;
        source.row(y as u32).iter().enumerate().map(|(x, &in_color)| {
            let point = origin + Vector2F::new(x as f32 + 0.5, center_y) * pixel_size;
            let color = filter.get_color(point, in_color);
            if straight {
                color
            } else {
                blend_method.blend(color, in_color, amount)
            }
        }).collect()
    });
    Surface::from_pixels(width, height, pixels)
}

#[cfg(test)]
mod test {
    use super::{FilterPixels, PixelFilter, RunParams};
    use crate::concurrent::executor::SequentialExecutor;
    use crate::error::RenderError;
    use crate::surface::Surface;
    use halftone_color::{BlendMethod, ColorF};
    use halftone_geometry::rect::RectF;
    use halftone_geometry::vector::Vector2F;

    /// Encodes the sample point in the red and green channels.
    struct PointColor {
        amount: f32,
        blend_method: BlendMethod,
    }

    impl PixelFilter for PointColor {
        fn get_color(&self, point: Vector2F, in_color: ColorF) -> ColorF {
            ColorF::new(point.x(), point.y(), 0.0, in_color.a())
        }

        fn amount(&self) -> f32 {
            self.amount
        }

        fn blend_method(&self) -> BlendMethod {
            self.blend_method
        }
    }

    fn straight() -> PointColor {
        PointColor { amount: 1.0, blend_method: BlendMethod::Straight }
    }

    #[test]
    fn test_samples_pixel_centers() {
        let source = Surface::new(2, 2, ColorF::white());
        let params = RunParams { viewport: RectF::new(Vector2F::new(1.0, 2.0),
                                                      Vector2F::new(4.0, 8.0)) };
        let output = straight().run(&SequentialExecutor, &source, &params).unwrap();
        assert_eq!(output.pixel(0, 0), Some(ColorF::new(2.0, 4.0, 0.0, 1.0)));
        assert_eq!(output.pixel(1, 0), Some(ColorF::new(4.0, 4.0, 0.0, 1.0)));
        assert_eq!(output.pixel(1, 1), Some(ColorF::new(4.0, 8.0, 0.0, 1.0)));
    }

    #[test]
    fn test_viewport_for_surface() {
        let source = Surface::new(30, 60, ColorF::white());
        let params = RunParams::for_surface(&source, 60.0);
        assert_eq!(params.viewport, RectF::new(Vector2F::zero(), Vector2F::new(0.5, 1.0)));
    }

    #[test]
    fn test_zero_amount_keeps_source() {
        let source = Surface::new(3, 2, ColorF::new(0.25, 0.5, 0.75, 1.0));
        let filter = PointColor { amount: 0.0, blend_method: BlendMethod::Composite };
        let params = RunParams::for_surface(&source, 1.0);
        let output = filter.run(&SequentialExecutor, &source, &params).unwrap();
        for (out, src) in output.pixels().iter().zip(source.pixels()) {
            assert!(out.0.iter().zip(src.0.iter()).all(|(a, b)| (a - b).abs() < 1e-6));
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = Surface::new(0, 4, ColorF::white());
        let params = RunParams { viewport: RectF::new(Vector2F::zero(), Vector2F::splat(1.0)) };
        assert_eq!(straight().run(&SequentialExecutor, &empty, &params),
                   Err(RenderError::EmptySurface));

        let source = Surface::new(4, 4, ColorF::white());
        let flat = RunParams { viewport: RectF::new(Vector2F::zero(), Vector2F::new(1.0, 0.0)) };
        assert_eq!(straight().run(&SequentialExecutor, &source, &flat),
                   Err(RenderError::EmptyViewport));
    }
}
