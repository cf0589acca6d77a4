// halftone/renderer/src/task.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable render snapshots of a halftone layer.

use crate::concurrent::executor::SequentialExecutor;
use crate::concurrent::rayon::RayonExecutor;
use crate::error::RenderError;
use crate::filter::{FilterPixels, PixelFilter, RunParams};
use crate::options::{ExecutorKind, RenderOptions};
use crate::surface::Surface;
use halftone_color::{BlendMethod, ColorF};
use halftone_content::composite::ColorSeparation;
use halftone_content::mask::HalftoneMask;
use halftone_content::params::CHANNEL_COUNT;
use halftone_content::Halftone3;
use halftone_geometry::transform2d::Transform2F;
use halftone_geometry::vector::Vector2F;
use rayon::ThreadPoolBuilder;

/// Everything needed to render a halftone layer, copied out of it.
///
/// Later changes to the layer do not affect an existing task.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HalftoneTask {
    /// Maps mask space to unit space.
    pub transform: Transform2F,
    pub masks: [HalftoneMask; CHANNEL_COUNT],
    pub separation: ColorSeparation,
    pub size: Vector2F,
    pub amount: f32,
    pub blend_method: BlendMethod,
}

/// Snapshots a layer into a task.
pub trait BuildHalftoneTask {
    fn build_task(&self, transform: Transform2F) -> HalftoneTask;
}

impl BuildHalftoneTask for Halftone3 {
    #[inline]
    fn build_task(&self, transform: Transform2F) -> HalftoneTask {
        HalftoneTask::from_layer(self, transform)
    }
}

impl HalftoneTask {
    pub fn from_layer(layer: &Halftone3, transform: Transform2F) -> HalftoneTask {
        let task = HalftoneTask {
            transform,
            masks: layer.masks(),
            separation: *layer.separation(),
            size: layer.size(),
            amount: layer.amount(),
            blend_method: layer.blend_method(),
        };
        debug!("built halftone task: size={:?} subtractive={} transform={:?}",
               task.size,
               task.separation.is_subtractive(),
               task.transform);
        task
    }

    /// Fixes the pixel density, which determines the antialiasing footprint.
    pub fn prepare(&self, pixels_per_unit: Vector2F) -> PreparedHalftoneTask {
        let inverse = self.transform.inverse();
        let supersample = 1.0 / (pixels_per_unit.x() * self.size.length()).abs();
        debug!("prepared halftone task: supersample={} inverse={:?}", supersample, inverse);
        PreparedHalftoneTask {
            inverse,
            masks: self.masks,
            separation: self.separation,
            amount: self.amount,
            blend_method: self.blend_method,
            supersample,
        }
    }

    /// Prepares for `options.pixels_per_unit` and filters `source`, whose top left pixel lies
    /// at the unit-space origin.
    pub fn render(&self, source: &Surface, options: &RenderOptions)
                  -> Result<Surface, RenderError> {
        let pixels_per_unit = options.pixels_per_unit;
        if !(pixels_per_unit > 0.0 && pixels_per_unit.is_finite()) {
            return Err(RenderError::InvalidPixelsPerUnit(pixels_per_unit));
        }

        let prepared = self.prepare(Vector2F::splat(pixels_per_unit));
        let params = RunParams::for_surface(source, pixels_per_unit);
        match (options.executor, options.jobs) {
            (ExecutorKind::Sequential, _) => prepared.run(&SequentialExecutor, source, &params),
            (ExecutorKind::Rayon, None) => prepared.run(&RayonExecutor, source, &params),
            (ExecutorKind::Rayon, Some(jobs)) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .map_err(|err| RenderError::ThreadPool(err.to_string()))?;
                pool.install(|| prepared.run(&RayonExecutor, source, &params))
            }
        }
    }
}

/// A task ready to be evaluated per pixel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreparedHalftoneTask {
    /// Maps unit space to mask space.
    pub inverse: Transform2F,
    pub masks: [HalftoneMask; CHANNEL_COUNT],
    pub separation: ColorSeparation,
    pub amount: f32,
    pub blend_method: BlendMethod,
    /// The antialiasing radius, in mask periods.
    pub supersample: f32,
}

impl PixelFilter for PreparedHalftoneTask {
    #[inline]
    fn get_color(&self, point: Vector2F, in_color: ColorF) -> ColorF {
        let mask_point = self.inverse * point;
        self.separation.evaluate(&self.masks, mask_point, in_color, self.supersample)
    }

    #[inline]
    fn amount(&self) -> f32 {
        self.amount
    }

    #[inline]
    fn blend_method(&self) -> BlendMethod {
        self.blend_method
    }
}

#[cfg(test)]
mod test {
    use super::{BuildHalftoneTask, HalftoneTask};
    use crate::filter::PixelFilter;
    use halftone_color::ColorF;
    use halftone_content::Halftone3;
    use halftone_geometry::transform2d::Transform2F;
    use halftone_geometry::vector::Vector2F;

    #[test]
    fn test_supersample_radius() {
        let mut layer = Halftone3::new();
        layer.set_size(Vector2F::new(0.3, 0.4));
        let prepared = layer.build_task(Transform2F::default()).prepare(Vector2F::splat(10.0));
        assert!((prepared.supersample - 0.2).abs() < 1e-6);

        let flipped = HalftoneTask::from_layer(&layer, Transform2F::default())
            .prepare(Vector2F::new(-10.0, 3.0));
        assert!((flipped.supersample - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_transform_reaches_the_mask() {
        let layer = Halftone3::new();
        let offset = Vector2F::new(0.5, -1.25);
        let moved = layer.build_task(Transform2F::from_translation(offset))
                         .prepare(Vector2F::splat(60.0));
        let fixed = layer.build_task(Transform2F::default()).prepare(Vector2F::splat(60.0));
        let in_color = ColorF::new(0.3, 0.6, 0.9, 1.0);
        for step in 0..8 {
            let point = Vector2F::new(step as f32 * 0.125, step as f32 * 0.0625);
            assert_eq!(moved.get_color(point + offset, in_color),
                       fixed.get_color(point, in_color));
        }
    }

    #[test]
    fn test_transparent_in_transparent_out() {
        let prepared = Halftone3::new().build_task(Transform2F::default())
                                       .prepare(Vector2F::splat(60.0));
        let out = prepared.get_color(Vector2F::new(0.2, 0.9), ColorF::transparent_black());
        assert_eq!(out.a(), 0.0);
    }

    #[test]
    fn test_snapshot_copies_parameters() {
        let mut layer = Halftone3::with_mode(false);
        layer.set_amount(0.25);
        let task = layer.build_task(Transform2F::default());
        assert_eq!(task.amount, 0.25);
        assert_eq!(task.masks, layer.masks());
        assert_eq!(task.separation, *layer.separation());
        assert!(!task.separation.is_subtractive());
    }
}
