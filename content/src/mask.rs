// halftone/content/src/mask.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Periodic halftone screens.
//!
//! A screen is a threshold field tiled over the plane. Comparing the threshold at a point with
//! an ink intensity decides whether that point is covered by a dot. Supersampling widens the
//! comparison into a ramp so dot edges come out antialiased.

use halftone_geometry::angle::Angle;
use halftone_geometry::vector::Vector2F;
use std::f32::consts::SQRT_2;

/// Supersample radii at or above this flatten the threshold field entirely.
pub const MAX_SUPERSAMPLE: f32 = 0.5;

/// Coverage ramps closer than this to either end snap to full or no coverage.
const COVERAGE_SNAP: f32 = 0.01;

/// Slight overshoot applied to the dot profile so that intensities 0 and 1 produce solid
/// paper and solid ink respectively.
const PROFILE_OVERSHOOT: f32 = 1.01;

/// The shape of the dots in a halftone screen.
///
/// The discriminants are the integer codes used by the parameter protocol. Code 1 is reserved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MaskType {
    /// Round dots that grow into each other and invert past half intensity.
    Symmetric = 0,
    /// Round light dots on a dark field.
    LightOnDark = 2,
    /// Dots that grow into diamonds.
    Diamond = 3,
    /// Parallel lines.
    Stripe = 4,
}

impl Default for MaskType {
    #[inline]
    fn default() -> MaskType {
        MaskType::Symmetric
    }
}

static ALL_MASK_TYPES: [MaskType; 4] =
    [MaskType::Symmetric, MaskType::LightOnDark, MaskType::Diamond, MaskType::Stripe];

impl MaskType {
    /// Every supported mask type, in vocabulary order.
    #[inline]
    pub fn all() -> &'static [MaskType] {
        &ALL_MASK_TYPES
    }

    /// Looks up a mask type by its integer code.
    pub fn from_i32(code: i32) -> Option<MaskType> {
        ALL_MASK_TYPES.iter().cloned().find(|mask_type| *mask_type as i32 == code)
    }

    /// The integer code of this mask type.
    #[inline]
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// The identifier used in vocabularies and presets.
    pub fn name(self) -> &'static str {
        match self {
            MaskType::Symmetric => "symmetric",
            MaskType::LightOnDark => "lightondark",
            MaskType::Diamond => "diamond",
            MaskType::Stripe => "stripe",
        }
    }

    /// The human-readable name.
    pub fn local_name(self) -> &'static str {
        match self {
            MaskType::Symmetric => "Symmetric",
            MaskType::LightOnDark => "Light On Dark",
            MaskType::Diamond => "Diamond",
            MaskType::Stripe => "Stripe",
        }
    }

    /// Looks up a mask type by identifier.
    pub fn from_name(name: &str) -> Option<MaskType> {
        ALL_MASK_TYPES.iter().cloned().find(|mask_type| mask_type.name() == name)
    }
}

/// Something that turns an intensity at a point into dot coverage.
pub trait ToneMask {
    /// Returns the coverage in `[0, 1]` at `point` for the given ink `intensity`, averaged over a
    /// footprint of radius `supersample` (in mask periods).
    fn tone(&self, point: Vector2F, intensity: f32, supersample: f32) -> f32;
}

/// Screen settings shared by all channels of a layer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenSettings {
    /// The spacing of the dot lattice along each axis.
    pub size: Vector2F,
    /// The dot shape.
    pub mask_type: MaskType,
}

impl Default for ScreenSettings {
    #[inline]
    fn default() -> ScreenSettings {
        ScreenSettings { size: Vector2F::splat(0.25), mask_type: MaskType::Symmetric }
    }
}

/// The placement of one channel's screen.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ChannelScreen {
    /// The point the lattice is anchored at.
    pub origin: Vector2F,
    /// The rotation of the lattice.
    pub angle: Angle,
}

/// A fully specified halftone screen for one channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HalftoneMask {
    /// The spacing of the dot lattice along each axis.
    pub size: Vector2F,
    /// The dot shape.
    pub mask_type: MaskType,
    /// The point the lattice is anchored at.
    pub origin: Vector2F,
    /// The rotation of the lattice.
    pub angle: Angle,
}

impl HalftoneMask {
    /// Combines the shared settings with one channel's placement.
    #[inline]
    pub fn new(settings: &ScreenSettings, channel: &ChannelScreen) -> HalftoneMask {
        HalftoneMask {
            size: settings.size,
            mask_type: settings.mask_type,
            origin: channel.origin,
            angle: channel.angle,
        }
    }

    /// The threshold field at `point`. Mostly in `[0, 1]`; the dot profile overshoots slightly.
    pub fn mask(&self, point: Vector2F) -> f32 {
        let point = point - self.origin;
        let (sin, cos) = (-self.angle).sin_cos();
        let (u, v) = (point.x(), point.y());
        let point = Vector2F::new(cos * u - sin * v, sin * u + cos * v);
        let size = self.size;

        if self.mask_type == MaskType::Stripe {
            let mut x = wrap(point.y(), size.y()) / size.y();
            if x > 0.5 {
                x = 1.0 - x;
            }
            return x * 2.0;
        }

        let radius1 = cell_radius(point, size);
        if self.mask_type == MaskType::LightOnDark {
            return radius1;
        }

        let radius2 = cell_radius(point + size.scale(0.5), size);
        let x = match self.mask_type {
            MaskType::Diamond => (radius1 + (1.0 - radius2)) * 0.5,
            _ => ((radius2 - radius1) * ((radius1 + (1.0 - radius2)) * 0.5) + radius1) * 2.0,
        };
        sharpen(x)
    }
}

impl ToneMask for HalftoneMask {
    fn tone(&self, point: Vector2F, intensity: f32, supersample: f32) -> f32 {
        let supersample = if supersample >= MAX_SUPERSAMPLE { MAX_SUPERSAMPLE } else { supersample };

        let threshold = (self.mask(point) - 0.5) * (1.0 - supersample * 2.0) + 0.5;
        let diff = threshold - intensity;

        if supersample != 0.0 {
            let amount = diff / (supersample * 2.0) + 0.5;
            if amount <= COVERAGE_SNAP {
                1.0
            } else if amount >= 1.0 - COVERAGE_SNAP {
                0.0
            } else {
                1.0 - amount
            }
        } else if diff >= 0.0 {
            0.0
        } else {
            1.0
        }
    }
}

/// Wraps `value` into `[0, |period|)`.
#[inline]
fn wrap(value: f32, period: f32) -> f32 {
    value.rem_euclid(period.abs())
}

/// Squared normalized distance from the nearest lattice corner: 0 at the cell center, 1 at the
/// corners.
#[inline]
fn cell_radius(point: Vector2F, size: Vector2F) -> f32 {
    let local = Vector2F::new(wrap(point.x(), size.x()), wrap(point.y(), size.y()));
    let centered = (local - size.scale(0.5)).scale(2.0) / size;
    let radius = centered.length() / SQRT_2;
    radius * radius
}

/// Steepens the profile around its midpoint with a signed square root.
#[inline]
fn sharpen(x: f32) -> f32 {
    let x = (x - 0.5) * 2.0;
    let x = if x < 0.0 { -f32::sqrt(-x) } else { f32::sqrt(x) };
    x * PROFILE_OVERSHOOT / 2.0 + 0.5
}

#[cfg(test)]
mod test {
    use super::{ChannelScreen, HalftoneMask, MaskType, ScreenSettings, ToneMask};
    use halftone_geometry::angle::Angle;
    use halftone_geometry::vector::Vector2F;

    fn mask(mask_type: MaskType) -> HalftoneMask {
        let settings = ScreenSettings { size: Vector2F::splat(0.25), mask_type };
        HalftoneMask::new(&settings, &ChannelScreen::default())
    }

    #[test]
    fn test_codes() {
        for &mask_type in MaskType::all() {
            assert_eq!(MaskType::from_i32(mask_type.to_i32()), Some(mask_type));
            assert_eq!(MaskType::from_name(mask_type.name()), Some(mask_type));
        }
        assert_eq!(MaskType::from_i32(1), None);
        assert_eq!(MaskType::from_i32(5), None);
        assert_eq!(MaskType::default().to_i32(), 0);
    }

    #[test]
    fn test_light_on_dark_profile() {
        let mask = mask(MaskType::LightOnDark);
        assert_eq!(mask.mask(Vector2F::zero()), 1.0);
        assert_eq!(mask.mask(Vector2F::splat(0.125)), 0.0);
        // Periodic in both directions, including negative coordinates.
        assert_eq!(mask.mask(Vector2F::new(-0.25, 0.5)), 1.0);
        assert_eq!(mask.mask(Vector2F::new(-0.125, 0.375)), 0.0);
    }

    #[test]
    fn test_stripe_profile() {
        let mask = mask(MaskType::Stripe);
        assert_eq!(mask.mask(Vector2F::new(0.0, 0.0625)), 0.5);
        assert_eq!(mask.mask(Vector2F::new(0.3, 0.1875)), 0.5);
        assert_eq!(mask.mask(Vector2F::new(0.0, 0.125)), 1.0);
        assert_eq!(mask.mask(Vector2F::new(0.1, 0.0)), 0.0);
    }

    #[test]
    fn test_symmetric_profile() {
        let mask = mask(MaskType::Symmetric);
        assert!((mask.mask(Vector2F::zero()) + 0.005).abs() < 1e-6);
        assert!((mask.mask(Vector2F::splat(0.125)) + 0.005).abs() < 1e-6);
        assert!((mask.mask(Vector2F::new(0.125, 0.0)) - 1.005).abs() < 1e-5);
    }

    #[test]
    fn test_diamond_is_symmetric_between_dot_centers() {
        let mask = mask(MaskType::Diamond);
        let a = mask.mask(Vector2F::new(0.05, 0.02));
        let b = mask.mask(Vector2F::new(-0.05, -0.02));
        assert!((a - b).abs() < 1e-5);
    }

    #[test]
    fn test_origin_and_angle_move_the_screen() {
        let mut mask = mask(MaskType::Stripe);
        mask.origin = Vector2F::new(0.0, 0.0625);
        assert_eq!(mask.mask(Vector2F::new(0.0, 0.0625)), 0.0);

        mask.origin = Vector2F::zero();
        mask.angle = Angle::from_degrees(90.0);
        assert!((mask.mask(Vector2F::new(0.0625, 0.0)) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_hard_threshold_without_supersampling() {
        let mask = mask(MaskType::Stripe);
        let point = Vector2F::new(0.0, 0.0625);
        assert_eq!(mask.tone(point, 0.6, 0.0), 1.0);
        assert_eq!(mask.tone(point, 0.4, 0.0), 0.0);
        assert_eq!(mask.tone(point, 0.5, 0.0), 0.0);
    }

    #[test]
    fn test_wide_supersample_yields_intensity() {
        let mask = mask(MaskType::Symmetric);
        for &point in &[Vector2F::zero(), Vector2F::new(0.1, 0.03), Vector2F::splat(0.125)] {
            assert!((mask.tone(point, 0.3, 0.5) - 0.3).abs() < 1e-5);
            assert!((mask.tone(point, 0.7, 10.0) - 0.7).abs() < 1e-5);
            assert!((mask.tone(point, 0.3, f32::INFINITY) - 0.3).abs() < 1e-5);
        }
    }

    #[test]
    fn test_extremes_snap() {
        let mask = mask(MaskType::Symmetric);
        let point = Vector2F::new(0.1, 0.03);
        assert_eq!(mask.tone(point, 0.0, 0.5), 0.0);
        assert_eq!(mask.tone(point, 1.0, 0.5), 1.0);
        assert_eq!(mask.tone(point, 2.0, 0.05), 1.0);
        assert_eq!(mask.tone(point, -1.0, 0.05), 0.0);
    }

    quickcheck! {
        fn prop_tone_is_coverage(x: i16, y: i16, intensity: u8, supersample: u8) -> bool {
            let point = Vector2F::new(x as f32 / 64.0, y as f32 / 64.0);
            let intensity = intensity as f32 / 255.0;
            let supersample = supersample as f32 / 128.0;
            MaskType::all().iter().all(|&mask_type| {
                let tone = mask(mask_type).tone(point, intensity, supersample);
                tone >= 0.0 && tone <= 1.0
            })
        }

        fn prop_tone_grows_with_intensity(x: i16, y: i16, low: u8, high: u8) -> bool {
            let point = Vector2F::new(x as f32 / 64.0, y as f32 / 64.0);
            let (low, high) = (low.min(high) as f32 / 255.0, low.max(high) as f32 / 255.0);
            MaskType::all().iter().all(|&mask_type| {
                let mask = mask(mask_type);
                mask.tone(point, low, 0.05) <= mask.tone(point, high, 0.05)
            })
        }
    }
}
