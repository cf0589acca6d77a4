// halftone/content/src/layer.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The "Halftone 3" filter layer.

use crate::composite::ColorSeparation;
use crate::mask::{ChannelScreen, HalftoneMask, MaskType, ScreenSettings};
use crate::params::{Channel, ParamDesc, ParamError, ParamFlags, ParamId, ParamValue};
use crate::params::CHANNEL_COUNT;
use halftone_color::{BlendMethod, ColorF, SeparationMatrix};
use halftone_geometry::angle::Angle;
use halftone_geometry::vector::Vector2F;

/// The layer identifier.
pub const LAYER_NAME: &str = "halftone3";
/// The human-readable layer name.
pub const LAYER_LOCAL_NAME: &str = "Halftone 3";
/// The layer version.
pub const LAYER_VERSION: &str = "0.1";
/// The category the layer is listed under.
pub const LAYER_CATEGORY: &str = "Filters";

/// Angle between the screens of consecutive channels.
const CHANNEL_ANGLE_STEP_DEGREES: f32 = 30.0;

/// Simulates a three-color halftone print (or screen) of whatever lies beneath it.
///
/// The three screens share one lattice size and dot shape; each channel has its own origin
/// and angle.
#[derive(Clone, PartialEq, Debug)]
pub struct Halftone3 {
    amount: f32,
    blend_method: BlendMethod,
    screen: ScreenSettings,
    channels: [ChannelScreen; CHANNEL_COUNT],
    separation: ColorSeparation,
}

impl Default for Halftone3 {
    #[inline]
    fn default() -> Halftone3 {
        Halftone3::new()
    }
}

impl Halftone3 {
    /// A subtractive cyan, magenta and yellow halftone.
    #[inline]
    pub fn new() -> Halftone3 {
        Halftone3::with_mode(true)
    }

    /// A halftone with the default primaries for the given mode: cyan, magenta and yellow inks
    /// when subtractive, red, green and blue lights otherwise.
    pub fn with_mode(subtractive: bool) -> Halftone3 {
        let mut channels = [ChannelScreen::default(); CHANNEL_COUNT];
        for (index, channel) in channels.iter_mut().enumerate() {
            channel.angle = Angle::from_degrees(CHANNEL_ANGLE_STEP_DEGREES) * index as f32;
        }
        let separation = if subtractive { ColorSeparation::cmy() } else { ColorSeparation::rgb() };
        Halftone3 {
            amount: 1.0,
            blend_method: BlendMethod::Straight,
            screen: ScreenSettings::default(),
            channels,
            separation,
        }
    }

    /// The opacity of the filtered result.
    #[inline]
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Sets the opacity of the filtered result.
    #[inline]
    pub fn set_amount(&mut self, amount: f32) {
        self.amount = amount;
    }

    /// How the filtered result is blended with the color underneath.
    #[inline]
    pub fn blend_method(&self) -> BlendMethod {
        self.blend_method
    }

    /// Sets how the filtered result is blended with the color underneath.
    #[inline]
    pub fn set_blend_method(&mut self, blend_method: BlendMethod) {
        self.blend_method = blend_method;
    }

    /// The lattice spacing shared by all screens.
    #[inline]
    pub fn size(&self) -> Vector2F {
        self.screen.size
    }

    /// Sets the lattice spacing of all screens.
    #[inline]
    pub fn set_size(&mut self, size: Vector2F) {
        self.screen.size = size;
    }

    /// The dot shape shared by all screens.
    #[inline]
    pub fn mask_type(&self) -> MaskType {
        self.screen.mask_type
    }

    /// Sets the dot shape of all screens.
    #[inline]
    pub fn set_mask_type(&mut self, mask_type: MaskType) {
        self.screen.mask_type = mask_type;
    }

    /// True if the primaries are inks.
    #[inline]
    pub fn is_subtractive(&self) -> bool {
        self.separation.is_subtractive()
    }

    /// Switches between inks and lights. The primaries are kept.
    pub fn set_subtractive(&mut self, subtractive: bool) {
        self.separation.set_subtractive(subtractive);
    }

    /// The primary color of `channel`.
    #[inline]
    pub fn color(&self, channel: Channel) -> ColorF {
        self.separation.color(channel)
    }

    /// Sets the primary color of `channel`.
    pub fn set_color(&mut self, channel: Channel, color: ColorF) {
        self.separation.set_color(channel, color);
    }

    /// The anchor point of the screen of `channel`.
    #[inline]
    pub fn tone_origin(&self, channel: Channel) -> Vector2F {
        self.channels[channel.index()].origin
    }

    /// Moves the screen of `channel`.
    #[inline]
    pub fn set_tone_origin(&mut self, channel: Channel, origin: Vector2F) {
        self.channels[channel.index()].origin = origin;
    }

    /// The rotation of the screen of `channel`.
    #[inline]
    pub fn tone_angle(&self, channel: Channel) -> Angle {
        self.channels[channel.index()].angle
    }

    /// Rotates the screen of `channel`.
    #[inline]
    pub fn set_tone_angle(&mut self, channel: Channel, angle: Angle) {
        self.channels[channel.index()].angle = angle;
    }

    /// The current separation matrix.
    #[inline]
    pub fn matrix(&self) -> &SeparationMatrix {
        self.separation.matrix()
    }

    /// The primaries, mode and matrix.
    #[inline]
    pub fn separation(&self) -> &ColorSeparation {
        &self.separation
    }

    /// The complete screen of `channel`.
    #[inline]
    pub fn mask(&self, channel: Channel) -> HalftoneMask {
        HalftoneMask::new(&self.screen, &self.channels[channel.index()])
    }

    /// The complete screens of all channels.
    pub fn masks(&self) -> [HalftoneMask; CHANNEL_COUNT] {
        [
            HalftoneMask::new(&self.screen, &self.channels[0]),
            HalftoneMask::new(&self.screen, &self.channels[1]),
            HalftoneMask::new(&self.screen, &self.channels[2]),
        ]
    }

    /// The layer claims every point it covers, which is all of them.
    #[inline]
    pub fn is_solid_hit(&self) -> bool {
        true
    }

    /// Sets a parameter by name.
    pub fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        let id = ParamId::parse(name).ok_or_else(|| ParamError::NotFound(name.to_owned()))?;
        trace!("set_param({}, {:?})", name, value);
        self.set(id, value)
    }

    /// Reads a parameter by name.
    pub fn get_param(&self, name: &str) -> Result<ParamValue, ParamError> {
        let id = ParamId::parse(name).ok_or_else(|| ParamError::NotFound(name.to_owned()))?;
        Ok(self.get(id))
    }

    /// Sets a parameter, checking the value type.
    pub fn set(&mut self, id: ParamId, value: ParamValue) -> Result<(), ParamError> {
        if id.is_read_only() {
            return Err(ParamError::ReadOnly(id.name()));
        }
        id.check_type(&value)?;

        match (id, value) {
            (ParamId::Amount, ParamValue::Real(amount)) => self.set_amount(amount),
            (ParamId::BlendMethod, ParamValue::Integer(code)) => {
                let blend_method = BlendMethod::from_i32(code).ok_or_else(|| {
                    ParamError::InvalidValue { name: id.name(), reason: "unknown blend method" }
                })?;
                self.set_blend_method(blend_method);
            }
            (ParamId::Size, ParamValue::Vector(size)) => self.set_size(size),
            (ParamId::Type, ParamValue::Integer(code)) => {
                let mask_type = MaskType::from_i32(code).ok_or_else(|| {
                    ParamError::InvalidValue { name: id.name(), reason: "unknown mask type" }
                })?;
                self.set_mask_type(mask_type);
            }
            (ParamId::Subtractive, ParamValue::Bool(subtractive)) => {
                self.set_subtractive(subtractive)
            }
            (ParamId::Color(channel), ParamValue::Color(color)) => self.set_color(channel, color),
            (ParamId::ToneOrigin(channel), ParamValue::Vector(origin)) => {
                self.set_tone_origin(channel, origin)
            }
            (ParamId::ToneAngle(channel), ParamValue::Angle(angle)) => {
                self.set_tone_angle(channel, angle)
            }
            (id, value) => {
                return Err(ParamError::TypeMismatch {
                    name: id.name(),
                    expected: id.param_type(),
                    found: value.param_type(),
                })
            }
        }
        Ok(())
    }

    /// Reads a parameter.
    pub fn get(&self, id: ParamId) -> ParamValue {
        match id {
            ParamId::Amount => ParamValue::Real(self.amount),
            ParamId::BlendMethod => ParamValue::Integer(self.blend_method.to_i32()),
            ParamId::Size => ParamValue::Vector(self.size()),
            ParamId::Type => ParamValue::Integer(self.mask_type().to_i32()),
            ParamId::Subtractive => ParamValue::Bool(self.is_subtractive()),
            ParamId::Color(channel) => ParamValue::Color(self.color(channel)),
            ParamId::ToneOrigin(channel) => ParamValue::Vector(self.tone_origin(channel)),
            ParamId::ToneAngle(channel) => ParamValue::Angle(self.tone_angle(channel)),
            ParamId::Name => ParamValue::String(LAYER_NAME.to_owned()),
            ParamId::LocalName => ParamValue::String(LAYER_LOCAL_NAME.to_owned()),
            ParamId::Version => ParamValue::String(LAYER_VERSION.to_owned()),
        }
    }

    /// Describes every settable parameter.
    pub fn param_vocab() -> Vec<ParamDesc> {
        let mut blend_method = ParamDesc::new(ParamId::BlendMethod, "Blend Method".to_owned())
            .with_flags(ParamFlags::STATIC);
        for &method in BlendMethod::all() {
            blend_method = blend_method.with_enum_value(method.to_i32(), method.name(), method.name());
        }

        let mut mask_type = ParamDesc::new(ParamId::Type, "Type".to_owned())
            .with_flags(ParamFlags::STATIC);
        for &value in MaskType::all() {
            mask_type = mask_type.with_enum_value(value.to_i32(), value.name(), value.local_name());
        }

        let mut vocab = vec![
            ParamDesc::new(ParamId::Amount, "Opacity".to_owned()),
            blend_method,
            ParamDesc::new(ParamId::Size, "Mask Size".to_owned()).with_flags(ParamFlags::DISTANCE),
            mask_type,
            ParamDesc::new(ParamId::Subtractive, "Subtractive Flag".to_owned()),
        ];

        for &channel in &Channel::all() {
            let chan_name = format!("Chan{}", channel.index());
            vocab.push(ParamDesc::new(ParamId::Color(channel), format!("{} Color", chan_name)));
            vocab.push(ParamDesc::new(ParamId::ToneOrigin(channel),
                                      format!("{} Mask Origin", chan_name))
                           .with_flags(ParamFlags::DISTANCE));
            vocab.push(ParamDesc::new(ParamId::ToneAngle(channel),
                                      format!("{} Mask Angle", chan_name))
                           .with_origin(ParamId::ToneOrigin(channel)));
        }
        vocab
    }

    /// Evaluates the layer directly at `point` over `undercolor`, without antialiasing.
    pub fn color_at(&self, point: Vector2F, undercolor: ColorF) -> ColorF {
        let color = self.separation.evaluate(&self.masks(), point, undercolor, 0.0);
        if self.amount == 1.0 && self.blend_method == BlendMethod::Straight {
            color
        } else {
            self.blend_method.blend(color, undercolor, self.amount)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Halftone3;
    use crate::mask::MaskType;
    use crate::params::{Channel, ParamError, ParamFlags, ParamId, ParamType, ParamValue};
    use halftone_color::{BlendMethod, ColorF, SeparationMatrix};
    use halftone_geometry::angle::Angle;
    use halftone_geometry::vector::Vector2F;

    fn channel(index: usize) -> Channel {
        Channel::new(index).unwrap()
    }

    #[test]
    fn test_defaults() {
        let layer = Halftone3::new();
        assert_eq!(layer.get_param("size"), Ok(ParamValue::Vector(Vector2F::splat(0.25))));
        assert_eq!(layer.get_param("type"), Ok(ParamValue::Integer(0)));
        assert_eq!(layer.get_param("subtractive"), Ok(ParamValue::Bool(true)));
        assert_eq!(layer.get_param("amount"), Ok(ParamValue::Real(1.0)));
        assert_eq!(layer.get_param("blend_method"), Ok(ParamValue::Integer(1)));
        assert_eq!(layer.get_param("color[0]"), Ok(ParamValue::Color(ColorF::cyan())));
        assert_eq!(layer.get_param("color[1]"), Ok(ParamValue::Color(ColorF::magenta())));
        assert_eq!(layer.get_param("color[2]"), Ok(ParamValue::Color(ColorF::yellow())));
        assert_eq!(layer.get_param("tone[0].angle"), Ok(ParamValue::Angle(Angle::default())));
        for (index, &degrees) in [0.0, 30.0, 60.0].iter().enumerate() {
            let angle = layer.tone_angle(channel(index));
            assert!((angle.degrees() - degrees as f32).abs() < 1e-4);
            assert_eq!(layer.tone_origin(channel(index)), Vector2F::zero());
        }
        assert_eq!(*layer.matrix(), SeparationMatrix::identity());
        assert_eq!(layer.get_param("name"), Ok(ParamValue::String("halftone3".to_owned())));
        assert_eq!(layer.get_param("version"), Ok(ParamValue::String("0.1".to_owned())));
    }

    #[test]
    fn test_additive_defaults() {
        let layer = Halftone3::with_mode(false);
        assert_eq!(layer.color(channel(0)), ColorF::red());
        assert_eq!(layer.color(channel(1)), ColorF::green());
        assert_eq!(layer.color(channel(2)), ColorF::blue());
        assert!(!layer.is_subtractive());
    }

    #[test]
    fn test_shared_size_and_type_reach_every_channel() {
        let mut layer = Halftone3::new();
        layer.set_param("size", ParamValue::Vector(Vector2F::new(0.5, 0.125))).unwrap();
        layer.set_param("type", ParamValue::Integer(MaskType::Stripe.to_i32())).unwrap();
        for mask in layer.masks().iter() {
            assert_eq!(mask.size, Vector2F::new(0.5, 0.125));
            assert_eq!(mask.mask_type, MaskType::Stripe);
        }
    }

    #[test]
    fn test_channel_overlays_are_independent() {
        let mut layer = Halftone3::new();
        layer.set_param("tone[1].angle", ParamValue::Angle(Angle::from_degrees(45.0))).unwrap();
        layer.set_param("tone[2].offset", ParamValue::Vector(Vector2F::new(1.0, 2.0))).unwrap();
        let matrix = *layer.matrix();

        assert_eq!(layer.tone_angle(channel(0)), Angle::default());
        assert_eq!(layer.tone_angle(channel(1)), Angle::from_degrees(45.0));
        assert_eq!(layer.tone_origin(channel(2)), Vector2F::new(1.0, 2.0));
        assert_eq!(layer.tone_origin(channel(1)), Vector2F::zero());
        assert_eq!(layer.get_param("tone[2].origin"),
                   Ok(ParamValue::Vector(Vector2F::new(1.0, 2.0))));
        assert_eq!(*layer.matrix(), matrix);
    }

    #[test]
    fn test_subtractive_flag_rebuilds_matrix_immediately() {
        let mut layer = Halftone3::new();
        layer.set_param("subtractive", ParamValue::Bool(false)).unwrap();
        let cmy = [ColorF::cyan(), ColorF::magenta(), ColorF::yellow()];
        assert_eq!(*layer.matrix(), SeparationMatrix::build(&cmy, false));
        assert_eq!(layer.get_param("subtractive"), Ok(ParamValue::Bool(false)));

        layer.set_param("color[0]", ParamValue::Color(ColorF::black())).unwrap();
        assert_eq!(layer.matrix().row(0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rejected_parameters() {
        let mut layer = Halftone3::new();
        let before = layer.clone();

        assert_eq!(layer.set_param("tone[5].angle", ParamValue::Angle(Angle::default())),
                   Err(ParamError::NotFound("tone[5].angle".to_owned())));
        assert_eq!(layer.get_param("tone[5].angle"),
                   Err(ParamError::NotFound("tone[5].angle".to_owned())));
        assert_eq!(layer.get_param("z_depth"), Err(ParamError::NotFound("z_depth".to_owned())));
        assert_eq!(layer.set_param("size", ParamValue::Real(0.5)),
                   Err(ParamError::TypeMismatch {
                       name: "size".to_owned(),
                       expected: ParamType::Vector,
                       found: ParamType::Real,
                   }));
        assert!(matches!(layer.set_param("type", ParamValue::Integer(1)),
                         Err(ParamError::InvalidValue { .. })));
        assert!(matches!(layer.set_param("blend_method", ParamValue::Integer(99)),
                         Err(ParamError::InvalidValue { .. })));
        assert_eq!(layer.set_param("version", ParamValue::String("2".to_owned())),
                   Err(ParamError::ReadOnly("version".to_owned())));

        assert_eq!(layer, before);
    }

    #[test]
    fn test_every_settable_parameter_round_trips() {
        let mut layer = Halftone3::new();
        for id in ParamId::settable() {
            let value = layer.get(id);
            layer.set(id, value.clone()).unwrap();
            assert_eq!(layer.get(id), value);
        }
        assert_eq!(layer, Halftone3::new());
    }

    #[test]
    fn test_vocab() {
        let vocab = Halftone3::param_vocab();
        let names: Vec<_> = vocab.iter().map(|desc| desc.name.as_str()).collect();
        assert_eq!(&names[..6],
                   &["amount", "blend_method", "size", "type", "subtractive", "color[0]"]);
        assert_eq!(vocab.len(), ParamId::settable().len());

        let mask_type = &vocab[3];
        assert!(mask_type.is_enum());
        assert!(mask_type.flags.contains(ParamFlags::STATIC));
        assert!(mask_type.enum_values.iter().all(|value| value.value != 1));
        assert_eq!(vocab[2].local_name, "Mask Size");
        assert!(vocab[2].flags.contains(ParamFlags::DISTANCE));

        let angle = vocab.iter().find(|desc| desc.name == "tone[1].angle").unwrap();
        assert_eq!(angle.local_name, "Chan1 Mask Angle");
        assert_eq!(angle.origin.as_ref().map(|name| name.as_str()), Some("tone[1].origin"));
    }

    #[test]
    fn test_color_at_preserves_alpha() {
        let layer = Halftone3::new();
        let point = Vector2F::new(0.03, 0.07);
        assert_eq!(layer.color_at(point, ColorF::transparent_black()).a(), 0.0);
        assert_eq!(layer.color_at(point, ColorF::new(0.2, 0.5, 0.9, 0.6)).a(), 0.6);
    }

    #[test]
    fn test_color_at_zero_amount_is_undercolor() {
        let mut layer = Halftone3::new();
        layer.set_amount(0.0);
        layer.set_blend_method(BlendMethod::Composite);
        let under = ColorF::new(0.2, 0.5, 0.9, 1.0);
        let out = layer.color_at(Vector2F::new(0.03, 0.07), under);
        assert!(out.0.iter().zip(under.0.iter()).all(|(a, b)| (a - b).abs() < 1e-6));
    }

    #[test]
    fn test_color_at_is_a_hard_screen() {
        // Without antialiasing every ink is either fully down or absent.
        let layer = Halftone3::new();
        for step in 0..16 {
            let point = Vector2F::new(step as f32 * 0.037, step as f32 * 0.053);
            let out = layer.color_at(point, ColorF::new(0.5, 0.5, 0.5, 1.0));
            assert!(out.rgb().iter().all(|&value| value == 0.0 || value == 1.0));
            assert_eq!(out.a(), 1.0);
        }
        assert!(layer.is_solid_hit());
    }
}
