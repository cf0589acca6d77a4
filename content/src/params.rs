// halftone/content/src/params.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The named-parameter protocol through which layers are configured.
//!
//! Every parameter a layer understands is a variant of `ParamId`. Names are parsed into an id
//! once, at the boundary; the layer then dispatches on the id with an exhaustive match.

use halftone_color::ColorF;
use halftone_geometry::angle::Angle;
use halftone_geometry::vector::Vector2F;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The number of color channels in a layer.
pub const CHANNEL_COUNT: usize = 3;

/// One of the three color channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Channel(usize);

impl Channel {
    /// Returns the channel with the given index, if it exists.
    #[inline]
    pub fn new(index: usize) -> Option<Channel> {
        if index < CHANNEL_COUNT {
            Some(Channel(index))
        } else {
            None
        }
    }

    /// All channels in order.
    #[inline]
    pub fn all() -> [Channel; CHANNEL_COUNT] {
        [Channel(0), Channel(1), Channel(2)]
    }

    /// The index of this channel, always less than `CHANNEL_COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The type tag of a parameter value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ParamType {
    /// A real number.
    Real,
    /// An integer, also used for enumerations.
    Integer,
    /// A boolean flag.
    Bool,
    /// An angle.
    Angle,
    /// A 2D vector or point.
    Vector,
    /// An RGBA color.
    Color,
    /// A string.
    String,
}

impl Display for ParamType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let name = match *self {
            ParamType::Real => "real",
            ParamType::Integer => "integer",
            ParamType::Bool => "bool",
            ParamType::Angle => "angle",
            ParamType::Vector => "vector",
            ParamType::Color => "color",
            ParamType::String => "string",
        };
        formatter.write_str(name)
    }
}

/// A dynamically typed parameter value.
#[derive(Clone, PartialEq, Debug)]
pub enum ParamValue {
    /// A real number.
    Real(f32),
    /// An integer, also used for enumerations.
    Integer(i32),
    /// A boolean flag.
    Bool(bool),
    /// An angle.
    Angle(Angle),
    /// A 2D vector or point.
    Vector(Vector2F),
    /// An RGBA color.
    Color(ColorF),
    /// A string.
    String(String),
}

impl ParamValue {
    /// The type tag of this value.
    pub fn param_type(&self) -> ParamType {
        match *self {
            ParamValue::Real(_) => ParamType::Real,
            ParamValue::Integer(_) => ParamType::Integer,
            ParamValue::Bool(_) => ParamType::Bool,
            ParamValue::Angle(_) => ParamType::Angle,
            ParamValue::Vector(_) => ParamType::Vector,
            ParamValue::Color(_) => ParamType::Color,
            ParamValue::String(_) => ParamType::String,
        }
    }
}

impl From<f32> for ParamValue {
    #[inline]
    fn from(value: f32) -> ParamValue {
        ParamValue::Real(value)
    }
}

impl From<i32> for ParamValue {
    #[inline]
    fn from(value: i32) -> ParamValue {
        ParamValue::Integer(value)
    }
}

impl From<bool> for ParamValue {
    #[inline]
    fn from(value: bool) -> ParamValue {
        ParamValue::Bool(value)
    }
}

impl From<Angle> for ParamValue {
    #[inline]
    fn from(value: Angle) -> ParamValue {
        ParamValue::Angle(value)
    }
}

impl From<Vector2F> for ParamValue {
    #[inline]
    fn from(value: Vector2F) -> ParamValue {
        ParamValue::Vector(value)
    }
}

impl From<ColorF> for ParamValue {
    #[inline]
    fn from(value: ColorF) -> ParamValue {
        ParamValue::Color(value)
    }
}

/// Identifies one parameter of a halftone layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ParamId {
    /// The opacity the filtered result is blended with.
    Amount,
    /// How the filtered result is blended with the color underneath.
    BlendMethod,
    /// The shared lattice spacing of all three screens.
    Size,
    /// The shared dot shape of all three screens.
    Type,
    /// Whether primaries are inks (subtractive) or lights (additive).
    Subtractive,
    /// The primary color of a channel.
    Color(Channel),
    /// The anchor point of a channel's screen.
    ToneOrigin(Channel),
    /// The rotation of a channel's screen.
    ToneAngle(Channel),
    /// The layer's identifier. Read-only.
    Name,
    /// The layer's human-readable name. Read-only.
    LocalName,
    /// The layer's version. Read-only.
    Version,
}

impl ParamId {
    /// Parses a parameter name. `tone[i].offset` is accepted as an alias of `tone[i].origin`.
    pub fn parse(name: &str) -> Option<ParamId> {
        match name {
            "amount" => return Some(ParamId::Amount),
            "blend_method" => return Some(ParamId::BlendMethod),
            "size" => return Some(ParamId::Size),
            "type" => return Some(ParamId::Type),
            "subtractive" => return Some(ParamId::Subtractive),
            "name" => return Some(ParamId::Name),
            "local_name" => return Some(ParamId::LocalName),
            "version" => return Some(ParamId::Version),
            _ => {}
        }

        if let Some((channel, rest)) = parse_indexed(name, "color[") {
            if rest.is_empty() {
                return Some(ParamId::Color(channel));
            }
        }
        if let Some((channel, rest)) = parse_indexed(name, "tone[") {
            match rest {
                ".angle" => return Some(ParamId::ToneAngle(channel)),
                ".origin" | ".offset" => return Some(ParamId::ToneOrigin(channel)),
                _ => {}
            }
        }
        None
    }

    /// The canonical name of this parameter.
    pub fn name(self) -> String {
        match self {
            ParamId::Amount => "amount".to_owned(),
            ParamId::BlendMethod => "blend_method".to_owned(),
            ParamId::Size => "size".to_owned(),
            ParamId::Type => "type".to_owned(),
            ParamId::Subtractive => "subtractive".to_owned(),
            ParamId::Color(channel) => format!("color[{}]", channel.index()),
            ParamId::ToneOrigin(channel) => format!("tone[{}].origin", channel.index()),
            ParamId::ToneAngle(channel) => format!("tone[{}].angle", channel.index()),
            ParamId::Name => "name".to_owned(),
            ParamId::LocalName => "local_name".to_owned(),
            ParamId::Version => "version".to_owned(),
        }
    }

    /// The type of value this parameter holds.
    pub fn param_type(self) -> ParamType {
        match self {
            ParamId::Amount => ParamType::Real,
            ParamId::BlendMethod | ParamId::Type => ParamType::Integer,
            ParamId::Size | ParamId::ToneOrigin(_) => ParamType::Vector,
            ParamId::Subtractive => ParamType::Bool,
            ParamId::Color(_) => ParamType::Color,
            ParamId::ToneAngle(_) => ParamType::Angle,
            ParamId::Name | ParamId::LocalName | ParamId::Version => ParamType::String,
        }
    }

    /// True for metadata that can be read but not set.
    #[inline]
    pub fn is_read_only(self) -> bool {
        match self {
            ParamId::Name | ParamId::LocalName | ParamId::Version => true,
            _ => false,
        }
    }

    /// Every settable parameter, in vocabulary order.
    pub fn settable() -> Vec<ParamId> {
        let mut ids = vec![
            ParamId::Amount,
            ParamId::BlendMethod,
            ParamId::Size,
            ParamId::Type,
            ParamId::Subtractive,
        ];
        for &channel in &Channel::all() {
            ids.push(ParamId::Color(channel));
            ids.push(ParamId::ToneOrigin(channel));
            ids.push(ParamId::ToneAngle(channel));
        }
        ids
    }

    /// Checks that `value` has the type this parameter holds.
    pub fn check_type(self, value: &ParamValue) -> Result<(), ParamError> {
        let found = value.param_type();
        let expected = self.param_type();
        if found == expected {
            Ok(())
        } else {
            Err(ParamError::TypeMismatch { name: self.name(), expected, found })
        }
    }
}

/// Splits `prefix N]rest` into channel `N` and `rest`. `N` must be a single decimal digit.
fn parse_indexed<'a>(name: &'a str, prefix: &str) -> Option<(Channel, &'a str)> {
    if !name.starts_with(prefix) {
        return None;
    }
    let tail = &name[prefix.len()..];
    let close = tail.find(']')?;
    let digits = &tail[..close];
    if digits.len() != 1 || !digits.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    let index = (digits.as_bytes()[0] - b'0') as usize;
    Channel::new(index).map(|channel| (channel, &tail[close + 1..]))
}

bitflags! {
    /// Editing hints attached to a parameter description.
    pub struct ParamFlags: u8 {
        /// The value is a distance in canvas units.
        const DISTANCE = 0x01;
        /// The value is not animatable.
        const STATIC = 0x02;
    }
}

/// One allowed value of an enumerated integer parameter.
#[derive(Clone, PartialEq, Debug)]
pub struct EnumValue {
    /// The integer code.
    pub value: i32,
    /// The identifier.
    pub name: &'static str,
    /// The human-readable name.
    pub local_name: &'static str,
}

/// Describes one parameter for editors and tools.
#[derive(Clone, PartialEq, Debug)]
pub struct ParamDesc {
    /// The parameter.
    pub id: ParamId,
    /// The canonical name.
    pub name: String,
    /// The human-readable name.
    pub local_name: String,
    /// The value type.
    pub param_type: ParamType,
    /// Editing hints.
    pub flags: ParamFlags,
    /// The allowed values, for enumerations.
    pub enum_values: Vec<EnumValue>,
    /// The parameter this one is drawn relative to, such as an angle's origin.
    pub origin: Option<String>,
}

impl ParamDesc {
    /// Describes `id` with no hints.
    pub fn new(id: ParamId, local_name: String) -> ParamDesc {
        ParamDesc {
            id,
            name: id.name(),
            local_name,
            param_type: id.param_type(),
            flags: ParamFlags::empty(),
            enum_values: vec![],
            origin: None,
        }
    }

    /// Adds editing hints.
    #[inline]
    pub fn with_flags(mut self, flags: ParamFlags) -> ParamDesc {
        self.flags |= flags;
        self
    }

    /// Adds an allowed value.
    #[inline]
    pub fn with_enum_value(mut self, value: i32, name: &'static str, local_name: &'static str)
                           -> ParamDesc {
        self.enum_values.push(EnumValue { value, name, local_name });
        self
    }

    /// Links this parameter to the one it is drawn relative to.
    #[inline]
    pub fn with_origin(mut self, origin: ParamId) -> ParamDesc {
        self.origin = Some(origin.name());
        self
    }

    /// True if this is an enumeration.
    #[inline]
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

/// Why a parameter could not be read or written.
#[derive(Clone, PartialEq, Debug)]
pub enum ParamError {
    /// No parameter has this name.
    NotFound(String),
    /// The value has the wrong type for this parameter.
    TypeMismatch {
        /// The parameter name.
        name: String,
        /// The type the parameter holds.
        expected: ParamType,
        /// The type that was supplied.
        found: ParamType,
    },
    /// The value has the right type but is not allowed.
    InvalidValue {
        /// The parameter name.
        name: String,
        /// What is wrong with the value.
        reason: &'static str,
    },
    /// The parameter can be read but not written.
    ReadOnly(String),
}

impl Display for ParamError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ParamError::NotFound(ref name) => write!(formatter, "parameter not found: `{}`", name),
            ParamError::TypeMismatch { ref name, expected, found } => {
                write!(formatter,
                       "parameter `{}` holds a {} value, got a {} value",
                       name,
                       expected,
                       found)
            }
            ParamError::InvalidValue { ref name, reason } => {
                write!(formatter, "invalid value for parameter `{}`: {}", name, reason)
            }
            ParamError::ReadOnly(ref name) => write!(formatter, "parameter `{}` is read-only", name),
        }
    }
}

impl Error for ParamError {}

#[cfg(test)]
mod test {
    use super::{Channel, ParamError, ParamFlags, ParamId, ParamType, ParamValue};
    use halftone_geometry::vector::Vector2F;

    #[test]
    fn test_parse_names() {
        let first = Channel::new(0).unwrap();
        let last = Channel::new(2).unwrap();
        assert_eq!(ParamId::parse("size"), Some(ParamId::Size));
        assert_eq!(ParamId::parse("color[2]"), Some(ParamId::Color(last)));
        assert_eq!(ParamId::parse("tone[0].angle"), Some(ParamId::ToneAngle(first)));
        assert_eq!(ParamId::parse("tone[0].origin"), Some(ParamId::ToneOrigin(first)));
        assert_eq!(ParamId::parse("tone[2].offset"), Some(ParamId::ToneOrigin(last)));
    }

    #[test]
    fn test_reject_malformed_and_out_of_range_names() {
        for name in &["tone[5].angle", "tone[3].origin", "color[3]", "color[-1]", "color[+1]",
                      "color[01]", "color[1].x", "tone[1]", "tone[1].size", "tone[].angle",
                      "colour[0]", "Size", ""] {
            assert_eq!(ParamId::parse(name), None, "{}", name);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for id in ParamId::settable() {
            assert_eq!(ParamId::parse(&id.name()), Some(id));
            assert!(!id.is_read_only());
        }
        assert_eq!(ParamId::settable().len(), 14);
        assert!(ParamId::Version.is_read_only());
    }

    #[test]
    fn test_check_type() {
        assert_eq!(ParamId::Size.check_type(&ParamValue::Vector(Vector2F::zero())), Ok(()));
        let error = ParamId::Size.check_type(&ParamValue::Real(1.0)).unwrap_err();
        assert_eq!(error,
                   ParamError::TypeMismatch {
                       name: "size".to_owned(),
                       expected: ParamType::Vector,
                       found: ParamType::Real,
                   });
        assert_eq!(error.to_string(), "parameter `size` holds a vector value, got a real value");
    }

    #[test]
    fn test_flags() {
        let flags = ParamFlags::DISTANCE | ParamFlags::STATIC;
        assert!(flags.contains(ParamFlags::STATIC));
        assert!(!ParamFlags::empty().contains(ParamFlags::DISTANCE));
    }
}
