// halftone/utils/halftone3/src/preset.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JSON layer presets.

use anyhow::{anyhow, Context, Result};
use halftone_color::{BlendMethod, ColorF};
use halftone_content::mask::MaskType;
use halftone_content::{Halftone3, ParamValue};
use halftone_geometry::angle::Angle;
use halftone_geometry::vector::Vector2F;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Layer settings read from a JSON file. Every field is optional.
#[derive(Clone, Default, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub size: Option<[f32; 2]>,
    #[serde(rename = "type")]
    pub mask_type: Option<String>,
    pub subtractive: Option<bool>,
    /// RGBA, one per channel.
    pub colors: Option<Vec<[f32; 4]>>,
    /// Degrees, one per channel.
    pub angles: Option<Vec<f32>>,
    pub origins: Option<Vec<[f32; 2]>>,
    pub amount: Option<f32>,
    pub blend_method: Option<String>,
}

impl Preset {
    pub fn load(path: &Path) -> Result<Preset> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read preset {}", path.display()))?;
        Preset::from_json(&json).with_context(|| format!("invalid preset {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Preset> {
        Ok(serde_json::from_str(json)?)
    }

    /// The preset as named parameter assignments, in application order.
    pub fn params(&self) -> Result<Vec<(String, ParamValue)>> {
        let mut params = vec![];
        if let Some(subtractive) = self.subtractive {
            params.push(("subtractive".to_owned(), ParamValue::Bool(subtractive)));
        }
        if let Some([x, y]) = self.size {
            params.push(("size".to_owned(), ParamValue::Vector(Vector2F::new(x, y))));
        }
        if let Some(ref name) = self.mask_type {
            params.push(("type".to_owned(), mask_type_param(name)?));
        }
        for (index, &[r, g, b, a]) in self.colors.iter().flatten().enumerate() {
            params.push((format!("color[{}]", index),
                         ParamValue::Color(ColorF::new(r, g, b, a))));
        }
        for (index, &degrees) in self.angles.iter().flatten().enumerate() {
            params.push((format!("tone[{}].angle", index),
                         ParamValue::Angle(Angle::from_degrees(degrees))));
        }
        for (index, &[x, y]) in self.origins.iter().flatten().enumerate() {
            params.push((format!("tone[{}].origin", index),
                         ParamValue::Vector(Vector2F::new(x, y))));
        }
        if let Some(amount) = self.amount {
            params.push(("amount".to_owned(), ParamValue::Real(amount)));
        }
        if let Some(ref name) = self.blend_method {
            params.push(("blend_method".to_owned(), blend_method_param(name)?));
        }
        Ok(params)
    }

    /// Applies every parameter the layer accepts and returns how many were rejected.
    pub fn apply(&self, layer: &mut Halftone3) -> Result<usize> {
        let mut rejected = 0;
        for (name, value) in self.params()? {
            if let Err(err) = layer.set_param(&name, value) {
                warn!("ignoring preset parameter: {}", err);
                rejected += 1;
            }
        }
        Ok(rejected)
    }
}

pub fn mask_type_param(name: &str) -> Result<ParamValue> {
    let mask_type = MaskType::from_name(name).ok_or_else(|| {
        let names: Vec<_> = MaskType::all().iter().map(|value| value.name()).collect();
        anyhow!("unknown mask type `{}`, expected one of {}", name, names.join(", "))
    })?;
    Ok(ParamValue::Integer(mask_type.to_i32()))
}

pub fn blend_method_param(name: &str) -> Result<ParamValue> {
    let blend_method = BlendMethod::from_name(name).ok_or_else(|| {
        let names: Vec<_> = BlendMethod::all().iter().map(|value| value.name()).collect();
        anyhow!("unknown blend method `{}`, expected one of {}", name, names.join(", "))
    })?;
    Ok(ParamValue::Integer(blend_method.to_i32()))
}

#[cfg(test)]
mod test {
    use super::Preset;
    use halftone_color::{BlendMethod, ColorF};
    use halftone_content::mask::MaskType;
    use halftone_content::params::Channel;
    use halftone_content::Halftone3;
    use halftone_geometry::angle::Angle;
    use halftone_geometry::vector::Vector2F;

    #[test]
    fn test_apply_preset() {
        let preset = Preset::from_json(r#"{
            "size": [0.5, 0.5],
            "type": "diamond",
            "subtractive": false,
            "angles": [15.0, 45.0],
            "origins": [[0.0, 0.0], [0.0, 0.0], [1.0, 2.0]],
            "amount": 0.5,
            "blend_method": "multiply"
        }"#).unwrap();
        let mut layer = Halftone3::new();
        assert_eq!(preset.apply(&mut layer).unwrap(), 0);

        assert_eq!(layer.size(), Vector2F::splat(0.5));
        assert_eq!(layer.mask_type(), MaskType::Diamond);
        assert!(!layer.is_subtractive());
        assert_eq!(layer.tone_angle(Channel::new(1).unwrap()), Angle::from_degrees(45.0));
        assert!((layer.tone_angle(Channel::new(2).unwrap()).degrees() - 60.0).abs() < 1e-4);
        assert_eq!(layer.tone_origin(Channel::new(2).unwrap()), Vector2F::new(1.0, 2.0));
        assert_eq!(layer.amount(), 0.5);
        assert_eq!(layer.blend_method(), BlendMethod::Multiply);
    }

    #[test]
    fn test_extra_channels_are_rejected() {
        let preset = Preset::from_json(r#"{
            "colors": [[1, 0, 0, 1], [0, 1, 0, 1], [0, 0, 1, 1], [1, 1, 1, 1]]
        }"#).unwrap();
        let mut layer = Halftone3::new();
        assert_eq!(preset.apply(&mut layer).unwrap(), 1);
        assert_eq!(layer.color(Channel::new(2).unwrap()), ColorF::blue());
    }

    #[test]
    fn test_malformed_presets() {
        assert!(Preset::from_json(r#"{ "sizes": [1, 1] }"#).is_err());
        assert!(Preset::from_json(r#"{ "type": "round" }"#).unwrap().params().is_err());
        assert!(Preset::from_json(r#"{ "blend_method": "normal" }"#).unwrap().params().is_err());
    }
}
