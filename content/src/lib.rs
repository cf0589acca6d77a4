// halftone/content/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Halftone screens, three-channel color separation, and the layer that configures them.

#![warn(missing_docs)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod composite;
pub mod layer;
pub mod mask;
pub mod params;

pub use crate::composite::ColorSeparation;
pub use crate::layer::Halftone3;
pub use crate::mask::{HalftoneMask, MaskType, ToneMask};
pub use crate::params::{Channel, ParamError, ParamId, ParamValue};
