// halftone/renderer/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders halftone layers over pixel surfaces on the CPU.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod concurrent;
pub mod error;
pub mod filter;
pub mod options;
pub mod surface;
pub mod task;

pub use crate::error::RenderError;
pub use crate::filter::{FilterPixels, PixelFilter, RunParams};
pub use crate::options::{ExecutorKind, RenderOptions};
pub use crate::surface::Surface;
pub use crate::task::{BuildHalftoneTask, HalftoneTask, PreparedHalftoneTask};
