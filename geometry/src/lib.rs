// halftone/geometry/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Basic geometry and linear algebra for the halftone compositor.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod angle;
pub mod rect;
pub mod transform2d;
pub mod vector;
