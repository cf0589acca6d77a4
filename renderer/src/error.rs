// halftone/renderer/src/error.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reasons a render can fail.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, PartialEq, Debug)]
pub enum RenderError {
    /// The surface has no pixels.
    EmptySurface,
    /// The viewport has zero width or height, or is not finite.
    EmptyViewport,
    /// The pixel density is zero, negative, or not finite.
    InvalidPixelsPerUnit(f32),
    /// A pixel buffer does not hold `width * height` RGBA pixels.
    BufferSizeMismatch { expected: usize, found: usize },
    /// The worker thread pool could not be started.
    ThreadPool(String),
}

impl Display for RenderError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            RenderError::EmptySurface => write!(formatter, "the surface has no pixels"),
            RenderError::EmptyViewport => write!(formatter, "the viewport is empty"),
            RenderError::InvalidPixelsPerUnit(value) => {
                write!(formatter, "invalid pixels per unit: {}", value)
            }
            RenderError::BufferSizeMismatch { expected, found } => {
                write!(formatter, "expected {} bytes of pixel data, found {}", expected, found)
            }
            RenderError::ThreadPool(ref message) => {
                write!(formatter, "failed to start the thread pool: {}", message)
            }
        }
    }
}

impl Error for RenderError {}
