// halftone/renderer/src/options.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options that control how rendering is to be performed.

/// The default pixel density, in pixels per unit.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 60.0;

/// Options that influence rendering.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderOptions {
    /// How many device pixels one unit of layer space covers along each axis. This also sets
    /// the antialiasing footprint of the screens.
    pub pixels_per_unit: f32,
    /// How rows are distributed across threads.
    pub executor: ExecutorKind,
    /// The number of worker threads for the Rayon executor. `None` uses the global pool.
    pub jobs: Option<usize>,
}

impl Default for RenderOptions {
    #[inline]
    fn default() -> RenderOptions {
        RenderOptions {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            executor: ExecutorKind::default(),
            jobs: None,
        }
    }
}

/// Selects an executor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExecutorKind {
    /// Renders on the calling thread.
    Sequential,
    /// Renders rows in parallel with Rayon.
    Rayon,
}

impl Default for ExecutorKind {
    #[inline]
    fn default() -> ExecutorKind {
        ExecutorKind::Rayon
    }
}
