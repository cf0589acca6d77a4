// halftone/renderer/src/concurrent/executor.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An abstraction over threading and parallelism systems such as Rayon.

/// An abstraction over threading and parallelism systems such as Rayon.
///
/// Implementations must concatenate the built chunks in index order.
pub trait Executor {
    fn flatten_into_vector<T, F>(&self, length: usize, builder: F) -> Vec<T>
                                 where T: Send, F: Fn(usize) -> Vec<T> + Send + Sync;
}

/// Builds every chunk on the calling thread.
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn flatten_into_vector<T, F>(&self, length: usize, builder: F) -> Vec<T>
                                 where T: Send, F: Fn(usize) -> Vec<T> + Send + Sync {
        (0..length).fold(vec![], |mut vec0, index| {
            vec0.extend(builder(index));
            vec0
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Executor, SequentialExecutor};

    #[test]
    fn test_chunks_are_concatenated_in_order() {
        let result = SequentialExecutor.flatten_into_vector(4, |index| vec![index; index]);
        assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
        assert!(SequentialExecutor.flatten_into_vector(0, |index| vec![index]).is_empty());
    }
}
