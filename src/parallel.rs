// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Filling a slice of independent cells
//!
//! Each cell of an energy field depends only on the (read-only)
//! image, and each cell of one row of the cost table depends only on
//! the row below it.  Either way the receiving slice can be broken up
//! with `chunks_mut` and every chunk handed to its own thread without
//! doing anything unsafe.  Without the `threaded` feature the same
//! interface simply walks the slice.

/// Below this many cells a chunk isn't worth a thread.
#[cfg(feature = "threaded")]
const MIN_CHUNK: usize = 256;

/// Call `fill(index, &mut cell)` for every cell of `cells`.
#[cfg(not(feature = "threaded"))]
pub(crate) fn fill_cells<T, F>(cells: &mut [T], fill: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    cells
        .iter_mut()
        .enumerate()
        .for_each(|(i, cell)| fill(i, cell));
}

/// Call `fill(index, &mut cell)` for every cell of `cells`, spreading
/// contiguous chunks over one scoped thread per CPU.
#[cfg(feature = "threaded")]
pub(crate) fn fill_cells<T, F>(cells: &mut [T], fill: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    let threads = num_cpus::get().max(1);
    let chunk_size = ((cells.len() + threads - 1) / threads).max(MIN_CHUNK);

    if cells.len() <= chunk_size {
        cells
            .iter_mut()
            .enumerate()
            .for_each(|(i, cell)| fill(i, cell));
        return;
    }

    let fill = &fill;
    let outcome = crossbeam::thread::scope(|scope| {
        for (n, chunk) in cells.chunks_mut(chunk_size).enumerate() {
            let offset = n * chunk_size;
            scope.spawn(move |_| {
                chunk
                    .iter_mut()
                    .enumerate()
                    .for_each(|(i, cell)| fill(offset + i, cell));
            });
        }
    });

    // A worker only fails by panicking; carry that panic over to the
    // caller's thread.
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_sees_its_own_index() {
        let mut cells = vec![0usize; 10_000];
        fill_cells(&mut cells, |i, c| *c = i * 2);
        assert!(cells.iter().enumerate().all(|(i, c)| *c == i * 2));
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut cells: Vec<u8> = Vec::new();
        fill_cells(&mut cells, |_, c| *c = 1);
        assert!(cells.is_empty());
    }
}
