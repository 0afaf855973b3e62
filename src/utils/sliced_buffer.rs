/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for storing
variable-length slices efficiently.

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<NumEdges>` stores slice boundaries, where slice `i` is
  `buffer[offsets[i]..offsets[i+1]]`. The last entry is a sentinel equal to `buffer.len()`.

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 2`
2. `offsets[0] == 0`
3. `offsets` is non-decreasing
4. `offsets.last() == buffer.len()`

A `SlicedBuffer` is immutable: to change the partition or the contents, build a new one
(see [`SlicedBuffer::from_slices`]).
*/

use std::ops::Index;

use crate::{Node, NumEdges};

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice followed by the sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlicedBuffer<T> {
    buffer: Vec<T>,
    offsets: Vec<NumEdges>,
}

impl<T> Default for SlicedBuffer<T> {
    /// A single empty slice
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![0, 0],
        }
    }
}

impl<T> SlicedBuffer<T> {
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets.len() < 2`
    /// - `offsets` does not start at `0`
    /// - `offsets` is not sorted
    /// - the last offset is not `buffer.len()`
    pub fn new(buffer: Vec<T>, offsets: Vec<NumEdges>) -> Self {
        assert!(offsets.len() > 1);
        assert_eq!(offsets[0], 0);
        assert!(offsets.is_sorted());
        assert_eq!(offsets[offsets.len() - 1] as usize, buffer.len());

        Self { buffer, offsets }
    }

    /// Builds a `SlicedBuffer` from scratch where slice `i` holds the items of the
    /// `i`-th element of `slices`.
    ///
    /// # Panics
    /// Panics if `slices` is empty.
    ///
    /// # Examples
    /// ```
    /// use simplegraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::from_slices([vec![1u32, 2], vec![], vec![3]]);
    /// assert_eq!(sb.raw_offset_slice(), &[0, 2, 2, 3]);
    /// assert_eq!(&sb[2], &[3]);
    /// ```
    pub fn from_slices<I, S>(slices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let mut buffer = Vec::new();
        let mut offsets = vec![0];

        for slice in slices {
            buffer.extend(slice);
            offsets.push(buffer.len() as NumEdges);
        }

        Self::new(buffer, offsets)
    }

    /// Returns the number of slices.
    ///
    /// # Examples
    /// ```
    /// use simplegraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of entries in the buffer.
    #[inline(always)]
    pub fn number_of_entries(&self) -> NumEdges {
        self.buffer.len() as NumEdges
    }

    /// Returns the length of slice `u`.
    #[inline(always)]
    pub fn size_of(&self, u: Node) -> NumEdges {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }

    /// Returns an iterator over all slices in order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.buffer[w[0] as usize..w[1] as usize])
    }

    /// Returns a reference to the complete buffer.
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a reference to the offsets array including the sentinel.
    #[inline(always)]
    pub fn raw_offset_slice(&self) -> &[NumEdges] {
        &self.offsets
    }
}

impl<T> Index<Node> for SlicedBuffer<T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Node) -> &Self::Output {
        let start = self.offsets[idx as usize] as usize;
        let end = self.offsets[idx as usize + 1] as usize;
        &self.buffer[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn default_is_single_empty_slice() {
        let sb = SlicedBuffer::<u32>::default();
        assert_eq!(sb.len(), 1);
        assert_eq!(sb.number_of_entries(), 0);
        assert!(sb[0].is_empty());
    }

    #[test]
    fn slices_and_sizes() {
        let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0, 2, 4, 7]);
        assert_eq!(sb.number_of_entries(), 7);
        assert_eq!(sb.size_of(0), 2);
        assert_eq!(sb.size_of(2), 3);
        assert_eq!(&sb[1], &[4, 5]);
        assert_eq!(
            sb.iter().map(|s| s.to_vec()).collect_vec(),
            vec![vec![1, 2], vec![4, 5], vec![6, 7, 8]]
        );
    }

    #[test]
    fn from_slices_matches_new() {
        let built = SlicedBuffer::from_slices([vec![3u32], vec![], vec![0, 1]]);
        assert_eq!(built, SlicedBuffer::new(vec![3, 0, 1], vec![0, 1, 1, 3]));
    }

    #[test]
    #[should_panic]
    fn unsorted_offsets() {
        SlicedBuffer::new(vec![1u32, 2, 3], vec![0, 2, 1, 3]);
    }

    #[test]
    #[should_panic]
    fn sentinel_must_cover_buffer() {
        SlicedBuffer::new(vec![1u32, 2, 3], vec![0, 2]);
    }
}
