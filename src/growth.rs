//! Bucket-count progression for `HashSymTable` growth.
//!
//! A table starts at the first size and, each time the live count reaches
//! the bucket count, moves to the next one. Once at the last size it stays
//! there and the load factor is allowed to exceed 1.

use crate::error::ProgressionError;

/// Default bucket counts, each a prime just below a power of two.
pub const DEFAULT_BUCKET_COUNTS: &[usize] = &[509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

/// A validated, strictly ascending list of non-zero bucket counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeProgression {
    sizes: &'static [usize],
}

impl SizeProgression {
    pub fn new(sizes: &'static [usize]) -> Result<Self, ProgressionError> {
        if sizes.is_empty() {
            return Err(ProgressionError::Empty);
        }
        for (index, &n) in sizes.iter().enumerate() {
            if n == 0 {
                return Err(ProgressionError::ZeroSize { index });
            }
            if index > 0 && n <= sizes[index - 1] {
                return Err(ProgressionError::NotAscending { index });
            }
        }
        Ok(Self { sizes })
    }

    pub fn initial(&self) -> usize {
        self.sizes[0]
    }

    pub fn max(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// The size that follows `current`, or `None` when `current` is the cap.
    pub fn next(&self, current: usize) -> Option<usize> {
        self.sizes.iter().copied().find(|&n| n > current)
    }

    pub fn sizes(&self) -> &'static [usize] {
        self.sizes
    }
}

impl Default for SizeProgression {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_BUCKET_COUNTS,
        }
    }
}
