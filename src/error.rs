//! Error types reported by table construction, insertion, and growth.

use thiserror::Error;

/// Why `try_put` did not add a binding. The table is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("a binding with this key already exists")]
    DuplicateKey,
    #[error("allocation failed while inserting")]
    AllocFailed,
}

/// The bucket array could not be allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowError {
    #[error("could not allocate a bucket array of {requested} buckets")]
    AllocFailed { requested: usize },
}

impl From<GrowError> for InsertError {
    fn from(_: GrowError) -> Self {
        InsertError::AllocFailed
    }
}

/// A size progression rejected by `SizeProgression::new`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("size progression is empty")]
    Empty,
    #[error("size progression has a zero bucket count at index {index}")]
    ZeroSize { index: usize },
    #[error("size progression is not strictly ascending at index {index}")]
    NotAscending { index: usize },
}
