//! Bucket addressing for string keys.

const HASH_MULTIPLIER: usize = 65599;

/// Polynomial accumulation over the key's bytes, wrapping on overflow.
#[inline]
pub fn hash_key(key: &str) -> usize {
    key.bytes().fold(0usize, |acc, b| {
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as usize)
    })
}

/// Map `key` to a bucket in `[0, bucket_count)`.
///
/// Panics if `bucket_count` is zero.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "bucket count must be non-zero");
    hash_key(key) % bucket_count
}
