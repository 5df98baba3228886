//! One-shot and batched hashing.
//!
//! Every input gets its own [`Md5`] instance, so a batch is a set of
//! independent computations. With the `parallel` feature the batch is spread
//! across rayon's global pool; otherwise inputs are hashed in order on the
//! calling thread.

use crate::hasher::Md5;
use crate::output::Md5Digest;
use crate::trace::trace_batch;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute the MD5 digest of `data` in one shot.
#[must_use]
pub fn digest(data: &[u8]) -> Md5Digest {
    Md5::digest(data)
}

/// Compute MD5 digests for multiple inputs.
///
/// Returns digests in the same order as inputs.
///
/// ```
/// use md5_engine::{digest, digest_batch};
///
/// let inputs = [b"input1".as_slice(), b"input2", b"input3"];
/// let digests = digest_batch(&inputs);
/// assert_eq!(digests[1], digest(b"input2"));
/// ```
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Md5Digest> {
    if inputs.is_empty() {
        return Vec::new();
    }

    trace_batch(inputs.len(), cfg!(feature = "parallel"));
    digest_all(inputs)
}

#[cfg(feature = "parallel")]
fn digest_all<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Md5Digest> {
    inputs.par_iter().map(|input| digest(input.as_ref())).collect()
}

#[cfg(not(feature = "parallel"))]
fn digest_all<T: AsRef<[u8]>>(inputs: &[T]) -> Vec<Md5Digest> {
    inputs.iter().map(|input| digest(input.as_ref())).collect()
}

/// Extension trait for parallel MD5 hashing.
///
/// # Example
///
/// ```
/// use md5_engine::{ParallelMd5, digest};
/// use rayon::prelude::*;
///
/// let records = ["alpha", "beta", "gamma"];
/// let digests = records.par_iter().md5_digest();
///
/// for (record, got) in records.iter().zip(&digests) {
///     assert_eq!(*got, digest(record.as_bytes()));
/// }
/// ```
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub trait ParallelMd5<T> {
    /// Compute MD5 digests in parallel, preserving the iterator's order.
    fn md5_digest(self) -> Vec<Md5Digest>;
}

#[cfg(feature = "parallel")]
impl<I, T> ParallelMd5<T> for I
where
    I: ParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Md5Digest> {
        self.map(|item| digest(item.as_ref())).collect()
    }
}
