//! Feature-gated tracing hooks.
//!
//! Each hook compiles to an empty inline function unless the `tracing`
//! feature is enabled. Hooks never receive message bytes or digest values.

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const MD5_TARGET: &str = "md5_engine";

/// Traces the padding step of a finalization.
///
/// # Arguments
///
/// * `message_len` - Total number of bytes fed before finalization
/// * `padding_blocks` - Blocks compressed by the padding step (1 or 2)
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_finalize(message_len: u64, padding_blocks: usize) {
    tracing::trace!(
        target: MD5_TARGET,
        message_len = message_len,
        padding_blocks = padding_blocks,
        "md5: finalized"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_finalize(_message_len: u64, _padding_blocks: usize) {}

/// Traces the start of a batch digest.
///
/// # Arguments
///
/// * `inputs` - Number of independent inputs in the batch
/// * `parallel` - Whether the batch is spread across the rayon pool
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_batch(inputs: usize, parallel: bool) {
    tracing::debug!(
        target: MD5_TARGET,
        inputs = inputs,
        parallel = parallel,
        "md5: hashing batch"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_batch(_inputs: usize, _parallel: bool) {}
