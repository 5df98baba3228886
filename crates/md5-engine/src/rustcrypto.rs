//! RustCrypto `digest` 0.10 trait implementations.
//!
//! These make [`Md5`] satisfy the blanket [`digest::Digest`] impl, so it can
//! be handed to generic code written against the RustCrypto traits.

use digest::consts::{U16, U64};
use digest::crypto_common::BlockSizeUser;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::hasher::Md5;

impl HashMarker for Md5 {}

impl OutputSizeUser for Md5 {
    type OutputSize = U16;
}

impl BlockSizeUser for Md5 {
    type BlockSize = U64;
}

impl Update for Md5 {
    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }
}

impl FixedOutput for Md5 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(Self::finalize(self).as_bytes());
    }
}

impl Reset for Md5 {
    fn reset(&mut self) {
        Self::reset(self);
    }
}

impl FixedOutputReset for Md5 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let finished = self.clone();
        Self::reset(self);
        out.copy_from_slice(finished.finalize().as_bytes());
    }
}
