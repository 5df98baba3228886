#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod batch;
mod buffer;
mod compress;
mod consts;
mod error;
mod hasher;
mod output;
mod trace;

#[cfg(feature = "digest")]
#[cfg_attr(docsrs, doc(cfg(feature = "digest")))]
mod rustcrypto;

#[cfg(feature = "parallel")]
pub use batch::ParallelMd5;
pub use batch::{digest, digest_batch};
pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use error::{DigestLengthError, DigestParseError};
pub use hasher::Md5;
pub use output::Md5Digest;
