use thiserror::Error;

use crate::consts::DIGEST_LEN;

/// Errors raised while parsing a hexadecimal MD5 digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DigestParseError {
    /// The string does not contain exactly 32 characters.
    #[error("md5 digest requires {expected} hex characters, received {len}", expected = DIGEST_LEN * 2)]
    InvalidLength {
        /// Number of bytes in the rejected string.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {found:?} at offset {index} in md5 digest")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Error returned when building a digest from a byte slice of the wrong length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("md5 digest requires {expected} bytes, received {len}", expected = DIGEST_LEN)]
pub struct DigestLengthError {
    len: usize,
}

impl DigestLengthError {
    /// Number of bytes required to build a digest.
    pub const EXPECTED_LEN: usize = DIGEST_LEN;

    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of bytes the caller supplied.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the supplied slice was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use md5_engine::Md5Digest;
    ///
    /// let err = Md5Digest::try_from(&[][..]).unwrap_err();
    /// assert!(err.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}
