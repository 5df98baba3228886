//! The 16-byte digest value.

use std::fmt;
use std::str::FromStr;

use crate::consts::DIGEST_LEN;
use crate::error::{DigestLengthError, DigestParseError};

/// A finished MD5 digest.
///
/// Renders as 32 lowercase hex characters through [`Display`](fmt::Display)
/// and [`LowerHex`](fmt::LowerHex), uppercase through
/// [`UpperHex`](fmt::UpperHex), and parses from either case.
///
/// ```
/// use md5_engine::Md5Digest;
///
/// let digest: Md5Digest = "900150983cd24fb0d6963f7d28e17f72".parse().unwrap();
/// assert_eq!(digest, md5_engine::digest(b"abc"));
/// assert_eq!(format!("{digest:X}"), "900150983CD24FB0D6963F7D28E17F72");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Md5Digest([u8; DIGEST_LEN]);

impl Md5Digest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; DIGEST_LEN]> for Md5Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Md5Digest {
    type Error = DigestLengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; DIGEST_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| DigestLengthError::new(bytes.len()))
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Md5Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        &self.0 == other
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5Digest({self:x})")
    }
}

impl FromStr for Md5Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(DigestParseError::InvalidLength { len: s.len() });
        }

        let mut bytes = [0_u8; DIGEST_LEN];
        for (index, found) in s.char_indices() {
            let nibble = found
                .to_digit(16)
                .ok_or(DigestParseError::InvalidDigit { index, found })?;
            // Every earlier character was a hex digit, so char and byte offsets agree.
            let shift = if index % 2 == 0 { 4 } else { 0 };
            bytes[index / 2] |= (nibble as u8) << shift;
        }

        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Md5Digest;

    impl Serialize for Md5Digest {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.collect_str(self)
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    struct DigestVisitor;

    impl Visitor<'_> for DigestVisitor {
        type Value = Md5Digest;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a 32-character hex string or 16 raw bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse().map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Md5Digest::try_from(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Md5Digest {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(DigestVisitor)
            } else {
                deserializer.deserialize_bytes(DigestVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [u8; DIGEST_LEN] = [
        0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f,
        0x72,
    ];

    #[test]
    fn renders_lowercase_and_uppercase_hex() {
        let digest = Md5Digest::from_bytes(ABC);
        assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(format!("{digest:x}"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(format!("{digest:X}"), "900150983CD24FB0D6963F7D28E17F72");
        assert_eq!(
            format!("{digest:?}"),
            "Md5Digest(900150983cd24fb0d6963f7d28e17f72)"
        );
    }

    #[test]
    fn parses_either_case() {
        let lower: Md5Digest = "900150983cd24fb0d6963f7d28e17f72".parse().unwrap();
        let upper: Md5Digest = "900150983CD24FB0D6963F7D28E17F72".parse().unwrap();
        assert_eq!(lower, ABC);
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "abc".parse::<Md5Digest>(),
            Err(DigestParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "".parse::<Md5Digest>(),
            Err(DigestParseError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn rejects_non_hex_character() {
        let err = "900150983cd24fb0d6963f7d28e17g72"
            .parse::<Md5Digest>()
            .unwrap_err();
        assert_eq!(
            err,
            DigestParseError::InvalidDigit {
                index: 29,
                found: 'g'
            }
        );
    }

    #[test]
    fn rejects_multibyte_character() {
        // 30 ASCII digits plus one two-byte character makes 32 bytes.
        let input = format!("{}é", "0".repeat(30));
        assert_eq!(input.len(), 32);
        assert_eq!(
            input.parse::<Md5Digest>(),
            Err(DigestParseError::InvalidDigit {
                index: 30,
                found: 'é'
            })
        );
    }

    #[test]
    fn slice_conversion_checks_length() {
        assert_eq!(Md5Digest::try_from(&ABC[..]).unwrap(), ABC);
        let err = Md5Digest::try_from(&ABC[..15]).unwrap_err();
        assert_eq!(err.len(), 15);
    }

    #[test]
    fn byte_conversions_round_trip() {
        let digest = Md5Digest::from(ABC);
        assert_eq!(digest.as_bytes(), &ABC);
        assert_eq!(digest.as_ref(), &ABC[..]);
        assert_eq!(<[u8; DIGEST_LEN]>::from(digest), ABC);
        assert_eq!(digest.into_bytes(), ABC);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_uses_hex_string() {
        let digest = Md5Digest::from_bytes(ABC);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, "\"900150983cd24fb0d6963f7d28e17f72\"");

        let back: Md5Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);

        assert!(serde_json::from_str::<Md5Digest>("\"00\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_binary_formats_use_raw_bytes() {
        use serde_test::{Compact, Configure, Token, assert_de_tokens_error, assert_tokens};

        let digest = Md5Digest::from_bytes(ABC);
        assert_tokens(&digest.compact(), &[Token::Bytes(&ABC)]);
        assert_tokens(
            &digest.readable(),
            &[Token::Str("900150983cd24fb0d6963f7d28e17f72")],
        );

        assert_de_tokens_error::<Compact<Md5Digest>>(
            &[Token::Bytes(&[0_u8; 15])],
            "md5 digest requires 16 bytes, received 15",
        );
    }
}
