//! Hash algorithm selection for the PBKDF2 pseudorandom function
//!
//! The enumeration is closed: every variant maps to a stable one-byte wire
//! tag and to a concrete HMAC instantiation in the derivation engine. Adding
//! an algorithm means one variant, one tag pair, one dispatch arm.

use std::fmt;

use bincode::de::{BorrowDecoder, Decoder};
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{BorrowDecode, Decode, Encode};

/// Hash algorithms usable as the PBKDF2 HMAC primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256 (default)
    #[default]
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in wire-tag order
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Stable wire tag for this algorithm. Tags are part of the record
    /// format and must never be renumbered.
    pub(crate) const fn tag(self) -> u8 {
        match self {
            HashAlgorithm::Sha256 => 0,
            HashAlgorithm::Sha512 => 1,
            HashAlgorithm::Sha3_224 => 2,
            HashAlgorithm::Sha3_256 => 3,
            HashAlgorithm::Sha3_384 => 4,
            HashAlgorithm::Sha3_512 => 5,
        }
    }

    /// Resolve a wire tag back to an algorithm
    pub(crate) const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(HashAlgorithm::Sha256),
            1 => Some(HashAlgorithm::Sha512),
            2 => Some(HashAlgorithm::Sha3_224),
            3 => Some(HashAlgorithm::Sha3_256),
            4 => Some(HashAlgorithm::Sha3_384),
            5 => Some(HashAlgorithm::Sha3_512),
            _ => None,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_224 => "SHA3-224",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        };
        f.write_str(name)
    }
}

// Wire encoding is the stable tag byte, never the derive-generated variant
// index, so reordering variants cannot change the record format.
impl Encode for HashAlgorithm {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> std::result::Result<(), EncodeError> {
        self.tag().encode(encoder)
    }
}

impl<Context> Decode<Context> for HashAlgorithm {
    fn decode<D: Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> std::result::Result<Self, DecodeError> {
        let tag = u8::decode(decoder)?;
        Self::from_tag(tag).ok_or_else(|| {
            DecodeError::OtherString(format!("unknown hash algorithm tag {tag}"))
        })
    }
}

impl<'de, Context> BorrowDecode<'de, Context> for HashAlgorithm {
    fn borrow_decode<D: BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> std::result::Result<Self, DecodeError> {
        let tag = u8::decode(decoder)?;
        Self::from_tag(tag).ok_or_else(|| {
            DecodeError::OtherString(format!("unknown hash algorithm tag {tag}"))
        })
    }
}
