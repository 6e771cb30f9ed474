//! Serialization strategies for datagram payloads.
//!
//! A [`Codec`] turns a message into the exact bytes placed in a datagram.
//! The client never inspects those bytes; a listener must decode them with
//! a matching codec.
//!
//! - [`BinaryCodec`]: compact binary encoding (bincode). The default.
//! - [`JsonCodec`]: JSON with a mapping at the top level.
//! - [`FnCodec`]: a custom strategy built from closures.
//! - [`CodecPreset`]: the built-in codecs selectable by name.
//!
//! # Example
//!
//! ```ignore
//! use dgramlog::codec::{Codec, JsonCodec};
//!
//! let bytes = JsonCodec.encode("Hi")?;
//! let value: serde_json::Value = JsonCodec.decode(&bytes)?;
//! assert_eq!(value, serde_json::json!({"message": "Hi"}));
//! ```

mod binary;
mod func;
mod json;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use binary::BinaryCodec;
pub use func::FnCodec;
pub use json::{JsonCodec, MESSAGE_KEY};

use crate::error::{CodecError, ConfigError};

/// A serialization strategy: maps a value to bytes and back.
///
/// Only [`encode`](Self::encode) is used on the send path. `decode` is the
/// inverse a listener would apply.
pub trait Codec {
    /// Encode a value into a datagram payload.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode a datagram payload back into a value.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

impl<C: Codec> Codec for &C {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        (**self).encode(value)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (**self).decode(bytes)
    }
}

/// The built-in codecs, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecPreset {
    /// [`BinaryCodec`].
    #[default]
    Binary,
    /// [`JsonCodec`].
    Json,
}

impl CodecPreset {
    /// The preset's name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for CodecPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bincode" => Ok(Self::Binary),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::invalid("codec preset", s)),
        }
    }
}

impl Codec for CodecPreset {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Binary => BinaryCodec.encode(value),
            Self::Json => JsonCodec.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Self::Binary => BinaryCodec.decode(bytes),
            Self::Json => JsonCodec.decode(bytes),
        }
    }
}
