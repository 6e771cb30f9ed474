//! Closure-backed codec for custom wire formats.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Codec;
use crate::error::CodecError;

/// Decoder used by [`FnCodec::encode_only`].
pub type NoDecode = fn(&[u8]) -> Result<Value, CodecError>;

/// A codec built from an encode closure and a decode closure.
///
/// The closures see messages as a [`serde_json::Value`], so any
/// `Serialize` message can be handed to them.
///
/// That conversion is lossy. Non-finite floats such as `f64::NAN` become
/// `null`, and maps with non-string keys fail to encode. For a lossless
/// custom format, implement [`Codec`] directly instead.
///
/// # Example
///
/// ```ignore
/// use dgramlog::codec::FnCodec;
///
/// // Plain-text lines: strings go out verbatim, everything else as JSON.
/// let codec = FnCodec::encode_only(|value| match value {
///     serde_json::Value::String(s) => Ok(format!("{s}\n").into_bytes()),
///     other => Ok(other.to_string().into_bytes()),
/// });
/// ```
#[derive(Clone)]
pub struct FnCodec<E, D = NoDecode> {
    encode: E,
    decode: D,
}

impl<E, D> FnCodec<E, D>
where
    E: Fn(&Value) -> Result<Vec<u8>, CodecError>,
    D: Fn(&[u8]) -> Result<Value, CodecError>,
{
    /// Create a codec from an encode and a decode closure.
    pub fn new(encode: E, decode: D) -> Self {
        Self { encode, decode }
    }
}

impl<E> FnCodec<E, NoDecode>
where
    E: Fn(&Value) -> Result<Vec<u8>, CodecError>,
{
    /// Create a send-only codec. Decoding always fails.
    pub fn encode_only(encode: E) -> Self {
        Self {
            encode,
            decode: |_| Err(CodecError::custom("decoding is not supported by this codec")),
        }
    }
}

impl<E, D> Codec for FnCodec<E, D>
where
    E: Fn(&Value) -> Result<Vec<u8>, CodecError>,
    D: Fn(&[u8]) -> Result<Value, CodecError>,
{
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let value = serde_json::to_value(value)?;
        (self.encode)(&value)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let value = (self.decode)(bytes)?;
        Ok(serde_json::from_value(value)?)
    }
}

impl<E, D> fmt::Debug for FnCodec<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_codec() -> FnCodec<
        impl Fn(&Value) -> Result<Vec<u8>, CodecError>,
        impl Fn(&[u8]) -> Result<Value, CodecError>,
    > {
        FnCodec::new(
            |value: &Value| match value {
                Value::String(s) => Ok(s.as_bytes().to_vec()),
                _ => Err(CodecError::custom("only strings are supported")),
            },
            |bytes: &[u8]| {
                std::str::from_utf8(bytes)
                    .map(|s| Value::String(s.to_string()))
                    .map_err(|e| CodecError::custom(e.to_string()))
            },
        )
    }

    #[test]
    fn test_custom_round_trip() {
        let codec = text_codec();
        let bytes = codec.encode("plain text").unwrap();
        assert_eq!(bytes, b"plain text");

        let decoded: String = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, "plain text");
    }

    #[test]
    fn test_custom_rejection() {
        let codec = text_codec();
        let err = codec.encode(&42).unwrap_err();
        assert_eq!(err.to_string(), "codec error: only strings are supported");
    }

    #[test]
    fn test_encode_only_cannot_decode() {
        let codec = FnCodec::encode_only(|value: &Value| Ok(value.to_string().into_bytes()));
        assert_eq!(codec.encode(&true).unwrap(), b"true");

        let result: Result<Value, _> = codec.decode(b"true");
        assert!(matches!(result, Err(CodecError::Custom(_))));
    }

    #[test]
    fn test_value_conversion_is_lossy() {
        let codec = FnCodec::encode_only(|value: &Value| Ok(value.to_string().into_bytes()));
        assert_eq!(codec.encode(&f64::NAN).unwrap(), b"null");

        let mut keyed = std::collections::BTreeMap::new();
        keyed.insert(vec![1u8, 2], "pair");
        assert!(matches!(codec.encode(&keyed), Err(CodecError::Json(_))));
    }
}
