//! Binary codec backed by bincode.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Codec;
use crate::error::CodecError;

/// Generic binary object encoder.
///
/// Any `Serialize` value is accepted; strings, numbers, structs and
/// collections all round-trip through [`decode`](Codec::decode) into the
/// same type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let bytes = BinaryCodec.encode("Hi").unwrap();
        let decoded: String = BinaryCodec.decode(&bytes).unwrap();
        assert_eq!(decoded, "Hi");
    }

    #[test]
    fn test_empty_string_encodes_to_non_empty_payload() {
        // Length prefix only.
        let bytes = BinaryCodec.encode("").unwrap();
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn test_truncated_payload_fails_to_decode() {
        let bytes = BinaryCodec.encode("hello").unwrap();
        let result: Result<String, _> = BinaryCodec.decode(&bytes[..4]);
        assert!(matches!(result, Err(CodecError::Binary(_))));
    }
}
