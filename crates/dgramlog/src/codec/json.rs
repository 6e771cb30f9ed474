//! JSON codec.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::Codec;
use crate::error::CodecError;
use crate::logging::targets;

/// Key under which non-mapping values are wrapped.
pub const MESSAGE_KEY: &str = "message";

/// JSON encoder requiring a mapping at the top level.
///
/// Objects are encoded as-is. Any other value `v` (string, number, array,
/// null) is wrapped as `{"message": v}` first, so `"Hi"` goes on the wire
/// as `{"message":"Hi"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl JsonCodec {
    /// Convert a value into the JSON document that will be sent.
    pub fn to_document<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Value::Object(map)),
            other => {
                tracing::trace!(
                    target: targets::CODEC,
                    "Wrapping non-object JSON value under '{}'",
                    MESSAGE_KEY
                );
                let mut map = Map::with_capacity(1);
                map.insert(MESSAGE_KEY.to_string(), other);
                Ok(Value::Object(map))
            }
        }
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let document = self.to_document(value)?;
        Ok(serde_json::to_vec(&document)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
