//! Error types for the datagram client.

use std::path::PathBuf;

/// Errors produced by a [`Codec`](crate::codec::Codec).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Binary (bincode) encoding or decoding failed.
    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom codec rejected the value.
    #[error("codec error: {0}")]
    Custom(String),
}

impl CodecError {
    /// Create a custom codec error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Errors surfaced by `send` when the client runs in
/// [`ErrorMode::Throw`](crate::udp::ErrorMode::Throw).
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// `send` was invoked without a message.
    #[error("send invoked without a message")]
    Invocation,

    /// The codec could not turn the message into bytes.
    #[error("failed to encode message: {0}")]
    Encoding(#[from] CodecError),

    /// The datagram could not be transmitted in full.
    #[error("failed to transmit datagram to {destination}: {reason}")]
    Transmission {
        /// The `host:port` the datagram was addressed to.
        destination: String,
        /// OS or transport error text.
        reason: String,
    },
}

impl SendError {
    /// Create a transmission error.
    pub fn transmission(destination: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transmission {
            destination: destination.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is an invocation error.
    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation)
    }

    /// Check if this is an encoding error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Check if this is a transmission error.
    pub fn is_transmission(&self) -> bool {
        matches!(self, Self::Transmission { .. })
    }
}

/// Errors raised while loading a [`ClientConfig`](crate::udp::ClientConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped fields.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A named value (error mode, codec preset) was not recognized.
    #[error("Unknown {kind} '{value}'")]
    Invalid { kind: &'static str, value: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-value error.
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            value: value.into(),
        }
    }
}

/// A specialized Result type for send operations.
pub type Result<T> = std::result::Result<T, SendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmission_display_carries_os_text() {
        let err = SendError::transmission("127.0.0.1:9999", "Network is unreachable");
        assert!(err.is_transmission());
        assert_eq!(
            err.to_string(),
            "failed to transmit datagram to 127.0.0.1:9999: Network is unreachable"
        );
    }

    #[test]
    fn test_encoding_from_codec_error() {
        let err: SendError = CodecError::custom("unsupported value").into();
        assert!(err.is_encoding());
        assert!(!err.is_invocation());
        assert_eq!(
            err.to_string(),
            "failed to encode message: codec error: unsupported value"
        );
    }

    #[test]
    fn test_config_invalid_display() {
        let err = ConfigError::invalid("error mode", "loud");
        assert_eq!(err.to_string(), "Unknown error mode 'loud'");
    }
}
