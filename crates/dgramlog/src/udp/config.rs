//! Configuration types for datagram log clients.

use std::fmt;
use std::net::Ipv6Addr;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::CodecPreset;
use crate::error::{ConfigError, Result, SendError};
use crate::logging::targets;

/// Default destination host.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
/// Default destination port.
pub const DEFAULT_PORT: u16 = 9999;

/// How `send` reports failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Failures become `Ok(false)`. Transmission failures are logged.
    #[default]
    Report,
    /// Failures are returned as `Err(SendError)`.
    Throw,
}

impl ErrorMode {
    /// Apply this policy to the outcome of a send attempt.
    pub(crate) fn settle(self, destination: &str, outcome: Result<()>) -> Result<bool> {
        let err = match outcome {
            Ok(()) => return Ok(true),
            Err(err) => err,
        };

        match self {
            Self::Throw => Err(err),
            Self::Report => {
                match &err {
                    SendError::Transmission { reason, .. } => {
                        tracing::warn!(
                            target: targets::UDP,
                            "Datagram to {} not sent: {}",
                            destination,
                            reason
                        );
                    }
                    other => {
                        tracing::debug!(
                            target: targets::UDP,
                            "Send to {} suppressed: {}",
                            destination,
                            other
                        );
                    }
                }
                Ok(false)
            }
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMode::Report => write!(f, "report"),
            ErrorMode::Throw => write!(f, "throw"),
        }
    }
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "throw" => Ok(Self::Throw),
            _ => Err(ConfigError::invalid("error mode", s)),
        }
    }
}

/// Configuration for a datagram log client.
///
/// Every field is optional in TOML; missing fields take their defaults.
///
/// ```toml
/// address = "logs.internal"
/// port = 5140
/// error_mode = "throw"
/// codec = "json"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Destination hostname or IP address.
    pub address: String,
    /// Destination UDP port.
    pub port: u16,
    /// Failure reporting policy.
    pub error_mode: ErrorMode,
    /// Codec used by [`DatagramLogClient::new`](super::DatagramLogClient::new).
    pub codec: CodecPreset,
    /// Enable `SO_BROADCAST` on the socket. Re-applied on the next send
    /// when changed after the socket exists.
    pub broadcast: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.into(),
            port: DEFAULT_PORT,
            error_mode: ErrorMode::default(),
            codec: CodecPreset::default(),
            broadcast: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration targeting the given host and port.
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the destination address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the destination port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the error mode.
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Shorthand for `error_mode(ErrorMode::Throw)`.
    pub fn throw_errors(self) -> Self {
        self.error_mode(ErrorMode::Throw)
    }

    /// Set the codec preset.
    pub fn codec(mut self, codec: CodecPreset) -> Self {
        self.codec = codec;
        self
    }

    /// Enable broadcast mode.
    pub fn broadcast(mut self, enabled: bool) -> Self {
        self.broadcast = enabled;
        self
    }

    /// Get the destination string (`host:port`, IPv6 literals bracketed).
    pub fn destination(&self) -> String {
        if self.address.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(
            target: targets::CONFIG,
            "Loaded client config for {}",
            config.destination()
        );
        Ok(config)
    }

    /// Read a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&content)
    }
}
