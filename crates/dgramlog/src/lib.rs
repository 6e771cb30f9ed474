//! Send-only UDP client for serialized log messages.
//!
//! dgramlog takes any `Serialize` value, turns it into bytes with a
//! pluggable [`Codec`](codec::Codec), and sends those bytes as a single
//! datagram to a configured host and port:
//!
//! - **Clients**: [`DatagramLogClient`] (blocking) and
//!   [`AsyncDatagramLogClient`] (tokio)
//! - **Codecs**: binary (default), JSON, or custom closures
//! - **Error modes**: report failures as `false`, or return them as errors
//!
//! There are no delivery guarantees. A datagram the OS accepted counts as
//! sent.
//!
//! # Quick Start
//!
//! ```ignore
//! use dgramlog::{ClientConfig, CodecPreset, DatagramLogClient};
//!
//! let config = ClientConfig::new("127.0.0.1", 9999).codec(CodecPreset::Json);
//! let mut client = DatagramLogClient::new(config);
//!
//! // Goes on the wire as {"message":"Hi"}
//! client.send("Hi")?;
//! ```
//!
//! # Error Modes
//!
//! ```ignore
//! use dgramlog::{ClientConfig, DatagramLogClient, ErrorMode, SendError};
//!
//! let mut client = DatagramLogClient::new(ClientConfig::default().error_mode(ErrorMode::Throw));
//!
//! match client.send_opt::<str>(None) {
//!     Err(SendError::Invocation) => println!("nothing to send"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! # Configuration Files
//!
//! ```ignore
//! let config = ClientConfig::from_toml_file("dgramlog.toml")?;
//! let mut client = DatagramLogClient::new(config);
//! ```
//!
//! # Custom Codecs
//!
//! ```ignore
//! use dgramlog::codec::FnCodec;
//!
//! let codec = FnCodec::encode_only(|value| Ok(value.to_string().into_bytes()));
//! let mut client = DatagramLogClient::with_codec(ClientConfig::default(), codec);
//! ```

pub mod codec;
mod error;
pub mod logging;
pub mod udp;

pub use error::{CodecError, ConfigError, Result, SendError};

// Re-export commonly used types at the crate root
pub use codec::{BinaryCodec, Codec, CodecPreset, FnCodec, JsonCodec};
pub use udp::{AsyncDatagramLogClient, ClientConfig, DatagramLogClient, ErrorMode, SocketState};
