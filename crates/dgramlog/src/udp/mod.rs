//! Send-only UDP clients for serialized messages.
//!
//! This module provides:
//! - **DatagramLogClient**: blocking client backed by `std::net::UdpSocket`
//! - **AsyncDatagramLogClient**: the same client on the tokio runtime
//!
//! Both encode each message with a [`Codec`](crate::codec::Codec) and send
//! it as exactly one datagram. The socket is created on first use.
//!
//! # Example
//!
//! ```ignore
//! use dgramlog::udp::{ClientConfig, DatagramLogClient, ErrorMode};
//!
//! let config = ClientConfig::new("127.0.0.1", 5140)
//!     .error_mode(ErrorMode::Throw);
//!
//! let mut client = DatagramLogClient::new(config);
//! client.send("service started")?;
//!
//! // Re-point the client; the next datagram goes to the new port.
//! client.set_port(5141);
//! client.send(&serde_json::json!({"level": "warn", "text": "disk 91% full"}))?;
//! ```
//!
//! # Report Mode
//!
//! ```ignore
//! let mut client = DatagramLogClient::default();
//!
//! // No message: nothing is sent and the call reports `false`.
//! assert!(!client.send_opt::<str>(None)?);
//! ```

mod async_client;
mod client;
mod config;
mod destination;
mod state;

pub use async_client::AsyncDatagramLogClient;
pub use client::DatagramLogClient;
pub use config::{ClientConfig, DEFAULT_ADDRESS, DEFAULT_PORT, ErrorMode};
pub use state::SocketState;
