//! Blocking datagram log client.

use std::net::{SocketAddr, UdpSocket};

use serde::Serialize;

use super::config::{ClientConfig, ErrorMode};
use super::destination::{self, Family};
use super::state::SocketState;
use crate::Result;
use crate::codec::{Codec, CodecPreset};
use crate::error::SendError;
use crate::logging::targets;

/// A send-only UDP client for serialized messages.
///
/// Each [`send`](Self::send) encodes one message with the client's codec
/// and transmits it as a single datagram to the configured address and
/// port. There is no framing, acknowledgement or retry.
///
/// The socket is created on the first send that reaches the transport and
/// then reused for the lifetime of the client. Address and port may change
/// at any time; the next send uses the new destination.
///
/// # Error Modes
///
/// - [`ErrorMode::Report`] (default): every failure yields `Ok(false)`.
///   Transmission failures are logged at `warn`.
/// - [`ErrorMode::Throw`]: every failure yields `Err(SendError)`, so `?`
///   stops the caller.
///
/// # Example
///
/// ```ignore
/// use dgramlog::{ClientConfig, DatagramLogClient};
///
/// let mut client = DatagramLogClient::new(ClientConfig::default());
/// assert!(client.send("Hi")?);
/// ```
pub struct DatagramLogClient<C = CodecPreset> {
    config: ClientConfig,
    /// Codec passed to `with_codec`. `None` follows `config.codec`.
    codec: Option<C>,
    socket: Option<UdpSocket>,
}

impl DatagramLogClient<CodecPreset> {
    /// Create a client using the codec preset named in the configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            codec: None,
            socket: None,
        }
    }

    /// Get the codec preset used for the next send.
    pub fn codec(&self) -> CodecPreset {
        self.codec.unwrap_or(self.config.codec)
    }

    /// Switch to another built-in codec. Applies to the next send.
    pub fn set_codec(&mut self, codec: CodecPreset) {
        self.config.codec = codec;
        self.codec = None;
    }
}

impl Default for DatagramLogClient<CodecPreset> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<C: Codec> DatagramLogClient<C> {
    /// Create a client with a custom codec.
    ///
    /// The `codec` field of `config` is ignored, and `config().codec` does
    /// not describe what goes on the wire. Use [`custom_codec`](Self::custom_codec).
    pub fn with_codec(config: ClientConfig, codec: C) -> Self {
        Self {
            config,
            codec: Some(codec),
            socket: None,
        }
    }

    /// Send a message.
    ///
    /// Returns `Ok(true)` when the whole payload was handed to the OS.
    /// See the type-level docs for how failures are reported.
    pub fn send<T: Serialize + ?Sized>(&mut self, message: &T) -> Result<bool> {
        self.send_opt(Some(message))
    }

    /// Send a message that may be absent.
    ///
    /// `None` means no message was supplied and is an invocation error.
    /// An empty value such as `Some("")` is a message and is sent.
    pub fn send_opt<T: Serialize + ?Sized>(&mut self, message: Option<&T>) -> Result<bool> {
        let outcome = self.try_send(message);
        self.config
            .error_mode
            .settle(&self.config.destination(), outcome)
    }

    fn try_send<T: Serialize + ?Sized>(&mut self, message: Option<&T>) -> Result<()> {
        let message = message.ok_or(SendError::Invocation)?;
        let payload = match &self.codec {
            Some(codec) => codec.encode(message)?,
            None => self.config.codec.encode(message)?,
        };
        let destination = self.config.destination();

        let target = destination::resolve(&self.config.address, self.config.port, self.family())
            .map_err(|e| SendError::transmission(&destination, e))?;
        let socket = self.socket_for(target, &destination)?;

        let sent = socket
            .send_to(&payload, target)
            .map_err(|e| SendError::transmission(&destination, e))?;
        if sent != payload.len() {
            return Err(SendError::transmission(
                &destination,
                format!("sent {} of {} bytes", sent, payload.len()),
            ));
        }

        tracing::trace!(target: targets::UDP, "Sent {} byte datagram to {}", sent, target);
        Ok(())
    }

    fn socket_for(&mut self, target: SocketAddr, destination: &str) -> Result<&UdpSocket> {
        let socket = match self.socket.take() {
            Some(socket) => socket,
            None => {
                let socket = UdpSocket::bind(Family::of(&target).unspecified())
                    .map_err(|e| {
                        SendError::transmission(destination, format!("Failed to bind: {e}"))
                    })?;
                tracing::debug!(
                    target: targets::UDP,
                    "Created datagram socket on {:?}",
                    socket.local_addr().ok()
                );
                socket
            }
        };
        let socket = self.socket.insert(socket);

        let broadcast = self.config.broadcast;
        let current = socket.broadcast().map_err(|e| {
            SendError::transmission(destination, format!("Failed to read broadcast: {e}"))
        })?;
        if current != broadcast {
            socket.set_broadcast(broadcast).map_err(|e| {
                SendError::transmission(destination, format!("Failed to set broadcast: {e}"))
            })?;
        }
        Ok(&*socket)
    }

    /// Whether `SO_BROADCAST` is set on the socket.
    /// Returns `None` before the first send creates it.
    pub fn broadcast_enabled(&self) -> Option<bool> {
        self.socket.as_ref().and_then(|s| s.broadcast().ok())
    }

    fn family(&self) -> Option<Family> {
        self.local_addr().map(|addr| Family::of(&addr))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get mutable access to the configuration. Changes apply to the next send.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Change the destination address.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.config.address = address.into();
    }

    /// Change the destination port.
    pub fn set_port(&mut self, port: u16) {
        self.config.port = port;
    }

    /// Get the error mode.
    pub fn error_mode(&self) -> ErrorMode {
        self.config.error_mode
    }

    /// Change the error mode.
    pub fn set_error_mode(&mut self, mode: ErrorMode) {
        self.config.error_mode = mode;
    }

    /// Get the destination string (`host:port`).
    pub fn destination(&self) -> String {
        self.config.destination()
    }

    /// Get the codec passed to `with_codec`, if any.
    pub fn custom_codec(&self) -> Option<&C> {
        self.codec.as_ref()
    }

    /// Get the socket state.
    pub fn socket_state(&self) -> SocketState {
        if self.socket.is_some() {
            SocketState::Ready
        } else {
            SocketState::Uninitialized
        }
    }

    /// Get the local address of the socket.
    /// Returns `None` before the first send creates it.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }
}

impl<C> std::fmt::Debug for DatagramLogClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatagramLogClient")
            .field("destination", &self.config.destination())
            .field("error_mode", &self.config.error_mode)
            .field("socket", &self.socket.as_ref().and_then(|s| s.local_addr().ok()))
            .finish()
    }
}
