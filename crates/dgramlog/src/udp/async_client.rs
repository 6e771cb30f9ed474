//! Datagram log client for the tokio runtime.

use std::net::SocketAddr;

use serde::Serialize;
use tokio::net::UdpSocket;

use super::config::{ClientConfig, ErrorMode};
use super::destination::{self, Family};
use super::state::SocketState;
use crate::Result;
use crate::codec::{Codec, CodecPreset};
use crate::error::SendError;
use crate::logging::targets;

/// Async counterpart of [`DatagramLogClient`](super::DatagramLogClient).
///
/// Same lazy socket, same error modes, same wire format. Hostname lookups
/// run through `tokio::net::lookup_host` instead of blocking the runtime.
///
/// ```ignore
/// let mut client = AsyncDatagramLogClient::new(ClientConfig::new("127.0.0.1", 5140));
/// client.send("service started").await?;
/// ```
pub struct AsyncDatagramLogClient<C = CodecPreset> {
    config: ClientConfig,
    /// Codec passed to `with_codec`. `None` follows `config.codec`.
    codec: Option<C>,
    socket: Option<UdpSocket>,
}

impl AsyncDatagramLogClient<CodecPreset> {
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

impl Default for AsyncDatagramLogClient<CodecPreset> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<C: Codec> AsyncDatagramLogClient<C> {
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
    pub async fn send<T: Serialize + ?Sized>(&mut self, message: &T) -> Result<bool> {
        self.send_opt(Some(message)).await
    }

    /// Send a message that may be absent. `None` is an invocation error.
    pub async fn send_opt<T: Serialize + ?Sized>(
        &mut self,
        message: Option<&T>,
    ) -> Result<bool> {
        let outcome = self.try_send(message).await;
        self.config
            .error_mode
            .settle(&self.config.destination(), outcome)
    }

    async fn try_send<T: Serialize + ?Sized>(&mut self, message: Option<&T>) -> Result<()> {
        let message = message.ok_or(SendError::Invocation)?;
        let payload = match &self.codec {
            Some(codec) => codec.encode(message)?,
            None => self.config.codec.encode(message)?,
        };
        let destination = self.config.destination();

        let family = self.family();
        let target = destination::resolve_async(&self.config.address, self.config.port, family)
            .await
            .map_err(|e| SendError::transmission(&destination, e))?;
        let socket = self.socket_for(target, &destination).await?;

        let sent = socket
            .send_to(&payload, target)
            .await
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

    async fn socket_for(&mut self, target: SocketAddr, destination: &str) -> Result<&UdpSocket> {
        let socket = match self.socket.take() {
            Some(socket) => socket,
            None => {
                let socket = UdpSocket::bind(Family::of(&target).unspecified())
                    .await
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

    /// Get the local address of the socket, once created.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }
}

impl<C> std::fmt::Debug for AsyncDatagramLogClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncDatagramLogClient")
            .field("destination", &self.config.destination())
            .field("error_mode", &self.config.error_mode)
            .field("socket", &self.socket.as_ref().and_then(|s| s.local_addr().ok()))
            .finish()
    }
}
