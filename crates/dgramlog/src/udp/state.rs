//! State of a client's lazily created socket.

/// State of the socket owned by a datagram log client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SocketState {
    /// No send has reached the transport yet; no socket exists.
    #[default]
    Uninitialized,
    /// The socket is bound and reused for every later send.
    Ready,
}

impl std::fmt::Display for SocketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocketState::Uninitialized => write!(f, "Uninitialized"),
            SocketState::Ready => write!(f, "Ready"),
        }
    }
}
