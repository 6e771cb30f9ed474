//! Tracing targets used by the crate.
//!
//! dgramlog emits `tracing` events but never installs a subscriber. To see
//! them, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_max_level(tracing::Level::DEBUG)
//!     .init();
//! ```
//!
//! Suppressed transmission failures in [`ErrorMode::Report`](crate::udp::ErrorMode::Report)
//! are logged at `warn` under [`targets::UDP`].

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Socket creation, datagram sends, suppressed failures.
    pub const UDP: &str = "dgramlog::udp";
    /// Codec preset selection.
    pub const CODEC: &str = "dgramlog::codec";
    /// Configuration loading.
    pub const CONFIG: &str = "dgramlog::config";
}
