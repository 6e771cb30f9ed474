//! Send a few messages to a local listener.
//!
//! Start a listener first, for example `nc -ul 9999`, then run:
//!
//! ```text
//! cargo run -p dgramlog --example send_hello [json]
//! ```

use dgramlog::{ClientConfig, CodecPreset, DatagramLogClient};
use serde::Serialize;

#[derive(Serialize)]
struct Event<'a> {
    level: &'a str,
    text: &'a str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let codec = match std::env::args().nth(1) {
        Some(name) => name.parse::<CodecPreset>()?,
        None => CodecPreset::Json,
    };

    let config = ClientConfig::default().codec(codec).throw_errors();
    let mut client = DatagramLogClient::new(config);

    println!("Sending to {} with the {} codec", client.destination(), codec);

    client.send("Hi")?;
    client.send(&Event {
        level: "info",
        text: "service started",
    })?;

    println!("Socket bound to {:?}", client.local_addr());
    Ok(())
}
