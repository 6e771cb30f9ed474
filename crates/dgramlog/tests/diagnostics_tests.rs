//! Tests for the diagnostics emitted in report mode.

use std::io;
use std::net::UdpSocket;
use std::sync::{Arc, Mutex};

use dgramlog::{ClientConfig, DatagramLogClient};
use serde::{Serialize, Serializer};
use tracing::Level;

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("value refuses to serialize"))
    }
}

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn take(&self) -> String {
        let mut buffer = self.0.lock().unwrap();
        String::from_utf8(std::mem::take(&mut *buffer)).unwrap()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_report_mode_warns_only_on_transmission_failure() {
    let capture = CaptureWriter::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();

    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let mut client = DatagramLogClient::new(ClientConfig::new("127.0.0.1", port));

    tracing::subscriber::with_default(subscriber, || {
        assert!(!client.send_opt::<str>(None).unwrap());
        let output = capture.take();
        assert!(!output.contains("WARN"), "missing message warned: {output}");
        assert!(output.contains("DEBUG"), "missing message not traced: {output}");

        assert!(!client.send(&Unencodable).unwrap());
        let output = capture.take();
        assert!(!output.contains("WARN"), "encoding failure warned: {output}");

        assert!(!client.send(&vec![0u8; 70_000]).unwrap());
        let output = capture.take();
        assert!(output.contains("WARN"), "no warning for failed send: {output}");
        assert!(output.contains("dgramlog::udp"));
        assert!(output.contains(&format!("127.0.0.1:{port}")));
    });
}
