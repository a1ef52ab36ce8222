//! Receipt sinks: where finished sessions go.

use std::net::SocketAddr;

use tokio::sync::mpsc;

use crate::emulator::Receipt;
use crate::preview;

/// Consumer of decoded sessions.
pub trait ReceiptSink: Send + 'static {
    /// Raw payload of every non-empty session, before decoding.
    fn received(&mut self, _peer: SocketAddr, _data: &[u8]) {}

    /// A session that produced output.
    fn deliver(&mut self, peer: SocketAddr, receipt: Receipt);
}

/// Prints sessions to stdout: optional hex dump, then the framed receipt.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    hex_dump: bool,
}

impl ConsoleSink {
    pub fn new(hex_dump: bool) -> Self {
        Self { hex_dump }
    }
}

impl ReceiptSink for ConsoleSink {
    fn received(&mut self, _peer: SocketAddr, data: &[u8]) {
        if self.hex_dump {
            println!("\nReceived data (hex):");
            println!("{}", preview::hex_dump(data));
        }
    }

    fn deliver(&mut self, _peer: SocketAddr, receipt: Receipt) {
        print!("{}", preview::render_box(&receipt));
    }
}

/// Forwards receipts over a channel. A closed receiver drops them.
impl ReceiptSink for mpsc::UnboundedSender<Receipt> {
    fn deliver(&mut self, peer: SocketAddr, receipt: Receipt) {
        if self.send(receipt).is_err() {
            tracing::debug!(%peer, "receipt receiver closed, dropping receipt");
        }
    }
}
