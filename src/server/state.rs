//! Server state and configuration.

use std::time::Duration;

use tokio::sync::Mutex;

use super::sink::ReceiptSink;
use crate::emulator::{Emulator, SessionPolicy};
use crate::printer::PrinterConfig;

/// Default raw printing port (JetDirect / AppSocket).
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9100";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:9100")
    pub listen_addr: String,
    /// Paper preset and line width of the emulated printer
    pub printer: PrinterConfig,
    /// Whether printer state survives between connections
    pub policy: SessionPolicy,
    /// Print a hex dump of every received payload
    pub hex_dump: bool,
    /// End a session when the client sends nothing for this long.
    /// `None` waits for the client to close the connection.
    pub idle_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            printer: PrinterConfig::default(),
            policy: SessionPolicy::default(),
            hex_dump: true,
            idle_timeout: None,
        }
    }
}

/// The emulated printer shared by all connections.
///
/// Both halves sit behind one lock so a session is decoded and displayed
/// before the next one starts.
pub(crate) struct Station<S> {
    pub emulator: Emulator,
    pub sink: S,
}

pub(crate) type SharedStation<S> = std::sync::Arc<Mutex<Station<S>>>;

impl<S: ReceiptSink> Station<S> {
    pub fn shared(config: &ServerConfig, sink: S) -> SharedStation<S> {
        let emulator = Emulator::new(&config.printer).with_policy(config.policy);
        std::sync::Arc::new(Mutex::new(Self { emulator, sink }))
    }
}
