//! End-to-end tests of the TCP print server over loopback.

use std::time::Duration;

use pretty_assertions::assert_eq;
use recibo::emulator::{Receipt, SessionPolicy};
use recibo::printer::PrinterConfig;
use recibo::protocol::text;
use recibo::server::{self, ServerConfig};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

const WAIT: Duration = Duration::from_secs(5);

/// Start a server on an ephemeral port and return its address and receipts.
async fn start(policy: SessionPolicy) -> (String, mpsc::UnboundedReceiver<Receipt>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let config = ServerConfig {
        listen_addr: addr.clone(),
        printer: PrinterConfig::PAPER_58MM.with_chars_per_line(10),
        policy,
        hex_dump: false,
        idle_timeout: None,
    };

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move { server::run(listener, &config, tx).await });
    (addr, rx)
}

async fn send(addr: &str, job: &[u8]) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(job).await.unwrap();
    stream.shutdown().await.unwrap();
}

async fn next(rx: &mut mpsc::UnboundedReceiver<Receipt>) -> Receipt {
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("receipt within timeout")
        .expect("server still running")
}

#[tokio::test]
async fn test_job_becomes_receipt() {
    let (addr, mut rx) = start(SessionPolicy::Persist).await;

    send(&addr, b"hello\nworld").await;
    let receipt = next(&mut rx).await;

    assert_eq!(receipt.chars_per_line, 10);
    assert_eq!(receipt.text_lines(), vec!["hello     ", "world     "]);
}

#[tokio::test]
async fn test_state_persists_across_connections() {
    let (addr, mut rx) = start(SessionPolicy::Persist).await;

    let mut first = text::align_right();
    first.extend(b"one\n");
    send(&addr, &first).await;
    assert_eq!(next(&mut rx).await.text_lines(), vec!["       one"]);

    send(&addr, b"two\n").await;
    assert_eq!(next(&mut rx).await.text_lines(), vec!["       two"]);
}

#[tokio::test]
async fn test_reset_policy_starts_fresh() {
    let (addr, mut rx) = start(SessionPolicy::Reset).await;

    let mut first = text::align_right();
    first.extend(b"one\n");
    send(&addr, &first).await;
    assert_eq!(next(&mut rx).await.text_lines(), vec!["       one"]);

    send(&addr, b"two\n").await;
    assert_eq!(next(&mut rx).await.text_lines(), vec!["two       "]);
}

#[tokio::test]
async fn test_silent_connection_produces_nothing() {
    let (addr, mut rx) = start(SessionPolicy::Persist).await;

    // Connect and close without sending anything, then send a real job
    send(&addr, b"").await;
    send(&addr, b"after\n").await;

    let receipt = next(&mut rx).await;
    assert_eq!(receipt.text_lines(), vec!["after     "]);
    assert!(rx.try_recv().is_err());
}
