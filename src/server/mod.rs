//! # Raw TCP Print Server
//!
//! Listens on the raw printing port and feeds every connection's payload to
//! the emulator, the way a network receipt printer accepts jobs on port 9100.
//!
//! ## Usage
//!
//! ```bash
//! recibo serve --listen 0.0.0.0:9100 --chars-per-line 48
//! ```
//!
//! Then point a POS application (or `nc localhost 9100 < job.bin`) at it.
//!
//! ## Sessions
//!
//! A session is everything a client sends before closing its side of the
//! connection (or going quiet for the idle timeout). Connections are read
//! concurrently, but sessions are decoded one at a time against a single
//! shared printer state.

mod sink;
mod state;

pub use sink::{ConsoleSink, ReceiptSink};
pub use state::{DEFAULT_LISTEN_ADDR, ServerConfig};

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::{TcpListener, TcpStream};

use crate::error::ReciboError;
use state::{SharedStation, Station};

/// Read chunk size, matching a typical printer receive buffer.
const READ_CHUNK: usize = 1024;

/// Start the print server and print receipts to the console until Ctrl-C.
///
/// ## Example
///
/// ```no_run
/// use recibo::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), recibo::error::ReciboError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:9100".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ReciboError> {
    let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
        ReciboError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
    })?;

    tracing::info!(
        addr = %config.listen_addr,
        paper = config.printer.name,
        chars_per_line = config.printer.chars_per_line,
        policy = ?config.policy,
        "ESC/POS printer emulator listening"
    );

    let sink = ConsoleSink::new(config.hex_dump);
    tokio::select! {
        result = run(listener, &config, sink) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Server shutting down");
            Ok(())
        }
    }
}

/// Accept connections on `listener` forever, delivering receipts to `sink`.
///
/// Errors on one connection are logged and never stop the loop.
pub async fn run<S: ReceiptSink>(
    listener: TcpListener,
    config: &ServerConfig,
    sink: S,
) -> Result<(), ReciboError> {
    let station = Station::shared(config, sink);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "failed to accept connection");
                continue;
            }
        };

        tracing::info!(%peer, "new connection");
        let station = station.clone();
        let idle_timeout = config.idle_timeout;
        tokio::spawn(async move {
            if let Err(e) = handle_client(stream, peer, idle_timeout, station).await {
                tracing::warn!(%peer, error = %e, "client error");
            }
        });
    }
}

async fn handle_client<S: ReceiptSink>(
    mut stream: TcpStream,
    peer: SocketAddr,
    idle_timeout: Option<Duration>,
    station: SharedStation<S>,
) -> Result<(), ReciboError> {
    let data = read_session(&mut stream, idle_timeout).await?;
    tracing::debug!(%peer, bytes = data.len(), "session received");

    if data.is_empty() {
        return Ok(());
    }

    let mut station = station.lock().await;
    station.sink.received(peer, &data);
    if let Some(receipt) = station.emulator.process(&data) {
        tracing::info!(%peer, lines = receipt.lines.len(), "receipt printed");
        station.sink.deliver(peer, receipt);
    }
    Ok(())
}

/// Read until EOF, or until nothing arrives for `idle_timeout`.
pub async fn read_session<R: AsyncRead + Unpin>(
    stream: &mut R,
    idle_timeout: Option<Duration>,
) -> Result<Vec<u8>, ReciboError> {
    let mut data = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let read = stream.read(&mut chunk);
        let n = match idle_timeout {
            Some(limit) => match tokio::time::timeout(limit, read).await {
                Ok(result) => result?,
                Err(_) => {
                    tracing::debug!(bytes = data.len(), "idle timeout, ending session");
                    break;
                }
            },
            None => read.await?,
        };

        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_read_session_until_eof() {
        let (mut client, mut server) = tokio::io::duplex(64);
        let payload: Vec<u8> = (0..=255).cycle().take(3000).collect();

        let writer = {
            let payload = payload.clone();
            tokio::spawn(async move {
                client.write_all(&payload).await.unwrap();
                client.shutdown().await.unwrap();
            })
        };

        let data = read_session(&mut server, None).await.unwrap();
        writer.await.unwrap();
        assert_eq!(data, payload);
    }

    #[tokio::test]
    async fn test_read_session_idle_timeout() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(b"partial").await.unwrap();

        // Client stays open and silent
        let data = read_session(&mut server, Some(Duration::from_millis(50)))
            .await
            .unwrap();
        assert_eq!(data, b"partial");
        drop(client);
    }
}
