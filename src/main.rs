//! # Recibo CLI
//!
//! Command-line interface for the ESC/POS receipt printer emulator.
//!
//! ## Usage
//!
//! ```bash
//! # Emulate a network printer on port 9100
//! recibo serve
//!
//! # Narrow paper, fresh printer state for every job
//! recibo serve --paper 58mm --reset-each-session
//!
//! # Render a captured print job
//! recibo render job.bin
//! recibo render --json job.bin
//!
//! # List demo receipts, render one, or send one to a running emulator
//! recibo demo
//! recibo demo demo
//! recibo demo styles --send 127.0.0.1:9100
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for more), receipts to stdout.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use recibo::{
    Emulator, PrinterConfig, ReciboError,
    emulator::SessionPolicy,
    preview, receipt,
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
};
use tokio::io::AsyncWriteExt;

/// Recibo - ESC/POS receipt printer emulator
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Listen for raw print jobs and show them as receipts
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,

        #[command(flatten)]
        paper: PaperArgs,

        /// Reset the printer state at the start of every connection
        #[arg(long)]
        reset_each_session: bool,

        /// Skip the hex dump of received data
        #[arg(long)]
        no_hex: bool,

        /// End a session after this many seconds without data
        #[arg(long, value_name = "SECS")]
        idle_timeout: Option<u64>,
    },

    /// Render a captured print job file
    Render {
        /// File containing raw ESC/POS bytes
        file: PathBuf,

        #[command(flatten)]
        paper: PaperArgs,

        /// Output the receipt as JSON instead of a framed preview
        #[arg(long)]
        json: bool,
    },

    /// Build a demo receipt (omit the name to see available options)
    Demo {
        /// Receipt template to build
        name: Option<String>,

        /// Send the raw job to a running emulator instead of rendering it
        #[arg(long, value_name = "ADDR")]
        send: Option<String>,

        #[command(flatten)]
        paper: PaperArgs,
    },
}

#[derive(Args, Debug)]
struct PaperArgs {
    /// Paper preset: 80mm or 58mm
    #[arg(long, default_value = "80mm")]
    paper: String,

    /// Override the characters per line of the paper preset
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    chars_per_line: Option<u16>,
}

impl PaperArgs {
    fn resolve(&self) -> Result<PrinterConfig, ReciboError> {
        let config = PrinterConfig::parse(&self.paper).map_err(ReciboError::Config)?;
        Ok(match self.chars_per_line {
            Some(n) => config.with_chars_per_line(n as usize),
            None => config,
        })
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            paper,
            reset_each_session,
            no_hex,
            idle_timeout,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                printer: paper.resolve()?,
                policy: if reset_each_session {
                    SessionPolicy::Reset
                } else {
                    SessionPolicy::Persist
                },
                hex_dump: !no_hex,
                idle_timeout: idle_timeout.map(Duration::from_secs),
            };
            server::serve(config).await
        }

        Commands::Render { file, paper, json } => {
            let data = std::fs::read(&file)?;
            tracing::debug!(file = %file.display(), bytes = data.len(), "rendering capture");
            render(&data, &paper.resolve()?, json)
        }

        Commands::Demo { name, send, paper } => {
            let Some(name) = name else {
                println!("Available receipts:");
                for name in receipt::list_receipts() {
                    println!("  {}", name);
                }
                return Ok(());
            };

            let printer = paper.resolve()?;
            let job = receipt::by_name(&name, printer.chars_per_line).ok_or_else(|| {
                ReciboError::Config(format!(
                    "Unknown receipt '{}'. Run without arguments to see available options.",
                    name
                ))
            })?;

            match send {
                Some(addr) => send_job(&addr, &job).await,
                None => render(&job, &printer, false),
            }
        }
    }
}

/// Decode a job locally and print the result.
fn render(data: &[u8], printer: &PrinterConfig, json: bool) -> Result<(), ReciboError> {
    let mut emulator = Emulator::new(printer);
    let Some(receipt) = emulator.process(data) else {
        tracing::info!("job produced no output");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        print!("{}", preview::render_box(&receipt));
    }
    Ok(())
}

/// Send a raw job to a printer (or emulator) and close the connection.
async fn send_job(addr: &str, job: &[u8]) -> Result<(), ReciboError> {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .map_err(|e| ReciboError::Transport(format!("Failed to connect to {}: {}", addr, e)))?;
    stream.write_all(job).await?;
    stream.shutdown().await?;
    tracing::info!(%addr, bytes = job.len(), "job sent");
    Ok(())
}
