//! # Recibo - ESC/POS Receipt Printer Emulator
//!
//! Recibo pretends to be a network thermal receipt printer. It accepts raw
//! ESC/POS print jobs over TCP and renders them as text receipts. It provides:
//!
//! - **Emulator core**: command decoder, printer state, line rendering
//! - **Protocol implementation**: ESC/POS control bytes and command builders
//! - **Preview**: framed console output and hex dumps
//! - **Server**: raw TCP listener (port 9100 style)
//!
//! ## Quick Start
//!
//! ```
//! use recibo::{
//!     emulator::Emulator,
//!     printer::PrinterConfig,
//!     protocol::{commands, text},
//!     preview,
//! };
//!
//! let mut emulator = Emulator::new(&PrinterConfig::PAPER_80MM);
//!
//! // Build a print job the way a POS application would
//! let mut job = Vec::new();
//! job.extend(commands::init());
//! job.extend(text::align_center());
//! job.extend(text::emphasis_on());
//! job.extend(b"RECEIPT\n");
//! job.extend(text::emphasis_off());
//! job.extend(commands::cut(commands::CutMode::Full));
//!
//! let receipt = emulator.process(&job).expect("job prints something");
//! println!("{}", preview::render_box(&receipt));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`emulator`] | Decoder, printer state, line composer, receipt buffer |
//! | [`protocol`] | ESC/POS constants and command builders |
//! | [`preview`] | Console rendering of receipts |
//! | [`server`] | TCP print server |
//! | [`receipt`] | Demo print jobs |
//! | [`printer`] | Paper presets |
//! | [`error`] | Error types |
//!
//! ## Supported Commands
//!
//! `ESC @`, `ESC a`, `ESC E`, `ESC d`, `ESC $`, `ESC t`, `ESC !`, `GS V`,
//! `GS !`, plus `LF`/`CR`. Every other sequence is skipped without error.

pub mod emulator;
pub mod error;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod server;

// Re-exports for convenience
pub use emulator::Emulator;
pub use error::ReciboError;
pub use printer::PrinterConfig;
