//! # Printer Module
//!
//! This module provides the paper presets of the emulated printer.
//!
//! ## Modules
//!
//! - [`config`]: Paper width and line width presets

pub mod config;

pub use config::PrinterConfig;
