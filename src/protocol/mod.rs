//! # ESC/POS Protocol Implementation
//!
//! This module provides the control bytes and command builders of the ESC/POS
//! protocol spoken by point-of-sale receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes, command families, init/cut/feed
//! - [`text`]: Text styling (alignment, emphasis, print mode, size, code page)
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align_center());
//! data.extend(text::emphasis_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::emphasis_off());
//! data.extend(text::align_left());
//! data.extend(commands::feed_lines(3));
//! data.extend(commands::cut(commands::CutMode::Partial));
//! ```

pub mod commands;
pub mod text;
