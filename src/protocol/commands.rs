//! # ESC/POS Protocol Commands
//!
//! This module defines the control bytes of the ESC/POS command protocol used
//! by point-of-sale receipt printers, plus builders for the paper control
//! commands the emulator understands.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CR`
//! - Two bytes: `ESC @`, `FS .`
//! - Multi-byte with parameters: `ESC d n`, `GS V m`, `ESC $ nL nH`
//!
//! ## Command Families
//!
//! | Introducer | Hex | Family |
//! |------------|-----|--------|
//! | ESC | 0x1B | Printer setup, text style, paper feed |
//! | GS  | 0x1D | Cutter, character size |
//! | FS  | 0x1C | Kanji / extended characters (ignored) |
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// CONTROL BYTE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Opens the main command family: initialization, justification, emphasis,
/// feeds, code pages and print modes.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Opens the cutter and character-size commands.
pub const GS: u8 = 0x1D;

/// FS (File Separator) - Kanji command prefix
///
/// Every FS command is accepted and ignored.
pub const FS: u8 = 0x1C;

/// DLE (Data Link Escape) - Real-time command prefix (not decoded)
pub const DLE: u8 = 0x10;

/// EOT (End of Transmission)
pub const EOT: u8 = 0x04;

/// NUL
pub const NUL: u8 = 0x00;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return) - Ignored; LF already ends a line
pub const CR: u8 = 0x0D;

/// HT (Horizontal Tab)
pub const HT: u8 = 0x09;

/// FF (Form Feed)
pub const FF: u8 = 0x0C;

/// CAN (Cancel)
pub const CAN: u8 = 0x18;

/// Printable ASCII band. Bytes in this range are text, everything else
/// outside a control sequence is dropped.
pub const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

// ============================================================================
// COMMAND FAMILIES
// ============================================================================

/// The three command families, keyed by their introducer byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// `ESC` commands
    Esc,
    /// `GS` commands
    Gs,
    /// `FS` commands
    Fs,
}

impl Family {
    /// Map an introducer byte to its command family.
    ///
    /// ```
    /// use recibo::protocol::commands::{Family, ESC, LF};
    ///
    /// assert_eq!(Family::from_introducer(ESC), Some(Family::Esc));
    /// assert_eq!(Family::from_introducer(LF), None);
    /// ```
    pub fn from_introducer(byte: u8) -> Option<Self> {
        match byte {
            ESC => Some(Family::Esc),
            GS => Some(Family::Gs),
            FS => Some(Family::Fs),
            _ => None,
        }
    }

    /// The introducer byte that opens this family.
    pub fn introducer(self) -> u8 {
        match self {
            Family::Esc => ESC,
            Family::Gs => GS,
            Family::Fs => FS,
        }
    }
}

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Alignment back to left
/// - Emphasis, double width/height, font B and other style flags off
/// - Character size back to 1x1
/// - Code page, line spacing and character spacing back to defaults
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cut modes for `GS V m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    /// Full cut (m = 0)
    #[default]
    Full = 0,
    /// Partial cut, leaves a small hinge (m = 1)
    Partial = 1,
}

/// # Cut Paper (GS V m)
///
/// Prints any pending data in the line buffer, then cuts.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V m   |
/// | Hex     | 1D 56 m  |
/// | Decimal | 29 86 m  |
///
/// The emulator draws a full-width dashed separator for every cut, whatever
/// the mode.
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands::{cut, CutMode};
///
/// assert_eq!(cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
/// ```
#[inline]
pub fn cut(mode: CutMode) -> Vec<u8> {
    vec![GS, b'V', mode as u8]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` blank lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves the print position to `(nL + nH * 256)` motion units from the start
/// of the line. Accepted but not emulated.
#[inline]
pub fn set_absolute_position(position: u16) -> Vec<u8> {
    let [low, high] = u16_le(position);
    vec![ESC, b'$', low, high]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use recibo::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
        assert_eq!(cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_set_absolute_position() {
        assert_eq!(set_absolute_position(300), vec![0x1B, 0x24, 0x2C, 0x01]);
    }

    #[test]
    fn test_family_round_trip() {
        for family in [Family::Esc, Family::Gs, Family::Fs] {
            assert_eq!(Family::from_introducer(family.introducer()), Some(family));
        }
        assert_eq!(Family::from_introducer(DLE), None);
        assert_eq!(Family::from_introducer(LF), None);
    }

    #[test]
    fn test_printable_band() {
        assert!(PRINTABLE.contains(&b' '));
        assert!(PRINTABLE.contains(&b'~'));
        assert!(!PRINTABLE.contains(&0x7F));
        assert!(!PRINTABLE.contains(&HT));
    }
}
