//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands the emulator decodes,
//! both as byte builders and as value types that parse their arguments.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right justification |
//! | Emphasis | ESC E n | **Emphasized** text |
//! | Print mode | ESC ! n | Font B, emphasis, double height/width in one byte |
//! | Character size | GS ! n | 1-8x width and height magnification |
//! | Code page | ESC t n | Character table selection |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Decode the `n` argument of `ESC a n`.
    ///
    /// Any byte is accepted: the value is taken modulo 3, so both the numeric
    /// (0, 1, 2) and ASCII ('0', '1', '2') forms land on the same alignment.
    ///
    /// ```
    /// use recibo::protocol::text::Alignment;
    ///
    /// assert_eq!(Alignment::from_arg(1), Alignment::Center);
    /// assert_eq!(Alignment::from_arg(b'2'), Alignment::Right);
    /// ```
    pub fn from_arg(n: u8) -> Self {
        match n % 3 {
            0 => Alignment::Left,
            1 => Alignment::Center,
            _ => Alignment::Right,
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Prints any pending text with the previous alignment first
/// - Affects all subsequent text until changed
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

/// Convenience function for right alignment
#[inline]
pub fn align_right() -> Vec<u8> {
    align(Alignment::Right)
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
///
/// Any non-zero `n` turns emphasis on.
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{emphasis_on, emphasis_off};
///
/// let mut data = Vec::new();
/// data.extend(emphasis_on());
/// data.extend(b"IMPORTANT\n");
/// data.extend(emphasis_off());
/// ```
#[inline]
pub fn emphasis_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// Disable emphasis (ESC E 0)
#[inline]
pub fn emphasis_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// PRINT MODE
// ============================================================================

/// Print mode bits of `ESC ! n`.
///
/// ```text
/// bit:  7 6 5 4 3 2 1 0
///           │ │ │     └─ font B
///           │ │ └─────── emphasized
///           │ └───────── double height
///           └─────────── double width
/// ```
///
/// Other bits (underline, bit 7) are not emulated and are dropped on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintMode {
    pub font_b: bool,
    pub emphasized: bool,
    pub double_height: bool,
    pub double_width: bool,
}

impl PrintMode {
    const FONT_B: u8 = 1 << 0;
    const EMPHASIZED: u8 = 1 << 3;
    const DOUBLE_HEIGHT: u8 = 1 << 4;
    const DOUBLE_WIDTH: u8 = 1 << 5;

    /// Decode a print mode bitmask.
    pub fn from_bits(n: u8) -> Self {
        Self {
            font_b: n & Self::FONT_B != 0,
            emphasized: n & Self::EMPHASIZED != 0,
            double_height: n & Self::DOUBLE_HEIGHT != 0,
            double_width: n & Self::DOUBLE_WIDTH != 0,
        }
    }

    /// Encode back into a bitmask.
    pub fn bits(&self) -> u8 {
        let mut n = 0;
        if self.font_b {
            n |= Self::FONT_B;
        }
        if self.emphasized {
            n |= Self::EMPHASIZED;
        }
        if self.double_height {
            n |= Self::DOUBLE_HEIGHT;
        }
        if self.double_width {
            n |= Self::DOUBLE_WIDTH;
        }
        n
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Sets font, emphasis and doubling in one command. Every flag not set in
/// `mode` is turned off.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{print_mode, PrintMode};
///
/// let mode = PrintMode { emphasized: true, double_width: true, ..Default::default() };
/// assert_eq!(print_mode(mode), vec![0x1B, 0x21, 0x28]);
/// ```
pub fn print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.bits()]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character magnification of `GS ! n`.
///
/// The high nibble selects the width multiplier and the low nibble the
/// height multiplier, both stored as `multiplier - 1`. Only three bits of
/// each nibble are significant (1x to 8x).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSize {
    /// Width multiplier, 1-8
    pub width: u8,
    /// Height multiplier, 1-8
    pub height: u8,
}

impl Default for CharacterSize {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

impl CharacterSize {
    /// Decode the `n` argument of `GS ! n`.
    ///
    /// ```
    /// use recibo::protocol::text::CharacterSize;
    ///
    /// let size = CharacterSize::from_byte(0x11);
    /// assert_eq!((size.width, size.height), (2, 2));
    /// ```
    pub fn from_byte(n: u8) -> Self {
        Self {
            width: ((n & 0x70) >> 4) + 1,
            height: (n & 0x07) + 1,
        }
    }

    /// Encode into the `n` argument. Multipliers are clamped to 1-8.
    pub fn to_byte(&self) -> u8 {
        let w = self.width.clamp(1, 8) - 1;
        let h = self.height.clamp(1, 8) - 1;
        (w << 4) | h
    }

    /// The larger of the two multipliers; the emulator scales text uniformly.
    pub fn magnification(&self) -> u8 {
        self.width.max(self.height)
    }
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::character_size;
///
/// // 2x wide, 3x tall
/// assert_eq!(character_size(2, 3), vec![0x1D, 0x21, 0x12]);
/// ```
pub fn character_size(width: u8, height: u8) -> Vec<u8> {
    vec![GS, b'!', CharacterSize { width, height }.to_byte()]
}

/// Back to 1x1 characters
#[inline]
pub fn size_normal() -> Vec<u8> {
    character_size(1, 1)
}

// ============================================================================
// CODE PAGE SELECTION
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// The emulator records the selected table but renders every printable byte
/// as ASCII.
///
/// ```
/// use recibo::protocol::text::codepage;
///
/// assert_eq!(codepage(16), vec![0x1B, 0x74, 16]);
/// ```
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// TESTS
// ============================================================================
