//! Printer formatting state.

use crate::protocol::text::{Alignment, CharacterSize, PrintMode};

/// Default line spacing in dots (1/6 inch at 180 DPI).
pub const DEFAULT_LINE_SPACING: u8 = 30;

/// Formatting attributes of the emulated printer.
///
/// Mutated only by [`Emulator::apply`](super::Emulator::apply) in response to
/// decoded commands, read by the line composer at flush time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterState {
    /// Nominal line width in characters
    pub chars_per_line: usize,
    pub alignment: Alignment,
    /// Width divisor from `GS !`, always at least 1
    pub font_size: u8,
    pub double_width: bool,
    pub double_height: bool,
    pub emphasized: bool,
    pub double_strike: bool,
    pub italic: bool,
    pub font_b: bool,
    pub white_on_black: bool,
    pub upside_down: bool,
    /// Selected character table (recorded, not used for decoding)
    pub code_page: u8,
    pub line_spacing: u8,
    pub char_spacing: u8,
}

impl PrinterState {
    /// Power-on state for a printer with the given line width.
    pub fn new(chars_per_line: usize) -> Self {
        Self {
            chars_per_line,
            alignment: Alignment::Left,
            font_size: 1,
            double_width: false,
            double_height: false,
            emphasized: false,
            double_strike: false,
            italic: false,
            font_b: false,
            white_on_black: false,
            upside_down: false,
            code_page: 0,
            line_spacing: DEFAULT_LINE_SPACING,
            char_spacing: 0,
        }
    }

    /// Back to the power-on state. The line width is a property of the paper,
    /// not of the formatting state, so it survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.chars_per_line);
    }

    /// Apply an `ESC !` print mode. Flags missing from the mode are cleared.
    pub fn set_print_mode(&mut self, mode: PrintMode) {
        self.font_b = mode.font_b;
        self.emphasized = mode.emphasized;
        self.double_height = mode.double_height;
        self.double_width = mode.double_width;
    }

    /// Apply a `GS !` character size.
    pub fn set_character_size(&mut self, size: CharacterSize) {
        self.font_size = size.magnification();
    }

    /// Whether text is scaled horizontally (and therefore spaced out).
    pub fn is_scaled(&self) -> bool {
        self.double_width || self.font_size > 1
    }

    /// Width in characters available for justification.
    ///
    /// ```
    /// use recibo::emulator::PrinterState;
    ///
    /// let mut state = PrinterState::new(48);
    /// state.double_width = true;
    /// state.font_size = 3;
    /// assert_eq!(state.effective_width(), 8); // 48 / 2 / 3
    /// ```
    pub fn effective_width(&self) -> usize {
        let mut width = self.chars_per_line;
        if self.double_width {
            width /= 2;
        }
        if self.font_size > 1 {
            width /= self.font_size as usize;
        }
        width
    }
}

impl Default for PrinterState {
    fn default() -> Self {
        Self::new(crate::printer::PrinterConfig::PAPER_80MM.chars_per_line)
    }
}
