//! # Line Composer
//!
//! Collects printable characters and renders them into finished receipt lines.
//!
//! ## Rendering Pipeline
//!
//! The order of these steps is visible in the output and must not change:
//!
//! ```text
//! text ──► effective width ──► justify ──► emphasis markup ──► spacing
//!          (double width,      (pad to     (ANSI bold,         (one space
//!           font size)          width)      not counted)        between chars)
//! ```

use super::buffer::ReceiptBuffer;
use super::state::PrinterState;
use crate::protocol::text::Alignment;

/// ANSI sequence opening bold text.
pub const BOLD_ON: &str = "\x1b[1m";

/// ANSI sequence resetting all attributes.
pub const BOLD_OFF: &str = "\x1b[0m";

/// The in-progress line.
#[derive(Debug, Default)]
pub struct LineComposer {
    current: String,
}

impl LineComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.current.push(c);
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Text accumulated since the last flush.
    pub fn pending(&self) -> &str {
        &self.current
    }

    /// Render the current line with `state` and append it to `buffer`.
    ///
    /// Does nothing when no text is pending. The rendered line is an owned
    /// string, so later state changes never alter it.
    pub fn flush(&mut self, state: &PrinterState, buffer: &mut ReceiptBuffer) {
        if self.current.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.current);
        buffer.push_text(format_line(&text, state));
    }
}

/// Render one line of text with the given printer state.
///
/// ```
/// use recibo::emulator::{format_line, PrinterState};
/// use recibo::protocol::text::Alignment;
///
/// let mut state = PrinterState::new(10);
/// assert_eq!(format_line("hello", &state), "hello     ");
///
/// state.alignment = Alignment::Center;
/// assert_eq!(format_line("hi", &state), "    hi    ");
/// ```
pub fn format_line(text: &str, state: &PrinterState) -> String {
    let width = state.effective_width();
    let mut line = justify(text, width, state.alignment);

    if state.emphasized {
        line = format!("{BOLD_ON}{line}{BOLD_OFF}");
    }

    if state.is_scaled() {
        line = spread(&line);
    }

    line
}

/// Pad `text` to `width` characters. Longer text is left as is.
fn justify(text: &str, width: usize, alignment: Alignment) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len);

    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Right => (padding, 0),
        // Odd padding puts the extra space on the right
        Alignment::Center => (padding / 2, padding - padding / 2),
    };

    let mut line = String::with_capacity(len + padding);
    line.extend(std::iter::repeat_n(' ', left));
    line.push_str(text);
    line.extend(std::iter::repeat_n(' ', right));
    line
}

/// Insert a single space between every pair of characters.
fn spread(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
