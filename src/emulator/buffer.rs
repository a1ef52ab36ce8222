//! Receipt buffer: rendered lines waiting for display.

use serde::{Deserialize, Serialize};

/// Character repeated across the paper width to mark a cut.
pub const CUT_SEPARATOR: char = '-';

/// One line of the printed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptLine {
    /// A rendered text line (may contain ANSI emphasis markup).
    Text(String),
    /// An empty line fed by `ESC d n`.
    Blank,
}

impl ReceiptLine {
    pub fn as_str(&self) -> &str {
        match self {
            ReceiptLine::Text(text) => text,
            ReceiptLine::Blank => "",
        }
    }

    /// Whether the line prints nothing visible.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

/// Lines rendered during the current session.
#[derive(Debug, Default)]
pub struct ReceiptBuffer {
    lines: Vec<ReceiptLine>,
}

impl ReceiptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, line: String) {
        self.lines.push(ReceiptLine::Text(line));
    }

    pub fn push_blank_lines(&mut self, count: usize) {
        self.lines
            .extend(std::iter::repeat_n(ReceiptLine::Blank, count));
    }

    /// Full-width cut marker. Alignment and style never apply to it.
    pub fn push_separator(&mut self, chars_per_line: usize) {
        let line = std::iter::repeat_n(CUT_SEPARATOR, chars_per_line).collect();
        self.lines.push(ReceiptLine::Text(line));
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drain the buffer into a finished receipt.
    pub fn take(&mut self, chars_per_line: usize) -> Receipt {
        Receipt {
            chars_per_line,
            lines: std::mem::take(&mut self.lines),
        }
    }
}

/// The output of one session, handed to the display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Nominal paper width in characters
    pub chars_per_line: usize,
    pub lines: Vec<ReceiptLine>,
}

impl Receipt {
    /// Line contents as plain strings, blank lines as `""`.
    pub fn text_lines(&self) -> Vec<&str> {
        self.lines.iter().map(ReceiptLine::as_str).collect()
    }
}
