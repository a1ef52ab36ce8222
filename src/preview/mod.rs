//! # Console Receipt Preview
//!
//! Renders a [`Receipt`] the way it would come out of the printer, framed in
//! a box so the paper edges are visible in a terminal.
//!
//! ## Layout
//!
//! ```text
//! 🧾 Receipt Output:
//! ┌──────────────┐
//! │ hello        │
//! │              │   ← blank line from ESC d
//! │ ------------ │   ← GS V cut
//! └──────────────┘
//! ```
//!
//! Lines wider than the paper (scaled text) are printed as they are and push
//! the right border out, which makes the scaling visible.

use std::fmt::Write;

use crate::emulator::Receipt;

/// Heading printed above every receipt.
pub const HEADING: &str = "🧾 Receipt Output:";

/// Render a framed receipt.
///
/// ```
/// use recibo::emulator::{Receipt, ReceiptLine};
/// use recibo::preview::render_box;
///
/// let receipt = Receipt {
///     chars_per_line: 4,
///     lines: vec![ReceiptLine::Text("ok  ".into()), ReceiptLine::Blank],
/// };
/// let framed = render_box(&receipt);
/// assert!(framed.contains("│ ok   │"));
/// assert!(framed.contains("│      │"));
/// ```
pub fn render_box(receipt: &Receipt) -> String {
    let width = receipt.chars_per_line + 2;
    let rule = "─".repeat(width);

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "\n{HEADING}");
    let _ = writeln!(out, "┌{rule}┐");
    for line in &receipt.lines {
        if line.is_blank() {
            let _ = writeln!(out, "│{}│", " ".repeat(width));
        } else {
            let _ = writeln!(out, "│ {} │", line.as_str());
        }
    }
    let _ = writeln!(out, "└{rule}┘");
    out
}

/// Format bytes as space-separated lowercase hex.
///
/// ```
/// use recibo::preview::hex_dump;
///
/// assert_eq!(hex_dump(&[0x1b, 0x40, 0x0a]), "1b 40 0a");
/// ```
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::ReceiptLine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_box() {
        let receipt = Receipt {
            chars_per_line: 6,
            lines: vec![
                ReceiptLine::Text("  hi  ".into()),
                ReceiptLine::Blank,
                ReceiptLine::Text("      ".into()),
                ReceiptLine::Text("------".into()),
            ],
        };

        let expected = "\n🧾 Receipt Output:\n\
                        ┌────────┐\n\
                        │   hi   │\n\
                        │        │\n\
                        │        │\n\
                        │ ------ │\n\
                        └────────┘\n";
        assert_eq!(render_box(&receipt), expected);
    }

    #[test]
    fn test_render_box_empty_receipt() {
        let receipt = Receipt {
            chars_per_line: 2,
            lines: vec![],
        };
        assert_eq!(
            render_box(&receipt),
            "\n🧾 Receipt Output:\n┌────┐\n└────┘\n"
        );
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[]), "");
        assert_eq!(hex_dump(&[0x00]), "00");
        assert_eq!(hex_dump(b"A\n"), "41 0a");
        assert_eq!(hex_dump(&[0xff, 0x1d, 0x56]), "ff 1d 56");
    }
}
