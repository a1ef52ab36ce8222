//! # Receipt Builders
//!
//! Pre-built print jobs for exercising the emulator.
//!
//! These generate raw ESC/POS byte streams, exactly what a POS application
//! would send to port 9100. They can be rendered locally or sent to a running
//! emulator with `recibo demo --send`.

use chrono::NaiveDateTime;

use crate::protocol::commands::{self, CutMode};
use crate::protocol::text::{self, Alignment, PrintMode};

/// Names accepted by [`by_name`].
const RECEIPTS: &[&str] = &["demo", "styles"];

// ============================================================================
// JOB BUILDER
// ============================================================================

/// Fluent builder for ESC/POS print jobs.
///
/// ```
/// use recibo::receipt::Job;
/// use recibo::protocol::text::Alignment;
///
/// let bytes = Job::new().align(Alignment::Center).line("HELLO").cut().build();
/// assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x61, 0x01]);
/// ```
#[derive(Debug, Clone)]
pub struct Job {
    bytes: Vec<u8>,
}

impl Job {
    /// Start a job with `ESC @`.
    pub fn new() -> Self {
        Self {
            bytes: commands::init(),
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.bytes.extend(text::align(alignment));
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        if on {
            self.bytes.extend(text::emphasis_on());
        } else {
            self.bytes.extend(text::emphasis_off());
        }
        self
    }

    pub fn mode(mut self, mode: PrintMode) -> Self {
        self.bytes.extend(text::print_mode(mode));
        self
    }

    pub fn size(mut self, width: u8, height: u8) -> Self {
        self.bytes.extend(text::character_size(width, height));
        self
    }

    pub fn codepage(mut self, n: u8) -> Self {
        self.bytes.extend(text::codepage(n));
        self
    }

    /// Text followed by `LF`. Non-ASCII characters are replaced with `?`.
    pub fn line(mut self, content: &str) -> Self {
        self.bytes
            .extend(content.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' }));
        self.bytes.push(commands::LF);
        self
    }

    pub fn feed(mut self, lines: u8) -> Self {
        self.bytes.extend(commands::feed_lines(lines));
        self
    }

    pub fn position(mut self, dots: u16) -> Self {
        self.bytes.extend(commands::set_absolute_position(dots));
        self
    }

    pub fn cut(mut self) -> Self {
        self.bytes.extend(commands::cut(CutMode::Partial));
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RECEIPT TEMPLATES
// ============================================================================

/// Two-column row: label on the left, amount right-aligned.
fn item_row(label: &str, amount: f64, width: usize) -> String {
    let amount = format!("{:.2}", amount);
    let label_width = width.saturating_sub(amount.len() + 1);
    let label: String = label.chars().take(label_width).collect();
    format!("{:<label_width$} {}", label, amount)
}

/// Generate a simple store receipt.
///
/// Features demonstrated:
/// - Centered, double-width, emphasized header
/// - Left-aligned item rows, right-aligned totals
/// - Blank-line feeds and a partial cut
pub fn demo_receipt(chars_per_line: usize, printed_at: NaiveDateTime) -> Vec<u8> {
    let items = [
        ("Liminal Espresso", 4.50),
        ("Basement Techno Vinyl", 29.00),
        ("Thermal Paper (mystery)", 7.25),
    ];
    let subtotal: f64 = items.iter().map(|(_, price)| price).sum();
    let tax = (subtotal * 0.13 * 100.0).round() / 100.0;

    let mut job = Job::new()
        .codepage(0)
        .align(Alignment::Center)
        .mode(PrintMode {
            emphasized: true,
            double_width: true,
            ..Default::default()
        })
        .line("CORNER STORE")
        .mode(PrintMode::default())
        .line("123 Harbour St")
        .line(&printed_at.format("%Y-%m-%d %H:%M:%S").to_string())
        .feed(1)
        .align(Alignment::Left);

    for (label, price) in items {
        job = job.line(&item_row(label, price, chars_per_line));
    }

    job.line(&"-".repeat(chars_per_line))
        .align(Alignment::Right)
        .line(&format!("SUBTOTAL {:.2}", subtotal))
        .line(&format!("TAX (13%) {:.2}", tax))
        .bold(true)
        .line(&format!("TOTAL {:.2}", subtotal + tax))
        .bold(false)
        .feed(1)
        .align(Alignment::Center)
        .line("thank you!")
        .feed(2)
        .cut()
        .build()
}

/// Generate a style sampler covering every supported command.
pub fn styles_receipt() -> Vec<u8> {
    Job::new()
        .line("left")
        .align(Alignment::Center)
        .line("center")
        .align(Alignment::Right)
        .line("right")
        .align(Alignment::Left)
        .bold(true)
        .line("emphasized")
        .bold(false)
        .mode(PrintMode {
            double_width: true,
            ..Default::default()
        })
        .line("double width")
        .mode(PrintMode::default())
        .size(2, 2)
        .line("size 2x2")
        .size(3, 1)
        .line("size 3x1")
        .size(1, 1)
        .position(120)
        .line("after position")
        .feed(1)
        .cut()
        .build()
}

/// List available receipt templates.
pub fn list_receipts() -> &'static [&'static str] {
    RECEIPTS
}

/// Check if a name is a receipt template.
pub fn is_receipt(name: &str) -> bool {
    RECEIPTS.contains(&name)
}

/// Build a receipt template by name, stamped with the current local time.
pub fn by_name(name: &str, chars_per_line: usize) -> Option<Vec<u8>> {
    match name {
        "demo" => Some(demo_receipt(
            chars_per_line,
            chrono::Local::now().naive_local(),
        )),
        "styles" => Some(styles_receipt()),
        _ => None,
    }
}
