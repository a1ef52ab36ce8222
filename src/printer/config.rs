//! # Printer Configuration
//!
//! This module defines the paper presets the emulator can pretend to be.
//!
//! ## Supported Paper Widths
//!
//! | Preset | Paper | Print width | Font A columns |
//! |--------|-------|-------------|----------------|
//! | `80mm` | 80mm  | 72mm (576 dots) | 48 |
//! | `58mm` | 58mm  | 48mm (384 dots) | 32 |
//!
//! Font A is 12 dots wide at 203 DPI, so the column count is the print width
//! in dots divided by 12.
//!
//! ## Usage
//!
//! ```
//! use recibo::printer::PrinterConfig;
//!
//! let config = PrinterConfig::parse("58mm").unwrap();
//! assert_eq!(config.chars_per_line, 32);
//!
//! // Override the column count, e.g. for a printer configured for Font B
//! let config = config.with_chars_per_line(42);
//! assert_eq!(config.chars_per_line, 42);
//! ```

/// # Printer Configuration
///
/// The only property the emulator core depends on is `chars_per_line`; the
/// rest describes the preset for logs and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Preset name
    pub name: &'static str,

    /// Paper roll width in millimeters
    pub paper_width_mm: u8,

    /// Nominal line width in characters
    pub chars_per_line: usize,
}

impl PrinterConfig {
    /// # 80mm Receipt Paper
    ///
    /// The common POS roll. 72mm printable, 48 Font A columns.
    pub const PAPER_80MM: Self = Self {
        name: "80mm",
        paper_width_mm: 80,
        chars_per_line: 48,
    };

    /// # 58mm Receipt Paper
    ///
    /// Narrow roll used by mobile and kiosk printers. 48mm printable,
    /// 32 Font A columns.
    pub const PAPER_58MM: Self = Self {
        name: "58mm",
        paper_width_mm: 58,
        chars_per_line: 32,
    };

    /// All built-in presets.
    pub fn built_in() -> [Self; 2] {
        [Self::PAPER_80MM, Self::PAPER_58MM]
    }

    /// Same paper, different column count.
    #[inline]
    pub const fn with_chars_per_line(self, chars_per_line: usize) -> Self {
        Self {
            chars_per_line,
            ..self
        }
    }

    /// Parse a preset name (`"80mm"`, `"58mm"`, case-insensitive, `"mm"`
    /// optional).
    pub fn parse(s: &str) -> Result<Self, String> {
        let key = s.trim().to_lowercase();
        let key = key.strip_suffix("mm").unwrap_or(&key);

        Self::built_in()
            .into_iter()
            .find(|preset| preset.paper_width_mm.to_string() == key)
            .ok_or_else(|| format!("Unknown paper '{}'. Use '80mm' or '58mm'", s))
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::PAPER_80MM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_80mm() {
        assert_eq!(PrinterConfig::default().chars_per_line, 48);
    }

    #[test]
    fn test_parse() {
        assert_eq!(PrinterConfig::parse("80mm"), Ok(PrinterConfig::PAPER_80MM));
        assert_eq!(PrinterConfig::parse("58MM"), Ok(PrinterConfig::PAPER_58MM));
        assert_eq!(PrinterConfig::parse(" 58 "), Ok(PrinterConfig::PAPER_58MM));
        assert!(PrinterConfig::parse("112mm").is_err());
        assert!(PrinterConfig::parse("").is_err());
    }

    #[test]
    fn test_with_chars_per_line_keeps_paper() {
        let config = PrinterConfig::PAPER_58MM.with_chars_per_line(42);
        assert_eq!(config.name, "58mm");
        assert_eq!(config.paper_width_mm, 58);
        assert_eq!(config.chars_per_line, 42);
    }
}
