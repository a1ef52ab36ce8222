//! # ESC/POS Printer Emulator
//!
//! Turns raw print job bytes into rendered receipt lines.
//!
//! ## Architecture
//!
//! ```text
//! bytes ──► CommandDecoder ──► Emulator::apply ──┬──► PrinterState (style)
//!                                                 └──► LineComposer ──► ReceiptBuffer ──► Receipt
//! ```
//!
//! One [`Emulator`] owns one isolated printer state. Processing is
//! synchronous and never fails: malformed input decodes to no-ops.
//!
//! ## Example
//!
//! ```
//! use recibo::emulator::Emulator;
//! use recibo::printer::PrinterConfig;
//! use recibo::protocol::{commands, text};
//!
//! let mut emulator = Emulator::new(&PrinterConfig::PAPER_58MM.with_chars_per_line(10));
//!
//! let mut job = Vec::new();
//! job.extend(commands::init());
//! job.extend(text::align_center());
//! job.extend(b"hi\n");
//!
//! let receipt = emulator.process(&job).unwrap();
//! assert_eq!(receipt.text_lines(), vec!["    hi    "]);
//! ```

pub mod buffer;
pub mod composer;
pub mod decoder;
mod state;

pub use buffer::{Receipt, ReceiptBuffer, ReceiptLine};
pub use composer::{LineComposer, format_line};
pub use decoder::{Command, CommandDecoder, Decoded};
pub use state::PrinterState;

use crate::printer::PrinterConfig;

/// What happens to the printer state between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPolicy {
    /// State carries over until the host sends `ESC @`, like a printer that
    /// stays powered between jobs.
    #[default]
    Persist,
    /// Every session starts from the power-on state.
    Reset,
}

/// The decoding engine.
#[derive(Debug)]
pub struct Emulator {
    state: PrinterState,
    line: LineComposer,
    buffer: ReceiptBuffer,
    policy: SessionPolicy,
}

impl Emulator {
    pub fn new(config: &PrinterConfig) -> Self {
        Self {
            state: PrinterState::new(config.chars_per_line),
            line: LineComposer::new(),
            buffer: ReceiptBuffer::new(),
            policy: SessionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SessionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }

    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    /// Decode one complete session and return its receipt.
    ///
    /// Returns `None` when the session produced neither lines nor pending
    /// text; the display should not be invoked in that case. Text left
    /// without a trailing `LF` is flushed at the end of the session.
    pub fn process(&mut self, data: &[u8]) -> Option<Receipt> {
        if self.policy == SessionPolicy::Reset {
            self.state.reset();
        }

        for step in CommandDecoder::new(data) {
            self.apply(step.command);
        }

        if self.buffer.is_empty() && self.line.is_empty() {
            return None;
        }
        self.flush();
        Some(self.buffer.take(self.state.chars_per_line))
    }

    /// Apply one decoded command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Initialize => self.state.reset(),
            Command::SetJustification(alignment) => {
                self.flush();
                self.state.alignment = alignment;
            }
            Command::SetEmphasis(on) => self.state.emphasized = on,
            Command::PrintAndFeed(lines) => {
                self.flush();
                self.buffer.push_blank_lines(lines as usize);
            }
            Command::SetAbsolutePosition => {}
            Command::SelectCodePage(page) => self.state.code_page = page,
            Command::SelectPrintMode(mode) => self.state.set_print_mode(mode),
            Command::CutPaper => {
                self.flush();
                self.buffer.push_separator(self.state.chars_per_line);
            }
            Command::SelectCharacterSize(size) => self.state.set_character_size(size),
            Command::Reserved { family, selector } => {
                tracing::trace!(?family, selector, "ignoring unsupported command");
            }
            Command::Truncated(family) => {
                tracing::trace!(?family, "command truncated by end of input");
            }
            Command::LineFeed => self.flush(),
            Command::CarriageReturn | Command::Ignored(_) => {}
            Command::Print(c) => self.line.push(c),
        }
    }

    fn flush(&mut self) {
        self.line.flush(&self.state, &mut self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands::{self, CutMode, ESC, GS};
    use crate::protocol::text::{self, Alignment, PrintMode};
    use pretty_assertions::assert_eq;

    fn emulator(chars_per_line: usize) -> Emulator {
        Emulator::new(&PrinterConfig::PAPER_80MM.with_chars_per_line(chars_per_line))
    }

    fn lines(receipt: Option<Receipt>) -> Vec<String> {
        receipt
            .map(|r| r.lines.iter().map(|l| l.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let mut emu = emulator(10);
        assert_eq!(emu.process(&[]), None);
    }

    #[test]
    fn test_control_only_input_produces_nothing() {
        let mut emu = emulator(10);
        let mut job = commands::init();
        job.extend(text::emphasis_on());
        job.extend(b"\r\x00\x07");
        assert_eq!(emu.process(&job), None);
        assert!(emu.state().emphasized);
    }

    #[test]
    fn test_plain_lines() {
        let mut emu = emulator(8);
        let receipt = emu.process(b"one\r\ntwo\n").unwrap();
        assert_eq!(receipt.chars_per_line, 8);
        assert_eq!(receipt.text_lines(), vec!["one     ", "two     "]);
    }

    #[test]
    fn test_trailing_text_is_flushed() {
        let mut emu = emulator(6);
        assert_eq!(lines(emu.process(b"tail")), vec!["tail  "]);
    }

    #[test]
    fn test_repeated_line_feeds_do_not_add_empty_lines() {
        let mut emu = emulator(4);
        assert_eq!(lines(emu.process(b"a\n\n\nb\n")), vec!["a   ", "b   "]);
    }

    #[test]
    fn test_justification_flushes_pending_text() {
        let mut emu = emulator(6);
        let mut job = b"left".to_vec();
        job.extend(text::align_right());
        job.extend(b"right\n");
        assert_eq!(lines(emu.process(&job)), vec!["left  ", " right"]);
    }

    #[test]
    fn test_emphasis_applies_at_flush_time() {
        let mut emu = emulator(4);
        // Emphasis does not flush, so it applies to the whole line
        let mut job = b"ab".to_vec();
        job.extend(text::emphasis_on());
        job.extend(b"\n");
        job.extend(text::emphasis_off());
        job.extend(b"cd\n");
        assert_eq!(
            lines(emu.process(&job)),
            vec!["\x1b[1mab  \x1b[0m", "cd  "]
        );
    }

    #[test]
    fn test_feed_lines() {
        let mut emu = emulator(4);
        let mut job = b"x".to_vec();
        job.extend(commands::feed_lines(2));
        let receipt = emu.process(&job).unwrap();
        assert_eq!(
            receipt.lines,
            vec![
                ReceiptLine::Text("x   ".into()),
                ReceiptLine::Blank,
                ReceiptLine::Blank,
            ]
        );
    }

    #[test]
    fn test_feed_only_session_is_output() {
        let mut emu = emulator(4);
        let receipt = emu.process(&commands::feed_lines(1)).unwrap();
        assert_eq!(receipt.lines, vec![ReceiptLine::Blank]);
    }

    #[test]
    fn test_cut_ignores_style() {
        let mut emu = emulator(10);
        let mut job = text::align_center();
        job.extend(text::emphasis_on());
        job.extend(text::print_mode(PrintMode {
            double_width: true,
            ..Default::default()
        }));
        job.extend(text::character_size(3, 3));
        job.extend(commands::cut(CutMode::Partial));
        assert_eq!(lines(emu.process(&job)), vec!["-".repeat(10)]);
    }

    #[test]
    fn test_cut_flushes_first() {
        let mut emu = emulator(5);
        let mut job = b"end".to_vec();
        job.extend(commands::cut(CutMode::Full));
        assert_eq!(lines(emu.process(&job)), vec!["end  ", "-----"]);
    }

    #[test]
    fn test_double_width_example() {
        let mut emu = emulator(10);
        let mut job = text::print_mode(PrintMode {
            double_width: true,
            ..Default::default()
        });
        job.extend(b"AB\n");
        assert_eq!(emu.state().effective_width(), 10);
        let out = lines(emu.process(&job));
        assert_eq!(emu.state().effective_width(), 5);
        assert_eq!(out, vec![format!("A B{}", " ".repeat(6))]);
    }

    #[test]
    fn test_character_size_sets_font_size() {
        let mut emu = emulator(48);
        emu.process(&text::character_size(2, 4));
        assert_eq!(emu.state().font_size, 4);
    }

    #[test]
    fn test_code_page_is_stored() {
        let mut emu = emulator(48);
        emu.process(&text::codepage(19));
        assert_eq!(emu.state().code_page, 19);
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut emu = emulator(20);
        let mut job = text::align_right();
        job.extend(text::emphasis_on());
        job.extend(text::print_mode(PrintMode::from_bits(0xFF)));
        job.extend(text::character_size(8, 8));
        job.extend(text::codepage(7));
        emu.process(&job);
        assert_ne!(emu.state(), &PrinterState::new(20));

        emu.process(&commands::init());
        assert_eq!(emu.state(), &PrinterState::new(20));
    }

    #[test]
    fn test_initialize_mid_line_keeps_text() {
        let mut emu = emulator(6);
        let mut job = text::align_right();
        job.extend(b"ab");
        job.extend(commands::init());
        job.extend(b"\n");
        // Init does not flush; the line renders with the reset state
        assert_eq!(lines(emu.process(&job)), vec!["ab    "]);
    }

    #[test]
    fn test_truncated_justification_leaves_alignment() {
        let mut emu = emulator(10);
        assert_eq!(emu.process(&[ESC, b'a']), None);
        assert_eq!(emu.state().alignment, Alignment::Left);
    }

    #[test]
    fn test_truncated_cut_still_cuts() {
        let mut emu = emulator(3);
        assert_eq!(lines(emu.process(&[GS, b'V'])), vec!["---"]);
    }

    #[test]
    fn test_unknown_and_reserved_commands_are_skipped() {
        let mut emu = emulator(6);
        // ESC - 1 (underline) is not emulated: ESC - is skipped, '1' prints
        let job = [ESC, b'-', b'1', 0x1C, b'.', b'o', b'k', b'\n'];
        assert_eq!(lines(emu.process(&job)), vec!["1ok   "]);
    }

    #[test]
    fn test_state_persists_across_sessions() {
        let mut emu = emulator(6);
        emu.process(&text::align_center());
        assert_eq!(lines(emu.process(b"ab\n")), vec!["  ab  "]);
    }

    #[test]
    fn test_reset_policy_starts_fresh() {
        let mut emu = emulator(6).with_policy(SessionPolicy::Reset);
        assert_eq!(emu.policy(), SessionPolicy::Reset);
        emu.process(&text::align_center());
        assert_eq!(lines(emu.process(b"ab\n")), vec!["ab    "]);
    }

    #[test]
    fn test_buffer_is_cleared_between_sessions() {
        let mut emu = emulator(4);
        assert_eq!(lines(emu.process(b"one\n")), vec!["one "]);
        assert_eq!(lines(emu.process(b"two\n")), vec!["two "]);
        assert_eq!(emu.process(b""), None);
    }
}
