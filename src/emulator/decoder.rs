//! # ESC/POS Command Decoder
//!
//! Splits a raw byte stream into [`Command`]s in a single forward scan.
//!
//! ## Dispatch
//!
//! ```text
//! byte at cursor
//!   ├── ESC / GS / FS ──► family sub-decoder (selector + arguments)
//!   ├── LF ─────────────► LineFeed
//!   ├── CR ─────────────► CarriageReturn (no effect)
//!   ├── 0x20..=0x7E ────► Print(char)
//!   └── anything else ──► Ignored(byte)
//! ```
//!
//! Every step consumes at least one byte and never reads past the end of the
//! input. A command cut short by the end of the stream consumes what is left
//! and decodes to [`Command::Truncated`] when its argument is missing, so any
//! byte sequence decodes to completion.

use crate::protocol::commands::{CR, Family, LF, PRINTABLE};
use crate::protocol::text::{Alignment, CharacterSize, PrintMode};

/// A decoded protocol step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // ========== ESC family ==========
    /// `ESC @`: reset the printer state.
    Initialize,

    /// `ESC a n`: flush, then set alignment.
    SetJustification(Alignment),

    /// `ESC E n`: emphasis on when `n != 0`.
    SetEmphasis(bool),

    /// `ESC d n`: flush, then feed `n` blank lines.
    PrintAndFeed(u8),

    /// `ESC $ nL nH`: accepted, not emulated.
    SetAbsolutePosition,

    /// `ESC t n`
    SelectCodePage(u8),

    /// `ESC ! n`
    SelectPrintMode(PrintMode),

    // ========== GS family ==========
    /// `GS V m`: flush, then draw a separator.
    CutPaper,

    /// `GS ! n`
    SelectCharacterSize(CharacterSize),

    // ========== Fallbacks ==========
    /// Any `FS` command, or an unknown selector in the ESC/GS families.
    Reserved { family: Family, selector: u8 },

    /// A command whose selector or argument was cut off by the end of input.
    Truncated(Family),

    // ========== Single bytes ==========
    /// `LF`: flush the current line.
    LineFeed,

    /// `CR`: no effect.
    CarriageReturn,

    /// Printable ASCII character.
    Print(char),

    /// Control byte outside any recognized sequence.
    Ignored(u8),
}

/// One decoder step: the command and how many bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub command: Command,
    /// Bytes consumed, always in `1..=input.len()`
    pub len: usize,
}

impl Decoded {
    fn new(command: Command, len: usize) -> Self {
        Self { command, len }
    }
}

/// Decode the command at the start of `input`.
///
/// Returns `None` only for empty input.
///
/// ```
/// use recibo::emulator::decoder::{decode, Command};
/// use recibo::protocol::text::Alignment;
///
/// let step = decode(&[0x1B, b'a', 1, b'X']).unwrap();
/// assert_eq!(step.command, Command::SetJustification(Alignment::Center));
/// assert_eq!(step.len, 3);
/// ```
pub fn decode(input: &[u8]) -> Option<Decoded> {
    let &byte = input.first()?;

    if let Some(family) = Family::from_introducer(byte) {
        return Some(decode_sequence(family, input));
    }

    let command = match byte {
        LF => Command::LineFeed,
        CR => Command::CarriageReturn,
        b if PRINTABLE.contains(&b) => Command::Print(b as char),
        b => Command::Ignored(b),
    };
    Some(Decoded::new(command, 1))
}

/// Decode a control sequence. `seq[0]` is the family introducer.
fn decode_sequence(family: Family, seq: &[u8]) -> Decoded {
    let Some(&selector) = seq.get(1) else {
        return Decoded::new(Command::Truncated(family), 1);
    };
    let arg = seq.get(2).copied();

    let (command, len) = match family {
        Family::Esc => decode_esc(selector, arg),
        Family::Gs => decode_gs(selector, arg),
        Family::Fs => (Command::Reserved { family, selector }, 2),
    };

    Decoded::new(command, len.min(seq.len()))
}

/// ESC family. Returns the command and its full length.
fn decode_esc(selector: u8, arg: Option<u8>) -> (Command, usize) {
    let with_arg = |f: fn(u8) -> Command| arg.map_or(Command::Truncated(Family::Esc), f);

    match selector {
        b'@' => (Command::Initialize, 2),
        b'a' => (with_arg(|n| Command::SetJustification(Alignment::from_arg(n))), 3),
        b'E' => (with_arg(|n| Command::SetEmphasis(n != 0)), 3),
        b'd' => (with_arg(Command::PrintAndFeed), 3),
        b'$' => (Command::SetAbsolutePosition, 4),
        b't' => (with_arg(Command::SelectCodePage), 3),
        b'!' => (with_arg(|n| Command::SelectPrintMode(PrintMode::from_bits(n))), 3),
        _ => (
            Command::Reserved {
                family: Family::Esc,
                selector,
            },
            2,
        ),
    }
}

/// GS family. Returns the command and its full length.
fn decode_gs(selector: u8, arg: Option<u8>) -> (Command, usize) {
    match selector {
        // The cut mode does not change what the emulator draws, so a missing
        // mode byte still cuts.
        b'V' => (Command::CutPaper, 3),
        b'!' => (
            arg.map_or(Command::Truncated(Family::Gs), |n| {
                Command::SelectCharacterSize(CharacterSize::from_byte(n))
            }),
            3,
        ),
        _ => (
            Command::Reserved {
                family: Family::Gs,
                selector,
            },
            2,
        ),
    }
}

/// Iterator over the decoded steps of a byte stream.
///
/// ```
/// use recibo::emulator::decoder::{CommandDecoder, Command};
///
/// let steps: Vec<_> = CommandDecoder::new(b"A\r\n").map(|s| s.command).collect();
/// assert_eq!(
///     steps,
///     vec![Command::Print('A'), Command::CarriageReturn, Command::LineFeed]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CommandDecoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CommandDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Cursor position: bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for CommandDecoder<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        let step = decode(&self.data[self.pos..])?;
        self.pos += step.len;
        Some(step)
    }
}
