//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::AnsiResult;
use bytes::BufMut;

/// Control Sequence Introducer (CSI) Command
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnsiControlSequenceIntroducer {
    // Cursor Controls
    /// CUU - Cursor Up
    /// ESC[#A - moves cursor up # lines
    CursorUp(u16),

    /// CUD - Cursor Down
    /// ESC[#B - moves cursor down # lines
    CursorDown(u16),

    /// CUF - Cursor Forward
    /// ESC[#C - moves cursor right # columns
    CursorForward(u16),

    /// CUB - Cursor Back
    /// ESC[#D - moves cursor left # columns
    CursorBack(u16),

    /// CUP - Cursor Position
    /// ESC[{line};{column}H
    CursorPosition {
        /// Cursor Row
        row: u16,
        /// Cursor Column
        col: u16,
    },

    // Erase Functions
    /// ED - Erase in Display
    /// ESC[0J - erase from cursor until end of screen
    /// ESC[1J - erase from cursor to beginning of screen
    /// ESC[2J - erase entire screen
    EraseInDisplay(EraseInDisplayMode),

    /// EL - Erase in Line
    /// ESC[0K - erase from cursor to end of line
    /// ESC[1K - erase start of line to the cursor
    /// ESC[2K - erase the entire line
    EraseInLine(EraseInLineMode),
}

impl AnsiControlSequenceIntroducer {
    /// Returns the encoded byte length of this CSI command.
    ///
    /// The length includes the ESC [ introducer (2 bytes), all parameter bytes,
    /// and the final command byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termark_ansi::AnsiControlSequenceIntroducer;
    ///
    /// assert_eq!(AnsiControlSequenceIntroducer::CursorUp(1).len(), 4); // ESC[1A
    /// assert_eq!(AnsiControlSequenceIntroducer::CursorUp(255).len(), 6); // ESC[255A
    /// ```
    pub fn len(&self) -> usize {
        match self {
            AnsiControlSequenceIntroducer::CursorUp(n)
            | AnsiControlSequenceIntroducer::CursorDown(n)
            | AnsiControlSequenceIntroducer::CursorForward(n)
            | AnsiControlSequenceIntroducer::CursorBack(n) => 3 + count_digits(*n),
            AnsiControlSequenceIntroducer::CursorPosition { row, col } => {
                4 + count_digits(*row) + count_digits(*col)
            }
            AnsiControlSequenceIntroducer::EraseInDisplay(_) => 4,
            AnsiControlSequenceIntroducer::EraseInLine(_) => 4,
        }
    }

    /// Encode this CSI command to a `BufMut` buffer.
    ///
    /// Returns the number of bytes written.
    ///
    /// ```rust
    /// use bytes::BytesMut;
    /// use termark_ansi::AnsiControlSequenceIntroducer;
    ///
    /// let cmd = AnsiControlSequenceIntroducer::CursorUp(5);
    /// let mut buffer = BytesMut::new();
    /// assert_eq!(cmd.encode(&mut buffer), 4); // ESC[5A
    /// ```
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> usize {
        dst.put_slice(CSI);
        let mut written = CSI.len();
        let final_byte = match *self {
            AnsiControlSequenceIntroducer::CursorUp(n) => {
                written += put_decimal(dst, n);
                b'A'
            }
            AnsiControlSequenceIntroducer::CursorDown(n) => {
                written += put_decimal(dst, n);
                b'B'
            }
            AnsiControlSequenceIntroducer::CursorForward(n) => {
                written += put_decimal(dst, n);
                b'C'
            }
            AnsiControlSequenceIntroducer::CursorBack(n) => {
                written += put_decimal(dst, n);
                b'D'
            }
            AnsiControlSequenceIntroducer::CursorPosition { row, col } => {
                written += put_decimal(dst, row);
                dst.put_u8(b';');
                written += 1 + put_decimal(dst, col);
                b'H'
            }
            AnsiControlSequenceIntroducer::EraseInDisplay(mode) => {
                written += put_decimal(dst, mode as u16);
                b'J'
            }
            AnsiControlSequenceIntroducer::EraseInLine(mode) => {
                written += put_decimal(dst, mode as u16);
                b'K'
            }
        };
        dst.put_u8(final_byte);
        written + 1
    }

    /// Write this CSI command to a `std::io::Write` writer.
    ///
    /// # Encoding Behavior
    ///
    /// - **CursorUp(n)**: `ESC [ n A`
    /// - **CursorDown(n)**: `ESC [ n B`
    /// - **CursorForward(n)**: `ESC [ n C`
    /// - **CursorBack(n)**: `ESC [ n D`
    /// - **CursorPosition { row, col }**: `ESC [ row ; col H`
    /// - **EraseInDisplay(mode)**: `ESC [ mode J`
    /// - **EraseInLine(mode)**: `ESC [ mode K`
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> AnsiResult<usize> {
        let mut buffer = Vec::with_capacity(self.len());
        let written = self.encode(&mut buffer);
        writer.write_all(&buffer)?;
        Ok(written)
    }
}

impl std::fmt::Display for AnsiControlSequenceIntroducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Cursor movement commands
            AnsiControlSequenceIntroducer::CursorUp(n) => {
                write!(f, "\x1b[{}A", n)
            }
            AnsiControlSequenceIntroducer::CursorDown(n) => {
                write!(f, "\x1b[{}B", n)
            }
            AnsiControlSequenceIntroducer::CursorForward(n) => {
                write!(f, "\x1b[{}C", n)
            }
            AnsiControlSequenceIntroducer::CursorBack(n) => {
                write!(f, "\x1b[{}D", n)
            }
            AnsiControlSequenceIntroducer::CursorPosition { row, col } => {
                write!(f, "\x1b[{};{}H", row, col)
            }

            // Erase functions
            AnsiControlSequenceIntroducer::EraseInDisplay(mode) => {
                write!(f, "\x1b[{}J", *mode as u8)
            }
            AnsiControlSequenceIntroducer::EraseInLine(mode) => {
                write!(f, "\x1b[{}K", *mode as u8)
            }
        }
    }
}

/// ESC [
pub(crate) const CSI: &[u8] = b"\x1b[";

fn count_digits(n: u16) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// Appends the decimal digits of `value`, returning how many were written.
pub(crate) fn put_decimal<T: BufMut>(dst: &mut T, value: u16) -> usize {
    let mut digits = [0u8; 5];
    let mut start = digits.len();
    let mut rest = value;
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    dst.put_slice(&digits[start..]);
    digits.len() - start
}

/// ED - Erase in Display mode parameter
///
/// Specifies which portion of the display to erase. The cursor does not move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraseInDisplayMode {
    /// ESC[0J - Clears from the cursor position to the end of the screen, inclusive.
    EraseToEndOfScreen = 0,

    /// ESC[1J - Clears from the beginning of the screen to the cursor position, inclusive.
    EraseToBeginningOfScreen = 1,

    /// ESC[2J - Clears the entire visible screen. Scrollback is kept.
    EraseEntireScreen = 2,
}

/// EL - Erase in Line mode parameter
///
/// Specifies which portion of the current line to erase. The cursor does not move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraseInLineMode {
    /// ESC[0K - Clears from the cursor position to the end of the line, inclusive.
    EraseToEndOfLine = 0,

    /// ESC[1K - Clears from the beginning of the line to the cursor position, inclusive.
    EraseToStartOfLine = 1,

    /// ESC[2K - Clears the entire line.
    EraseEntireLine = 2,
}
