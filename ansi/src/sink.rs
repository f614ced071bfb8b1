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

use crate::ansi::{AnsiControlSequenceIntroducer, EraseInDisplayMode, EraseInLineMode};
use crate::style::AnsiSelectGraphicRendition;
use bytes::{BufMut, Bytes, BytesMut};
use termark_markup::{ColorCommand, CommandSink, CursorDirection, Style};

/// A [`CommandSink`] that renders every call as ANSI escape sequences.
///
/// Bytes are appended to any [`BufMut`]; the default owns a [`BytesMut`].
///
/// ```
/// use termark_ansi::AnsiSink;
/// use termark_markup::Dispatcher;
///
/// let mut sink = AnsiSink::new();
/// Dispatcher::default().parse("%b%Hi%r%", &mut sink).unwrap();
/// assert_eq!(sink.as_bytes(), b"\x1b[1mHi\x1b[0m");
/// ```
#[derive(Debug, Default)]
pub struct AnsiSink<B = BytesMut> {
    buffer: B,
    written: usize,
}

impl AnsiSink<BytesMut> {
    /// Creates a sink with an empty buffer.
    pub fn new() -> Self {
        Self::with_buffer(BytesMut::new())
    }

    /// Creates a sink whose buffer can hold `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_buffer(BytesMut::with_capacity(capacity))
    }

    /// The rendered bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the sink, returning the rendered bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}

impl<B: BufMut> AnsiSink<B> {
    /// Creates a sink appending to `buffer`.
    pub fn with_buffer(buffer: B) -> Self {
        Self { buffer, written: 0 }
    }

    /// Number of bytes this sink has written.
    pub fn len(&self) -> usize {
        self.written
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Reference to the underlying buffer.
    pub fn get_ref(&self) -> &B {
        &self.buffer
    }

    /// Consumes the sink, returning the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn sgr(&mut self, sgr: AnsiSelectGraphicRendition) {
        self.written += sgr.encode(&mut self.buffer);
    }

    fn style(&mut self, style: Style) {
        self.sgr(AnsiSelectGraphicRendition::from(style));
    }

    fn csi(&mut self, csi: AnsiControlSequenceIntroducer) {
        self.written += csi.encode(&mut self.buffer);
    }

    fn raw(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
        self.written += bytes.len();
    }
}

impl<B: BufMut> CommandSink for AnsiSink<B> {
    fn bold(&mut self) {
        self.style(Style::Bold);
    }

    fn normal(&mut self) {
        self.style(Style::Normal);
    }

    fn faint(&mut self) {
        self.style(Style::Faint);
    }

    fn italic(&mut self) {
        self.style(Style::Italic);
    }

    fn underline(&mut self) {
        self.style(Style::Underline);
    }

    fn blink(&mut self) {
        self.style(Style::Blink);
    }

    fn negative(&mut self) {
        self.style(Style::Negative);
    }

    fn strikethrough(&mut self) {
        self.style(Style::Strikethrough);
    }

    fn nostyle(&mut self) {
        self.style(Style::NoStyle);
    }

    fn color(&mut self, color: ColorCommand) {
        self.sgr(AnsiSelectGraphicRendition::from(color));
    }

    fn erase_display(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInDisplay(
            EraseInDisplayMode::EraseEntireScreen,
        ));
    }

    fn erase_display_up(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInDisplay(
            EraseInDisplayMode::EraseToBeginningOfScreen,
        ));
    }

    fn erase_display_down(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInDisplay(
            EraseInDisplayMode::EraseToEndOfScreen,
        ));
    }

    fn erase_line(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInLine(
            EraseInLineMode::EraseEntireLine,
        ));
    }

    fn erase_line_to_end(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInLine(
            EraseInLineMode::EraseToEndOfLine,
        ));
    }

    fn erase_line_to_start(&mut self) {
        self.csi(AnsiControlSequenceIntroducer::EraseInLine(
            EraseInLineMode::EraseToStartOfLine,
        ));
    }

    fn cursor_move(&mut self, direction: CursorDirection, amount: u16) {
        let csi = match direction {
            CursorDirection::Up => AnsiControlSequenceIntroducer::CursorUp(amount),
            CursorDirection::Down => AnsiControlSequenceIntroducer::CursorDown(amount),
            CursorDirection::Forward => AnsiControlSequenceIntroducer::CursorForward(amount),
            CursorDirection::Back => AnsiControlSequenceIntroducer::CursorBack(amount),
        };
        self.csi(csi);
    }

    fn cursor_position(&mut self, row: u16, col: u16) {
        self.csi(AnsiControlSequenceIntroducer::CursorPosition { row, col });
    }

    fn line_feed(&mut self) {
        self.raw(b"\n");
    }

    fn text(&mut self, text: &str) {
        self.raw(text.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termark_markup::{Color, Intensity};

    fn render(calls: impl FnOnce(&mut AnsiSink)) -> Vec<u8> {
        let mut sink = AnsiSink::new();
        calls(&mut sink);
        assert_eq!(sink.len(), sink.as_bytes().len());
        sink.into_bytes().to_vec()
    }

    #[test]
    fn test_new_sink_is_empty() {
        let sink = AnsiSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
        assert!(sink.as_bytes().is_empty());
    }

    #[test]
    fn test_style_sequences() {
        assert_eq!(render(|s| s.bold()), b"\x1b[1m");
        assert_eq!(render(|s| s.faint()), b"\x1b[2m");
        assert_eq!(render(|s| s.normal()), b"\x1b[22m");
        assert_eq!(render(|s| s.italic()), b"\x1b[3m");
        assert_eq!(render(|s| s.underline()), b"\x1b[4m");
        assert_eq!(render(|s| s.blink()), b"\x1b[5m");
        assert_eq!(render(|s| s.negative()), b"\x1b[7m");
        assert_eq!(render(|s| s.strikethrough()), b"\x1b[9m");
        assert_eq!(render(|s| s.nostyle()), b"\x1b[0m");
    }

    #[test]
    fn test_color_sequences() {
        assert_eq!(
            render(|s| s.color(ColorCommand::Foreground(Color::Green))),
            b"\x1b[32m"
        );
        assert_eq!(
            render(|s| s.color(ColorCommand::Foreground(Color::BrightCyan))),
            b"\x1b[96m"
        );
        assert_eq!(
            render(|s| s.color(ColorCommand::Background(Color::BrightYellow))),
            b"\x1b[103m"
        );
        assert_eq!(
            render(|s| s.color(ColorCommand::IntensityForeground {
                intensity: Intensity::Bold,
                color: Color::Cyan,
            })),
            b"\x1b[1;36m"
        );
    }

    #[test]
    fn test_screen_sequences() {
        assert_eq!(render(|s| s.erase_display()), b"\x1b[2J");
        assert_eq!(render(|s| s.erase_display_up()), b"\x1b[1J");
        assert_eq!(render(|s| s.erase_display_down()), b"\x1b[0J");
        assert_eq!(render(|s| s.erase_line()), b"\x1b[2K");
        assert_eq!(render(|s| s.erase_line_to_end()), b"\x1b[0K");
        assert_eq!(render(|s| s.erase_line_to_start()), b"\x1b[1K");
        assert_eq!(render(|s| s.line_feed()), b"\n");
    }

    #[test]
    fn test_cursor_sequences() {
        assert_eq!(render(|s| s.cursor_move(CursorDirection::Up, 2)), b"\x1b[2A");
        assert_eq!(render(|s| s.cursor_move(CursorDirection::Down, 3)), b"\x1b[3B");
        assert_eq!(
            render(|s| s.cursor_move(CursorDirection::Forward, 40)),
            b"\x1b[40C"
        );
        assert_eq!(render(|s| s.cursor_move(CursorDirection::Back, 1)), b"\x1b[1D");
        assert_eq!(render(|s| s.cursor_position(5, 12)), b"\x1b[5;12H");
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(render(|s| s.text("héllo\tworld")), "héllo\tworld".as_bytes());
    }

    #[test]
    fn test_borrowed_buffer() {
        let mut buffer = BytesMut::from(&b"> "[..]);
        let mut sink = AnsiSink::with_buffer(&mut buffer);
        sink.bold();
        sink.text("ok");
        assert_eq!(sink.len(), 6);
        assert_eq!(&buffer[..], b"> \x1b[1mok");
    }
}
