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

use crate::palette::ColorCommand;
use crate::token::CursorDirection;

/// Receives one call per dispatched markup command.
///
/// The dispatcher never inspects what a sink does with a call, so implementations
/// are free to render escape sequences, build a document model, or just count.
pub trait CommandSink {
    /// Increased intensity
    fn bold(&mut self);
    /// Neither bold nor faint
    fn normal(&mut self);
    /// Decreased intensity
    fn faint(&mut self);
    /// Italic
    fn italic(&mut self);
    /// Single underline
    fn underline(&mut self);
    /// Slow blink
    fn blink(&mut self);
    /// Reverse video
    fn negative(&mut self);
    /// Crossed out
    fn strikethrough(&mut self);
    /// Reset every attribute and color
    fn nostyle(&mut self);

    /// Apply a resolved palette entry
    fn color(&mut self, color: ColorCommand);

    /// Erase the entire display
    fn erase_display(&mut self);
    /// Erase from the start of the display to the cursor
    fn erase_display_up(&mut self);
    /// Erase from the cursor to the end of the display
    fn erase_display_down(&mut self);
    /// Erase the entire line
    fn erase_line(&mut self);
    /// Erase from the cursor to the end of the line
    fn erase_line_to_end(&mut self);
    /// Erase from the start of the line to the cursor
    fn erase_line_to_start(&mut self);

    /// Move the cursor `amount` cells or lines
    fn cursor_move(&mut self, direction: CursorDirection, amount: u16);
    /// Move the cursor to `row`, `col`
    fn cursor_position(&mut self, row: u16, col: u16);
    /// Advance to the next line
    fn line_feed(&mut self);

    /// Emit text verbatim
    fn text(&mut self, text: &str);
}

impl<S: CommandSink + ?Sized> CommandSink for &mut S {
    fn bold(&mut self) {
        (**self).bold()
    }
    fn normal(&mut self) {
        (**self).normal()
    }
    fn faint(&mut self) {
        (**self).faint()
    }
    fn italic(&mut self) {
        (**self).italic()
    }
    fn underline(&mut self) {
        (**self).underline()
    }
    fn blink(&mut self) {
        (**self).blink()
    }
    fn negative(&mut self) {
        (**self).negative()
    }
    fn strikethrough(&mut self) {
        (**self).strikethrough()
    }
    fn nostyle(&mut self) {
        (**self).nostyle()
    }
    fn color(&mut self, color: ColorCommand) {
        (**self).color(color)
    }
    fn erase_display(&mut self) {
        (**self).erase_display()
    }
    fn erase_display_up(&mut self) {
        (**self).erase_display_up()
    }
    fn erase_display_down(&mut self) {
        (**self).erase_display_down()
    }
    fn erase_line(&mut self) {
        (**self).erase_line()
    }
    fn erase_line_to_end(&mut self) {
        (**self).erase_line_to_end()
    }
    fn erase_line_to_start(&mut self) {
        (**self).erase_line_to_start()
    }
    fn cursor_move(&mut self, direction: CursorDirection, amount: u16) {
        (**self).cursor_move(direction, amount)
    }
    fn cursor_position(&mut self, row: u16, col: u16) {
        (**self).cursor_position(row, col)
    }
    fn line_feed(&mut self) {
        (**self).line_feed()
    }
    fn text(&mut self, text: &str) {
        (**self).text(text)
    }
}

/// A single sink call, captured by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// [`CommandSink::bold`]
    Bold,
    /// [`CommandSink::normal`]
    Normal,
    /// [`CommandSink::faint`]
    Faint,
    /// [`CommandSink::italic`]
    Italic,
    /// [`CommandSink::underline`]
    Underline,
    /// [`CommandSink::blink`]
    Blink,
    /// [`CommandSink::negative`]
    Negative,
    /// [`CommandSink::strikethrough`]
    Strikethrough,
    /// [`CommandSink::nostyle`]
    NoStyle,
    /// [`CommandSink::color`]
    Color(ColorCommand),
    /// [`CommandSink::erase_display`]
    EraseDisplay,
    /// [`CommandSink::erase_display_up`]
    EraseDisplayUp,
    /// [`CommandSink::erase_display_down`]
    EraseDisplayDown,
    /// [`CommandSink::erase_line`]
    EraseLine,
    /// [`CommandSink::erase_line_to_end`]
    EraseLineToEnd,
    /// [`CommandSink::erase_line_to_start`]
    EraseLineToStart,
    /// [`CommandSink::cursor_move`]
    CursorMove(CursorDirection, u16),
    /// [`CommandSink::cursor_position`]
    CursorPosition {
        /// Row
        row: u16,
        /// Column
        col: u16,
    },
    /// [`CommandSink::line_feed`]
    LineFeed,
    /// [`CommandSink::text`]
    Text(String),
}

impl Command {
    /// Replays this command onto `sink`.
    pub fn apply<S: CommandSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Command::Bold => sink.bold(),
            Command::Normal => sink.normal(),
            Command::Faint => sink.faint(),
            Command::Italic => sink.italic(),
            Command::Underline => sink.underline(),
            Command::Blink => sink.blink(),
            Command::Negative => sink.negative(),
            Command::Strikethrough => sink.strikethrough(),
            Command::NoStyle => sink.nostyle(),
            Command::Color(color) => sink.color(*color),
            Command::EraseDisplay => sink.erase_display(),
            Command::EraseDisplayUp => sink.erase_display_up(),
            Command::EraseDisplayDown => sink.erase_display_down(),
            Command::EraseLine => sink.erase_line(),
            Command::EraseLineToEnd => sink.erase_line_to_end(),
            Command::EraseLineToStart => sink.erase_line_to_start(),
            Command::CursorMove(direction, amount) => sink.cursor_move(*direction, *amount),
            Command::CursorPosition { row, col } => sink.cursor_position(*row, *col),
            Command::LineFeed => sink.line_feed(),
            Command::Text(text) => sink.text(text),
        }
    }
}

/// A sink that records every call it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    commands: Vec<Command>,
}

impl RecordingSink {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consumes the sink, returning the recorded calls.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replays the recording onto another sink.
    pub fn replay<S: CommandSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            command.apply(sink);
        }
    }
}

impl CommandSink for RecordingSink {
    fn bold(&mut self) {
        self.commands.push(Command::Bold);
    }
    fn normal(&mut self) {
        self.commands.push(Command::Normal);
    }
    fn faint(&mut self) {
        self.commands.push(Command::Faint);
    }
    fn italic(&mut self) {
        self.commands.push(Command::Italic);
    }
    fn underline(&mut self) {
        self.commands.push(Command::Underline);
    }
    fn blink(&mut self) {
        self.commands.push(Command::Blink);
    }
    fn negative(&mut self) {
        self.commands.push(Command::Negative);
    }
    fn strikethrough(&mut self) {
        self.commands.push(Command::Strikethrough);
    }
    fn nostyle(&mut self) {
        self.commands.push(Command::NoStyle);
    }
    fn color(&mut self, color: ColorCommand) {
        self.commands.push(Command::Color(color));
    }
    fn erase_display(&mut self) {
        self.commands.push(Command::EraseDisplay);
    }
    fn erase_display_up(&mut self) {
        self.commands.push(Command::EraseDisplayUp);
    }
    fn erase_display_down(&mut self) {
        self.commands.push(Command::EraseDisplayDown);
    }
    fn erase_line(&mut self) {
        self.commands.push(Command::EraseLine);
    }
    fn erase_line_to_end(&mut self) {
        self.commands.push(Command::EraseLineToEnd);
    }
    fn erase_line_to_start(&mut self) {
        self.commands.push(Command::EraseLineToStart);
    }
    fn cursor_move(&mut self, direction: CursorDirection, amount: u16) {
        self.commands.push(Command::CursorMove(direction, amount));
    }
    fn cursor_position(&mut self, row: u16, col: u16) {
        self.commands.push(Command::CursorPosition { row, col });
    }
    fn line_feed(&mut self) {
        self.commands.push(Command::LineFeed);
    }
    fn text(&mut self, text: &str) {
        self.commands.push(Command::Text(text.to_string()));
    }
}

/// A sink that keeps only literal text and drops every other command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainTextSink {
    text: String,
}

impl PlainTextSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text collected so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the sink, returning the collected text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl CommandSink for PlainTextSink {
    fn bold(&mut self) {}
    fn normal(&mut self) {}
    fn faint(&mut self) {}
    fn italic(&mut self) {}
    fn underline(&mut self) {}
    fn blink(&mut self) {}
    fn negative(&mut self) {}
    fn strikethrough(&mut self) {}
    fn nostyle(&mut self) {}
    fn color(&mut self, _color: ColorCommand) {}
    fn erase_display(&mut self) {}
    fn erase_display_up(&mut self) {}
    fn erase_display_down(&mut self) {}
    fn erase_line(&mut self) {}
    fn erase_line_to_end(&mut self) {}
    fn erase_line_to_start(&mut self) {}
    fn cursor_move(&mut self, _direction: CursorDirection, _amount: u16) {}
    fn cursor_position(&mut self, _row: u16, _col: u16) {}
    fn line_feed(&mut self) {}
    fn text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}
