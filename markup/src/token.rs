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

//! Classification of content chunks into [`Token`]s.
//!
//! Each chunk is tested against [`RULES`] in order and the first match wins.
//! Keyword letters compare case-insensitively and every pattern must cover the
//! whole chunk, so `f15` selects a color while `f150` and `f15x` are literal text.
//!
//! | Markup                 | Token                                   |
//! |------------------------|-----------------------------------------|
//! | `b` `n` `f` `i` `u` `bl` `s` | style toggle                      |
//! | `f0`-`f99` / `b0`-`b99`| foreground / background color select    |
//! | `r`                    | reset every attribute                   |
//! | `c` `eu` `ed`          | erase display, upward, downward         |
//! | `el` `ee` `es`         | erase line, to end, to start            |
//! | `cb#` `cf#` `cd#` `cu#`| cursor back, forward, down, up (1-3 digits) |
//! | `xy#,#`                | cursor position (1-3 digits each)       |
//! | `lf`                   | line feed                               |
//! | anything else          | literal text                            |

use crate::sink::CommandSink;
use crate::{MarkupError, MarkupResult};
use enum_kinds::EnumKind;

/// Which color a color selection applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Text color
    Foreground,
    /// Cell color behind the text
    Background,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Foreground => write!(f, "foreground"),
            Channel::Background => write!(f, "background"),
        }
    }
}

/// Text attribute toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Increased intensity
    Bold,
    /// Neither bold nor faint
    Normal,
    /// Decreased intensity
    Faint,
    /// Italic
    Italic,
    /// Single underline
    Underline,
    /// Slow blink
    Blink,
    /// Reverse video. No markup keyword produces this; see [`RULES`].
    Negative,
    /// Crossed out
    Strikethrough,
    /// Reset every attribute and color
    NoStyle,
}

/// Screen and line operations that take no argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenOp {
    /// Erase the entire display
    EraseDisplay,
    /// Erase from the start of the display to the cursor
    EraseDisplayUp,
    /// Erase from the cursor to the end of the display
    EraseDisplayDown,
    /// Erase the entire line
    EraseLine,
    /// Erase from the cursor to the end of the line
    EraseLineToEnd,
    /// Erase from the start of the line to the cursor
    EraseLineToStart,
    /// Advance to the next line
    LineFeed,
}

/// Relative cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    /// Left
    Back,
    /// Right
    Forward,
    /// Down
    Down,
    /// Up
    Up,
}

/// A classified content chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumKind)]
#[enum_kind(TokenKind)]
pub enum Token<'a> {
    /// Turn a text attribute on, or reset attributes
    StyleToggle(Style),
    /// Select a palette color; `index` is unresolved and may be out of range
    ColorSelect {
        /// Foreground or background
        channel: Channel,
        /// Palette index as written, `0-99`
        index: u8,
    },
    /// Erase or line feed
    ScreenOp(ScreenOp),
    /// Move the cursor relative to its position
    CursorMove {
        /// Direction of travel
        direction: CursorDirection,
        /// Cells or lines to move, `0-999`
        amount: u16,
    },
    /// Move the cursor to an absolute position
    CursorPosition {
        /// Row, `0-999`
        row: u16,
        /// Column, `0-999`
        col: u16,
    },
    /// Text emitted verbatim
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies a non-empty content chunk.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::MalformedNumber`] if a numeric argument fails to parse.
    /// Color indices are not range checked here; see [`Palette::resolve`](crate::Palette::resolve).
    pub fn classify(chunk: &'a str) -> MarkupResult<Token<'a>> {
        for (pattern, rule) in RULES {
            if let Some(arguments) = pattern.matches(chunk) {
                return rule.build(chunk, arguments);
            }
        }
        Ok(Token::Literal(chunk))
    }

    /// The fieldless kind of this token.
    pub fn kind(&self) -> TokenKind {
        TokenKind::from(self)
    }

    /// Calls the sink operation for every token except color selections, which need
    /// a palette lookup first and are returned unchanged as `Some((channel, index))`.
    pub(crate) fn dispatch_uncolored<S: CommandSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Option<(Channel, u8)> {
        match *self {
            Token::StyleToggle(style) => match style {
                Style::Bold => sink.bold(),
                Style::Normal => sink.normal(),
                Style::Faint => sink.faint(),
                Style::Italic => sink.italic(),
                Style::Underline => sink.underline(),
                Style::Blink => sink.blink(),
                Style::Negative => sink.negative(),
                Style::Strikethrough => sink.strikethrough(),
                Style::NoStyle => sink.nostyle(),
            },
            Token::ColorSelect { channel, index } => return Some((channel, index)),
            Token::ScreenOp(op) => match op {
                ScreenOp::EraseDisplay => sink.erase_display(),
                ScreenOp::EraseDisplayUp => sink.erase_display_up(),
                ScreenOp::EraseDisplayDown => sink.erase_display_down(),
                ScreenOp::EraseLine => sink.erase_line(),
                ScreenOp::EraseLineToEnd => sink.erase_line_to_end(),
                ScreenOp::EraseLineToStart => sink.erase_line_to_start(),
                ScreenOp::LineFeed => sink.line_feed(),
            },
            Token::CursorMove { direction, amount } => sink.cursor_move(direction, amount),
            Token::CursorPosition { row, col } => sink.cursor_position(row, col),
            Token::Literal(text) => sink.text(text),
        }
        None
    }
}

/// How a rule recognizes a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// The keyword and nothing else
    Exact(&'static str),
    /// The keyword followed by one to `max` ASCII digits
    Digits(&'static str, usize),
    /// The keyword followed by `1-3 digits`, `,`, `1-3 digits`
    Coordinates(&'static str),
}

/// What a matching chunk becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// A fixed style toggle
    Style(Style),
    /// A color select on the channel, digits give the index
    Color(Channel),
    /// A fixed screen operation
    Screen(ScreenOp),
    /// A relative move, digits give the amount
    Move(CursorDirection),
    /// An absolute move, coordinates give row and column
    Position,
}

/// The classification table in priority order.
///
/// `n` is classified as [`Style::Normal`]. Reverse video stays reachable
/// programmatically through [`Style::Negative`] but has no keyword.
pub const RULES: &[(Pattern, Rule)] = &[
    (Pattern::Exact("b"), Rule::Style(Style::Bold)),
    (Pattern::Exact("n"), Rule::Style(Style::Normal)),
    (Pattern::Exact("f"), Rule::Style(Style::Faint)),
    (Pattern::Exact("i"), Rule::Style(Style::Italic)),
    (Pattern::Exact("u"), Rule::Style(Style::Underline)),
    (Pattern::Exact("bl"), Rule::Style(Style::Blink)),
    (Pattern::Exact("s"), Rule::Style(Style::Strikethrough)),
    (Pattern::Digits("f", 2), Rule::Color(Channel::Foreground)),
    (Pattern::Digits("b", 2), Rule::Color(Channel::Background)),
    (Pattern::Exact("r"), Rule::Style(Style::NoStyle)),
    (Pattern::Exact("c"), Rule::Screen(ScreenOp::EraseDisplay)),
    (Pattern::Exact("eu"), Rule::Screen(ScreenOp::EraseDisplayUp)),
    (Pattern::Exact("ed"), Rule::Screen(ScreenOp::EraseDisplayDown)),
    (Pattern::Exact("el"), Rule::Screen(ScreenOp::EraseLine)),
    (Pattern::Exact("ee"), Rule::Screen(ScreenOp::EraseLineToEnd)),
    (Pattern::Exact("es"), Rule::Screen(ScreenOp::EraseLineToStart)),
    (Pattern::Digits("cb", 3), Rule::Move(CursorDirection::Back)),
    (Pattern::Digits("cf", 3), Rule::Move(CursorDirection::Forward)),
    (Pattern::Digits("cd", 3), Rule::Move(CursorDirection::Down)),
    (Pattern::Digits("cu", 3), Rule::Move(CursorDirection::Up)),
    (Pattern::Coordinates("xy"), Rule::Position),
    (Pattern::Exact("lf"), Rule::Screen(ScreenOp::LineFeed)),
];

/// Arguments captured by a matching [`Pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arguments<'a> {
    /// No arguments
    None,
    /// A single run of digits
    Number(&'a str),
    /// Two runs of digits
    Pair(&'a str, &'a str),
}

impl Pattern {
    /// Returns the captured arguments if the whole chunk matches.
    pub fn matches<'a>(&self, chunk: &'a str) -> Option<Arguments<'a>> {
        match *self {
            Pattern::Exact(keyword) => chunk
                .eq_ignore_ascii_case(keyword)
                .then_some(Arguments::None),
            Pattern::Digits(keyword, max) => {
                let digits = strip_keyword(chunk, keyword)?;
                is_digits(digits, max).then_some(Arguments::Number(digits))
            }
            Pattern::Coordinates(keyword) => {
                let (row, col) = strip_keyword(chunk, keyword)?.split_once(',')?;
                (is_digits(row, 3) && is_digits(col, 3)).then_some(Arguments::Pair(row, col))
            }
        }
    }
}

impl Rule {
    fn build<'a>(&self, chunk: &'a str, arguments: Arguments<'a>) -> MarkupResult<Token<'a>> {
        let token = match (*self, arguments) {
            (Rule::Style(style), _) => Token::StyleToggle(style),
            (Rule::Screen(op), _) => Token::ScreenOp(op),
            (Rule::Color(channel), Arguments::Number(digits)) => Token::ColorSelect {
                channel,
                index: parse_number(chunk, digits)?,
            },
            (Rule::Move(direction), Arguments::Number(digits)) => Token::CursorMove {
                direction,
                amount: parse_number(chunk, digits)?,
            },
            (Rule::Position, Arguments::Pair(row, col)) => Token::CursorPosition {
                row: parse_number(chunk, row)?,
                col: parse_number(chunk, col)?,
            },
            // A rule paired with a pattern that captures the wrong arguments
            _ => Token::Literal(chunk),
        };
        Ok(token)
    }
}

fn strip_keyword<'a>(chunk: &'a str, keyword: &str) -> Option<&'a str> {
    let head = chunk.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&chunk[keyword.len()..])
    } else {
        None
    }
}

fn is_digits(text: &str, max: usize) -> bool {
    (1..=max).contains(&text.len()) && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    chunk: &str,
    digits: &str,
) -> MarkupResult<T> {
    digits
        .parse::<T>()
        .map_err(|source| MarkupError::MalformedNumber {
            chunk: chunk.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(chunk: &str) -> Token<'_> {
        Token::classify(chunk).unwrap()
    }

    #[test]
    fn test_style_keywords() {
        assert_eq!(classify("b"), Token::StyleToggle(Style::Bold));
        assert_eq!(classify("n"), Token::StyleToggle(Style::Normal));
        assert_eq!(classify("f"), Token::StyleToggle(Style::Faint));
        assert_eq!(classify("i"), Token::StyleToggle(Style::Italic));
        assert_eq!(classify("u"), Token::StyleToggle(Style::Underline));
        assert_eq!(classify("bl"), Token::StyleToggle(Style::Blink));
        assert_eq!(classify("s"), Token::StyleToggle(Style::Strikethrough));
        assert_eq!(classify("r"), Token::StyleToggle(Style::NoStyle));
    }

    #[test]
    fn test_screen_keywords() {
        assert_eq!(classify("c"), Token::ScreenOp(ScreenOp::EraseDisplay));
        assert_eq!(classify("eu"), Token::ScreenOp(ScreenOp::EraseDisplayUp));
        assert_eq!(classify("ed"), Token::ScreenOp(ScreenOp::EraseDisplayDown));
        assert_eq!(classify("el"), Token::ScreenOp(ScreenOp::EraseLine));
        assert_eq!(classify("ee"), Token::ScreenOp(ScreenOp::EraseLineToEnd));
        assert_eq!(classify("es"), Token::ScreenOp(ScreenOp::EraseLineToStart));
        assert_eq!(classify("lf"), Token::ScreenOp(ScreenOp::LineFeed));
    }

    #[test]
    fn test_color_selects() {
        assert_eq!(
            classify("f15"),
            Token::ColorSelect {
                channel: Channel::Foreground,
                index: 15
            }
        );
        assert_eq!(
            classify("b3"),
            Token::ColorSelect {
                channel: Channel::Background,
                index: 3
            }
        );
        assert_eq!(
            classify("f07"),
            Token::ColorSelect {
                channel: Channel::Foreground,
                index: 7
            }
        );
        // Range is checked at dispatch, not classification
        assert_eq!(
            classify("f99"),
            Token::ColorSelect {
                channel: Channel::Foreground,
                index: 99
            }
        );
    }

    #[test]
    fn test_color_select_digit_limit() {
        assert_eq!(classify("f150"), Token::Literal("f150"));
        assert_eq!(classify("b1x"), Token::Literal("b1x"));
    }

    #[test]
    fn test_cursor_moves() {
        assert_eq!(
            classify("cb5"),
            Token::CursorMove {
                direction: CursorDirection::Back,
                amount: 5
            }
        );
        assert_eq!(
            classify("cf10"),
            Token::CursorMove {
                direction: CursorDirection::Forward,
                amount: 10
            }
        );
        assert_eq!(
            classify("cd999"),
            Token::CursorMove {
                direction: CursorDirection::Down,
                amount: 999
            }
        );
        assert_eq!(
            classify("cu0"),
            Token::CursorMove {
                direction: CursorDirection::Up,
                amount: 0
            }
        );
        assert_eq!(classify("cu1000"), Token::Literal("cu1000"));
        assert_eq!(classify("cu"), Token::Literal("cu"));
    }

    #[test]
    fn test_cursor_position() {
        assert_eq!(classify("xy10,20"), Token::CursorPosition { row: 10, col: 20 });
        assert_eq!(classify("xy0,999"), Token::CursorPosition { row: 0, col: 999 });
        assert_eq!(classify("xy10,"), Token::Literal("xy10,"));
        assert_eq!(classify("xy,20"), Token::Literal("xy,20"));
        assert_eq!(classify("xy1000,1"), Token::Literal("xy1000,1"));
        assert_eq!(classify("xy1,2,3"), Token::Literal("xy1,2,3"));
        assert_eq!(classify("xy 1,2"), Token::Literal("xy 1,2"));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(classify("B"), Token::StyleToggle(Style::Bold));
        assert_eq!(classify("BL"), Token::StyleToggle(Style::Blink));
        assert_eq!(classify("Lf"), Token::ScreenOp(ScreenOp::LineFeed));
        assert_eq!(
            classify("F12"),
            Token::ColorSelect {
                channel: Channel::Foreground,
                index: 12
            }
        );
        assert_eq!(classify("XY1,2"), Token::CursorPosition { row: 1, col: 2 });
    }

    #[test]
    fn test_literals() {
        assert_eq!(classify("Hello "), Token::Literal("Hello "));
        assert_eq!(classify("bold"), Token::Literal("bold"));
        assert_eq!(classify(" b"), Token::Literal(" b"));
        assert_eq!(classify("é"), Token::Literal("é"));
        assert_eq!(classify("xé1,2"), Token::Literal("xé1,2"));
    }

    #[test]
    fn test_rules_order_style_before_color() {
        let bold = RULES
            .iter()
            .position(|(pattern, _)| *pattern == Pattern::Exact("b"))
            .unwrap();
        let background = RULES
            .iter()
            .position(|(pattern, _)| *pattern == Pattern::Digits("b", 2))
            .unwrap();
        assert!(bold < background);
    }

    #[test]
    fn test_n_is_normal_not_negative() {
        assert!(
            RULES
                .iter()
                .all(|(_, rule)| *rule != Rule::Style(Style::Negative))
        );
        assert_eq!(classify("n"), Token::StyleToggle(Style::Normal));
    }

    #[test]
    fn test_token_kind() {
        assert_eq!(classify("b").kind(), TokenKind::StyleToggle);
        assert_eq!(classify("f1").kind(), TokenKind::ColorSelect);
        assert_eq!(classify("c").kind(), TokenKind::ScreenOp);
        assert_eq!(classify("cb1").kind(), TokenKind::CursorMove);
        assert_eq!(classify("xy1,1").kind(), TokenKind::CursorPosition);
        assert_eq!(classify("text").kind(), TokenKind::Literal);
    }

    #[test]
    fn test_pattern_matches_arguments() {
        assert_eq!(Pattern::Exact("lf").matches("LF"), Some(Arguments::None));
        assert_eq!(
            Pattern::Digits("cb", 3).matches("cb12"),
            Some(Arguments::Number("12"))
        );
        assert_eq!(
            Pattern::Coordinates("xy").matches("xy3,4"),
            Some(Arguments::Pair("3", "4"))
        );
        assert_eq!(Pattern::Digits("cb", 3).matches("c"), None);
    }

    #[test]
    fn test_parse_number_reports_chunk() {
        let err = parse_number::<u8>("f300", "300").unwrap_err();
        assert!(matches!(err, MarkupError::MalformedNumber { ref chunk, .. } if chunk == "f300"));
    }
}
