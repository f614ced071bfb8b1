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

//! Inline `%` markup for terminal control.
//!
//! A markup string such as `%c%%b%%f15%Hello%r%%lf%` is split by the [`Lexer`]
//! into delimiter runs and content, each content chunk is classified into a
//! [`Token`], and the [`Dispatcher`] makes one [`CommandSink`] call per token.
//! Rendering those calls into escape sequences is left to the sink.

mod config;
mod dispatcher;
mod lexer;
mod palette;
mod result;
mod sink;
mod token;
pub mod utility;

pub use self::config::{ColorMode, ErrorPolicy, MarkupConfig};
pub use self::dispatcher::{Dispatcher, ParseSummary};
pub use self::lexer::{Chunk, DELIMITER, Lexer};
pub use self::palette::{
    Color, ColorCommand, Intensity, PALETTE_SIZE, Palette, PaletteSet, STANDARD_PALETTES,
};
pub use self::result::{MarkupError, MarkupResult};
pub use self::sink::{Command, CommandSink, PlainTextSink, RecordingSink};
pub use self::token::{
    Arguments, Channel, CursorDirection, Pattern, RULES, Rule, ScreenOp, Style, Token, TokenKind,
};
pub use self::utility::strip_markup;
