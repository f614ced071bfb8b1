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

use crate::lexer::{Chunk, DELIMITER, Lexer};
use crate::palette::{ColorCommand, PaletteSet, STANDARD_PALETTES};
use crate::sink::CommandSink;
use crate::token::{Channel, Token};
use crate::{ColorMode, ErrorPolicy, MarkupConfig, MarkupError, MarkupResult};
use tracing::{instrument, trace, warn};

/// Turns markup into calls on a [`CommandSink`].
///
/// The dispatcher is a single left to right pass: every content chunk the
/// [`Lexer`] yields is classified and produces exactly one sink call, delimiter
/// runs produce none. Input without any `%` is plain text and produces a single
/// text call, so `"b"` is the letter b and `"%b%"` is bold. It holds nothing but
/// its configuration and a shared reference to the palettes, so one dispatcher
/// can serve any number of parses.
///
/// ```
/// use termark_markup::{Command, Dispatcher, MarkupConfig, RecordingSink};
///
/// let dispatcher = Dispatcher::new(MarkupConfig::default());
/// let mut sink = RecordingSink::new();
/// dispatcher.parse("%b%Hello%r%", &mut sink).unwrap();
/// assert_eq!(
///     sink.commands(),
///     &[Command::Bold, Command::Text("Hello".into()), Command::NoStyle]
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'p> {
    config: MarkupConfig,
    palettes: &'p PaletteSet,
}

/// Outcome of a completed parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Sink calls made
    pub commands: usize,
    /// Errors skipped under [`ErrorPolicy::Skip`], in input order
    pub skipped: Vec<MarkupError>,
}

impl ParseSummary {
    /// Returns `true` if no chunk was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl Dispatcher<'static> {
    /// Creates a dispatcher over the standard palettes.
    pub fn new(config: MarkupConfig) -> Self {
        Self::with_palettes(config, &STANDARD_PALETTES)
    }
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Self::new(MarkupConfig::default())
    }
}

impl<'p> Dispatcher<'p> {
    /// Creates a dispatcher over caller supplied palettes.
    pub fn with_palettes(config: MarkupConfig, palettes: &'p PaletteSet) -> Self {
        Self { config, palettes }
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> MarkupConfig {
        self.config
    }

    /// The active foreground color encoding.
    pub fn color_mode(&self) -> ColorMode {
        self.config.color_mode
    }

    /// The palettes color selections resolve through.
    pub fn palettes(&self) -> &'p PaletteSet {
        self.palettes
    }

    /// Resolves a color index through the palette active for `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownColorIndex`] for any index above 15.
    pub fn resolve_color(&self, channel: Channel, index: u8) -> MarkupResult<ColorCommand> {
        self.palettes.resolve(self.config.color_mode, channel, index)
    }

    /// Classifies every content chunk of `input` without dispatching.
    ///
    /// Input without any `%` yields one [`Token::Literal`] holding all of it.
    pub fn tokens<'a>(
        &self,
        input: &'a str,
    ) -> impl Iterator<Item = MarkupResult<Token<'a>>> + use<'a> {
        let plain = !input.contains(DELIMITER);
        Lexer::new(input).filter_map(move |chunk| match chunk {
            Chunk::Content(text) if text.is_empty() => None,
            Chunk::Content(text) if plain => Some(Ok(Token::Literal(text))),
            Chunk::Content(text) => Some(Token::classify(text)),
            Chunk::Delimiter(_) => None,
        })
    }

    /// Makes the single sink call for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownColorIndex`] for a color selection outside the
    /// palette, in which case the sink is not called.
    pub fn dispatch<S: CommandSink + ?Sized>(
        &self,
        token: &Token<'_>,
        sink: &mut S,
    ) -> MarkupResult<()> {
        if let Some((channel, index)) = token.dispatch_uncolored(sink) {
            let color = self.resolve_color(channel, index)?;
            sink.color(color);
        }
        Ok(())
    }

    /// Classifies and dispatches one chunk. Returns `true` if the sink was called.
    ///
    /// # Errors
    ///
    /// See [`Token::classify`] and [`Dispatcher::dispatch`].
    pub fn dispatch_chunk<S: CommandSink + ?Sized>(
        &self,
        chunk: Chunk<'_>,
        sink: &mut S,
    ) -> MarkupResult<bool> {
        match chunk {
            Chunk::Delimiter(_) => Ok(false),
            Chunk::Content(text) if text.is_empty() => Ok(false),
            Chunk::Content(text) => {
                let token = Token::classify(text)?;
                trace!(kind = ?token.kind(), chunk = text, "Dispatching markup chunk");
                self.dispatch(&token, sink)?;
                Ok(true)
            }
        }
    }

    /// Parses `input`, calling `sink` once per content chunk.
    ///
    /// Input without any `%` is passed to [`CommandSink::text`] whole; empty input
    /// makes no calls.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Abort`] the first failing chunk ends the parse and its
    /// error is returned; calls already made for earlier chunks are not undone.
    /// Under [`ErrorPolicy::Skip`] this never fails and the skipped errors are
    /// listed in the returned [`ParseSummary`].
    #[instrument(skip_all, fields(length = input.len(), mode = ?self.config.color_mode))]
    pub fn parse<S: CommandSink + ?Sized>(
        &self,
        input: &str,
        sink: &mut S,
    ) -> MarkupResult<ParseSummary> {
        let mut summary = ParseSummary::default();
        if !input.contains(DELIMITER) {
            if !input.is_empty() {
                sink.text(input);
                summary.commands = 1;
            }
            trace!("Parsed plain text");
            return Ok(summary);
        }

        let mut lexer = Lexer::new(input);

        loop {
            let offset = lexer.position();
            let Some(chunk) = lexer.next() else {
                break;
            };
            match self.dispatch_chunk(chunk, sink) {
                Ok(true) => summary.commands += 1,
                Ok(false) => {}
                Err(error) => match self.config.error_policy {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::Skip => {
                        warn!(offset, chunk = chunk.as_str(), %error, "Skipping markup chunk");
                        summary.skipped.push(error);
                    }
                },
            }
        }

        trace!(
            commands = summary.commands,
            skipped = summary.skipped.len(),
            "Parsed markup"
        );
        Ok(summary)
    }
}
