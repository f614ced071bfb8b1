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

use crate::{AnsiError, AnsiResult, AnsiSink};
use bytes::BytesMut;
use termark_markup::{Dispatcher, MarkupConfig, ParseSummary};
use tokio_util::codec::Encoder;
use tracing::{debug, instrument};

/// Markup codec encoding `%` markup into ANSI escape sequences.
///
/// Every item handed to the encoder is one complete markup string. Under
/// [`ErrorPolicy::Abort`](termark_markup::ErrorPolicy::Abort) a failing item leaves
/// the destination buffer as it was before the item; under
/// [`ErrorPolicy::Skip`](termark_markup::ErrorPolicy::Skip) failing chunks are
/// dropped and the rest of the item is written.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupCodec {
    dispatcher: Dispatcher<'static>,
}

impl MarkupCodec {
    /// Creates a codec over the standard palettes.
    pub fn new(config: MarkupConfig) -> Self {
        Self::with_dispatcher(Dispatcher::new(config))
    }

    /// Creates a codec around an existing dispatcher.
    pub fn with_dispatcher(dispatcher: Dispatcher<'static>) -> Self {
        Self { dispatcher }
    }

    /// The dispatcher items are parsed with.
    pub fn dispatcher(&self) -> &Dispatcher<'static> {
        &self.dispatcher
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> MarkupConfig {
        self.dispatcher.config()
    }

    /// Renders `input` into `dst`, returning the parse summary.
    ///
    /// On error `dst` is truncated back to its length on entry.
    pub fn render_into(&self, input: &str, dst: &mut BytesMut) -> AnsiResult<ParseSummary> {
        let start = dst.len();
        let mut sink = AnsiSink::with_buffer(&mut *dst);
        match self.dispatcher.parse(input, &mut sink) {
            Ok(summary) => {
                debug!(bytes = sink.len(), commands = summary.commands, "Rendered markup");
                Ok(summary)
            }
            Err(error) => {
                dst.truncate(start);
                Err(AnsiError::Markup(error))
            }
        }
    }

    /// Renders `input` to an owned string.
    ///
    /// ```
    /// use termark_ansi::MarkupCodec;
    /// use termark_markup::MarkupConfig;
    ///
    /// let codec = MarkupCodec::new(MarkupConfig::legacy());
    /// assert_eq!(codec.render("%f9%!").unwrap(), "\x1b[1;31m!");
    /// ```
    pub fn render(&self, input: &str) -> AnsiResult<String> {
        let mut buffer = BytesMut::with_capacity(input.len());
        self.render_into(input, &mut buffer)?;
        String::from_utf8(buffer.to_vec()).map_err(|error| AnsiError::InvalidUtf8 {
            position: error.utf8_error().valid_up_to(),
        })
    }
}

impl Encoder<&str> for MarkupCodec {
    type Error = AnsiError;

    #[instrument(skip_all, fields(length = item.len()))]
    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> AnsiResult<()> {
        self.render_into(item, dst)?;
        Ok(())
    }
}

impl Encoder<String> for MarkupCodec {
    type Error = AnsiError;

    #[instrument(skip_all, fields(length = item.len()))]
    fn encode(&mut self, item: String, dst: &mut BytesMut) -> AnsiResult<()> {
        self.render_into(&item, dst)?;
        Ok(())
    }
}
