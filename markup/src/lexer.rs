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

/// The markup delimiter character.
pub const DELIMITER: char = '%';

const DELIMITER_BYTE: u8 = b'%';

/// A contiguous slice of the markup input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chunk<'a> {
    /// A maximal run of one or more `%` characters.
    Delimiter(&'a str),
    /// Everything between two delimiter runs, or before the first / after the last.
    Content(&'a str),
}

impl<'a> Chunk<'a> {
    /// The slice of the input this chunk covers.
    pub fn as_str(&self) -> &'a str {
        match self {
            Chunk::Delimiter(text) | Chunk::Content(text) => text,
        }
    }

    /// Returns `true` for delimiter runs.
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Chunk::Delimiter(_))
    }
}

/// Splits markup into [`Chunk`]s, isolating every run of `%` from the content around it.
///
/// Concatenating the chunks in order gives back the input. The lexer never yields
/// an empty chunk, so `%%` on its own is one delimiter run and nothing else.
///
/// ```
/// use termark_markup::{Chunk, Lexer};
///
/// let chunks: Vec<Chunk> = Lexer::new("%b%%f15%Hi").collect();
/// assert_eq!(
///     chunks,
///     vec![
///         Chunk::Delimiter("%"),
///         Chunk::Content("b"),
///         Chunk::Delimiter("%%"),
///         Chunk::Content("f15"),
///         Chunk::Delimiter("%"),
///         Chunk::Content("Hi"),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Byte offset of the next chunk.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Input not yet split into chunks.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.position..]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remainder();
        let first = *rest.as_bytes().first()?;

        // '%' is ASCII, so both split points fall on char boundaries
        let length = if first == DELIMITER_BYTE {
            rest.bytes()
                .position(|byte| byte != DELIMITER_BYTE)
                .unwrap_or(rest.len())
        } else {
            rest.find(DELIMITER).unwrap_or(rest.len())
        };

        let text = &rest[..length];
        self.position += length;

        if first == DELIMITER_BYTE {
            Some(Chunk::Delimiter(text))
        } else {
            Some(Chunk::Content(text))
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
