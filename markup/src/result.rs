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

//! Error types for the markup crate.

use crate::token::Channel;
use thiserror::Error;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors raised while classifying or dispatching a markup chunk.
///
/// Chunks that match no keyword are never an error, they become literal text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// A color selection named an index outside the 16 entry palette.
    #[error("Unknown {channel} color index {index} (expected 0-15)")]
    UnknownColorIndex {
        /// Which palette the lookup went to
        channel: Channel,
        /// The index as written in the markup
        index: u8,
    },

    /// A numeric argument could not be parsed as an integer.
    #[error("Malformed numeric argument in chunk '{chunk}': {source}")]
    MalformedNumber {
        /// The chunk the argument was extracted from
        chunk: String,
        /// Underlying parse failure
        #[source]
        source: std::num::ParseIntError,
    },
}

impl MarkupError {
    /// Check if the error came from a palette lookup
    pub fn is_color_error(&self) -> bool {
        matches!(self, MarkupError::UnknownColorIndex { .. })
    }
}
