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

//! Error types for the ansi crate.

use termark_markup::MarkupError;
use thiserror::Error;

/// Result type alias for operations that may fail with an [`AnsiError`].
pub type AnsiResult<T> = Result<T, AnsiError>;

/// Errors that can occur when rendering markup to ANSI.
#[derive(Debug, Error)]
pub enum AnsiError {
    /// IO Error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The markup failed to dispatch
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    /// Rendered output was not valid UTF-8 at the specified position.
    #[error("Invalid UTF-8 sequence at position {position}")]
    InvalidUtf8 {
        /// The byte position where the invalid UTF-8 was encountered
        position: usize,
    },
}

impl AnsiError {
    /// Check if this is an IO error
    pub fn is_io_error(&self) -> bool {
        matches!(self, AnsiError::Io(_))
    }

    /// Check if this error came from the markup
    pub fn is_markup_error(&self) -> bool {
        matches!(self, AnsiError::Markup(_))
    }

    /// The underlying markup error, if any
    pub fn as_markup_error(&self) -> Option<&MarkupError> {
        match self {
            AnsiError::Markup(error) => Some(error),
            _ => None,
        }
    }
}
