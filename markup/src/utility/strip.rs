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

use crate::lexer::DELIMITER;
use crate::sink::PlainTextSink;
use crate::{Dispatcher, MarkupResult};
use std::borrow::Cow;

/// Removes every markup command from a string, keeping only its literal text.
///
/// Markup is validated exactly as it is when rendered, so a string that would
/// fail to render also fails to strip.
///
/// # Performance
///
/// Input without a `%` is returned borrowed. Otherwise a new `String` is built.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use termark_markup::strip_markup;
///
/// let stripped = strip_markup("%c%%b%Hello %f2%world%r%%lf%").unwrap();
/// assert_eq!(stripped, "Hello world");
///
/// let plain = strip_markup("Plain Text").unwrap();
/// assert!(matches!(plain, Cow::Borrowed(_)));
/// ```
///
/// # Errors
///
/// Returns [`MarkupError::UnknownColorIndex`](crate::MarkupError::UnknownColorIndex)
/// for a color selection outside the palette.
pub fn strip_markup(str: &str) -> MarkupResult<Cow<'_, str>> {
    if !str.contains(DELIMITER) {
        return Ok(Cow::Borrowed(str));
    }

    let mut sink = PlainTextSink::new();
    Dispatcher::default().parse(str, &mut sink)?;
    Ok(Cow::Owned(sink.into_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkupError;

    #[test]
    fn test_plain_text_is_borrowed() {
        let result = strip_markup("nothing to see").unwrap();
        assert!(matches!(result, Cow::Borrowed("nothing to see")));
    }

    #[test]
    fn test_commands_are_removed() {
        assert_eq!(
            strip_markup("%c%%r%%f15%%b3%Hello %f0%world!%r%%lf%").unwrap(),
            "Hello world!"
        );
        assert_eq!(strip_markup("%xy1,1%%cf3%x").unwrap(), "x");
        assert_eq!(strip_markup("%%").unwrap(), "");
    }

    #[test]
    fn test_unknown_keywords_survive() {
        assert_eq!(strip_markup("100%done%").unwrap(), "100done");
    }

    #[test]
    fn test_invalid_color_fails() {
        assert!(matches!(
            strip_markup("%b16%text"),
            Err(MarkupError::UnknownColorIndex { index: 16, .. })
        ));
    }
}
