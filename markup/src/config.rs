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

/// Markup dispatch settings, fixed when a [`Dispatcher`](crate::Dispatcher) is built.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MarkupConfig {
    /// Foreground color encoding
    pub color_mode: ColorMode,
    /// What happens when a chunk fails to dispatch
    pub error_policy: ErrorPolicy,
}

impl MarkupConfig {
    /// Direct bright color codes, abort on the first error
    pub fn direct() -> MarkupConfig {
        MarkupConfig {
            color_mode: ColorMode::Direct,
            error_policy: ErrorPolicy::Abort,
        }
    }
    /// Intensity-bit foreground colors for legacy terminals, abort on the first error
    pub fn legacy() -> MarkupConfig {
        MarkupConfig {
            color_mode: ColorMode::IntensityBit,
            error_policy: ErrorPolicy::Abort,
        }
    }
    /// Direct bright color codes, skip and report failing chunks
    pub fn lenient() -> MarkupConfig {
        MarkupConfig {
            color_mode: ColorMode::Direct,
            error_policy: ErrorPolicy::Skip,
        }
    }

    /// Replace the color mode
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> MarkupConfig {
        self.color_mode = color_mode;
        self
    }

    /// Replace the error policy
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> MarkupConfig {
        self.error_policy = error_policy;
        self
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::direct()
    }
}

/// How a foreground color index is turned into a color command.
///
/// Background selections use the same palette in both modes.
///
/// # Examples
///
/// Choosing a mode from the environment in a binary:
///
/// ```
/// use termark_markup::{ColorMode, MarkupConfig};
///
/// let mode = ColorMode::detect_from_env();
/// let config = MarkupConfig::default().with_color_mode(mode);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Sixteen direct foreground codes (`30-37`, `90-97`).
    ///
    /// Supported by effectively every terminal emulator in use today.
    #[default]
    Direct,

    /// Eight foreground codes (`30-37`) combined with a bold or normal intensity flag.
    ///
    /// Use this for consoles that predate the `90-97` codes and show bold text in
    /// the bright color instead, such as the Linux virtual console or VT100
    /// compatible hardware.
    IntensityBit,
}

/// `TERM` values known to lack the bright foreground codes.
const LEGACY_TERMS: &[&str] = &["linux", "vt100", "vt102", "vt220", "ansi", "cons25"];

impl ColorMode {
    /// Picks a mode for a `TERM` value.
    pub fn for_term(term: &str) -> ColorMode {
        if LEGACY_TERMS.contains(&term) {
            ColorMode::IntensityBit
        } else {
            ColorMode::Direct
        }
    }

    /// Picks a mode from the `TERM` environment variable, defaulting to [`ColorMode::Direct`].
    pub fn detect_from_env() -> ColorMode {
        match std::env::var("TERM") {
            Ok(term) => ColorMode::for_term(&term),
            Err(_) => ColorMode::Direct,
        }
    }

    /// Returns `true` if bright colors are expressed through the intensity flag.
    pub fn is_intensity_bit(&self) -> bool {
        matches!(self, ColorMode::IntensityBit)
    }
}

/// What the dispatcher does with a chunk that fails to dispatch.
///
/// Neither policy substitutes a default value for the failing chunk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it. Sink calls made for earlier chunks stand.
    #[default]
    Abort,
    /// Log the error, skip the chunk and continue. Skipped errors are reported in the
    /// [`ParseSummary`](crate::ParseSummary).
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(MarkupConfig::default(), MarkupConfig::direct());
        assert_eq!(MarkupConfig::legacy().color_mode, ColorMode::IntensityBit);
        assert_eq!(MarkupConfig::legacy().error_policy, ErrorPolicy::Abort);
        assert_eq!(MarkupConfig::lenient().error_policy, ErrorPolicy::Skip);
    }

    #[test]
    fn test_builders() {
        let config = MarkupConfig::direct()
            .with_color_mode(ColorMode::IntensityBit)
            .with_error_policy(ErrorPolicy::Skip);
        assert_eq!(config.color_mode, ColorMode::IntensityBit);
        assert_eq!(config.error_policy, ErrorPolicy::Skip);
    }

    #[test]
    fn test_for_term() {
        assert_eq!(ColorMode::for_term("linux"), ColorMode::IntensityBit);
        assert_eq!(ColorMode::for_term("vt100"), ColorMode::IntensityBit);
        assert_eq!(ColorMode::for_term("xterm-256color"), ColorMode::Direct);
        assert_eq!(ColorMode::for_term(""), ColorMode::Direct);
        assert!(ColorMode::IntensityBit.is_intensity_bit());
        assert!(!ColorMode::Direct.is_intensity_bit());
    }
}
