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

use crate::AnsiResult;
use crate::ansi::{CSI, put_decimal};
use bytes::BufMut;
use termark_markup::{Color, ColorCommand, Intensity, Style};

/// A single Select Graphic Rendition parameter.
///
/// | Code      | Description           |
/// |-----------|-----------------------|
/// | `0`       | Reset                 |
/// | `1`       | Bold                  |
/// | `2`       | Faint                 |
/// | `3`       | Italic                |
/// | `4`       | Underline             |
/// | `5`       | Slow Blink            |
/// | `7`       | Reverse Video         |
/// | `9`       | Crossed Out           |
/// | `22`      | Normal Intensity      |
/// | `30-37`   | Foreground            |
/// | `40-47`   | Background            |
/// | `90-97`   | Bright Foreground     |
/// | `100-107` | Bright Background     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SGRParameter {
    /// Reset all attributes and colors
    Reset,
    /// Bold or Normal intensity
    Intensity(Intensity),
    /// Decreased intensity
    Faint,
    /// Italic
    Italic,
    /// Single underline
    Underline,
    /// Slow blink
    Blink,
    /// Swap foreground and background
    ReverseVideo,
    /// Crossed out
    Strikethrough,
    /// Foreground color, bright colors use the `90-97` range
    Foreground(Color),
    /// Background color, bright colors use the `100-107` range
    Background(Color),
}

impl SGRParameter {
    /// Converts the parameter to its numeric SGR code.
    pub fn to_u8(&self) -> u8 {
        match self {
            SGRParameter::Reset => 0,
            SGRParameter::Intensity(intensity) => intensity.to_u8(),
            SGRParameter::Faint => 2,
            SGRParameter::Italic => 3,
            SGRParameter::Underline => 4,
            SGRParameter::Blink => 5,
            SGRParameter::ReverseVideo => 7,
            SGRParameter::Strikethrough => 9,
            SGRParameter::Foreground(color) if color.is_bright() => 90 + color.offset(),
            SGRParameter::Foreground(color) => 30 + color.offset(),
            SGRParameter::Background(color) if color.is_bright() => 100 + color.offset(),
            SGRParameter::Background(color) => 40 + color.offset(),
        }
    }

    /// Converts a numeric SGR code back to a parameter, if it is one this crate emits.
    pub fn from_u8(code: u8) -> Option<SGRParameter> {
        match code {
            0 => Some(SGRParameter::Reset),
            1 => Some(SGRParameter::Intensity(Intensity::Bold)),
            2 => Some(SGRParameter::Faint),
            3 => Some(SGRParameter::Italic),
            4 => Some(SGRParameter::Underline),
            5 => Some(SGRParameter::Blink),
            7 => Some(SGRParameter::ReverseVideo),
            9 => Some(SGRParameter::Strikethrough),
            22 => Some(SGRParameter::Intensity(Intensity::Normal)),
            30..=37 => Some(SGRParameter::Foreground(Color::ALL[usize::from(code - 30)])),
            40..=47 => Some(SGRParameter::Background(Color::ALL[usize::from(code - 40)])),
            90..=97 => Some(SGRParameter::Foreground(Color::ALL[usize::from(code - 82)])),
            100..=107 => Some(SGRParameter::Background(Color::ALL[usize::from(code - 92)])),
            _ => None,
        }
    }
}

impl std::fmt::Display for SGRParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

/// Select Graphic Rendition sequence carrying one or two parameters.
///
/// Rendered as `ESC [ p1 m` or `ESC [ p1 ; p2 m`. Two parameters are only needed
/// for intensity-bit foreground colors, where the intensity flag and the color
/// travel in one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnsiSelectGraphicRendition {
    first: SGRParameter,
    second: Option<SGRParameter>,
}

impl AnsiSelectGraphicRendition {
    /// A sequence with a single parameter.
    pub fn single(parameter: SGRParameter) -> Self {
        Self {
            first: parameter,
            second: None,
        }
    }

    /// A sequence with two parameters, applied in order.
    pub fn pair(first: SGRParameter, second: SGRParameter) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// The `ESC[0m` reset sequence.
    pub fn reset() -> Self {
        Self::single(SGRParameter::Reset)
    }

    /// The parameters of this sequence in order.
    pub fn parameters(&self) -> impl Iterator<Item = SGRParameter> + use<> {
        std::iter::once(self.first).chain(self.second)
    }

    /// Returns the encoded byte length of this sequence.
    pub fn len(&self) -> usize {
        let digits = |parameter: SGRParameter| match parameter.to_u8() {
            0..=9 => 1,
            10..=99 => 2,
            _ => 3,
        };
        3 + self
            .parameters()
            .map(digits)
            .sum::<usize>()
            + usize::from(self.second.is_some())
    }

    /// Encode this sequence to a `BufMut` buffer, returning the number of bytes written.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> usize {
        dst.put_slice(CSI);
        let mut written = CSI.len() + put_decimal(dst, u16::from(self.first.to_u8()));
        if let Some(second) = self.second {
            dst.put_u8(b';');
            written += 1 + put_decimal(dst, u16::from(second.to_u8()));
        }
        dst.put_u8(b'm');
        written + 1
    }

    /// Write this sequence to a `std::io::Write` writer.
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> AnsiResult<usize> {
        let mut buffer = Vec::with_capacity(self.len());
        let written = self.encode(&mut buffer);
        writer.write_all(&buffer)?;
        Ok(written)
    }
}

impl std::fmt::Display for AnsiSelectGraphicRendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.second {
            Some(second) => write!(f, "\x1b[{};{}m", self.first, second),
            None => write!(f, "\x1b[{}m", self.first),
        }
    }
}

impl From<Style> for AnsiSelectGraphicRendition {
    fn from(style: Style) -> Self {
        let parameter = match style {
            Style::Bold => SGRParameter::Intensity(Intensity::Bold),
            Style::Normal => SGRParameter::Intensity(Intensity::Normal),
            Style::Faint => SGRParameter::Faint,
            Style::Italic => SGRParameter::Italic,
            Style::Underline => SGRParameter::Underline,
            Style::Blink => SGRParameter::Blink,
            Style::Negative => SGRParameter::ReverseVideo,
            Style::Strikethrough => SGRParameter::Strikethrough,
            Style::NoStyle => SGRParameter::Reset,
        };
        Self::single(parameter)
    }
}

impl From<ColorCommand> for AnsiSelectGraphicRendition {
    fn from(color: ColorCommand) -> Self {
        match color {
            ColorCommand::Foreground(color) => Self::single(SGRParameter::Foreground(color)),
            ColorCommand::IntensityForeground { intensity, color } => Self::pair(
                SGRParameter::Intensity(intensity),
                SGRParameter::Foreground(color.base()),
            ),
            ColorCommand::Background(color) => Self::single(SGRParameter::Background(color)),
        }
    }
}
