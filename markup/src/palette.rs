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

//! Sixteen color palettes mapping a markup color index to a [`ColorCommand`].
//!
//! Markup indices follow the usual terminal layout: `0-7` are the standard
//! colors and `8-15` their bright counterparts. How a bright foreground is
//! expressed depends on the [`ColorMode`](crate::ColorMode):
//!
//! | Index | Direct foreground | Intensity-bit foreground | Background      |
//! |-------|-------------------|--------------------------|-----------------|
//! | `0`   | `30` Black        | `22;30` Black            | `40` Black      |
//! | `7`   | `37` White        | `22;37` White            | `47` White      |
//! | `8`   | `90` BrightBlack  | `1;30` Black             | `100` BrightBlack |
//! | `15`  | `97` BrightWhite  | `1;37` White             | `107` BrightWhite |

use crate::token::Channel;
use crate::{ColorMode, MarkupError, MarkupResult};

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 16;

/// One of the sixteen basic terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Purple - Color #5 (FG `35`, BG `45`).
    Purple,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,

    /// Bright Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Purple - Color #13 (FG `95`, BG `105`).
    BrightPurple,
    /// Bright Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #15 (FG `97`, BG `107`).
    BrightWhite,
}

impl Color {
    /// All sixteen colors in index order.
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightPurple,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Position of this color in the sixteen color layout.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns `true` for the bright half of the layout (`8-15`).
    pub fn is_bright(&self) -> bool {
        self.index() >= 8
    }

    /// The standard color sharing this color's hue.
    ///
    /// ```
    /// use termark_markup::Color;
    ///
    /// assert_eq!(Color::BrightRed.base(), Color::Red);
    /// assert_eq!(Color::Red.base(), Color::Red);
    /// ```
    pub fn base(&self) -> Color {
        Color::ALL[usize::from(self.index() & 0x07)]
    }

    /// Offset of the hue within its group of eight, as used by the SGR color codes.
    pub fn offset(&self) -> u8 {
        self.index() & 0x07
    }
}

/// Text intensity used by the intensity-bit foreground encoding.
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Hash, Eq, Default)]
pub enum Intensity {
    /// Normal text intensity. SGR `22`.
    #[default]
    Normal,
    /// Bold or increased intensity. SGR `1`. Legacy terminals render the bright
    /// variant of the active foreground color.
    Bold,
}

impl Intensity {
    /// Converts the intensity to its SGR code.
    pub fn to_u8(&self) -> u8 {
        match self {
            Intensity::Normal => 22,
            Intensity::Bold => 1,
        }
    }
}

/// A resolved color selection, opaque to the markup core and rendered by the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCommand {
    /// Foreground color selected directly (`30-37`, `90-97`).
    Foreground(Color),
    /// Foreground selected as an intensity flag plus one of the eight standard colors.
    IntensityForeground {
        /// Bold for the bright half of the palette
        intensity: Intensity,
        /// Always one of the standard colors `Black` to `White`
        color: Color,
    },
    /// Background color (`40-47`, `100-107`).
    Background(Color),
}

#[derive(Clone, Copy)]
enum PaletteKind {
    Background,
    DirectForeground,
    IntensityForeground,
}

/// An immutable sixteen entry mapping from markup index to [`ColorCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    channel: Channel,
    entries: [ColorCommand; PALETTE_SIZE],
}

impl Palette {
    /// Background palette, shared by every color mode.
    pub const BACKGROUND: Palette = Palette::build(PaletteKind::Background);

    /// Foreground palette for terminals with direct bright color codes.
    pub const DIRECT_FOREGROUND: Palette = Palette::build(PaletteKind::DirectForeground);

    /// Foreground palette for terminals that express bright colors through bold.
    pub const INTENSITY_FOREGROUND: Palette = Palette::build(PaletteKind::IntensityForeground);

    const fn build(kind: PaletteKind) -> Palette {
        let mut entries = [ColorCommand::Background(Color::Black); PALETTE_SIZE];
        let mut i = 0;
        while i < PALETTE_SIZE {
            let color = Color::ALL[i];
            entries[i] = match kind {
                PaletteKind::Background => ColorCommand::Background(color),
                PaletteKind::DirectForeground => ColorCommand::Foreground(color),
                PaletteKind::IntensityForeground => ColorCommand::IntensityForeground {
                    intensity: if i >= 8 {
                        Intensity::Bold
                    } else {
                        Intensity::Normal
                    },
                    color: Color::ALL[i & 0x07],
                },
            };
            i += 1;
        }
        let channel = match kind {
            PaletteKind::Background => Channel::Background,
            PaletteKind::DirectForeground | PaletteKind::IntensityForeground => {
                Channel::Foreground
            }
        };
        Palette { channel, entries }
    }

    /// Which channel this palette selects.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Looks up a markup color index.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownColorIndex`] for any index above 15.
    pub fn resolve(&self, index: u8) -> MarkupResult<ColorCommand> {
        self.get(index).ok_or(MarkupError::UnknownColorIndex {
            channel: self.channel,
            index,
        })
    }

    /// The entry at `index`, if there is one.
    pub fn get(&self, index: u8) -> Option<ColorCommand> {
        self.entries.get(usize::from(index)).copied()
    }

    /// Iterates the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorCommand> {
        self.entries.iter()
    }
}

/// The background palette together with both foreground variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteSet {
    /// Used for every background selection
    pub background: Palette,
    /// Foreground used by [`ColorMode::Direct`]
    pub direct: Palette,
    /// Foreground used by [`ColorMode::IntensityBit`]
    pub intensity: Palette,
}

/// The standard palettes, built at compile time and shared by every dispatcher.
pub static STANDARD_PALETTES: PaletteSet = PaletteSet::standard();

impl PaletteSet {
    /// The standard palettes.
    pub const fn standard() -> PaletteSet {
        PaletteSet {
            background: Palette::BACKGROUND,
            direct: Palette::DIRECT_FOREGROUND,
            intensity: Palette::INTENSITY_FOREGROUND,
        }
    }

    /// Returns the palette a selection on `channel` resolves through under `mode`.
    pub fn palette(&self, mode: ColorMode, channel: Channel) -> &Palette {
        match (channel, mode) {
            (Channel::Background, _) => &self.background,
            (Channel::Foreground, ColorMode::Direct) => &self.direct,
            (Channel::Foreground, ColorMode::IntensityBit) => &self.intensity,
        }
    }

    /// Resolves `index` on `channel` under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownColorIndex`] for any index above 15, naming
    /// `channel` whichever palette is installed for it.
    pub fn resolve(
        &self,
        mode: ColorMode,
        channel: Channel,
        index: u8,
    ) -> MarkupResult<ColorCommand> {
        self.palette(mode, channel)
            .get(index)
            .ok_or(MarkupError::UnknownColorIndex { channel, index })
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_foreground_entries() {
        let palette = &STANDARD_PALETTES.direct;
        assert_eq!(palette.resolve(0), Ok(ColorCommand::Foreground(Color::Black)));
        assert_eq!(palette.resolve(1), Ok(ColorCommand::Foreground(Color::Red)));
        assert_eq!(palette.resolve(8), Ok(ColorCommand::Foreground(Color::BrightBlack)));
        assert_eq!(palette.resolve(15), Ok(ColorCommand::Foreground(Color::BrightWhite)));
    }

    #[test]
    fn test_intensity_foreground_entries() {
        let palette = &STANDARD_PALETTES.intensity;
        assert_eq!(
            palette.resolve(0),
            Ok(ColorCommand::IntensityForeground {
                intensity: Intensity::Normal,
                color: Color::Black
            })
        );
        assert_eq!(
            palette.resolve(9),
            Ok(ColorCommand::IntensityForeground {
                intensity: Intensity::Bold,
                color: Color::Red
            })
        );
        assert_eq!(
            palette.resolve(15),
            Ok(ColorCommand::IntensityForeground {
                intensity: Intensity::Bold,
                color: Color::White
            })
        );
    }

    #[test]
    fn test_intensity_variant_repeats_base_colors() {
        let palette = &STANDARD_PALETTES.intensity;
        for index in 0..8u8 {
            let low = palette.resolve(index).unwrap();
            let high = palette.resolve(index + 8).unwrap();
            match (low, high) {
                (
                    ColorCommand::IntensityForeground {
                        intensity: Intensity::Normal,
                        color: a,
                    },
                    ColorCommand::IntensityForeground {
                        intensity: Intensity::Bold,
                        color: b,
                    },
                ) => {
                    assert_eq!(a, b);
                    assert!(!a.is_bright());
                }
                other => panic!("Unexpected entries {:?}", other),
            }
        }
    }

    #[test]
    fn test_background_entries() {
        let palette = &STANDARD_PALETTES.background;
        assert_eq!(palette.channel(), Channel::Background);
        assert_eq!(palette.resolve(3), Ok(ColorCommand::Background(Color::Yellow)));
        assert_eq!(palette.resolve(12), Ok(ColorCommand::Background(Color::BrightBlue)));
    }

    #[test]
    fn test_every_palette_has_sixteen_entries() {
        for palette in [
            &STANDARD_PALETTES.background,
            &STANDARD_PALETTES.direct,
            &STANDARD_PALETTES.intensity,
        ] {
            assert_eq!(palette.iter().count(), PALETTE_SIZE);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for (mode, channel) in [
            (ColorMode::Direct, Channel::Foreground),
            (ColorMode::Direct, Channel::Background),
            (ColorMode::IntensityBit, Channel::Foreground),
            (ColorMode::IntensityBit, Channel::Background),
        ] {
            for index in [16u8, 20, 99, 255] {
                assert_eq!(
                    STANDARD_PALETTES.resolve(mode, channel, index),
                    Err(MarkupError::UnknownColorIndex { channel, index }),
                    "{mode:?} {channel}"
                );
            }
        }
    }

    #[test]
    fn test_error_names_requested_channel() {
        let mut palettes = PaletteSet::standard();
        palettes.background = palettes.direct.clone();
        assert_eq!(
            palettes.resolve(ColorMode::Direct, Channel::Background, 40),
            Err(MarkupError::UnknownColorIndex {
                channel: Channel::Background,
                index: 40
            })
        );
        assert_eq!(palettes.background.get(40), None);
    }

    #[test]
    fn test_palette_resolve_names_own_channel() {
        for index in [16u8, 20, 99, 255] {
            assert_eq!(
                STANDARD_PALETTES.intensity.resolve(index),
                Err(MarkupError::UnknownColorIndex {
                    channel: Channel::Foreground,
                    index
                })
            );
            assert_eq!(
                STANDARD_PALETTES.background.resolve(index),
                Err(MarkupError::UnknownColorIndex {
                    channel: Channel::Background,
                    index
                })
            );
        }
    }

    #[test]
    fn test_background_is_mode_independent() {
        for index in 0..16u8 {
            assert_eq!(
                STANDARD_PALETTES.resolve(ColorMode::Direct, Channel::Background, index),
                STANDARD_PALETTES.resolve(ColorMode::IntensityBit, Channel::Background, index),
            );
        }
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::BrightCyan.index(), 14);
        assert_eq!(Color::BrightCyan.base(), Color::Cyan);
        assert_eq!(Color::BrightCyan.offset(), 6);
        assert!(Color::BrightCyan.is_bright());
        assert!(!Color::Cyan.is_bright());
        assert_eq!(Intensity::Bold.to_u8(), 1);
        assert_eq!(Intensity::Normal.to_u8(), 22);
    }
}
