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

//! ANSI rendering for `%` markup: an [`AnsiSink`] that turns sink calls into escape
//! sequences, and a [`MarkupCodec`] for tokio framed writers.

pub mod ansi;
mod codec;
mod result;
mod sink;
mod style;

pub use self::ansi::{AnsiControlSequenceIntroducer, EraseInDisplayMode, EraseInLineMode};
pub use self::codec::MarkupCodec;
pub use self::result::{AnsiError, AnsiResult};
pub use self::sink::AnsiSink;
pub use self::style::{AnsiSelectGraphicRendition, SGRParameter};
