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

//! Property tests for the lexer and dispatcher

use proptest::prelude::*;
use termark_markup::{
    Channel, ColorMode, Command, Dispatcher, Lexer, MarkupConfig, MarkupError, RecordingSink,
    STANDARD_PALETTES,
};

fn mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![Just(ColorMode::Direct), Just(ColorMode::IntensityBit)]
}

proptest! {
    #[test]
    fn plain_text_is_one_literal(text in "[^%]+") {
        let mut sink = RecordingSink::new();
        Dispatcher::default().parse(&text, &mut sink).unwrap();
        prop_assert_eq!(sink.into_commands(), vec![Command::Text(text.clone())]);
    }

    #[test]
    fn chunks_rejoin_to_input(input in "[a-z0-9%, ]{0,64}") {
        let rejoined: String = Lexer::new(&input).map(|chunk| chunk.as_str()).collect();
        prop_assert_eq!(rejoined, input);
    }

    #[test]
    fn chunks_alternate_and_are_never_empty(input in "[ab%]{0,64}") {
        let chunks: Vec<_> = Lexer::new(&input).collect();
        for chunk in &chunks {
            prop_assert!(!chunk.as_str().is_empty());
        }
        for pair in chunks.windows(2) {
            prop_assert_ne!(pair[0].is_delimiter(), pair[1].is_delimiter());
        }
    }

    #[test]
    fn one_call_per_content_chunk(input in "[bfilrsnu0-9x%]{0,48}") {
        let content = Lexer::new(&input).filter(|chunk| !chunk.is_delimiter()).count();
        let mut sink = RecordingSink::new();
        let config = MarkupConfig::lenient();
        let summary = Dispatcher::new(config).parse(&input, &mut sink).unwrap();
        prop_assert_eq!(summary.commands + summary.skipped.len(), content);
        prop_assert_eq!(sink.len(), summary.commands);
    }

    #[test]
    fn palette_resolution_is_total_in_range(mode in mode(), index in 0u8..16) {
        for channel in [Channel::Foreground, Channel::Background] {
            let first = STANDARD_PALETTES.resolve(mode, channel, index);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, STANDARD_PALETTES.resolve(mode, channel, index));
        }
    }

    #[test]
    fn palette_rejects_out_of_range(mode in mode(), index in 16u8..100) {
        let dispatcher = Dispatcher::new(MarkupConfig::default().with_color_mode(mode));
        for (prefix, channel) in [("f", Channel::Foreground), ("b", Channel::Background)] {
            let mut sink = RecordingSink::new();
            let result = dispatcher.parse(&format!("%{prefix}{index}%"), &mut sink);
            prop_assert_eq!(result, Err(MarkupError::UnknownColorIndex { channel, index }));
            prop_assert!(sink.is_empty());
        }
    }
}
