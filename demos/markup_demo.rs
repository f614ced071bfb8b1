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

//! # Markup Demo
//!
//! Renders a few lines of `%` markup to stdout through a `FramedWrite` using
//! `MarkupCodec`. The color mode is picked from `TERM`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example markup_demo
//! TERM=linux cargo run --example markup_demo
//! RUST_LOG=termark_markup=trace cargo run --example markup_demo
//! ```

use futures::SinkExt;
use termark_ansi::MarkupCodec;
use termark_markup::{ColorMode, ErrorPolicy, MarkupConfig};
use tokio_util::codec::FramedWrite;
use tracing::{info, warn};

const LINES: &[&str] = &[
    "%r%%b%Termark%r% markup demo%lf%",
    "%f9%bright red%r% %f1%red%r% %b4%%f15%white on blue%r%%lf%",
    "%i%italic%r% %u%underline%r% %s%strikethrough%r% %f%faint%r%%lf%",
    "100%% plain text stays plain%lf%",
    "%f42%an unknown color index is skipped, the text around it is kept%r%%lf%",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let color_mode = ColorMode::detect_from_env();
    let config = MarkupConfig::default()
        .with_color_mode(color_mode)
        .with_error_policy(ErrorPolicy::Skip);
    info!(?color_mode, "Rendering markup");

    let mut output = FramedWrite::new(tokio::io::stdout(), MarkupCodec::new(config));
    for line in LINES {
        if let Err(error) = output.send(*line).await {
            warn!(%error, line, "Failed to render line");
        }
    }
    SinkExt::<&str>::flush(&mut output).await?;
    Ok(())
}
