// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo player.

use crate::ui::nextup;
use iced::widget::image::Handle as ImageHandle;
use std::time::Instant;

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// UI language override (`--lang`).
    pub lang: Option<String>,
    /// Playlist file to load.
    pub playlist_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward the
/// overlay sub-component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Messages for the "next up" overlay.
    NextUp(nextup::Message),
    /// Simulated playback clock tick.
    Tick(Instant),
    /// Play/pause toggle from the transport button.
    TogglePlayback,
    /// A fire-and-forget thumbnail load finished. `handle` is `None` on
    /// failure, which is silently dropped.
    ThumbnailFetched {
        generation: u64,
        handle: Option<ImageHandle>,
    },
}
