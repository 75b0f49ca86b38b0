// SPDX-License-Identifier: MPL-2.0
//! Playback-side data model consumed by the "next up" overlay.
//!
//! These types mirror the change notifications a player model emits: the
//! stream type, the coarse media state, and the upcoming playlist item
//! (the "next up" candidate). The overlay controller in [`crate::ui::nextup`]
//! only ever sees these values, never the player itself.

pub mod playlist;

pub use playlist::{Playlist, PlaylistItem};

/// Stream type of the current media item.
///
/// The overlay's automatic timing only applies to on-demand streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamType {
    /// Video on demand - finite duration, seekable.
    #[default]
    Vod,
    /// Live stream - no meaningful end.
    Live,
    /// Live stream with a DVR window.
    Dvr,
}

impl StreamType {
    /// Parses a stream type label as reported by player backends.
    ///
    /// Unknown labels fall back to [`StreamType::Vod`], matching the
    /// permissive treatment of the other telemetry inputs.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "LIVE" => StreamType::Live,
            "DVR" => StreamType::Dvr,
            _ => StreamType::Vod,
        }
    }

    /// Whether automatic overlay timing applies to this stream type.
    #[must_use]
    pub fn is_vod(self) -> bool {
        matches!(self, StreamType::Vod)
    }
}

/// Coarse media playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    /// Nothing loaded.
    #[default]
    Idle,
    /// Loaded but waiting on data.
    Buffering,
    /// Actively playing.
    Playing,
    /// Paused by the user.
    Paused,
    /// Playback reached the end of the item.
    Complete,
}

impl MediaState {
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, MediaState::Complete)
    }
}

/// The upcoming playlist item, as pushed by the player model.
///
/// Both fields are optional: a candidate with neither a title nor an image
/// has nothing to present and leaves the overlay disabled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NextUpCandidate {
    /// Display title of the upcoming item.
    pub title: Option<String>,
    /// Thumbnail URL (http(s) or a local path).
    pub image: Option<String>,
    /// Whether the host wants the overlay to time its own display.
    /// When false, an external controller owns the countdown.
    pub show_next_up: bool,
}

impl NextUpCandidate {
    /// True when the candidate carries at least one presentable field.
    /// Empty strings count as absent.
    #[must_use]
    pub fn has_content(&self) -> bool {
        let has_title = self.title.as_deref().is_some_and(|t| !t.is_empty());
        let has_image = self.image.as_deref().is_some_and(|i| !i.is_empty());
        has_title || has_image
    }

    /// Title to display, empty when absent.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
