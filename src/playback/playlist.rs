// SPDX-License-Identifier: MPL-2.0
//! Playlist model for the demo player.
//!
//! A playlist is a flat list of items loaded from a TOML file. The host
//! application walks it with [`Playlist::advance`], which is what the
//! overlay's activation ultimately calls into.

use crate::config::DEFAULT_ITEM_DURATION_SECS;
use crate::error::{Error, Result};
use crate::playback::{NextUpCandidate, StreamType};
use serde::Deserialize;
use std::path::Path;

/// A single playlist entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlaylistItem {
    /// Display title of the item.
    pub title: String,

    /// Thumbnail URL (http(s) or a local path).
    #[serde(default)]
    pub image: Option<String>,

    /// Duration in seconds. Ignored for live streams.
    #[serde(default = "default_duration")]
    pub duration_secs: f64,

    /// Stream type label ("VOD", "LIVE", "DVR"). Defaults to VOD.
    #[serde(default)]
    pub stream_type: Option<String>,

    /// Whether the overlay should time its own display for the item that
    /// follows this one. Defaults to true.
    #[serde(default = "default_show_next_up")]
    pub show_next_up: bool,
}

fn default_duration() -> f64 {
    DEFAULT_ITEM_DURATION_SECS
}

fn default_show_next_up() -> bool {
    true
}

impl PlaylistItem {
    /// Parsed stream type of this item.
    #[must_use]
    pub fn stream_type(&self) -> StreamType {
        self.stream_type
            .as_deref()
            .map(StreamType::from_label)
            .unwrap_or_default()
    }

    /// The candidate this item forms when it is the upcoming one.
    #[must_use]
    pub fn as_candidate(&self) -> NextUpCandidate {
        NextUpCandidate {
            title: Some(self.title.clone()),
            image: self.image.clone(),
            show_next_up: self.show_next_up,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    item: Vec<PlaylistItem>,
}

/// An ordered list of playlist items with a cursor on the current one.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
    index: usize,
}

impl Playlist {
    /// Builds a playlist from items. Errors when the list is empty.
    pub fn new(items: Vec<PlaylistItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::Playlist("playlist contains no items".to_string()));
        }
        Ok(Self { items, index: 0 })
    }

    /// Loads a playlist from a TOML file with `[[item]]` tables.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: PlaylistFile =
            toml::from_str(&content).map_err(|e| Error::Playlist(e.to_string()))?;
        Self::new(file.item)
    }

    /// The item currently playing.
    #[must_use]
    pub fn current(&self) -> &PlaylistItem {
        &self.items[self.index]
    }

    /// The item after the current one, if any.
    #[must_use]
    pub fn upcoming(&self) -> Option<&PlaylistItem> {
        self.items.get(self.index + 1)
    }

    /// Moves the cursor to the next item. Returns the new current item,
    /// or `None` when the playlist is exhausted.
    pub fn advance(&mut self) -> Option<&PlaylistItem> {
        if self.index + 1 < self.items.len() {
            self.index += 1;
            Some(&self.items[self.index])
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<PlaylistItem> {
        (0..n)
            .map(|i| PlaylistItem {
                title: format!("Item {}", i + 1),
                image: None,
                duration_secs: 30.0,
                stream_type: None,
                show_next_up: true,
            })
            .collect()
    }

    #[test]
    fn empty_playlist_is_rejected() {
        assert!(matches!(Playlist::new(vec![]), Err(Error::Playlist(_))));
    }

    #[test]
    fn advance_walks_items_in_order() {
        let mut playlist = Playlist::new(items(3)).unwrap();
        assert_eq!(playlist.current().title, "Item 1");
        assert_eq!(playlist.advance().unwrap().title, "Item 2");
        assert_eq!(playlist.advance().unwrap().title, "Item 3");
        assert!(playlist.advance().is_none());
        // Cursor stays on the last item once exhausted
        assert_eq!(playlist.current().title, "Item 3");
    }

    #[test]
    fn upcoming_is_none_on_last_item() {
        let mut playlist = Playlist::new(items(2)).unwrap();
        assert_eq!(playlist.upcoming().unwrap().title, "Item 2");
        playlist.advance();
        assert!(playlist.upcoming().is_none());
    }

    #[test]
    fn parses_toml_item_tables() {
        let toml_src = r#"
[[item]]
title = "Pilot"
image = "https://cdn.example/pilot.jpg"
duration_secs = 90.0

[[item]]
title = "Episode 2"
stream_type = "LIVE"
show_next_up = false
"#;
        let file: PlaylistFile = toml::from_str(toml_src).expect("parse playlist");
        let playlist = Playlist::new(file.item).expect("non-empty");

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.current().title, "Pilot");
        assert_eq!(playlist.current().duration_secs, 90.0);

        let second = playlist.upcoming().expect("has upcoming");
        assert_eq!(second.stream_type(), StreamType::Live);
        assert!(!second.show_next_up);
        // Omitted duration falls back to the default
        assert_eq!(second.duration_secs, DEFAULT_ITEM_DURATION_SECS);
    }

    #[test]
    fn as_candidate_carries_title_image_and_flag() {
        let item = PlaylistItem {
            title: "Episode 2".to_string(),
            image: Some("thumb.png".to_string()),
            duration_secs: 30.0,
            stream_type: None,
            show_next_up: false,
        };
        let candidate = item.as_candidate();
        assert_eq!(candidate.title.as_deref(), Some("Episode 2"));
        assert_eq!(candidate.image.as_deref(), Some("thumb.png"));
        assert!(!candidate.show_next_up);
        assert!(candidate.has_content());
    }
}
