// SPDX-License-Identifier: MPL-2.0
//! "Next up" overlay sub-component.
//!
//! Owns the visibility decision for the prompt that appears near the end of
//! a video and nudges the viewer toward the upcoming playlist item. The
//! component consumes playback telemetry as messages (candidate, duration,
//! position, stream type, media state) and reports side effects the host
//! must run (deferred content bind, thumbnail load, playlist advance).
//!
//! Automatic timing only applies to VOD streams and only while the sticky
//! flag is unset: once the viewer dismisses the prompt, or the host claims
//! the countdown, it stays hidden until a new candidate re-arms it.

pub mod view;

use crate::config::{DEFAULT_BIND_DELAY_MS, DEFAULT_NEXTUP_OFFSET_SECS};
use crate::playback::{MediaState, NextUpCandidate, StreamType};
use iced::widget::image::Handle as ImageHandle;
use std::time::Duration;

/// Content bound to the overlay card after the bind deferral elapses.
#[derive(Debug, Clone)]
pub struct Content {
    /// Title of the upcoming item.
    pub title: String,
    /// Decoded thumbnail, once its fire-and-forget load finishes.
    pub thumbnail: Option<ImageHandle>,
}

/// "Next up" overlay state.
#[derive(Debug, Clone)]
pub struct State {
    /// Whether a presentable candidate exists. Nothing is ever shown
    /// while disabled.
    enabled: bool,
    /// Tri-state sticky flag: `None` = automatic timing armed,
    /// `Some(true)` = pinned open by the auto-show, `Some(false)` = dismissed
    /// or externally controlled.
    sticky: Option<bool>,
    /// Whether the overlay is currently shown.
    visible: bool,
    /// Resolved auto-show position in seconds, once the duration is known.
    offset: Option<f64>,
    /// The current candidate, if any.
    candidate: Option<NextUpCandidate>,
    /// Bound card content, present after a `ContentBindDue` for the
    /// current generation.
    content: Option<Content>,
    /// Generation counter for deferred work. Incremented on every candidate
    /// change so stale binds and thumbnail loads are dropped.
    generation: u64,
    /// Configured offset: negative = seconds before the end, non-negative =
    /// absolute seconds from the start.
    offset_config: f64,
    /// Deferral before binding content for a new candidate.
    bind_delay: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            DEFAULT_NEXTUP_OFFSET_SECS,
            Duration::from_millis(DEFAULT_BIND_DELAY_MS),
        )
    }
}

/// Messages for the "next up" sub-component. The telemetry variants carry
/// most-recent-value semantics: each one supersedes the previous value of
/// the same kind.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new upcoming item became known (or was cleared).
    CandidateChanged(Option<NextUpCandidate>),
    /// The duration of the current item changed.
    DurationChanged(f64),
    /// The playback position advanced or the viewer seeked.
    PositionChanged(f64),
    /// The stream type of the current item changed.
    StreamTypeChanged(StreamType),
    /// The coarse media state changed.
    MediaStateChanged(MediaState),
    /// The content bind deferral elapsed for the given generation.
    ContentBindDue(u64),
    /// A thumbnail load finished for the given generation.
    ThumbnailLoaded {
        generation: u64,
        handle: ImageHandle,
    },
    /// The viewer clicked the close button.
    CloseRequested,
    /// The viewer clicked the overlay body.
    Activated,
}

/// Effects produced by overlay transitions for the host to run.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed. Hosts can mirror this on the player chrome
    /// (e.g. dim the controls while the prompt is up).
    VisibilityChanged(bool),
    /// Deliver `ContentBindDue(generation)` after `delay`.
    ScheduleContentBind { generation: u64, delay: Duration },
    /// Start a fire-and-forget thumbnail load; deliver `ThumbnailLoaded`
    /// on success, drop the result on failure.
    LoadThumbnail { generation: u64, url: String },
    /// The viewer asked to advance to the upcoming item.
    AdvanceRequested,
}

impl State {
    /// Creates a new overlay state from a configured offset and bind delay.
    #[must_use]
    pub fn new(offset_config: f64, bind_delay: Duration) -> Self {
        Self {
            enabled: false,
            sticky: None,
            visible: false,
            offset: None,
            candidate: None,
            content: None,
            generation: 0,
            offset_config,
            bind_delay,
        }
    }

    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::CandidateChanged(candidate) => self.on_candidate(candidate),
            Message::DurationChanged(duration) => {
                if duration.is_finite() && duration > 0.0 {
                    self.offset = Some(resolve_offset(self.offset_config, duration));
                }
                Effect::None
            }
            Message::PositionChanged(position) => {
                if !self.enabled || self.sticky == Some(false) {
                    return Effect::None;
                }
                let crossed = self.offset.is_some_and(|offset| position >= offset);
                if crossed && self.sticky.is_none() {
                    self.sticky = Some(true);
                    return self.toggle(true);
                }
                // A dismissal is final for the current candidate; only a new
                // candidate re-arms the automatic timing.
                Effect::None
            }
            Message::StreamTypeChanged(stream_type) => {
                if stream_type.is_vod() {
                    return Effect::None;
                }
                self.sticky = Some(false);
                self.toggle(false)
            }
            Message::MediaStateChanged(state) => {
                if state.is_complete() {
                    self.toggle(false)
                } else {
                    Effect::None
                }
            }
            Message::ContentBindDue(generation) => self.on_bind_due(generation),
            Message::ThumbnailLoaded { generation, handle } => {
                if generation == self.generation {
                    if let Some(content) = &mut self.content {
                        content.thumbnail = Some(handle);
                    }
                }
                Effect::None
            }
            Message::CloseRequested => {
                self.sticky = Some(false);
                self.toggle(false)
            }
            Message::Activated => {
                self.reset();
                Effect::AdvanceRequested
            }
        }
    }

    fn on_candidate(&mut self, candidate: Option<NextUpCandidate>) -> Effect {
        self.reset();
        self.candidate = None;
        self.content = None;
        self.enabled = false;
        // Supersede any pending bind or thumbnail load for the old candidate
        self.generation = self.generation.wrapping_add(1);

        let Some(candidate) = candidate else {
            return Effect::None;
        };

        self.enabled = candidate.has_content();
        if !self.enabled {
            return Effect::None;
        }

        if !candidate.show_next_up {
            // The host owns the countdown for this candidate
            self.sticky = Some(false);
        }

        self.candidate = Some(candidate);
        Effect::ScheduleContentBind {
            generation: self.generation,
            delay: self.bind_delay,
        }
    }

    fn on_bind_due(&mut self, generation: u64) -> Effect {
        if generation != self.generation {
            return Effect::None;
        }
        let Some(candidate) = &self.candidate else {
            return Effect::None;
        };

        self.content = Some(Content {
            title: candidate.display_title().to_string(),
            thumbnail: None,
        });

        match candidate.image.as_deref() {
            Some(url) if !url.is_empty() => Effect::LoadThumbnail {
                generation,
                url: url.to_string(),
            },
            _ => Effect::None,
        }
    }

    /// Applies the visible state. A no-op while no presentable candidate
    /// exists or when the visibility would not change.
    fn toggle(&mut self, show: bool) -> Effect {
        if !self.enabled || self.visible == show {
            return Effect::None;
        }
        self.visible = show;
        Effect::VisibilityChanged(show)
    }

    /// Returns the overlay to its initial hidden, un-pinned state.
    fn reset(&mut self) {
        self.sticky = None;
        let _ = self.toggle(false);
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a presentable candidate exists.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the overlay is pinned open by the automatic timing.
    /// Drives the "sticky" visual modifier.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky == Some(true)
    }

    /// The sticky tri-state: `None` = armed, `Some(true)` = pinned,
    /// `Some(false)` = dismissed or externally controlled.
    #[must_use]
    pub fn sticky(&self) -> Option<bool> {
        self.sticky
    }

    /// Resolved auto-show position, once a duration arrived.
    #[must_use]
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Bound card content, if the bind deferral already elapsed.
    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Current deferred-work generation. Effects carry this token so stale
    /// completions can be recognized.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Resolves the configured offset against a known duration.
///
/// Negative values count from the end of playback and clamp at zero so a
/// short item still arms at its start rather than at a negative position.
#[must_use]
pub fn resolve_offset(configured: f64, duration: f64) -> f64 {
    if configured < 0.0 {
        (duration + configured).max(0.0)
    } else {
        configured
    }
}
