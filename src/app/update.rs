// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo player.
//!
//! Routes playback telemetry into the overlay sub-component and executes the
//! effects it reports: deferred content binds become sleep tasks, thumbnail
//! loads become fire-and-forget fetch tasks, and activation advances the
//! playlist.

use super::{App, Message};
use crate::media::thumbnail;
use crate::playback::MediaState;
use crate::ui::nextup;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::NextUp(msg) => app.notify_overlay(msg),
        Message::Tick(_) => tick(app),
        Message::TogglePlayback => {
            app.media_state = match app.media_state {
                MediaState::Playing => MediaState::Paused,
                MediaState::Paused | MediaState::Idle => MediaState::Playing,
                other => other,
            };
            app.notify_overlay(nextup::Message::MediaStateChanged(app.media_state))
        }
        Message::ThumbnailFetched { generation, handle } => match handle {
            Some(handle) => {
                app.notify_overlay(nextup::Message::ThumbnailLoaded { generation, handle })
            }
            // Load failures are dropped without retry or user-visible error
            None => Task::none(),
        },
    }
}

/// Advances the simulated clock by one tick and routes the new position.
fn tick(app: &mut App) -> Task<Message> {
    if app.media_state != MediaState::Playing {
        return Task::none();
    }

    let step = app.tick_interval().as_secs_f64();
    app.position += step;

    // Live streams have no meaningful end; the position just keeps counting.
    if app.stream_type.is_vod() && app.duration > 0.0 && app.position >= app.duration {
        app.position = app.duration;
        return app.advance_playlist();
    }

    let position = app.position;
    app.notify_overlay(nextup::Message::PositionChanged(position))
}

/// Turns an overlay effect into the task (or playlist mutation) it asks for.
pub(super) fn run_effect(app: &mut App, effect: nextup::Effect) -> Task<Message> {
    match effect {
        nextup::Effect::None => Task::none(),
        // The view is state-driven; no extra work on visibility flips.
        nextup::Effect::VisibilityChanged(_) => Task::none(),
        nextup::Effect::ScheduleContentBind { generation, delay } => Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                generation
            },
            |generation| Message::NextUp(nextup::Message::ContentBindDue(generation)),
        ),
        nextup::Effect::LoadThumbnail { generation, url } => Task::perform(
            async move { thumbnail::load(&url).await.ok() },
            move |handle| Message::ThumbnailFetched { generation, handle },
        ),
        nextup::Effect::AdvanceRequested => app.advance_playlist(),
    }
}
