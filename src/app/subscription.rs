// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo player.
//!
//! The only subscription is the simulated playback clock, which runs while
//! the media state is `Playing`.

use super::{App, Message};
use crate::playback::MediaState;
use iced::{time, Subscription};

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    if app.media_state == MediaState::Playing {
        time::every(app.tick_interval()).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
