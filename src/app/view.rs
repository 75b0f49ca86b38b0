// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo player.
//!
//! Renders a mock player surface (title, transport, clock) with the
//! "next up" card stacked over its bottom-right corner while visible.

use super::{App, Message};
use crate::playback::{MediaState, StreamType};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::nextup;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(player_surface(app));

    if app.overlay().is_visible() {
        let ctx = nextup::view::ViewContext { i18n: &app.i18n };
        let card = nextup::view::view(app.overlay(), &ctx).map(Message::NextUp);
        layers = layers.push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG),
        );
    }

    layers.into()
}

fn player_surface(app: &App) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if let Some(warning) = &app.startup_warning {
        let text = if warning.contains(' ') {
            warning.clone()
        } else {
            // Warnings arriving as message keys get localized here
            app.i18n.tr(warning)
        };
        column = column.push(
            Container::new(Text::new(text).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    match &app.playlist {
        Some(playlist) => {
            column = column.push(
                Text::new(playlist.current().title.clone()).size(typography::TITLE_SM),
            );

            let mut status_row = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center);
            if app.stream_type == StreamType::Live {
                status_row = status_row.push(
                    Container::new(Text::new(app.i18n.tr("playback-live")).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::overlay::live_badge),
                );
            }
            status_row = status_row.push(Text::new(status_label(app)).size(typography::BODY));
            column = column.push(status_row);

            column = column.push(Text::new(clock_label(app)).size(typography::BODY));

            let transport_key = if app.media_state == MediaState::Playing {
                "transport-pause"
            } else {
                "transport-play"
            };
            column = column.push(
                button(Text::new(app.i18n.tr(transport_key)).size(typography::BODY))
                    .on_press(Message::TogglePlayback)
                    .padding([spacing::XXS, spacing::MD]),
            );
        }
        None => {
            column = column.push(
                Text::new(app.i18n.tr("playlist-empty")).size(typography::TITLE_SM),
            );
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn status_label(app: &App) -> String {
    let key = match app.media_state {
        MediaState::Playing => "playback-playing",
        MediaState::Paused | MediaState::Idle | MediaState::Buffering => "playback-paused",
        MediaState::Complete => "playback-complete",
    };
    app.i18n.tr(key)
}

fn clock_label(app: &App) -> String {
    if app.stream_type.is_vod() {
        format!(
            "{} / {}",
            format_time(app.position),
            format_time(app.duration)
        )
    } else {
        format_time(app.position)
    }
}

/// Formats seconds as `m:ss` (or `h:mm:ss` past an hour).
fn format_time(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
