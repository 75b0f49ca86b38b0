// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the "next up" card and playback HUD elements.

use crate::ui::design_tokens::{
    opacity, palette,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

fn card_background() -> Color {
    Color {
        a: opacity::SURFACE,
        ..palette::GRAY_900
    }
}

fn card_border(sticky: bool) -> Color {
    if sticky {
        // Pinned card carries an accent border
        Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::PRIMARY_400
        }
    } else {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        }
    }
}

/// Style for the "next up" card container. The sticky variant marks a card
/// that pinned itself open through the automatic timing.
pub fn nextup_card(sticky: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(card_background())),
        text_color: Some(WHITE),
        border: Border {
            color: card_border(sticky),
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the playback HUD.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Style for the LIVE badge shown on live streams.
pub fn live_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::LIVE_500)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
