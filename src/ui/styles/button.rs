// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_200, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the overlay card body: an invisible click target that
/// highlights slightly on hover.
pub fn card_body(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.08,
        button::Status::Pressed => 0.12,
        _ => 0.0,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Style for the overlay close button.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let (background_alpha, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (opacity::OVERLAY_MEDIUM, WHITE),
        _ => (opacity::OVERLAY_SUBTLE, GRAY_200),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: background_alpha,
            ..BLACK
        })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
