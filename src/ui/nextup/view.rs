// SPDX-License-Identifier: MPL-2.0
//! View rendering for the "next up" overlay card.
//!
//! The card is purely state-driven: the host only stacks it over the player
//! surface while [`State::is_visible`](super::State::is_visible) holds. Until
//! the deferred content bind lands, the card renders header-only.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{Element, Length};

/// Context required to render the overlay card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the "next up" card for the given state.
pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Text::new(ctx.i18n.tr("nextup-header")).size(typography::CAPTION);

    let mut text_column = Column::new().spacing(spacing::XXS).push(header);
    if let Some(content) = state.content() {
        if !content.title.is_empty() {
            text_column =
                text_column.push(Text::new(content.title.as_str()).size(typography::BODY));
        }
    }

    let mut body_row = Row::new().spacing(spacing::SM);
    if let Some(thumbnail) = state.content().and_then(|c| c.thumbnail.as_ref()) {
        body_row = body_row.push(
            Image::new(thumbnail.clone())
                .width(Length::Fixed(sizing::NEXTUP_THUMB_WIDTH))
                .height(Length::Fixed(sizing::NEXTUP_THUMB_HEIGHT)),
        );
    }
    body_row = body_row.push(text_column);

    let body = button(body_row)
        .on_press(Message::Activated)
        .style(styles::button::card_body)
        .padding(spacing::XS)
        .width(Length::Fill);

    let close = button(Text::new("\u{00D7}").size(typography::BODY))
        .on_press(Message::CloseRequested)
        .style(styles::button::close)
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON));

    let card_row = Row::new()
        .spacing(spacing::XXS)
        .push(body)
        .push(close);

    Container::new(card_row)
        .width(Length::Fixed(sizing::NEXTUP_CARD_WIDTH))
        .padding(spacing::XS)
        .style(styles::overlay::nextup_card(state.is_sticky()))
        .into()
}
