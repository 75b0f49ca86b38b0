// SPDX-License-Identifier: MPL-2.0
//! `iced_nextup` is a "next up" overlay component for video players built
//! with the Iced GUI framework.
//!
//! The core of the crate is [`ui::nextup`], an Elm-style sub-component that
//! decides when the overlay should show or hide based on playback telemetry
//! (candidate, duration, position, stream type, media state). The rest is
//! the supporting cast: localized strings with Fluent, thumbnail loading,
//! TOML configuration, and a demo player that exercises the overlay against
//! a simulated playback clock.

#![doc(html_root_url = "https://docs.rs/iced_nextup/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod paths;
pub mod playback;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
