// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`nextup`] - The "next up" overlay sub-component (state machine + card view)
//! - [`styles`] - Centralized styling (buttons, overlay containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod nextup;
pub mod styles;
