// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Next Up**: Overlay offset and content bind deferral
//! - **Playback**: Simulated playback clock settings

// ==========================================================================
// Next Up Defaults
// ==========================================================================

/// Default "next up" offset in seconds. Negative values are interpreted as
/// seconds before the end of playback, non-negative values as absolute
/// seconds from the start.
pub const DEFAULT_NEXTUP_OFFSET_SECS: f64 = -10.0;

/// Minimum configurable offset magnitude in seconds.
pub const MIN_NEXTUP_OFFSET_SECS: f64 = -3600.0;

/// Maximum configurable offset in seconds.
pub const MAX_NEXTUP_OFFSET_SECS: f64 = 86_400.0;

/// Default deferral before binding overlay content, in milliseconds.
///
/// Gives the previous item's hide animation time to finish before the
/// thumbnail and title of the new candidate are swapped in.
pub const DEFAULT_BIND_DELAY_MS: u64 = 500;

/// Maximum configurable content bind deferral in milliseconds.
pub const MAX_BIND_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default interval between simulated playback clock ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

/// Default item duration in seconds when a playlist entry omits one.
pub const DEFAULT_ITEM_DURATION_SECS: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_is_ten_seconds_before_end() {
        assert_eq!(DEFAULT_NEXTUP_OFFSET_SECS, -10.0);
    }

    #[test]
    fn offset_bounds_bracket_the_default() {
        assert!(DEFAULT_NEXTUP_OFFSET_SECS >= MIN_NEXTUP_OFFSET_SECS);
        assert!(DEFAULT_NEXTUP_OFFSET_SECS <= MAX_NEXTUP_OFFSET_SECS);
    }

    #[test]
    fn bind_delay_default_within_bounds() {
        assert!(DEFAULT_BIND_DELAY_MS <= MAX_BIND_DELAY_MS);
    }
}
