// SPDX-License-Identifier: MPL-2.0
//! Media helpers for the overlay: thumbnail fetching and decoding.

pub mod thumbnail;
