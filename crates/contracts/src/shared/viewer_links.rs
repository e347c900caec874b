//! Navigation targets for a processed result.
//!
//! Both builders insert the identifier verbatim: no trimming, no percent
//! encoding. The id is whatever the server (or a `data-id` attribute) gave us.

use std::fmt::Display;

/// Custom URI scheme handled by the desktop viewer.
pub const UNITY_SCHEME: &str = "unity";

/// Internal result page: `/result/<id>/`
pub fn result_url(id: impl Display) -> String {
    format!("/result/{}/", id)
}

/// External viewer launch URI: `unity://open?id=<id>`
pub fn unity_url(id: impl Display) -> String {
    format!("{}://open?id={}", UNITY_SCHEME, id)
}
