//! The search options record and the max-results lookup table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SearchOptions` is the message shape exchanged with the browser action
//! and stored by it. Field names and the `0`-means-unlimited convention are
//! part of that contract and must not change.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_RESULTS_STEPS, MAX_SLIDER_POSITION, UNLIMITED_GLYPH, UNLIMITED_MAX_RESULTS};
use crate::error::OptionsError;

/// User-adjustable search options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Interpret the search input as a regular expression.
    pub find_by_regex: bool,
    /// Case-sensitive matching.
    pub match_case: bool,
    /// Keep highlights after the search is dismissed.
    pub persistent_highlights: bool,
    /// Result cap; [`UNLIMITED_MAX_RESULTS`] means no cap.
    pub max_results: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            find_by_regex: true,
            match_case: true,
            persistent_highlights: false,
            max_results: UNLIMITED_MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    /// Whether the result count is uncapped.
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.max_results == UNLIMITED_MAX_RESULTS
    }

    /// The result cap, or `None` when unlimited.
    #[must_use]
    pub fn result_limit(&self) -> Option<u32> {
        if self.is_unlimited() { None } else { Some(self.max_results) }
    }

    /// Readout text for this record's `max_results`.
    #[must_use]
    pub fn max_results_label(&self) -> String {
        max_results_label(self.max_results)
    }
}

/// Value at a slider position. Positions past the end clamp to the last
/// (unlimited) entry.
#[must_use]
pub fn max_results_at(position: usize) -> u32 {
    MAX_RESULTS_STEPS[position.min(MAX_SLIDER_POSITION)]
}

/// Slider position of a `max_results` value.
///
/// # Errors
///
/// Returns [`OptionsError::InvalidOptionValue`] when `max_results` is not one
/// of [`MAX_RESULTS_STEPS`].
pub fn slider_position(max_results: u32) -> Result<usize, OptionsError> {
    MAX_RESULTS_STEPS
        .iter()
        .position(|&step| step == max_results)
        .ok_or(OptionsError::InvalidOptionValue { field: "max_results", value: max_results })
}

/// Readout text for a `max_results` value: `∞` for the sentinel, the decimal
/// number otherwise.
#[must_use]
pub fn max_results_label(max_results: u32) -> String {
    if max_results == UNLIMITED_MAX_RESULTS {
        UNLIMITED_GLYPH.to_owned()
    } else {
        max_results.to_string()
    }
}
