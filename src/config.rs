//! DOM element ids the pane binds to.
//!
//! The defaults match the popup's markup. A shell with different markup can
//! override any subset of them with a JSON object.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Element ids for the panel container and its controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub panel: String,
    pub find_by_regex: String,
    pub match_case: String,
    pub persistent_highlights: String,
    pub max_results: String,
    pub max_results_label: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            panel: "regex-options".to_owned(),
            find_by_regex: "regex-option-regex-disable-toggle".to_owned(),
            match_case: "regex-option-case-insensitive-toggle".to_owned(),
            persistent_highlights: "regex-option-persistent-highlights-toggle".to_owned(),
            max_results: "max-results-slider".to_owned(),
            max_results_label: "max-results-slider-value".to_owned(),
        }
    }
}

impl ElementIds {
    /// Parse ids from JSON. Missing keys keep their default; unknown keys
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Json`] for malformed input and
    /// [`OptionsError::InvalidConfig`] when the result fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let ids: Self = serde_json::from_str(raw)?;
        ids.validate()?;
        Ok(ids)
    }

    /// `(field, id)` pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("panel", self.panel.as_str()),
            ("find_by_regex", self.find_by_regex.as_str()),
            ("match_case", self.match_case.as_str()),
            ("persistent_highlights", self.persistent_highlights.as_str()),
            ("max_results", self.max_results.as_str()),
            ("max_results_label", self.max_results_label.as_str()),
        ]
    }

    /// Check that every id is non-empty and unique.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let mut seen = HashSet::new();
        for (field, id) in self.entries() {
            if id.trim().is_empty() {
                return Err(OptionsError::InvalidConfig(format!("`{field}` id is empty")));
            }
            if !seen.insert(id) {
                return Err(OptionsError::InvalidConfig(format!("`{field}` reuses id `{id}`")));
            }
        }
        Ok(())
    }
}
