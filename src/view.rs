//! Markup for the options panel.
//!
//! Renders the controls with the ids [`crate::dom`] binds to, pre-filled
//! from an options record. The container's `display` style is left unset so
//! the panel starts collapsed and the first toggle reveals it.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use leptos::prelude::*;

use crate::config::ElementIds;
use crate::consts::MAX_SLIDER_POSITION;
use crate::options::{SearchOptions, max_results_at, max_results_label, slider_position};

/// Options panel markup.
///
/// A record whose `max_results` is outside the table renders the slider at
/// its unlimited end, and the readout follows the slider so the two agree.
/// Callers that must reject such records validate with
/// [`slider_position`] first.
#[component]
pub fn OptionsPaneMarkup(#[prop(optional)] ids: Option<ElementIds>, #[prop(optional)] initial: Option<SearchOptions>) -> impl IntoView {
    let ids = ids.unwrap_or_default();
    let options = initial.unwrap_or_default();
    let position = slider_position(options.max_results).unwrap_or(MAX_SLIDER_POSITION);
    let label = max_results_label(max_results_at(position));

    view! {
        <div id=ids.panel class="options-pane">
            <label class="options-pane__row">
                <input type="checkbox" id=ids.find_by_regex checked=options.find_by_regex/>
                "Regular expression"
            </label>
            <label class="options-pane__row">
                <input type="checkbox" id=ids.match_case checked=options.match_case/>
                "Match case"
            </label>
            <label class="options-pane__row">
                <input type="checkbox" id=ids.persistent_highlights checked=options.persistent_highlights/>
                "Persistent highlights"
            </label>
            <div class="options-pane__row options-pane__row--slider">
                <span class="options-pane__caption">"Max results"</span>
                <input
                    type="range"
                    id=ids.max_results
                    min="0"
                    max=MAX_SLIDER_POSITION.to_string()
                    step="1"
                    value=position.to_string()
                />
                <span id=ids.max_results_label class="options-pane__readout">{label}</span>
            </div>
        </div>
    }
}
