//! The options pane: control state to [`SearchOptions`] and back.
//!
//! DESIGN
//! ======
//! The control values are the state. `get_options` builds a fresh record
//! from them on every call and `apply_options` writes a record onto them;
//! the pane keeps no copy of its own. User edits on any of the four option
//! controls trigger a full read, and the record is forwarded to the
//! [`OptionsSink`] (the popup's browser action) within the same event turn.

#[cfg(test)]
#[path = "pane_test.rs"]
mod pane_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::controls::{ChangeHandler, PaneBindings, PanelDisplay};
use crate::error::OptionsError;
use crate::options::{SearchOptions, max_results_at, max_results_label, slider_position};

/// Receiver of user-driven option changes.
pub trait OptionsSink {
    /// Called once per user edit with the full current record.
    fn update_options(&self, options: &SearchOptions);
}

/// Settings panel bound to a set of controls and a change receiver.
pub struct OptionsPane {
    controls: Rc<PaneBindings>,
    sink: Rc<dyn OptionsSink>,
    listening: Cell<bool>,
}

impl OptionsPane {
    #[must_use]
    pub fn new(controls: PaneBindings, sink: Rc<dyn OptionsSink>) -> Self {
        Self { controls: Rc::new(controls), sink, listening: Cell::new(false) }
    }

    /// Register change listeners on the option controls.
    ///
    /// Only the first call registers; later calls are ignored so a control
    /// edit never notifies the sink twice.
    pub fn init(&self) {
        if self.listening.replace(true) {
            log::warn!("options pane: init called again; listeners already registered");
            return;
        }

        let handler = self.change_handler();
        self.controls.find_by_regex.on_change(Rc::clone(&handler));
        self.controls.match_case.on_change(Rc::clone(&handler));
        self.controls.persistent_highlights.on_change(Rc::clone(&handler));
        self.controls.max_results.on_change(handler);
        log::debug!("options pane: listeners registered");
    }

    /// Show the panel (`None` or `Some(true)`) or hide it (`Some(false)`).
    pub fn show(&self, visible: Option<bool>) {
        let display = if visible.unwrap_or(true) { PanelDisplay::Shown } else { PanelDisplay::Hidden };
        self.controls.panel.set_display(display);
    }

    /// Flip panel visibility. A panel that was never shown counts as hidden,
    /// so the first toggle reveals it.
    pub fn toggle(&self) {
        let visible = self.controls.panel.display().is_visible();
        self.show(Some(!visible));
    }

    /// Read the controls into a fresh record, refreshing the max-results
    /// readout on the way.
    #[must_use]
    pub fn get_options(&self) -> SearchOptions {
        read_options(&self.controls)
    }

    /// Write a record onto the controls.
    ///
    /// Programmatic writes do not notify the sink.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidOptionValue`] when `max_results` has no
    /// slider position. No control is modified in that case.
    pub fn apply_options(&self, options: &SearchOptions) -> Result<(), OptionsError> {
        let position = slider_position(options.max_results).inspect_err(|e| {
            log::warn!("options pane: rejected options record: {e}");
        })?;

        let controls = &self.controls;
        controls.find_by_regex.set_checked(options.find_by_regex);
        controls.match_case.set_checked(options.match_case);
        controls.persistent_highlights.set_checked(options.persistent_highlights);
        controls.max_results_label.set_text(&max_results_label(options.max_results));
        controls.max_results.set_position(position);

        log::debug!("options pane: applied {options:?}");
        Ok(())
    }

    fn change_handler(&self) -> ChangeHandler {
        let controls = Rc::clone(&self.controls);
        let sink = Rc::clone(&self.sink);
        Rc::new(move || {
            let options = read_options(&controls);
            sink.update_options(&options);
        })
    }
}

fn read_options(controls: &PaneBindings) -> SearchOptions {
    let max_results = max_results_at(controls.max_results.position());
    controls.max_results_label.set_text(&max_results_label(max_results));

    let options = SearchOptions {
        find_by_regex: controls.find_by_regex.is_checked(),
        match_case: controls.match_case.is_checked(),
        persistent_highlights: controls.persistent_highlights.is_checked(),
        max_results,
    };
    log::debug!("options pane: read {options:?}");
    options
}
