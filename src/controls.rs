//! Control handles the pane reads from and writes to.
//!
//! DESIGN
//! ======
//! The pane never touches the DOM directly. Each form control is reached
//! through a small trait, and [`PaneBindings`] maps the logical option names
//! to those handles. The browser build implements the traits over web-sys
//! elements (see `dom`); tests implement them over `Cell`s.
//!
//! All methods take `&self`: DOM handles are shared references with interior
//! state, and the pane runs on a single UI thread.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::rc::Rc;

use crate::consts::{DISPLAY_HIDDEN, DISPLAY_SHOWN};

/// Callback invoked when a control reports a user change.
pub type ChangeHandler = Rc<dyn Fn()>;

/// A control that reports user edits.
pub trait ChangeSource {
    /// Register a handler for user-driven changes (`change` for checkboxes,
    /// `input` for the slider).
    fn on_change(&self, handler: ChangeHandler);
}

/// A checkbox-style boolean control.
pub trait Toggle: ChangeSource {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
}

/// A stepped range control whose position indexes the max-results table.
pub trait Slider: ChangeSource {
    fn position(&self) -> usize;
    fn set_position(&self, position: usize);
}

/// A text readout next to the slider.
pub trait Readout {
    fn set_text(&self, text: &str);
}

/// Presentation state of the panel container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelDisplay {
    /// No display state was ever written (first load).
    #[default]
    Unset,
    Shown,
    Hidden,
}

impl PanelDisplay {
    /// Whether the panel counts as visible. `Unset` counts as hidden.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Shown
    }

    /// Inline CSS `display` value for this state; `None` clears the property.
    #[must_use]
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Shown => Some(DISPLAY_SHOWN),
            Self::Hidden => Some(DISPLAY_HIDDEN),
        }
    }
}

/// Classify an inline CSS `display` value. An empty value was never written;
/// anything other than `none` counts as shown.
#[must_use]
pub fn panel_display(css_value: &str) -> PanelDisplay {
    match css_value.trim() {
        "" => PanelDisplay::Unset,
        DISPLAY_HIDDEN => PanelDisplay::Hidden,
        _ => PanelDisplay::Shown,
    }
}

/// The panel container whose visibility `show`/`toggle` control.
pub trait Panel {
    fn display(&self) -> PanelDisplay;
    fn set_display(&self, display: PanelDisplay);
}

/// Logical field name to control handle mapping, injected into the pane.
#[derive(Clone)]
pub struct PaneBindings {
    pub panel: Rc<dyn Panel>,
    pub find_by_regex: Rc<dyn Toggle>,
    pub match_case: Rc<dyn Toggle>,
    pub persistent_highlights: Rc<dyn Toggle>,
    pub max_results: Rc<dyn Slider>,
    pub max_results_label: Rc<dyn Readout>,
}
