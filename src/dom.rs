//! web-sys implementations of the control traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the popup's existing markup (see [`crate::view`]) to the pane.
//! Checkboxes report edits through `change`, the range input through
//! `input` so the readout follows the drag. Listener closures live for the
//! lifetime of the page and are leaked on registration.

use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, EventTarget, HtmlElement, HtmlInputElement};

use crate::config::ElementIds;
use crate::controls::{
    ChangeHandler, ChangeSource, PaneBindings, Panel, PanelDisplay, Readout, Slider, Toggle, panel_display,
};
use crate::error::OptionsError;

/// Resolve every pane element in `document`.
///
/// # Errors
///
/// Returns [`OptionsError::MissingElement`] when an id is absent and
/// [`OptionsError::WrongElementKind`] when an element has the wrong type.
pub fn bind_document(document: &Document, ids: &ElementIds) -> Result<PaneBindings, OptionsError> {
    ids.validate()?;
    Ok(PaneBindings {
        panel: Rc::new(DomPanel { element: element(document, &ids.panel, "HTML element")? }),
        find_by_regex: Rc::new(DomToggle { input: element(document, &ids.find_by_regex, "<input>")? }),
        match_case: Rc::new(DomToggle { input: element(document, &ids.match_case, "<input>")? }),
        persistent_highlights: Rc::new(DomToggle {
            input: element(document, &ids.persistent_highlights, "<input>")?,
        }),
        max_results: Rc::new(DomSlider { input: element(document, &ids.max_results, "<input>")? }),
        max_results_label: Rc::new(DomReadout {
            element: element(document, &ids.max_results_label, "HTML element")?,
        }),
    })
}

pub(crate) fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, OptionsError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| OptionsError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| OptionsError::WrongElementKind { id: id.to_owned(), expected })
}

fn listen(target: &EventTarget, event: &'static str, handler: ChangeHandler) {
    let callback = Closure::<dyn Fn()>::new(move || handler());
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("options pane: failed to listen for {event}: {e:?}");
    }
    callback.forget();
}

/// Checkbox input.
pub struct DomToggle {
    input: HtmlInputElement,
}

impl ChangeSource for DomToggle {
    fn on_change(&self, handler: ChangeHandler) {
        listen(&self.input, "change", handler);
    }
}

impl Toggle for DomToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }
}

/// Range input whose value is the slider position.
pub struct DomSlider {
    input: HtmlInputElement,
}

impl ChangeSource for DomSlider {
    fn on_change(&self, handler: ChangeHandler) {
        listen(&self.input, "input", handler);
    }
}

impl Slider for DomSlider {
    fn position(&self) -> usize {
        let raw = self.input.value();
        match raw.parse::<usize>() {
            Ok(position) => position,
            Err(e) => {
                log::warn!("options pane: slider value {raw:?} is not a position: {e}");
                0
            }
        }
    }

    fn set_position(&self, position: usize) {
        self.input.set_value(&position.to_string());
    }
}

/// Text readout element.
pub struct DomReadout {
    element: HtmlElement,
}

impl Readout for DomReadout {
    fn set_text(&self, text: &str) {
        self.element.set_inner_text(text);
    }
}

/// Panel container, shown and hidden through its inline `display` style.
pub struct DomPanel {
    element: HtmlElement,
}

impl Panel for DomPanel {
    fn display(&self) -> PanelDisplay {
        match self.element.style().get_property_value("display") {
            Ok(value) => panel_display(&value),
            Err(e) => {
                log::warn!("options pane: cannot read panel display: {e:?}");
                PanelDisplay::Unset
            }
        }
    }

    fn set_display(&self, display: PanelDisplay) {
        let style = self.element.style();
        let result = match display.css_value() {
            Some(value) => style.set_property("display", value),
            None => style.remove_property("display").map(drop),
        };
        if let Err(e) = result {
            log::warn!("options pane: cannot set panel display: {e:?}");
        }
    }
}
