//! JavaScript entry points for the popup shell.
//!
//! The shell renders the panel with `mountOptionsPane(parentId, ...)` (or
//! ships the markup statically), constructs
//! `new OptionsPane(browserAction, elementIdsJson?)`, calls `init()`, and pushes
//! stored options in with `applyOptions(record)`. Records cross the boundary
//! as plain objects with the snake_case field names of [`SearchOptions`].
//! Failures are thrown as `Error`s whose `name` is the error code.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::ElementIds;
use crate::dom::{bind_document, element};
use crate::error::OptionsError;
use crate::options::{SearchOptions, slider_position};
use crate::pane::{OptionsPane, OptionsSink};
use crate::view::{OptionsPaneMarkup, OptionsPaneMarkupProps};

/// Install the panic hook and route `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("options pane: console logger already installed");
    }
}

/// Render the panel markup into the element with id `parent_id`.
///
/// `initial` is an options record (or `undefined` for defaults); its
/// `max_results` must be an allowed step. `element_ids` is the same JSON
/// override accepted by the `OptionsPane` constructor.
///
/// # Errors
///
/// Throws when the parent is missing, the ids are invalid, or `initial`
/// cannot be displayed.
#[wasm_bindgen(js_name = mountOptionsPane)]
pub fn mount_options_pane(parent_id: &str, element_ids: Option<String>, initial: JsValue) -> Result<(), JsValue> {
    mount(parent_id, element_ids.as_deref(), &initial).map_err(to_js_error)
}

fn mount(parent_id: &str, element_ids: Option<&str>, initial: &JsValue) -> Result<(), OptionsError> {
    let ids = parse_ids(element_ids)?;
    let initial = if initial.is_undefined() || initial.is_null() {
        SearchOptions::default()
    } else {
        options_from_js(initial)?
    };
    slider_position(initial.max_results)?;

    let parent: HtmlElement = element(&document()?, parent_id, "HTML element")?;
    let props = OptionsPaneMarkupProps::builder().ids(ids).initial(initial).build();
    leptos::mount::mount_to(parent, move || OptionsPaneMarkup(props)).forget();
    log::info!("options pane: markup mounted into #{parent_id}");
    Ok(())
}

/// The options pane as exposed to JavaScript.
#[wasm_bindgen(js_name = OptionsPane)]
pub struct OptionsPaneHandle {
    pane: OptionsPane,
}

#[wasm_bindgen(js_class = OptionsPane)]
impl OptionsPaneHandle {
    /// Bind the pane to the current document.
    ///
    /// `browser_action` must expose an `updateOptions(record)` method.
    /// `element_ids` optionally overrides element ids (JSON object).
    ///
    /// # Errors
    ///
    /// Throws when the collaborator, the id config or the markup is unusable.
    #[wasm_bindgen(constructor)]
    pub fn new(browser_action: JsValue, element_ids: Option<String>) -> Result<OptionsPaneHandle, JsValue> {
        Self::bind(browser_action, element_ids.as_deref()).map_err(to_js_error)
    }

    pub fn init(&self) {
        self.pane.init();
    }

    pub fn show(&self, visible: Option<bool>) {
        self.pane.show(visible);
    }

    pub fn toggle(&self) {
        self.pane.toggle();
    }

    /// # Errors
    ///
    /// Throws if the record cannot be converted to a JS object.
    #[wasm_bindgen(js_name = getOptions)]
    pub fn get_options(&self) -> Result<JsValue, JsValue> {
        options_to_js(&self.pane.get_options()).map_err(to_js_error)
    }

    /// # Errors
    ///
    /// Throws `E_JSON` for a malformed record and `E_INVALID_OPTION_VALUE`
    /// when `max_results` is not an allowed step.
    #[wasm_bindgen(js_name = applyOptions)]
    pub fn apply_options(&self, options: JsValue) -> Result<(), JsValue> {
        let options = options_from_js(&options).map_err(to_js_error)?;
        self.pane.apply_options(&options).map_err(to_js_error)
    }
}

impl OptionsPaneHandle {
    fn bind(browser_action: JsValue, element_ids: Option<&str>) -> Result<Self, OptionsError> {
        let ids = parse_ids(element_ids)?;
        let bindings = bind_document(&document()?, &ids)?;
        let sink = BrowserActionSink::new(browser_action)?;
        log::info!("options pane: bound to #{}", ids.panel);
        Ok(Self { pane: OptionsPane::new(bindings, Rc::new(sink)) })
    }
}

/// Forwards records to the browser action's `updateOptions`.
struct BrowserActionSink {
    target: JsValue,
    update: js_sys::Function,
}

impl BrowserActionSink {
    fn new(target: JsValue) -> Result<Self, OptionsError> {
        let update = js_sys::Reflect::get(&target, &JsValue::from_str("updateOptions"))
            .map_err(|e| bridge_error(&e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| OptionsError::Bridge("browser action has no updateOptions method".to_owned()))?;
        Ok(Self { target, update })
    }
}

impl OptionsSink for BrowserActionSink {
    fn update_options(&self, options: &SearchOptions) {
        let record = match options_to_js(options) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("options pane: cannot convert options: {e}");
                return;
            }
        };
        if let Err(e) = self.update.call1(&self.target, &record) {
            log::warn!("options pane: updateOptions threw: {e:?}");
        }
    }
}

fn parse_ids(element_ids: Option<&str>) -> Result<ElementIds, OptionsError> {
    match element_ids {
        Some(raw) => ElementIds::from_json(raw),
        None => Ok(ElementIds::default()),
    }
}

fn document() -> Result<Document, OptionsError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| OptionsError::Bridge("no document available".to_owned()))
}

fn options_to_js(options: &SearchOptions) -> Result<JsValue, OptionsError> {
    let raw = serde_json::to_string(options)?;
    js_sys::JSON::parse(&raw).map_err(|e| bridge_error(&e))
}

fn options_from_js(value: &JsValue) -> Result<SearchOptions, OptionsError> {
    let raw = js_sys::JSON::stringify(value)
        .map_err(|e| bridge_error(&e))?
        .as_string()
        .ok_or_else(|| OptionsError::Bridge("options record is not serializable".to_owned()))?;
    Ok(serde_json::from_str(&raw)?)
}

fn bridge_error(value: &JsValue) -> OptionsError {
    OptionsError::Bridge(format!("{value:?}"))
}

fn to_js_error(err: OptionsError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.error_code());
    js_err.into()
}
