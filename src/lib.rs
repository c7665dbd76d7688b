//! Search options panel for the find-in-page extension popup.
//!
//! The pane keeps four form controls (regex mode, case sensitivity,
//! persistent highlights, result cap) in sync with a [`options::SearchOptions`]
//! record. User edits are forwarded to the popup's browser action; records
//! pushed back from it are written onto the controls. The pane itself holds
//! no options state: the controls are the state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | Options record, max-results table and readout label |
//! | [`pane`] | [`pane::OptionsPane`] and the [`pane::OptionsSink`] contract |
//! | [`controls`] | Control traits and the [`controls::PaneBindings`] binding object |
//! | [`config`] | DOM element ids the pane binds to |
//! | [`view`] | Leptos markup for the panel |
//! | [`error`] | [`error::OptionsError`] and its codes |
//! | [`consts`] | Max-results steps, glyphs and display values |
//! | `dom` | web-sys control implementations (`csr`) |
//! | `wasm` | JavaScript entry points (`csr`) |

pub mod config;
pub mod consts;
pub mod controls;
#[cfg(feature = "csr")]
pub mod dom;
pub mod error;
pub mod options;
pub mod pane;
pub mod view;
#[cfg(feature = "csr")]
pub mod wasm;
