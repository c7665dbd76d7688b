//! Error type shared by the options pane modules.
//!
//! ERROR HANDLING
//! ==============
//! Reading the controls never fails. Errors only arise when external input
//! (an options record, an id config, or the live document) disagrees with
//! what the pane can represent. Each variant carries a stable code so the
//! JavaScript shell can branch on it without parsing messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// A record field holds a value the controls cannot display.
    #[error("invalid value {value} for option `{field}`")]
    InvalidOptionValue { field: &'static str, value: u32 },
    /// The element id configuration is unusable.
    #[error("invalid element id config: {0}")]
    InvalidConfig(String),
    /// No element with this id exists in the document.
    #[error("options pane element not found: #{0}")]
    MissingElement(String),
    /// The element exists but is not the expected kind.
    #[error("element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },
    /// A record or config could not be (de)serialized.
    #[error("malformed options json: {0}")]
    Json(#[from] serde_json::Error),
    /// A value could not cross the JavaScript boundary.
    #[error("script bridge error: {0}")]
    Bridge(String),
}

impl OptionsError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOptionValue { .. } => "E_INVALID_OPTION_VALUE",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::WrongElementKind { .. } => "E_WRONG_ELEMENT_KIND",
            Self::Json(_) => "E_JSON",
            Self::Bridge(_) => "E_BRIDGE",
        }
    }
}
