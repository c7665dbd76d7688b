//! Shared constants for the options pane.

// ── Max results ─────────────────────────────────────────────────

/// Sentinel `max_results` value meaning "no cap".
pub const UNLIMITED_MAX_RESULTS: u32 = 0;

/// Allowed `max_results` values, in slider order. The last entry is the
/// unlimited sentinel so the slider's right end reads "∞".
pub const MAX_RESULTS_STEPS: [u32; 11] = [1, 10, 25, 50, 75, 100, 150, 200, 300, 400, UNLIMITED_MAX_RESULTS];

/// Highest valid slider position.
pub const MAX_SLIDER_POSITION: usize = MAX_RESULTS_STEPS.len() - 1;

// ── Readout ─────────────────────────────────────────────────────

/// Readout text shown for the unlimited sentinel.
pub const UNLIMITED_GLYPH: &str = "\u{221E}";

// ── Panel display ───────────────────────────────────────────────

/// CSS `display` value written when the panel is shown.
pub const DISPLAY_SHOWN: &str = "inherit";

/// CSS `display` value written when the panel is hidden.
pub const DISPLAY_HIDDEN: &str = "none";
