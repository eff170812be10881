//! Test fixtures and helpers.

use units_core::prelude::*;

/// Build the line a report is expected to produce.
///
/// Written independently of [`UnitReport`]'s `Display` impl so tests
/// compare against a second rendering.
#[must_use]
pub fn expected_line(label: &str, power: u32, speed: u32, longitude: f64, latitude: f64) -> String {
    format!(
        "{label} has {power} power {speed} speed and located in latitude - {latitude:.6} \
         longitude - {longitude:.6} and has a sprite {DEFAULT_SPRITE}"
    )
}

/// Fresh catalog from the built-in table.
///
/// # Panics
///
/// Panics if the built-in table is invalid.
#[must_use]
pub fn builtin_catalog() -> UnitCatalog {
    UnitCatalog::initialize().expect("built-in unit table must be valid")
}

/// Run `script` against the built-in catalog, capturing output lines.
///
/// # Panics
///
/// Panics if the script fails or writes invalid UTF-8.
#[must_use]
pub fn run_to_lines(script: &ReportScript) -> (Vec<String>, ScriptSummary) {
    let catalog = builtin_catalog();
    let mut out = Vec::new();
    let summary = script
        .run(&catalog, &mut out)
        .expect("writing to a Vec cannot fail");
    let text = String::from_utf8(out).expect("reports are UTF-8");
    tracing::debug!("Captured {} report lines", summary.rendered);
    (text.lines().map(str::to_string).collect(), summary)
}
