//! # Units Demo
//!
//! Command-line client for the unit catalog:
//! - Builds the catalog from the built-in table
//! - Runs the default report script against a writer

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

use std::io::Write;

use units_core::prelude::*;

/// Build the catalog and run the default script, writing reports to `out`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be built or `out` fails.
pub fn run<W: Write>(out: &mut W) -> Result<ScriptSummary> {
    let catalog = UnitCatalog::initialize()?;
    tracing::info!("Loaded {} unit types", catalog.len());

    ReportScript::default().run(&catalog, out)
}
