//! The client report sequence.
//!
//! A [`ReportScript`] walks a list of unit names, looks each one up
//! `repeats` times, and writes one report line per hit. The cursor moves
//! after every lookup, hit or miss.

use std::io::Write;

use crate::catalog::UnitCatalog;
use crate::error::Result;
use crate::geo::GeoCursor;
use crate::report::DEFAULT_SPRITE;
use crate::unit_type::UnitKind;

/// Lookups per name in the default script.
pub const DEFAULT_REPEATS: usize = 5;

/// Configuration for one run of the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportScript {
    /// Cursor position for the first lookup.
    pub start: GeoCursor,
    /// Cursor step applied after each lookup.
    pub step: f64,
    /// Lookups per name.
    pub repeats: usize,
    /// Names to look up, in order.
    pub names: Vec<String>,
    /// Sprite attached to every report.
    pub sprite: String,
}

impl Default for ReportScript {
    fn default() -> Self {
        Self {
            start: GeoCursor::START,
            step: GeoCursor::STEP,
            repeats: DEFAULT_REPEATS,
            names: UnitKind::ALL.iter().map(|k| k.key().to_string()).collect(),
            sprite: DEFAULT_SPRITE.to_string(),
        }
    }
}

/// Outcome of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines written.
    pub rendered: usize,
    /// Lookups that found nothing.
    pub skipped: usize,
}

impl ScriptSummary {
    /// Total lookups performed.
    #[must_use]
    pub const fn lookups(&self) -> usize {
        self.rendered + self.skipped
    }
}

impl ReportScript {
    /// Total lookups this script performs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len() * self.repeats
    }

    /// Check if the script performs no lookups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the script against `catalog`, writing one line per hit to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitsError::Io`](crate::error::UnitsError::Io) if writing fails.
    pub fn run<W: Write>(&self, catalog: &UnitCatalog, out: &mut W) -> Result<ScriptSummary> {
        let mut cursor = self.start;
        let mut summary = ScriptSummary::default();

        for name in &self.names {
            for _ in 0..self.repeats {
                if let Some(unit) = catalog.lookup(name) {
                    let report = unit.render(cursor, &self.sprite);
                    tracing::trace!(%report, "Rendered");
                    writeln!(out, "{report}")?;
                    summary.rendered += 1;
                } else {
                    tracing::debug!("Unknown unit type '{name}', skipping");
                    summary.skipped += 1;
                }
                cursor.advance(self.step);
            }
        }

        out.flush()?;
        tracing::info!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            "Report script complete"
        );

        Ok(summary)
    }
}
