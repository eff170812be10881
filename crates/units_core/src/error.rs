//! Error types for catalog construction and report output.

use thiserror::Error;

use crate::unit_type::UnitKind;

/// Result type alias using [`UnitsError`].
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Top-level error type for the units crates.
///
/// Looking up an unknown unit name is not an error; see
/// [`UnitCatalog::lookup`](crate::catalog::UnitCatalog::lookup).
#[derive(Debug, Error)]
pub enum UnitsError {
    /// Unit table could not be parsed.
    #[error("Failed to parse unit data: {0}")]
    DataParse(#[from] ron::error::SpannedError),

    /// The same unit kind was defined more than once.
    #[error("Duplicate unit type: {0:?}")]
    DuplicateUnitType(UnitKind),

    /// A unit kind has no definition.
    #[error("Missing unit type: {0:?}")]
    MissingUnitType(UnitKind),

    /// Writing report output failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
