//! # Units Core
//!
//! Shared unit type catalog for the unit flyweight demo.
//!
//! Every unit on the map shares one immutable [`UnitType`](unit_type::UnitType)
//! per kind. Per-unit state (position, sprite) is passed in at render time
//! and never stored in the catalog.
//!
//! ## Crate Structure
//!
//! - [`unit_type`] - Unit kinds and their shared descriptors
//! - [`data`] - RON data definitions for the built-in table
//! - [`catalog`] - Name-keyed registry of shared descriptors
//! - [`geo`] - Longitude/latitude cursor
//! - [`report`] - Report line rendering
//! - [`script`] - The client report sequence

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod data;
pub mod error;
pub mod geo;
pub mod report;
pub mod script;
pub mod unit_type;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::UnitCatalog;
    pub use crate::error::{Result, UnitsError};
    pub use crate::geo::GeoCursor;
    pub use crate::report::{UnitReport, DEFAULT_SPRITE};
    pub use crate::script::{ReportScript, ScriptSummary};
    pub use crate::unit_type::{UnitKind, UnitType};
}
