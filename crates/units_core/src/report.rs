//! Report line rendering.

use std::fmt;

use crate::geo::GeoCursor;
use crate::unit_type::UnitType;

/// Sprite every reported unit is drawn with.
pub const DEFAULT_SPRITE: &str = "Sprite.png";

/// One rendered unit: shared descriptor plus extrinsic position and sprite.
///
/// Formats as a single line, without a trailing newline:
///
/// ```
/// use units_core::prelude::*;
///
/// let catalog = UnitCatalog::initialize().unwrap();
/// let infantry = catalog.lookup("Infantry").unwrap();
/// let line = infantry.render(GeoCursor::START, DEFAULT_SPRITE).to_string();
/// assert_eq!(
///     line,
///     "Infantry has 20 power 10 speed and located in latitude - 55.740000 \
///      longitude - 37.610000 and has a sprite Sprite.png"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitReport<'a> {
    unit: &'a UnitType,
    at: GeoCursor,
    sprite: &'a str,
}

impl<'a> UnitReport<'a> {
    /// Create a report for `unit` at `at`.
    #[must_use]
    pub const fn new(unit: &'a UnitType, at: GeoCursor, sprite: &'a str) -> Self {
        Self { unit, at, sprite }
    }

    /// Descriptor being reported.
    #[must_use]
    pub const fn unit(&self) -> &'a UnitType {
        self.unit
    }

    /// Position being reported.
    #[must_use]
    pub const fn position(&self) -> GeoCursor {
        self.at
    }
}

impl fmt::Display for UnitReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has {} power {} speed and located in latitude - {:.6} longitude - {:.6} and has a sprite {}",
            self.unit.kind().label(),
            self.unit.power(),
            self.unit.speed(),
            self.at.latitude,
            self.at.longitude,
            self.sprite,
        )
    }
}
