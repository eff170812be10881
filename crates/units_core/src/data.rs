//! Data structures for the unit type table.
//!
//! The built-in table ships as a RON file compiled into the crate, so the
//! catalog never touches the filesystem.
//!
//! # Example RON
//!
//! ```ron
//! UnitCatalogData(
//!     units: [
//!         UnitTypeData(kind: Infantry, power: 20, speed: 10),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::unit_type::UnitKind;

/// Built-in unit table.
pub const BUILTIN_UNITS_RON: &str = include_str!("../assets/data/units.ron");

/// Data-driven definition of one unit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTypeData {
    /// Kind being defined.
    pub kind: UnitKind,
    /// Attack power.
    pub power: u32,
    /// Movement speed.
    pub speed: u32,
}

/// Root of a unit table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCatalogData {
    /// Unit definitions, one per kind.
    #[serde(default)]
    pub units: Vec<UnitTypeData>,
}

impl UnitCatalogData {
    /// Parse a unit table from RON source.
    ///
    /// # Errors
    ///
    /// Returns [`UnitsError::DataParse`](crate::error::UnitsError::DataParse)
    /// if the source is not a valid table.
    pub fn from_ron(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    /// Definition for `kind`, if present.
    #[must_use]
    pub fn find(&self, kind: UnitKind) -> Option<&UnitTypeData> {
        self.units.iter().find(|unit| unit.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitsError;

    #[test]
    fn test_builtin_table_parses() {
        let data = UnitCatalogData::from_ron(BUILTIN_UNITS_RON).unwrap();
        assert_eq!(data.units.len(), 5);
    }

    #[test]
    fn test_builtin_table_values() {
        let data = UnitCatalogData::from_ron(BUILTIN_UNITS_RON).unwrap();
        let expected = [
            (UnitKind::Infantry, 20, 10),
            (UnitKind::CargoTruck, 0, 70),
            (UnitKind::HeavyGroundVehicle, 150, 15),
            (UnitKind::LightGroundVehicle, 30, 50),
            (UnitKind::Plane, 100, 300),
        ];

        for (kind, power, speed) in expected {
            let unit = data.find(kind).unwrap();
            assert_eq!(unit.power, power, "{kind:?} power");
            assert_eq!(unit.speed, speed, "{kind:?} speed");
        }
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let source = "UnitCatalogData(units: [UnitTypeData(kind: Tank, power: 1, speed: 1)])";
        let err = UnitCatalogData::from_ron(source).unwrap_err();
        assert!(matches!(err, UnitsError::DataParse(_)));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let source = "UnitCatalogData(units: [UnitTypeData(kind: Plane, power: 1)])";
        assert!(UnitCatalogData::from_ron(source).is_err());
    }

    #[test]
    fn test_empty_table() {
        let data = UnitCatalogData::from_ron("UnitCatalogData(units: [])").unwrap();
        assert!(data.units.is_empty());
        assert!(data.find(UnitKind::Plane).is_none());
    }
}
