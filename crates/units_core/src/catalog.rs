//! Name-keyed registry of shared unit descriptors.
//!
//! [`UnitCatalog`] owns exactly one [`UnitType`] per [`UnitKind`] and lends
//! them out by reference. It is built once from RON data and is immutable
//! afterwards, so it can be shared across threads without locking.

use std::collections::HashMap;

use crate::data::{UnitCatalogData, BUILTIN_UNITS_RON};
use crate::error::{Result, UnitsError};
use crate::unit_type::{UnitKind, UnitType};

/// Registry handing out shared [`UnitType`] instances by name.
#[derive(Debug)]
pub struct UnitCatalog {
    /// Descriptors indexed by [`UnitKind::index`].
    units: Vec<UnitType>,
    /// Lookup key → kind.
    by_name: HashMap<String, UnitKind>,
}

impl UnitCatalog {
    /// Build the catalog from the built-in unit table.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded table is invalid, see [`UnitCatalog::from_ron`].
    pub fn initialize() -> Result<Self> {
        Self::from_ron(BUILTIN_UNITS_RON)
    }

    /// Build the catalog from a RON unit table.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not parse, or if any kind is
    /// defined twice or not at all.
    pub fn from_ron(source: &str) -> Result<Self> {
        let data = UnitCatalogData::from_ron(source)?;
        Self::from_data(&data)
    }

    /// Build the catalog from already-parsed data.
    ///
    /// # Errors
    ///
    /// Returns [`UnitsError::DuplicateUnitType`] or [`UnitsError::MissingUnitType`]
    /// unless every kind is defined exactly once.
    pub fn from_data(data: &UnitCatalogData) -> Result<Self> {
        let mut slots: Vec<Option<UnitType>> = UnitKind::ALL.iter().map(|_| None).collect();

        for unit in &data.units {
            let slot = &mut slots[unit.kind.index()];
            if slot.is_some() {
                return Err(UnitsError::DuplicateUnitType(unit.kind));
            }
            *slot = Some(UnitType::new(unit.kind, unit.power, unit.speed));
        }

        let units = UnitKind::ALL
            .into_iter()
            .zip(slots)
            .map(|(kind, slot)| slot.ok_or(UnitsError::MissingUnitType(kind)))
            .collect::<Result<Vec<_>>>()?;

        let by_name = UnitKind::ALL
            .into_iter()
            .map(|kind| (kind.key().to_string(), kind))
            .collect();

        tracing::debug!("Unit catalog built with {} unit types", units.len());

        Ok(Self { units, by_name })
    }

    /// Look up the shared descriptor for `name`.
    ///
    /// Returns `None` for names outside the catalog. Never inserts or
    /// otherwise changes the catalog.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&UnitType> {
        let found = self.by_name.get(name).map(|&kind| self.get(kind));
        tracing::trace!(name, found = found.is_some(), "Unit type lookup");
        found
    }

    /// Descriptor for `kind`. O(1).
    #[inline]
    #[must_use]
    pub fn get(&self, kind: UnitKind) -> &UnitType {
        // Every kind has a slot once construction succeeds.
        &self.units[kind.index()]
    }

    /// All descriptors, in [`UnitKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitType> {
        self.units.iter()
    }

    /// Number of unit types held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> UnitCatalog {
        UnitCatalog::initialize().unwrap()
    }

    #[test]
    fn test_initialize_holds_five_types() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_known_names() {
        let catalog = catalog();
        let expected = [
            ("Infantry", 20, 10),
            ("CargoTruck", 0, 70),
            ("HeavyGroundVehicle", 150, 15),
            ("LightGroundVehicle", 30, 50),
            ("Plane", 100, 300),
        ];

        for (name, power, speed) in expected {
            let unit = catalog.lookup(name).unwrap();
            assert_eq!(unit.kind().key(), name);
            assert_eq!(unit.power(), power, "{name} power");
            assert_eq!(unit.speed(), speed, "{name} speed");
        }
    }

    #[test]
    fn test_lookup_returns_shared_instance() {
        let catalog = catalog();
        for kind in UnitKind::ALL {
            let first = catalog.lookup(kind.key()).unwrap();
            let second = catalog.lookup(kind.key()).unwrap();
            assert!(std::ptr::eq(first, second));
            assert!(std::ptr::eq(first, catalog.get(kind)));
        }
    }

    #[test]
    fn test_lookup_unknown_is_absent() {
        let catalog = catalog();
        assert!(catalog.lookup("Tank").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("plane").is_none());
        assert!(catalog.lookup("Cargo truck").is_none());
    }

    #[test]
    fn test_unknown_lookup_does_not_grow_catalog() {
        let catalog = catalog();
        for _ in 0..3 {
            assert!(catalog.lookup("Tank").is_none());
        }
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.by_name.len(), 5);
    }

    #[test]
    fn test_iter_in_kind_order() {
        let catalog = catalog();
        let kinds: Vec<_> = catalog.iter().map(UnitType::kind).collect();
        assert_eq!(kinds, UnitKind::ALL.to_vec());
    }

    #[test]
    fn test_table_order_does_not_matter() {
        let source = r"UnitCatalogData(units: [
            UnitTypeData(kind: Plane, power: 1, speed: 2),
            UnitTypeData(kind: LightGroundVehicle, power: 3, speed: 4),
            UnitTypeData(kind: HeavyGroundVehicle, power: 5, speed: 6),
            UnitTypeData(kind: CargoTruck, power: 7, speed: 8),
            UnitTypeData(kind: Infantry, power: 9, speed: 10),
        ])";
        let catalog = UnitCatalog::from_ron(source).unwrap();
        assert_eq!(catalog.get(UnitKind::Plane).power(), 1);
        assert_eq!(catalog.get(UnitKind::Infantry).speed(), 10);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let source = r"UnitCatalogData(units: [
            UnitTypeData(kind: Infantry, power: 20, speed: 10),
            UnitTypeData(kind: Infantry, power: 21, speed: 11),
        ])";
        let err = UnitCatalog::from_ron(source).unwrap_err();
        assert!(matches!(err, UnitsError::DuplicateUnitType(UnitKind::Infantry)));
    }

    #[test]
    fn test_missing_kind_rejected() {
        let source = r"UnitCatalogData(units: [
            UnitTypeData(kind: Infantry, power: 20, speed: 10),
            UnitTypeData(kind: CargoTruck, power: 0, speed: 70),
            UnitTypeData(kind: HeavyGroundVehicle, power: 150, speed: 15),
            UnitTypeData(kind: LightGroundVehicle, power: 30, speed: 50),
        ])";
        let err = UnitCatalog::from_ron(source).unwrap_err();
        assert!(matches!(err, UnitsError::MissingUnitType(UnitKind::Plane)));
    }

    #[test]
    fn test_malformed_source_rejected() {
        let err = UnitCatalog::from_ron("not ron at all (").unwrap_err();
        assert!(matches!(err, UnitsError::DataParse(_)));
    }

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitCatalog>();
    }

    proptest! {
        /// Names outside the five keys are always absent.
        #[test]
        fn prop_unknown_names_are_absent(name in "\\PC{0,24}") {
            prop_assume!(UnitKind::from_key(&name).is_none());
            let catalog = catalog();
            prop_assert!(catalog.lookup(&name).is_none());
            prop_assert_eq!(catalog.len(), 5);
        }

        /// Repeated lookups never change stored values.
        #[test]
        fn prop_lookups_leave_values_unchanged(
            picks in proptest::collection::vec(0usize..5, 1..50),
        ) {
            let catalog = catalog();
            let before: Vec<_> = catalog.iter().map(|u| (u.power(), u.speed())).collect();

            for pick in picks {
                let kind = UnitKind::ALL[pick];
                prop_assert!(catalog.lookup(kind.key()).is_some());
            }

            let after: Vec<_> = catalog.iter().map(|u| (u.power(), u.speed())).collect();
            prop_assert_eq!(before, after);
        }
    }
}
