//! Unit kinds and their shared descriptors.
//!
//! This module provides the intrinsic half of a unit:
//! - [`UnitKind`]: Closed set of unit categories
//! - [`UnitType`]: Immutable power/speed bundle shared by every unit of a kind
//!
//! Extrinsic state (where a unit stands, which sprite it uses) is supplied
//! by the caller at render time, see [`UnitType::render`].

use serde::{Deserialize, Serialize};

use crate::geo::GeoCursor;
use crate::report::UnitReport;

/// Category of a unit.
///
/// The set is fixed at compile time. Serialized by variant name, which is
/// also the catalog lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitKind {
    /// Foot soldiers.
    Infantry,
    /// Unarmed supply truck.
    CargoTruck,
    /// Tracked armor.
    HeavyGroundVehicle,
    /// Wheeled scout/raider.
    LightGroundVehicle,
    /// Fixed-wing aircraft.
    Plane,
}

impl UnitKind {
    /// Every kind, in client script order.
    pub const ALL: [Self; 5] = [
        Self::Infantry,
        Self::CargoTruck,
        Self::HeavyGroundVehicle,
        Self::LightGroundVehicle,
        Self::Plane,
    ];

    /// Catalog lookup key for this kind.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Infantry => "Infantry",
            Self::CargoTruck => "CargoTruck",
            Self::HeavyGroundVehicle => "HeavyGroundVehicle",
            Self::LightGroundVehicle => "LightGroundVehicle",
            Self::Plane => "Plane",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Infantry => "Infantry",
            Self::CargoTruck => "Cargo truck",
            Self::HeavyGroundVehicle => "Heavy ground vehicle",
            Self::LightGroundVehicle => "Light ground vehicle",
            Self::Plane => "Plane",
        }
    }

    /// Parse a catalog key. Case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Position of this kind in [`UnitKind::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Shared, immutable descriptor for one unit kind.
///
/// Handed out by reference from [`UnitCatalog`](crate::catalog::UnitCatalog);
/// there is no way to mutate one after construction.
#[derive(Debug, PartialEq, Eq)]
pub struct UnitType {
    kind: UnitKind,
    power: u32,
    speed: u32,
}

impl UnitType {
    /// Create a descriptor.
    ///
    /// Only the catalog builds these; everyone else borrows.
    #[must_use]
    pub(crate) const fn new(kind: UnitKind, power: u32, speed: u32) -> Self {
        Self { kind, power, speed }
    }

    /// Kind this descriptor belongs to.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Attack power.
    #[must_use]
    pub const fn power(&self) -> u32 {
        self.power
    }

    /// Movement speed.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Describe one unit of this type standing at `at` and drawn with `sprite`.
    #[must_use]
    pub fn render<'a>(&'a self, at: GeoCursor, sprite: &'a str) -> UnitReport<'a> {
        UnitReport::new(self, at, sprite)
    }
}
