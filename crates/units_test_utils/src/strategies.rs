//! Proptest strategies for catalog and script inputs.

use proptest::prelude::*;
use units_core::unit_type::UnitKind;

/// Any known catalog key.
pub fn known_unit_name() -> impl Strategy<Value = String> {
    proptest::sample::select(UnitKind::ALL.to_vec()).prop_map(|kind| kind.key().to_string())
}

/// Strings that are not catalog keys.
pub fn unknown_unit_name() -> impl Strategy<Value = String> {
    "\\PC{0,24}".prop_filter("must not be a catalog key", |name| {
        UnitKind::from_key(name).is_none()
    })
}

/// A mix of known and unknown names.
pub fn unit_name() -> impl Strategy<Value = String> {
    prop_oneof![known_unit_name(), unknown_unit_name()]
}
