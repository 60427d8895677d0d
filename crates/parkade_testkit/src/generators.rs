//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that maintains required invariants.

use parkade_core::{FeePolicy, Vehicle, VehicleType};
use proptest::prelude::*;

/// Strategy for the three rated vehicle types.
pub fn rated_type_strategy() -> impl Strategy<Value = VehicleType> {
    prop_oneof![
        Just(VehicleType::Motorcycle),
        Just(VehicleType::Car),
        Just(VehicleType::Bus),
    ]
}

/// Strategy for vehicle types that carry no rate.
pub fn unrated_type_strategy() -> impl Strategy<Value = VehicleType> {
    prop::string::string_regex("(truck|van|scooter|tractor)[0-9]{0,2}")
        .expect("Invalid regex")
        .prop_map(VehicleType::from)
}

/// Strategy for any vehicle type, mostly rated ones.
pub fn vehicle_type_strategy() -> impl Strategy<Value = VehicleType> {
    prop_oneof![
        4 => rated_type_strategy(),
        1 => unrated_type_strategy(),
    ]
}

/// Strategy for license plates.
pub fn plate_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}").expect("Invalid regex")
}

/// Strategy for vehicles.
pub fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (plate_strategy(), vehicle_type_strategy())
        .prop_map(|(plate, vehicle_type)| Vehicle::new(plate, vehicle_type))
}

/// Strategy for fee policies.
pub fn policy_strategy() -> impl Strategy<Value = FeePolicy> {
    prop::sample::select(FeePolicy::ALL.to_vec())
}

/// Strategy for billed stay lengths, up to two weeks.
pub fn hours_strategy() -> impl Strategy<Value = u64> {
    0u64..=336
}

/// Strategy for spot batches: (type, count) pairs.
pub fn spot_batches_strategy() -> impl Strategy<Value = Vec<(VehicleType, usize)>> {
    prop::collection::vec((vehicle_type_strategy(), 1usize..8), 1..6)
}
