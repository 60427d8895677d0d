//! Fees command implementation.

use parkade_core::{FeeCalculator, FeePolicy, VehicleType};

/// Sample stays printed by the demo.
const SAMPLES: [(FeePolicy, VehicleType, u64); 3] = [
    (FeePolicy::Mall, VehicleType::Car, 6),
    (FeePolicy::Stadium, VehicleType::Motorcycle, 4),
    (FeePolicy::Airport, VehicleType::Bus, 28),
];

/// Runs the fees command.
pub fn run() {
    for line in lines() {
        println!("{line}");
    }
}

fn lines() -> Vec<String> {
    SAMPLES
        .iter()
        .map(|(policy, vehicle, hours)| {
            let fee = FeeCalculator::new(*policy).calculate_fee(vehicle, *hours);
            format!(
                "{} Fee ({}, {} hours): ₹ {}",
                capitalize(policy.as_str()),
                capitalize(vehicle.as_str()),
                hours,
                fee.amount()
            )
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
