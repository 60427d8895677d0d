//! Quote command implementation.

use parkade_core::{FeeCalculator, FeePolicy, VehicleType};
use serde::Serialize;

/// A priced stay.
#[derive(Debug, Serialize)]
pub struct QuoteResult {
    /// Policy applied.
    pub policy: FeePolicy,
    /// Vehicle type priced.
    pub vehicle_type: VehicleType,
    /// Whole hours parked.
    pub hours: u64,
    /// Fee in whole rupees.
    pub fee: u64,
}

/// Runs the quote command.
pub fn run(
    policy: &str,
    vehicle: &str,
    hours: u64,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = quote(policy, vehicle, hours)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!(
                "{} fee for {} over {} hours: ₹{}",
                result.policy, result.vehicle_type, result.hours, result.fee
            );
        }
    }

    Ok(())
}

fn quote(policy: &str, vehicle: &str, hours: u64) -> Result<QuoteResult, parkade_core::LotError> {
    let policy: FeePolicy = policy.parse()?;
    let vehicle_type = VehicleType::from(vehicle);
    let fee = FeeCalculator::new(policy).calculate_fee(&vehicle_type, hours);

    Ok(QuoteResult {
        policy,
        vehicle_type,
        hours,
        fee: fee.amount(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_under_policy() {
        let result = quote("stadium", "motorcycle", 4).unwrap();
        assert_eq!(result.fee, 30);

        let result = quote("AIRPORT", "car", 6).unwrap();
        assert_eq!(result.policy, FeePolicy::Airport);
        assert_eq!(result.fee, 120);
    }

    #[test]
    fn huge_stay_saturates() {
        let result = quote("base", "bus", u64::MAX).unwrap();
        assert_eq!(result.fee, u64::MAX);
    }

    #[test]
    fn capitalized_type_is_unrated() {
        assert_eq!(quote("base", "Car", 3).unwrap().fee, 0);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(quote("harbour", "car", 1).is_err());
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(quote("base", "car", 3).unwrap()).unwrap();
        assert_eq!(json["policy"], "base");
        assert_eq!(json["vehicle_type"], "car");
        assert_eq!(json["fee"], 60);
    }
}
