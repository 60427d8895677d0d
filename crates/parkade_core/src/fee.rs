//! Fee policies.
//!
//! Every policy prices a stay from the same hourly [`RateTable`]; they differ
//! only in how billed hours map onto that rate:
//!
//! | Policy  | hours ≤ 2 | 2 < hours ≤ 5 | hours > 5            |
//! |---------|-----------|---------------|----------------------|
//! | Base    | rate × h  | rate × h      | rate × h             |
//! | Mall    | rate × h  | rate × h      | rate × h             |
//! | Stadium | rate × 2  | rate × 3      | rate × (h − 2)       |
//! | Airport | rate × 5  | rate × 5      | rate × 5 + rate × (h − 5) |
//!
//! Tier boundaries are inclusive on the lower-cost side.

use crate::error::LotError;
use crate::types::Fee;
use crate::vehicle::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hourly rates per vehicle type, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    motorcycle: u64,
    car: u64,
    bus: u64,
}

impl RateTable {
    /// The fixed tariff: motorcycle 10, car 20, bus 50.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            motorcycle: 10,
            car: 20,
            bus: 50,
        }
    }

    /// Hourly rate for a vehicle type. Unrated types cost nothing.
    #[must_use]
    pub fn hourly_rate(&self, vehicle_type: &VehicleType) -> u64 {
        match vehicle_type {
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Car => self.car,
            VehicleType::Bus => self.bus,
            VehicleType::Other(_) => 0,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Named fee formula selected per venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeePolicy {
    /// Straight hourly billing.
    #[default]
    Base,
    /// Same as base.
    Mall,
    /// Two-hour minimum, flat mid tier, two free hours after that.
    Stadium,
    /// Five-hour block plus metered overage.
    Airport,
}

impl FeePolicy {
    /// All policies, in declaration order.
    pub const ALL: [FeePolicy; 4] = [Self::Base, Self::Mall, Self::Stadium, Self::Airport];

    /// Picks the policy a venue name implies.
    ///
    /// Matching is by case-insensitive substring, so "City Airport T2" resolves
    /// to [`FeePolicy::Airport`]. Anything unrecognized bills at base rates.
    #[must_use]
    pub fn for_location(location: &str) -> Self {
        let location = location.to_ascii_lowercase();
        [Self::Mall, Self::Stadium, Self::Airport]
            .into_iter()
            .find(|policy| location.contains(policy.as_str()))
            .unwrap_or(Self::Base)
    }

    /// Returns the lowercase policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Mall => "mall",
            Self::Stadium => "stadium",
            Self::Airport => "airport",
        }
    }

    /// Number of hours charged for a stay of `hours`.
    #[must_use]
    pub fn billable_hours(self, hours: u64) -> u64 {
        match self {
            Self::Base | Self::Mall => hours,
            Self::Stadium => {
                if hours <= 2 {
                    2
                } else if hours <= 5 {
                    3
                } else {
                    hours - 2
                }
            }
            Self::Airport => {
                if hours <= 5 {
                    5
                } else {
                    5 + (hours - 5)
                }
            }
        }
    }
}

impl FromStr for FeePolicy {
    type Err = LotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LotError::unknown_policy(s))
    }
}

impl fmt::Display for FeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prices a stay under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeCalculator {
    policy: FeePolicy,
    rates: RateTable,
}

impl FeeCalculator {
    /// Creates a calculator for `policy` with the standard tariff.
    #[must_use]
    pub const fn new(policy: FeePolicy) -> Self {
        Self {
            policy,
            rates: RateTable::standard(),
        }
    }

    /// Returns the policy in force.
    #[must_use]
    pub const fn policy(&self) -> FeePolicy {
        self.policy
    }

    /// Returns the rate table in force.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Fee for a stay of `duration_hours` whole hours.
    ///
    /// Saturates at `u64::MAX` rupees instead of wrapping.
    #[must_use]
    pub fn calculate_fee(&self, vehicle_type: &VehicleType, duration_hours: u64) -> Fee {
        let rate = self.rates.hourly_rate(vehicle_type);
        let billable = self.policy.billable_hours(duration_hours);
        Fee::new(rate.checked_mul(billable).unwrap_or(u64::MAX))
    }
}

impl From<FeePolicy> for FeeCalculator {
    fn from(policy: FeePolicy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(policy: FeePolicy, vehicle: &str, hours: u64) -> u64 {
        FeeCalculator::new(policy)
            .calculate_fee(&VehicleType::from(vehicle), hours)
            .amount()
    }

    #[test]
    fn base_is_hourly() {
        assert_eq!(fee(FeePolicy::Base, "car", 3), 60);
        assert_eq!(fee(FeePolicy::Base, "bus", 0), 0);
    }

    #[test]
    fn mall_matches_base() {
        assert_eq!(fee(FeePolicy::Mall, "bus", 5), 250);
        assert_eq!(fee(FeePolicy::Mall, "car", 6), 120);
        for hours in 0..30 {
            assert_eq!(
                fee(FeePolicy::Mall, "motorcycle", hours),
                fee(FeePolicy::Base, "motorcycle", hours)
            );
        }
    }

    #[test]
    fn stadium_tiers() {
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 0), 20);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 2), 20);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 3), 30);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 4), 30);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 5), 30);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", 6), 40);
        assert_eq!(fee(FeePolicy::Stadium, "car", 10), 160);
    }

    #[test]
    fn airport_block_and_overage() {
        assert_eq!(fee(FeePolicy::Airport, "car", 1), 100);
        assert_eq!(fee(FeePolicy::Airport, "car", 5), 100);
        assert_eq!(fee(FeePolicy::Airport, "car", 6), 120);
        assert_eq!(fee(FeePolicy::Airport, "bus", 28), 1400);
    }

    #[test]
    fn unknown_type_is_free() {
        for policy in FeePolicy::ALL {
            assert_eq!(fee(policy, "truck", 0), 0);
            assert_eq!(fee(policy, "truck", 17), 0);
            assert_eq!(fee(policy, "Car", 3), 0);
            assert_eq!(fee(policy, "BUS", 28), 0);
        }
    }

    #[test]
    fn huge_stays_saturate() {
        assert_eq!(fee(FeePolicy::Base, "bus", u64::MAX / 2), u64::MAX);
        assert_eq!(fee(FeePolicy::Airport, "car", u64::MAX), u64::MAX);
        assert_eq!(fee(FeePolicy::Stadium, "motorcycle", u64::MAX), u64::MAX);
        assert_eq!(fee(FeePolicy::Base, "car", u64::MAX / 20), u64::MAX / 20 * 20);
        assert_eq!(fee(FeePolicy::Mall, "truck", u64::MAX), 0);
    }

    #[test]
    fn policy_from_location() {
        assert_eq!(FeePolicy::for_location("mall"), FeePolicy::Mall);
        assert_eq!(FeePolicy::for_location("Wembley Stadium"), FeePolicy::Stadium);
        assert_eq!(FeePolicy::for_location("CITY AIRPORT"), FeePolicy::Airport);
        assert_eq!(FeePolicy::for_location("downtown"), FeePolicy::Base);
    }

    #[test]
    fn policy_parse() {
        assert_eq!("Stadium".parse::<FeePolicy>().unwrap(), FeePolicy::Stadium);
        assert_eq!(
            "harbour".parse::<FeePolicy>(),
            Err(LotError::unknown_policy("harbour"))
        );
    }
}
