//! Vehicles and vehicle types.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of vehicle, and of the spot that can hold it.
///
/// Only the exact lowercase labels `motorcycle`, `car` and `bus` name a rated
/// kind. Any other label, including `Car` or `BUS`, is kept verbatim as
/// [`VehicleType::Other`] and rates at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleType {
    /// Two-wheeler.
    Motorcycle,
    /// Passenger car.
    Car,
    /// Bus or coach.
    Bus,
    /// Unrated type.
    Other(String),
}

impl VehicleType {
    /// Returns the lowercase label used in spot IDs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Other(label) => label,
        }
    }
}

impl FromStr for VehicleType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "motorcycle" => Self::Motorcycle,
            "car" => Self::Car,
            "bus" => Self::Bus,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<&str> for VehicleType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<String> for VehicleType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<VehicleType> for String {
    fn from(t: VehicleType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle presented at the gate.
///
/// Plates are not checked for uniqueness; two vehicles with the same plate
/// are independent values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: String,
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Creates a vehicle.
    pub fn new(license_plate: impl Into<String>, vehicle_type: impl Into<VehicleType>) -> Self {
        Self {
            license_plate: license_plate.into(),
            vehicle_type: vehicle_type.into(),
        }
    }

    /// Returns the license plate.
    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Returns the vehicle type.
    #[must_use]
    pub fn vehicle_type(&self) -> &VehicleType {
        &self.vehicle_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_creation() {
        let vehicle = Vehicle::new("ABC123", "car");
        assert_eq!(vehicle.license_plate(), "ABC123");
        assert_eq!(vehicle.vehicle_type(), &VehicleType::Car);
    }

    #[test]
    fn parse_requires_exact_label() {
        assert_eq!(VehicleType::from("motorcycle"), VehicleType::Motorcycle);
        assert_eq!(VehicleType::from("Car"), VehicleType::Other("Car".to_string()));
        assert_eq!(VehicleType::from("BUS"), VehicleType::Other("BUS".to_string()));
        assert_ne!(VehicleType::from("Truck"), VehicleType::from("truck"));
    }

    #[test]
    fn unknown_types_are_kept() {
        let t = VehicleType::from("truck");
        assert_eq!(t, VehicleType::Other("truck".to_string()));
        assert_eq!(t.as_str(), "truck");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Vehicle::new("XY1", "bus")).unwrap();
        assert_eq!(json, r#"{"license_plate":"XY1","vehicle_type":"bus"}"#);
    }
}
