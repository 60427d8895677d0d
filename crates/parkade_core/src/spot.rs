//! Parking spots.

use crate::types::SpotId;
use crate::vehicle::VehicleType;
use serde::Serialize;

/// A single parking space of a fixed type.
///
/// A spot is free until a ticket claims it and becomes free again when that
/// ticket is closed. Only the owning lot flips the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingSpot {
    spot_id: SpotId,
    spot_type: VehicleType,
    is_free: bool,
}

impl ParkingSpot {
    /// Creates a free spot.
    pub fn new(spot_id: impl Into<SpotId>, spot_type: impl Into<VehicleType>) -> Self {
        Self {
            spot_id: spot_id.into(),
            spot_type: spot_type.into(),
            is_free: true,
        }
    }

    /// Returns the spot ID.
    #[must_use]
    pub fn spot_id(&self) -> &SpotId {
        &self.spot_id
    }

    /// Returns the type of vehicle this spot accepts.
    #[must_use]
    pub fn spot_type(&self) -> &VehicleType {
        &self.spot_type
    }

    /// Returns true if no open ticket holds this spot.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.is_free
    }

    /// Returns true if the spot is free and fits `vehicle_type`.
    #[must_use]
    pub fn accepts(&self, vehicle_type: &VehicleType) -> bool {
        self.is_free && &self.spot_type == vehicle_type
    }

    pub(crate) fn occupy(&mut self) {
        self.is_free = false;
    }

    pub(crate) fn release(&mut self) {
        self.is_free = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parking_spot_creation() {
        let spot = ParkingSpot::new("car-1", "car");
        assert_eq!(spot.spot_id().as_str(), "car-1");
        assert_eq!(spot.spot_type(), &VehicleType::Car);
        assert!(spot.is_free());
    }

    #[test]
    fn accepts_only_matching_free() {
        let mut spot = ParkingSpot::new("bus-1", "bus");
        assert!(spot.accepts(&VehicleType::Bus));
        assert!(!spot.accepts(&VehicleType::Car));

        spot.occupy();
        assert!(!spot.accepts(&VehicleType::Bus));

        spot.release();
        assert!(spot.is_free());
    }
}
