//! Error types for Parkade core.

use crate::time::Timestamp;
use crate::types::TicketId;
use crate::vehicle::VehicleType;
use thiserror::Error;

/// Result type for lot operations.
pub type LotResult<T> = Result<T, LotError>;

/// Errors that can occur in Parkade core operations.
///
/// Every failing operation leaves the lot exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// No free spot of the requested type exists.
    #[error("no available spots for vehicle type {vehicle_type}")]
    CapacityExceeded {
        /// The vehicle type that could not be placed.
        vehicle_type: VehicleType,
    },

    /// The ticket is unknown or has already been closed.
    #[error("invalid ticket: {ticket_id}")]
    InvalidTicket {
        /// The rejected ticket ID.
        ticket_id: TicketId,
    },

    /// A spot batch must contain at least one spot.
    #[error("invalid spot count: {count}")]
    InvalidSpotCount {
        /// The requested count.
        count: usize,
    },

    /// Moving a clock would leave the representable calendar range.
    #[error("cannot move clock at {from} by {seconds} seconds")]
    ClockOutOfRange {
        /// Time the clock read before the move.
        from: Timestamp,
        /// Requested shift, in seconds.
        seconds: i64,
    },

    /// Fee policy name not recognized.
    #[error("unknown fee policy: {name}")]
    UnknownPolicy {
        /// The name that failed to parse.
        name: String,
    },

    /// No lot is registered at this location.
    #[error("no lot registered at location: {location}")]
    UnknownLocation {
        /// The location searched.
        location: String,
    },

    /// A lot is already registered at this location.
    #[error("lot already registered at location: {location}")]
    DuplicateLocation {
        /// The conflicting location.
        location: String,
    },
}

impl LotError {
    /// Creates a capacity exceeded error.
    pub fn capacity_exceeded(vehicle_type: VehicleType) -> Self {
        Self::CapacityExceeded { vehicle_type }
    }

    /// Creates an invalid ticket error.
    pub fn invalid_ticket(ticket_id: TicketId) -> Self {
        Self::InvalidTicket { ticket_id }
    }

    /// Creates an unknown policy error.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }

    /// Creates an unknown location error.
    pub fn unknown_location(location: impl Into<String>) -> Self {
        Self::UnknownLocation {
            location: location.into(),
        }
    }

    /// Creates a duplicate location error.
    pub fn duplicate_location(location: impl Into<String>) -> Self {
        Self::DuplicateLocation {
            location: location.into(),
        }
    }

    /// Returns true if the caller may reasonably retry later.
    ///
    /// Only capacity failures clear up on their own, once another vehicle leaves.
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}
