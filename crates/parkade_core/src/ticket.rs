//! Parking tickets.

use crate::time::Timestamp;
use crate::types::{SpotId, TicketId};
use crate::vehicle::Vehicle;
use serde::Serialize;
use std::fmt;

/// Record of an open parking session.
///
/// Issued by a lot when a vehicle parks. The lot keeps it in its open-ticket
/// table until the vehicle leaves, after which it lives on only inside the
/// receipt that closed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingTicket {
    ticket_id: TicketId,
    vehicle: Vehicle,
    spot_id: SpotId,
    entry_time: Timestamp,
}

impl ParkingTicket {
    /// Creates a ticket.
    #[must_use]
    pub fn new(
        ticket_id: TicketId,
        vehicle: Vehicle,
        spot_id: SpotId,
        entry_time: Timestamp,
    ) -> Self {
        Self {
            ticket_id,
            vehicle,
            spot_id,
            entry_time,
        }
    }

    /// Returns the ticket number.
    #[must_use]
    pub fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    /// Returns the parked vehicle.
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the assigned spot.
    #[must_use]
    pub fn spot_id(&self) -> &SpotId {
        &self.spot_id
    }

    /// Returns when the vehicle entered.
    #[must_use]
    pub fn entry_time(&self) -> Timestamp {
        self.entry_time
    }
}

impl fmt::Display for ParkingTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket Number: {}", self.ticket_id)?;
        writeln!(f, "Spot Number: {}", self.spot_id)?;
        writeln!(f, "Entry Date-Time: {}", self.entry_time)
    }
}
