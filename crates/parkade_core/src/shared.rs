//! Thread-safe lot handle.

use crate::error::LotResult;
use crate::lot::{Occupancy, ParkingLot};
use crate::receipt::Receipt;
use crate::ticket::ParkingTicket;
use crate::types::{Fee, SpotId, TicketId};
use crate::vehicle::{Vehicle, VehicleType};
use parking_lot::Mutex;
use std::sync::Arc;

/// A lot that can be driven from several threads.
///
/// Each call holds the lot's lock for the whole operation, so the
/// scan-then-occupy step of a park and the lookup-then-remove step of an
/// unpark are never interleaved with another caller. Clones share the lot.
#[derive(Debug, Clone)]
pub struct SharedLot {
    inner: Arc<Mutex<ParkingLot>>,
}

impl SharedLot {
    /// Wraps a lot.
    #[must_use]
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lot)),
        }
    }

    /// See [`ParkingLot::add_spots`].
    pub fn add_spots(
        &self,
        spot_type: impl Into<VehicleType>,
        count: usize,
    ) -> LotResult<Vec<SpotId>> {
        self.inner.lock().add_spots(spot_type, count)
    }

    /// See [`ParkingLot::park_vehicle`].
    pub fn park_vehicle(&self, vehicle: Vehicle) -> LotResult<ParkingTicket> {
        self.inner.lock().park_vehicle(vehicle)
    }

    /// See [`ParkingLot::unpark_vehicle`].
    pub fn unpark_vehicle(&self, ticket_id: TicketId) -> LotResult<Receipt> {
        self.inner.lock().unpark_vehicle(ticket_id)
    }

    /// See [`ParkingLot::quote`].
    pub fn quote(&self, ticket_id: TicketId) -> LotResult<Fee> {
        self.inner.lock().quote(ticket_id)
    }

    /// See [`ParkingLot::occupancy`].
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.inner.lock().occupancy()
    }

    /// Runs `f` with exclusive access to the lot.
    pub fn with_lot<R>(&self, f: impl FnOnce(&mut ParkingLot) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<ParkingLot> for SharedLot {
    fn from(lot: ParkingLot) -> Self {
        Self::new(lot)
    }
}
