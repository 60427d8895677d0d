//! Parking lot: spot inventory, admission and egress.

use crate::config::Config;
use crate::error::{LotError, LotResult};
use crate::fee::{FeeCalculator, FeePolicy};
use crate::ids::IdAllocator;
use crate::receipt::Receipt;
use crate::spot::ParkingSpot;
use crate::ticket::ParkingTicket;
use crate::time::{Clock, SystemClock, Timestamp};
use crate::types::{Fee, ReceiptId, SpotId, TicketId};
use crate::vehicle::{Vehicle, VehicleType};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A snapshot of how full a lot is and what it has earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    /// Total number of spots.
    pub total: usize,
    /// Spots not held by an open ticket.
    pub free: usize,
    /// Spots held by an open ticket.
    pub occupied: usize,
    /// Tickets issued and not yet closed.
    pub open_tickets: usize,
    /// Receipts issued over the lot's lifetime.
    pub receipts_issued: usize,
    /// Sum of all receipt fees.
    pub revenue: Fee,
}

/// A single parking venue.
///
/// The lot owns its spots, its open tickets and every receipt it has issued.
/// Nothing is shared between lots except, optionally, the [`IdAllocator`].
///
/// # Example
///
/// ```rust
/// use parkade_core::{ParkingLot, Vehicle};
///
/// let mut lot = ParkingLot::new("mall");
/// lot.add_spots("car", 5)?;
///
/// let ticket = lot.park_vehicle(Vehicle::new("KA01AB1234", "car"))?;
/// assert_eq!(ticket.spot_id().as_str(), "car-1");
///
/// let receipt = lot.unpark_vehicle(ticket.ticket_id())?;
/// assert_eq!(receipt.fee().amount(), 0);
/// # Ok::<(), parkade_core::LotError>(())
/// ```
pub struct ParkingLot {
    /// Venue name.
    location: String,
    /// Configuration the lot was opened with.
    config: Config,
    /// Fee calculator resolved at open time.
    calculator: FeeCalculator,
    /// Spots in insertion order; this is the first-fit scan order.
    spots: Vec<ParkingSpot>,
    /// Highest spot number issued so far, per type.
    spot_numbers: HashMap<VehicleType, usize>,
    /// Open tickets.
    tickets: HashMap<TicketId, ParkingTicket>,
    /// All receipts ever issued.
    receipts: BTreeMap<ReceiptId, Receipt>,
    /// Ticket and receipt numbering.
    ids: Arc<IdAllocator>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ParkingLot {
    /// Opens an empty lot with its own numbering and the system clock.
    pub fn new(location: impl Into<String>) -> Self {
        Self::with_config(location, Config::default())
    }

    /// Opens an empty lot with custom configuration.
    pub fn with_config(location: impl Into<String>, config: Config) -> Self {
        Self::with_parts(
            location,
            config,
            Arc::new(IdAllocator::new()),
            Arc::new(SystemClock),
        )
    }

    /// Opens an empty lot with an injected allocator and clock.
    pub fn with_parts(
        location: impl Into<String>,
        config: Config,
        ids: Arc<IdAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let location = location.into();
        let policy = config.resolve_policy(&location);
        debug!(location = %location, policy = %policy, "opening lot");

        Self {
            location,
            config,
            calculator: FeeCalculator::new(policy),
            spots: Vec::new(),
            spot_numbers: HashMap::new(),
            tickets: HashMap::new(),
            receipts: BTreeMap::new(),
            ids,
            clock,
        }
    }

    /// Returns the venue name.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the fee policy applied at unpark.
    #[must_use]
    pub fn fee_policy(&self) -> FeePolicy {
        self.calculator.policy()
    }

    /// Returns the allocator this lot numbers tickets and receipts from.
    #[must_use]
    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    /// Appends `count` free spots of `spot_type`.
    ///
    /// Spot IDs are `"{type}-{n}"`. The first batch of a type is numbered
    /// from 1; later batches continue from the highest number so far unless
    /// [`Config::continue_spot_numbering`] is off.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpotCount` if `count` is zero.
    pub fn add_spots(
        &mut self,
        spot_type: impl Into<VehicleType>,
        count: usize,
    ) -> LotResult<Vec<SpotId>> {
        if count == 0 {
            return Err(LotError::InvalidSpotCount { count });
        }

        let spot_type = spot_type.into();
        let first = if self.config.continue_spot_numbering {
            self.spot_numbers.get(&spot_type).copied().unwrap_or(0) + 1
        } else {
            1
        };
        let last = first + count - 1;

        let ids: Vec<SpotId> = (first..=last)
            .map(|n| SpotId::numbered(spot_type.as_str(), n))
            .collect();
        self.spots.extend(
            ids.iter()
                .map(|id| ParkingSpot::new(id.clone(), spot_type.clone())),
        );

        let highest = self.spot_numbers.entry(spot_type.clone()).or_insert(0);
        *highest = (*highest).max(last);

        debug!(
            location = %self.location,
            spot_type = %spot_type,
            first,
            last,
            "added spots"
        );
        Ok(ids)
    }

    /// Parks a vehicle in the first free spot of its type.
    ///
    /// Spots are scanned in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if no matching spot is free. The lot is
    /// left unchanged and no ticket number is consumed.
    pub fn park_vehicle(&mut self, vehicle: Vehicle) -> LotResult<ParkingTicket> {
        let Some(spot) = self
            .spots
            .iter_mut()
            .find(|spot| spot.accepts(vehicle.vehicle_type()))
        else {
            warn!(
                location = %self.location,
                vehicle_type = %vehicle.vehicle_type(),
                plate = vehicle.license_plate(),
                "no capacity"
            );
            return Err(LotError::capacity_exceeded(vehicle.vehicle_type().clone()));
        };

        spot.occupy();
        let ticket = ParkingTicket::new(
            self.ids.next_ticket(),
            vehicle,
            spot.spot_id().clone(),
            self.clock.now(),
        );
        self.tickets.insert(ticket.ticket_id(), ticket.clone());

        info!(
            location = %self.location,
            ticket = %ticket.ticket_id(),
            spot = %ticket.spot_id(),
            plate = ticket.vehicle().license_plate(),
            "ticket issued"
        );
        Ok(ticket)
    }

    /// Closes an open ticket, frees its spot and issues a receipt.
    ///
    /// The stay is billed in whole hours, truncated, under the lot's policy.
    /// If the clock reads an instant before the entry time the stay bills as
    /// zero hours.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTicket` if the ticket is unknown or already closed.
    ///
    /// On error nothing is changed.
    pub fn unpark_vehicle(&mut self, ticket_id: TicketId) -> LotResult<Receipt> {
        let exit_time = self.clock.now();
        let (hours, fee) = self.price(ticket_id, exit_time)?;

        let Some(ticket) = self.tickets.remove(&ticket_id) else {
            return Err(LotError::invalid_ticket(ticket_id));
        };

        // With restarting numbering a spot ID may repeat; the held one is
        // the first occupied match.
        if let Some(spot) = self
            .spots
            .iter_mut()
            .find(|spot| !spot.is_free() && spot.spot_id() == ticket.spot_id())
        {
            spot.release();
        }

        let receipt = Receipt::new(self.ids.next_receipt(), ticket, exit_time, fee);
        self.receipts.insert(receipt.receipt_id(), receipt.clone());

        info!(
            location = %self.location,
            receipt = %receipt.receipt_id(),
            ticket = %ticket_id,
            hours,
            fee = fee.amount(),
            "receipt issued"
        );
        Ok(receipt)
    }

    /// Fee an open ticket would be charged if it left now.
    ///
    /// # Errors
    ///
    /// Same as [`ParkingLot::unpark_vehicle`]; never mutates.
    pub fn quote(&self, ticket_id: TicketId) -> LotResult<Fee> {
        self.price(ticket_id, self.clock.now()).map(|(_, fee)| fee)
    }

    fn price(&self, ticket_id: TicketId, exit_time: Timestamp) -> LotResult<(u64, Fee)> {
        let Some(ticket) = self.tickets.get(&ticket_id) else {
            warn!(location = %self.location, ticket = %ticket_id, "invalid ticket");
            return Err(LotError::invalid_ticket(ticket_id));
        };

        let entry = ticket.entry_time();
        let hours = exit_time.whole_hours_since(entry).unwrap_or_else(|| {
            warn!(
                location = %self.location,
                ticket = %ticket_id,
                %entry,
                exit = %exit_time,
                "clock is behind entry time, billing zero hours"
            );
            0
        });
        let fee = self
            .calculator
            .calculate_fee(ticket.vehicle().vehicle_type(), hours);
        Ok((hours, fee))
    }

    /// Returns all spots in scan order.
    #[must_use]
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    /// Looks up a spot by ID (first match in scan order).
    #[must_use]
    pub fn spot(&self, spot_id: &SpotId) -> Option<&ParkingSpot> {
        self.spots.iter().find(|spot| spot.spot_id() == spot_id)
    }

    /// Number of free spots of `vehicle_type`.
    #[must_use]
    pub fn free_spots(&self, vehicle_type: &VehicleType) -> usize {
        self.spots
            .iter()
            .filter(|spot| spot.accepts(vehicle_type))
            .count()
    }

    /// Returns an open ticket.
    #[must_use]
    pub fn ticket(&self, ticket_id: TicketId) -> Option<&ParkingTicket> {
        self.tickets.get(&ticket_id)
    }

    /// Returns open tickets ordered by ID.
    #[must_use]
    pub fn open_tickets(&self) -> Vec<&ParkingTicket> {
        let mut tickets: Vec<_> = self.tickets.values().collect();
        tickets.sort_by_key(|ticket| ticket.ticket_id());
        tickets
    }

    /// Returns an issued receipt.
    #[must_use]
    pub fn receipt(&self, receipt_id: ReceiptId) -> Option<&Receipt> {
        self.receipts.get(&receipt_id)
    }

    /// Returns all issued receipts ordered by ID.
    pub fn receipts(&self) -> impl Iterator<Item = &Receipt> {
        self.receipts.values()
    }

    /// Summarizes spot usage and takings.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        let free = self.spots.iter().filter(|spot| spot.is_free()).count();
        Occupancy {
            total: self.spots.len(),
            free,
            occupied: self.spots.len() - free,
            open_tickets: self.tickets.len(),
            receipts_issued: self.receipts.len(),
            revenue: self.receipts.values().map(Receipt::fee).sum(),
        }
    }
}

impl std::fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingLot")
            .field("location", &self.location)
            .field("policy", &self.calculator.policy())
            .field("spots", &self.spots.len())
            .field("open_tickets", &self.tickets.len())
            .field("receipts", &self.receipts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;
    use chrono::DateTime;

    fn lot_at(location: &str, config: Config) -> (ParkingLot, Arc<ManualClock>) {
        let start = Timestamp::from_ymd_hms(2025, 1, 8, 9, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let lot = ParkingLot::with_parts(
            location,
            config,
            Arc::new(IdAllocator::new()),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        (lot, clock)
    }

    fn mall() -> (ParkingLot, Arc<ManualClock>) {
        let (mut lot, clock) = lot_at("mall", Config::default());
        lot.add_spots("car", 5).unwrap();
        lot.add_spots("motorcycle", 5).unwrap();
        (lot, clock)
    }

    #[test]
    fn add_spots() {
        let (lot, _) = mall();
        assert_eq!(lot.spots().len(), 10);
        assert!(lot.spots().iter().all(ParkingSpot::is_free));
        assert_eq!(lot.spots()[0].spot_id().as_str(), "car-1");
        assert_eq!(lot.spots()[9].spot_id().as_str(), "motorcycle-5");
    }

    #[test]
    fn add_spots_rejects_zero() {
        let (mut lot, _) = mall();
        assert_eq!(
            lot.add_spots("bus", 0),
            Err(LotError::InvalidSpotCount { count: 0 })
        );
        assert_eq!(lot.spots().len(), 10);
    }

    #[test]
    fn repeated_batches_continue_numbering() {
        let (mut lot, _) = mall();
        let ids = lot.add_spots("car", 2).unwrap();
        assert_eq!(ids, vec![SpotId::from("car-6"), SpotId::from("car-7")]);
    }

    #[test]
    fn repeated_batches_restart_when_configured() {
        let (mut lot, _) = lot_at("mall", Config::new().continue_spot_numbering(false));
        lot.add_spots("car", 1).unwrap();
        let ids = lot.add_spots("car", 1).unwrap();
        assert_eq!(ids, vec![SpotId::from("car-1")]);

        let first = lot.park_vehicle(Vehicle::new("A", "car")).unwrap();
        let second = lot.park_vehicle(Vehicle::new("B", "car")).unwrap();
        assert_eq!(first.spot_id(), second.spot_id());

        lot.unpark_vehicle(second.ticket_id()).unwrap();
        assert_eq!(lot.free_spots(&VehicleType::Car), 1);
        lot.unpark_vehicle(first.ticket_id()).unwrap();
        assert_eq!(lot.free_spots(&VehicleType::Car), 2);
    }

    #[test]
    fn park_vehicle() {
        let (mut lot, _) = mall();
        let vehicle = Vehicle::new("JKL101", "car");
        let ticket = lot.park_vehicle(vehicle.clone()).unwrap();

        assert_eq!(ticket.vehicle(), &vehicle);
        assert_eq!(ticket.spot_id().as_str(), "car-1");
        assert_eq!(ticket.ticket_id(), TicketId::new(1));
        assert!(!lot.spot(ticket.spot_id()).unwrap().is_free());
        assert_eq!(lot.free_spots(&VehicleType::Car), 4);
        assert_eq!(lot.free_spots(&VehicleType::Motorcycle), 5);
    }

    #[test]
    fn park_is_first_fit() {
        let (mut lot, _) = mall();
        let a = lot.park_vehicle(Vehicle::new("A", "car")).unwrap();
        let b = lot.park_vehicle(Vehicle::new("B", "car")).unwrap();
        assert_eq!(b.spot_id().as_str(), "car-2");

        lot.unpark_vehicle(a.ticket_id()).unwrap();
        let c = lot.park_vehicle(Vehicle::new("C", "car")).unwrap();
        assert_eq!(c.spot_id().as_str(), "car-1");
    }

    #[test]
    fn park_without_capacity() {
        let (mut lot, _) = mall();
        let err = lot.park_vehicle(Vehicle::new("BUS1", "bus")).unwrap_err();
        assert_eq!(err, LotError::capacity_exceeded(VehicleType::Bus));

        for n in 0..5 {
            lot.park_vehicle(Vehicle::new(format!("M{n}"), "motorcycle"))
                .unwrap();
        }
        assert!(lot
            .park_vehicle(Vehicle::new("M5", "motorcycle"))
            .unwrap_err()
            .is_capacity());

        // Failed parks consume no ticket numbers.
        assert_eq!(lot.ids().peek_ticket(), TicketId::new(6));
    }

    #[test]
    fn unpark_vehicle() {
        let (mut lot, _) = mall();
        let ticket = lot.park_vehicle(Vehicle::new("MNO102", "car")).unwrap();
        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();

        assert_eq!(receipt.ticket(), &ticket);
        assert_eq!(receipt.receipt_id(), ReceiptId::new(1));
        assert_eq!(receipt.fee(), Fee::ZERO);
        assert!(lot.spot(ticket.spot_id()).unwrap().is_free());
        assert!(lot.ticket(ticket.ticket_id()).is_none());
        assert_eq!(lot.receipt(receipt.receipt_id()), Some(&receipt));
    }

    #[test]
    fn unpark_twice_is_rejected() {
        let (mut lot, _) = mall();
        let ticket = lot.park_vehicle(Vehicle::new("X", "car")).unwrap();
        lot.unpark_vehicle(ticket.ticket_id()).unwrap();

        assert_eq!(
            lot.unpark_vehicle(ticket.ticket_id()),
            Err(LotError::invalid_ticket(ticket.ticket_id()))
        );
        assert_eq!(
            lot.unpark_vehicle(TicketId::new(99)),
            Err(LotError::invalid_ticket(TicketId::new(99)))
        );
        assert_eq!(lot.receipts().count(), 1);
    }

    #[test]
    fn mall_bills_whole_hours() {
        let (mut lot, clock) = mall();
        let ticket = lot.park_vehicle(Vehicle::new("C1", "car")).unwrap();
        clock.advance(chrono::Duration::minutes(3 * 60 + 59)).unwrap();

        assert_eq!(lot.quote(ticket.ticket_id()), Ok(Fee::new(60)));
        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();
        assert_eq!(receipt.fee(), Fee::new(60));
        assert_eq!(receipt.exit_time().to_string(), "2025-01-08 12:59:00");
    }

    #[test]
    fn location_selects_policy() {
        let (mut lot, clock) = lot_at("Central Stadium", Config::default());
        assert_eq!(lot.fee_policy(), FeePolicy::Stadium);
        lot.add_spots("motorcycle", 1).unwrap();

        let ticket = lot.park_vehicle(Vehicle::new("M", "motorcycle")).unwrap();
        clock.advance_hours(4).unwrap();
        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();
        assert_eq!(receipt.fee(), Fee::new(30));
    }

    #[test]
    fn configured_policy_overrides_location() {
        let config = Config::new().fee_policy(FeePolicy::Base);
        let (mut lot, clock) = lot_at("airport", config);
        lot.add_spots("car", 1).unwrap();

        let ticket = lot.park_vehicle(Vehicle::new("C", "car")).unwrap();
        clock.advance_hours(1).unwrap();
        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();
        assert_eq!(receipt.fee(), Fee::new(20));
    }

    #[test]
    fn fall_back_does_not_strand_ticket() {
        let (mut lot, clock) = mall();
        let parse = |text: &str| {
            Timestamp::from_datetime(DateTime::parse_from_rfc3339(text).unwrap())
        };

        // Wall clock reads 01:50 EDT, then 01:10 EST on the repeated hour.
        clock.set(parse("2025-11-02T01:50:00-04:00"));
        let ticket = lot.park_vehicle(Vehicle::new("C", "car")).unwrap();
        clock.set(parse("2025-11-02T01:10:00-05:00"));

        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();
        assert_eq!(receipt.fee(), Fee::ZERO);
        assert_eq!(receipt.exit_time().to_string(), "2025-11-02 01:10:00");
        assert!(lot.spot(ticket.spot_id()).unwrap().is_free());
    }

    #[test]
    fn backwards_clock_bills_zero_hours() {
        let (mut lot, clock) = mall();
        let ticket = lot.park_vehicle(Vehicle::new("C", "car")).unwrap();
        clock.advance_hours(-3).unwrap();

        assert_eq!(lot.quote(ticket.ticket_id()), Ok(Fee::ZERO));
        let receipt = lot.unpark_vehicle(ticket.ticket_id()).unwrap();
        assert_eq!(receipt.fee(), Fee::ZERO);
        assert!(lot.ticket(ticket.ticket_id()).is_none());
        assert!(lot.spot(ticket.spot_id()).unwrap().is_free());
    }

    #[test]
    fn occupancy_summary() {
        let (mut lot, clock) = mall();
        let a = lot.park_vehicle(Vehicle::new("A", "car")).unwrap();
        lot.park_vehicle(Vehicle::new("B", "motorcycle")).unwrap();
        clock.advance_hours(2).unwrap();
        lot.unpark_vehicle(a.ticket_id()).unwrap();

        let occupancy = lot.occupancy();
        assert_eq!(occupancy.total, 10);
        assert_eq!(occupancy.occupied, 1);
        assert_eq!(occupancy.free, 9);
        assert_eq!(occupancy.open_tickets, 1);
        assert_eq!(occupancy.receipts_issued, 1);
        assert_eq!(occupancy.revenue, Fee::new(40));
    }

    #[test]
    fn open_tickets_are_ordered() {
        let (mut lot, _) = mall();
        for plate in ["A", "B", "C"] {
            lot.park_vehicle(Vehicle::new(plate, "car")).unwrap();
        }
        let ids: Vec<_> = lot
            .open_tickets()
            .iter()
            .map(|t| t.ticket_id().as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
