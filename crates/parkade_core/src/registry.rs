//! Lot registry.

use crate::config::Config;
use crate::error::{LotError, LotResult};
use crate::ids::IdAllocator;
use crate::lot::ParkingLot;
use crate::time::{Clock, SystemClock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Owns a set of lots keyed by location.
///
/// All lots opened through one registry draw ticket and receipt numbers from
/// the registry's allocator, so numbers are unique across them.
pub struct LotRegistry {
    ids: Arc<IdAllocator>,
    clock: Arc<dyn Clock>,
    lots: BTreeMap<String, ParkingLot>,
}

impl LotRegistry {
    /// Creates a registry on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a registry on a custom clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            ids: Arc::new(IdAllocator::new()),
            clock,
            lots: BTreeMap::new(),
        }
    }

    /// Returns the shared allocator.
    #[must_use]
    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    /// Opens a lot with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLocation` if a lot is already open there.
    pub fn open_lot(&mut self, location: &str) -> LotResult<&mut ParkingLot> {
        self.open_lot_with_config(location, Config::default())
    }

    /// Opens a lot with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLocation` if a lot is already open there.
    pub fn open_lot_with_config(
        &mut self,
        location: &str,
        config: Config,
    ) -> LotResult<&mut ParkingLot> {
        if self.lots.contains_key(location) {
            return Err(LotError::duplicate_location(location));
        }

        let lot = ParkingLot::with_parts(
            location,
            config,
            Arc::clone(&self.ids),
            Arc::clone(&self.clock),
        );
        info!(location, policy = %lot.fee_policy(), "lot opened");
        Ok(self.lots.entry(location.to_string()).or_insert(lot))
    }

    /// Returns the lot at `location`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if no lot is open there.
    pub fn lot(&self, location: &str) -> LotResult<&ParkingLot> {
        self.lots
            .get(location)
            .ok_or_else(|| LotError::unknown_location(location))
    }

    /// Returns the lot at `location` for mutation.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if no lot is open there.
    pub fn lot_mut(&mut self, location: &str) -> LotResult<&mut ParkingLot> {
        self.lots
            .get_mut(location)
            .ok_or_else(|| LotError::unknown_location(location))
    }

    /// Removes and returns the lot at `location`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if no lot is open there.
    pub fn close_lot(&mut self, location: &str) -> LotResult<ParkingLot> {
        let lot = self
            .lots
            .remove(location)
            .ok_or_else(|| LotError::unknown_location(location))?;
        info!(location, open_tickets = lot.occupancy().open_tickets, "lot closed");
        Ok(lot)
    }

    /// Returns the open locations in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.lots.keys().map(String::as_str)
    }
}

impl Default for LotRegistry {
    fn default() -> Self {
        Self::new()
    }
}
