//! Test fixtures and lot helpers.
//!
//! Provides lots wired to a manual clock so tests control elapsed time.

use parkade_core::{Clock, Config, IdAllocator, ManualClock, ParkingLot, Timestamp};
use std::sync::Arc;

/// Fixed start time for fixture clocks: 2025-01-08 09:00:00.
pub fn fixture_start() -> Timestamp {
    Timestamp::from_ymd_hms(2025, 1, 8, 9, 0, 0).expect("valid fixture timestamp")
}

/// A lot with a controllable clock and its own numbering.
pub struct TestLot {
    /// The lot instance.
    pub lot: ParkingLot,
    /// The clock the lot reads.
    pub clock: Arc<ManualClock>,
}

impl TestLot {
    /// Creates an empty lot at `location`.
    pub fn new(location: &str) -> Self {
        Self::with_config(location, Config::default())
    }

    /// Creates an empty lot with custom configuration.
    pub fn with_config(location: &str, config: Config) -> Self {
        let clock = Arc::new(ManualClock::new(fixture_start()));
        let lot = ParkingLot::with_parts(
            location,
            config,
            Arc::new(IdAllocator::new()),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        Self { lot, clock }
    }

    /// Creates a lot and adds each `(type, count)` batch in order.
    pub fn stocked(location: &str, batches: &[(&str, usize)]) -> Self {
        let mut fixture = Self::new(location);
        for (spot_type, count) in batches {
            fixture
                .lot
                .add_spots(*spot_type, *count)
                .expect("Failed to add fixture spots");
        }
        fixture
    }

    /// Moves the lot's clock forward.
    pub fn advance_hours(&self, hours: i64) {
        self.clock
            .advance_hours(hours)
            .expect("Failed to advance fixture clock");
    }
}

impl std::ops::Deref for TestLot {
    type Target = ParkingLot;

    fn deref(&self) -> &Self::Target {
        &self.lot
    }
}

impl std::ops::DerefMut for TestLot {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.lot
    }
}

/// Runs a test against the standard mall fixture (5 car, 5 motorcycle spots).
///
/// # Example
///
/// ```rust,ignore
/// use parkade_testkit::with_mall;
///
/// #[test]
/// fn my_test() {
///     with_mall(|lot| {
///         assert_eq!(lot.spots().len(), 10);
///     });
/// }
/// ```
pub fn with_mall<F, R>(f: F) -> R
where
    F: FnOnce(&mut TestLot) -> R,
{
    let mut fixture = TestLot::stocked("mall", &[("car", 5), ("motorcycle", 5)]);
    f(&mut fixture)
}
