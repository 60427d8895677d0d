//! # Parkade Core
//!
//! In-memory parking-lot engine.
//!
//! This crate provides:
//! - Spot inventory with first-fit allocation
//! - Ticket issuance at entry and receipt issuance at exit
//! - Venue fee policies (base, mall, stadium, airport)
//! - Explicit ticket/receipt numbering and injectable clocks
//! - A lock-guarded lot handle and a multi-lot registry
//!
//! ```rust
//! use parkade_core::{FeeCalculator, FeePolicy, VehicleType};
//!
//! let airport = FeeCalculator::new(FeePolicy::Airport);
//! assert_eq!(airport.calculate_fee(&VehicleType::Bus, 28).amount(), 1400);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod fee;
mod ids;
mod lot;
mod receipt;
mod registry;
mod shared;
mod spot;
mod ticket;
mod time;
mod types;
mod vehicle;

pub use config::Config;
pub use error::{LotError, LotResult};
pub use fee::{FeeCalculator, FeePolicy, RateTable};
pub use ids::IdAllocator;
pub use lot::{Occupancy, ParkingLot};
pub use receipt::Receipt;
pub use registry::LotRegistry;
pub use shared::SharedLot;
pub use spot::ParkingSpot;
pub use ticket::ParkingTicket;
pub use time::{Clock, ManualClock, SystemClock, Timestamp, TIMESTAMP_FORMAT};
pub use types::{Fee, ReceiptId, SpotId, TicketId};
pub use vehicle::{Vehicle, VehicleType};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
