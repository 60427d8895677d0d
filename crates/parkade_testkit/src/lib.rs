//! # Parkade Testkit
//!
//! Test utilities for Parkade.
//!
//! This crate provides:
//! - Lot fixtures on a manual clock
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parkade_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_lot() {
//!     let lot = TestLot::stocked("mall", &[("car", 5)]);
//!     // ... test operations
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
