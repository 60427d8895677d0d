//! Receipts for closed parking sessions.

use crate::time::Timestamp;
use crate::types::{Fee, ReceiptId};
use crate::ticket::ParkingTicket;
use serde::Serialize;
use std::fmt;

/// Record of a completed parking session.
///
/// Immutable once issued. A lot retains every receipt it has issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    receipt_id: ReceiptId,
    ticket: ParkingTicket,
    exit_time: Timestamp,
    fee: Fee,
}

impl Receipt {
    /// Creates a receipt closing `ticket`.
    #[must_use]
    pub fn new(
        receipt_id: ReceiptId,
        ticket: ParkingTicket,
        exit_time: Timestamp,
        fee: Fee,
    ) -> Self {
        Self {
            receipt_id,
            ticket,
            exit_time,
            fee,
        }
    }

    /// Returns the receipt number.
    #[must_use]
    pub fn receipt_id(&self) -> ReceiptId {
        self.receipt_id
    }

    /// Returns the ticket this receipt closed.
    #[must_use]
    pub fn ticket(&self) -> &ParkingTicket {
        &self.ticket
    }

    /// Returns when the vehicle left.
    #[must_use]
    pub fn exit_time(&self) -> Timestamp {
        self.exit_time
    }

    /// Returns the amount charged.
    #[must_use]
    pub fn fee(&self) -> Fee {
        self.fee
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receipt Number: {}", self.receipt_id)?;
        writeln!(f, "Entry Date-Time: {}", self.ticket.entry_time())?;
        writeln!(f, "Exit Date-Time: {}", self.exit_time)?;
        write!(f, "Parking Fees: {}", self.fee)
    }
}
