//! Ticket and receipt number allocation.

use crate::types::{ReceiptId, TicketId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out ticket and receipt numbers.
///
/// The two sequences are independent, both start at 1 and grow by exactly 1
/// per issuance. Numbers are never reused while the allocator lives. Lots that
/// share an allocator (through an `Arc`) share the sequences.
#[derive(Debug)]
pub struct IdAllocator {
    /// Next ticket number.
    next_ticket: AtomicU64,
    /// Next receipt number.
    next_receipt: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first ticket and receipt are both 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(1, 1)
    }

    /// Creates an allocator resuming from the given next values.
    #[must_use]
    pub fn with_state(next_ticket: u64, next_receipt: u64) -> Self {
        Self {
            next_ticket: AtomicU64::new(next_ticket),
            next_receipt: AtomicU64::new(next_receipt),
        }
    }

    /// Allocates the next ticket ID.
    pub fn next_ticket(&self) -> TicketId {
        TicketId::new(self.next_ticket.fetch_add(1, Ordering::SeqCst))
    }

    /// Allocates the next receipt ID.
    pub fn next_receipt(&self) -> ReceiptId {
        ReceiptId::new(self.next_receipt.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the ticket ID the next call would hand out.
    #[must_use]
    pub fn peek_ticket(&self) -> TicketId {
        TicketId::new(self.next_ticket.load(Ordering::SeqCst))
    }

    /// Returns the receipt ID the next call would hand out.
    #[must_use]
    pub fn peek_receipt(&self) -> ReceiptId {
        ReceiptId::new(self.next_receipt.load(Ordering::SeqCst))
    }

    /// Restarts both sequences at 1.
    ///
    /// Only meant for test harnesses; lots still holding open tickets will
    /// see numbers collide.
    pub fn reset(&self) {
        self.next_ticket.store(1, Ordering::SeqCst);
        self.next_receipt.store(1, Ordering::SeqCst);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
