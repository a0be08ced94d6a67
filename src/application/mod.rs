//! Application layer containing the purchase orchestration.
//!
//! This module defines the `TicketService` which validates a purchase and,
//! only once every rule passes, hands the totals to the payment and seat
//! reservation collaborators.

pub mod ticket_service;
