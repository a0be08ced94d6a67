//! Domain types for ticket purchases: categories, line items, the combined
//! aggregate with its purchase rules, and the ports to the payment and seat
//! reservation collaborators.

pub mod account;
pub mod ports;
pub mod purchase;
pub mod ticket;
