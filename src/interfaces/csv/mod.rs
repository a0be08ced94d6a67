//! CSV adapters: purchase line items in, per-order outcomes out.

pub mod outcome_writer;
pub mod purchase_reader;
