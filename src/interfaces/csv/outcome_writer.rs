use crate::domain::purchase::PurchaseReceipt;
use crate::error::{Result, TicketError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Confirmed,
    Rejected,
    Failed,
}

/// The result of one order, as written to the output CSV.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PurchaseOutcome {
    pub order: u32,
    pub account: Option<i64>,
    pub status: OutcomeStatus,
    pub cost: Option<u32>,
    pub seats: Option<u32>,
    pub reason: Option<String>,
}

impl PurchaseOutcome {
    pub fn confirmed(order: u32, account: Option<i64>, receipt: &PurchaseReceipt) -> Self {
        Self {
            order,
            account,
            status: OutcomeStatus::Confirmed,
            cost: Some(receipt.cost),
            seats: Some(receipt.seats),
            reason: None,
        }
    }

    /// An order that was never attempted, e.g. because one of its rows
    /// could not be read.
    pub fn failed(order: u32, account: Option<i64>, reason: impl Into<String>) -> Self {
        Self {
            order,
            account,
            status: OutcomeStatus::Failed,
            cost: None,
            seats: None,
            reason: Some(reason.into()),
        }
    }

    /// Validation failures become `rejected`, anything else `failed`.
    pub fn from_error(order: u32, account: Option<i64>, error: &TicketError) -> Self {
        let status = match error {
            TicketError::InvalidPurchase(_) => OutcomeStatus::Rejected,
            _ => OutcomeStatus::Failed,
        };
        Self {
            order,
            account,
            status,
            cost: None,
            seats: None,
            reason: Some(error.to_string()),
        }
    }
}

/// Writes purchase outcomes as CSV with the header
/// `order,account,status,cost,seats,reason`.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &PurchaseOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn write_outcomes<'a>(
        &mut self,
        outcomes: impl IntoIterator<Item = &'a PurchaseOutcome>,
    ) -> Result<()> {
        for outcome in outcomes {
            self.write_outcome(outcome)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
