use crate::domain::account::AccountId;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A payment gateway that accepts every charge and remembers it.
///
/// Clones share the same record, so a caller can keep one handle while the
/// service owns another. Useful for tests and dry runs.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    payments: Arc<RwLock<Vec<(AccountId, u32)>>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charges taken so far, oldest first.
    pub async fn payments(&self) -> Vec<(AccountId, u32)> {
        self.payments.read().await.clone()
    }

    /// Sum of every charge taken, per account.
    pub async fn total_for(&self, account_id: AccountId) -> u64 {
        self.payments
            .read()
            .await
            .iter()
            .filter(|(id, _)| *id == account_id)
            .map(|(_, amount)| u64::from(*amount))
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryPaymentGateway {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.push((account_id, amount));
        debug!(account = %account_id, amount, "payment taken");
        Ok(())
    }
}

/// A seat booking system that accepts every reservation and remembers it.
#[derive(Default, Clone)]
pub struct InMemorySeatBooking {
    reservations: Arc<RwLock<Vec<(AccountId, u32)>>>,
}

impl InMemorySeatBooking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reservations made so far, oldest first.
    pub async fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.reservations.read().await.clone()
    }

    pub async fn seats_reserved(&self) -> u64 {
        self.reservations
            .read()
            .await
            .iter()
            .map(|(_, seats)| u64::from(*seats))
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatBooking {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<()> {
        let mut reservations = self.reservations.write().await;
        reservations.push((account_id, seats));
        debug!(account = %account_id, seats, "seats reserved");
        Ok(())
    }
}
