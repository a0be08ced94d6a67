use super::account::AccountId;
use crate::error::Result;
use async_trait::async_trait;

/// Takes payment for a purchase.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<()>;
}

/// Holds seats for a purchase.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<()>;
}

pub type TicketPaymentServiceBox = Box<dyn TicketPaymentService>;
pub type SeatReservationServiceBox = Box<dyn SeatReservationService>;
