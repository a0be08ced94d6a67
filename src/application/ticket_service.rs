use crate::domain::account::AccountId;
use crate::domain::ports::{SeatReservationServiceBox, TicketPaymentServiceBox};
use crate::domain::purchase::{CombinedTicketRequest, PurchasePolicy, PurchaseReceipt};
use crate::domain::ticket::TicketTypeRequest;
use crate::error::Result;

/// The entry point for buying tickets.
///
/// `TicketService` owns the payment and seat reservation collaborators and
/// only contacts them once a purchase has passed every rule of its
/// [`PurchasePolicy`].
pub struct TicketService {
    payment_service: TicketPaymentServiceBox,
    reservation_service: SeatReservationServiceBox,
    policy: PurchasePolicy,
}

impl TicketService {
    /// Creates a new `TicketService` with the default purchase policy.
    ///
    /// # Arguments
    ///
    /// * `payment_service` - Takes payment for confirmed purchases.
    /// * `reservation_service` - Reserves seats for confirmed purchases.
    pub fn new(
        payment_service: TicketPaymentServiceBox,
        reservation_service: SeatReservationServiceBox,
    ) -> Self {
        Self::with_policy(payment_service, reservation_service, PurchasePolicy::default())
    }

    pub fn with_policy(
        payment_service: TicketPaymentServiceBox,
        reservation_service: SeatReservationServiceBox,
        policy: PurchasePolicy,
    ) -> Self {
        Self {
            payment_service,
            reservation_service,
            policy,
        }
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validates and prices a purchase, then pays for it and reserves its seats.
    ///
    /// Validation failures return [`TicketError::InvalidPurchase`] before
    /// either collaborator is called. Errors from the collaborators are
    /// returned unchanged; a failed payment means no reservation is attempted.
    ///
    /// [`TicketError::InvalidPurchase`]: crate::error::TicketError::InvalidPurchase
    pub async fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        ticket_requests: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt> {
        let account_id = AccountId::parse(account_id)?;
        let combined = CombinedTicketRequest::of(ticket_requests);
        self.policy.validate(&combined)?;

        self.payment_service
            .make_payment(account_id, combined.cost)
            .await?;
        self.reservation_service
            .reserve_seat(account_id, combined.seats)
            .await?;

        Ok(PurchaseReceipt {
            account_id,
            cost: combined.cost,
            seats: combined.seats,
            tickets: combined.tickets,
        })
    }
}
