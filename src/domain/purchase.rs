use super::account::AccountId;
use super::ticket::{TicketType, TicketTypeRequest};
use crate::error::{InvalidPurchase, TicketError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_TICKETS: u32 = 25;

/// Totals of every line item in one purchase.
///
/// Line items of the same category are summed, so `[Child=2, Child=2]`
/// combines to the same totals as `[Child=4]`. Building it never fails;
/// sums saturate rather than wrap, and a saturated total is always over
/// any ticket limit.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct CombinedTicketRequest {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub cost: u32,
    pub tickets: u32,
    pub seats: u32,
}

impl CombinedTicketRequest {
    pub fn of(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut combined, request| {
            let count = request.number_of_tickets();
            combined.cost = combined.cost.saturating_add(request.cost());
            combined.tickets = combined.tickets.saturating_add(count);
            combined.seats = combined.seats.saturating_add(request.seats());
            let category = match request.ticket_type() {
                TicketType::Adult => &mut combined.adults,
                TicketType::Child => &mut combined.children,
                TicketType::Infant => &mut combined.infants,
            };
            *category = category.saturating_add(count);
            combined
        })
    }
}

/// Purchase limits applied to every aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurchasePolicy {
    pub max_tickets: u32,
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

impl PurchasePolicy {
    pub fn new(max_tickets: u32) -> Result<Self, TicketError> {
        if max_tickets == 0 {
            return Err(TicketError::Config(
                "max_tickets must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_tickets })
    }

    /// Loads a policy from a JSON document such as `{"max_tickets": 20}`.
    pub fn from_json(json: &str) -> Result<Self, TicketError> {
        let policy: Self = serde_json::from_str(json)?;
        Self::new(policy.max_tickets)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TicketError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the aggregate against the purchase rules. The first broken
    /// rule is reported.
    pub fn validate(&self, combined: &CombinedTicketRequest) -> Result<(), InvalidPurchase> {
        if combined.tickets == 0 {
            return Err(InvalidPurchase::MinimumTickets);
        }
        if combined.tickets > self.max_tickets {
            return Err(InvalidPurchase::MaximumTickets {
                max: self.max_tickets,
            });
        }
        if combined.adults == 0 {
            return Err(InvalidPurchase::AdultRequired);
        }
        // Infants sit on an adult's lap, one infant per adult.
        if combined.infants > combined.adults {
            return Err(InvalidPurchase::InfantsExceedAdults);
        }
        Ok(())
    }
}

/// What a confirmed purchase was charged and reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub cost: u32,
    pub seats: u32,
    pub tickets: u32,
}
