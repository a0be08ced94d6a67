use thiserror::Error;

/// Reasons a purchase is refused before any collaborator is contacted.
///
/// The display text of each variant is the message reported to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    #[error("accountId required")]
    AccountIdRequired,
    #[error("Invalid accountId")]
    InvalidAccountId,
    #[error("Minimum of 1 ticket required")]
    MinimumTickets,
    #[error("Maximum of {max} tickets")]
    MaximumTickets { max: u32 },
    #[error("Adult ticket required in order to buy child or infant tickets")]
    AdultRequired,
    #[error("One adult ticket is required for each infant ticket")]
    InfantsExceedAdults,
}

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("{0}")]
    InvalidPurchase(#[from] InvalidPurchase),
    #[error("Payment error: {0}")]
    Payment(String),
    #[error("Reservation error: {0}")]
    Reservation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Batch error: {0}")]
    Batch(String),
    #[error("Malformed row in order {order}: {reason}")]
    MalformedRow {
        order: u32,
        account: Option<i64>,
        reason: String,
    },
}

impl From<serde_json::Error> for TicketError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_purchase_messages() {
        assert_eq!(
            InvalidPurchase::AccountIdRequired.to_string(),
            "accountId required"
        );
        assert_eq!(
            InvalidPurchase::MaximumTickets { max: 25 }.to_string(),
            "Maximum of 25 tickets"
        );
    }

    #[test]
    fn test_invalid_purchase_keeps_message_when_wrapped() {
        let err: TicketError = InvalidPurchase::InfantsExceedAdults.into();
        assert_eq!(
            err.to_string(),
            "One adult ticket is required for each infant ticket"
        );
    }
}
