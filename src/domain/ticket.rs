use serde::{Deserialize, Serialize};

/// The categories of ticket on sale.
///
/// Each category has a fixed unit price and states whether the holder
/// occupies a seat. Infants sit on an adult's lap.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Unit price in whole pounds.
    pub const fn price(self) -> u32 {
        match self {
            Self::Adult => 25,
            Self::Child => 15,
            Self::Infant => 0,
        }
    }

    pub const fn requires_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

/// A single line item: some number of tickets of one category.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    number_of_tickets: u32,
}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, number_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            number_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn number_of_tickets(&self) -> u32 {
        self.number_of_tickets
    }

    pub fn cost(&self) -> u32 {
        self.number_of_tickets
            .saturating_mul(self.ticket_type.price())
    }

    pub fn seats(&self) -> u32 {
        if self.ticket_type.requires_seat() {
            self.number_of_tickets
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost() {
        let request = TicketTypeRequest::new(TicketType::Adult, 3);
        assert_eq!(request.cost(), 75);
    }

    #[test]
    fn test_seats() {
        let request = TicketTypeRequest::new(TicketType::Child, 4);
        assert_eq!(request.seats(), 4);
    }

    #[test]
    fn test_infant_needs_no_seat() {
        let request = TicketTypeRequest::new(TicketType::Infant, 4);
        assert_eq!(request.seats(), 0);
        assert_eq!(request.cost(), 0);
    }

    #[test]
    fn test_ticket_type_deserialization() {
        let parsed: TicketType = serde_json::from_str("\"child\"").unwrap();
        assert_eq!(parsed, TicketType::Child);
        assert!(serde_json::from_str::<TicketType>("\"senior\"").is_err());
    }
}
