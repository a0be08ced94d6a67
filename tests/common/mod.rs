#![allow(dead_code)]

use async_trait::async_trait;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use ticket_service::application::ticket_service::TicketService;
use ticket_service::domain::account::AccountId;
use ticket_service::domain::ports::{SeatReservationService, TicketPaymentService};
use ticket_service::error::{Result, TicketError};

pub const ACCOUNT_ID: i64 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Payment(u64, u32),
    Reservation(u64, u32),
}

/// Records payment and reservation calls in one shared log so tests can
/// check both what was called and in which order.
#[derive(Clone, Default)]
pub struct Journal {
    calls: Arc<Mutex<Vec<Call>>>,
    decline_payments: bool,
    refuse_reservations: bool,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declining_payments() -> Self {
        Self {
            decline_payments: true,
            ..Self::default()
        }
    }

    pub fn refusing_reservations() -> Self {
        Self {
            refuse_reservations: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn service(&self) -> TicketService {
        TicketService::new(Box::new(self.clone()), Box::new(self.clone()))
    }
}

#[async_trait]
impl TicketPaymentService for Journal {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<()> {
        if self.decline_payments {
            return Err(TicketError::Payment("card declined".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Payment(account_id.value(), amount));
        Ok(())
    }
}

#[async_trait]
impl SeatReservationService for Journal {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<()> {
        if self.refuse_reservations {
            return Err(TicketError::Reservation("venue full".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Reservation(account_id.value(), seats));
        Ok(())
    }
}

/// Writes `orders` valid orders of one adult and one child each.
pub fn generate_csv(path: &Path, orders: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "account", "type", "tickets"])?;

    for i in 1..=orders {
        let order = i.to_string();
        wtr.write_record([order.as_str(), "1", "adult", "1"])?;
        wtr.write_record([order.as_str(), "1", "child", "1"])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn purchases_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "order, account, type, tickets").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}
