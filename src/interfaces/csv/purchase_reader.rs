use crate::domain::ticket::{TicketType, TicketTypeRequest};
use crate::error::{Result, TicketError};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// One CSV line: a line item belonging to an order.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PurchaseRow {
    pub order: u32,
    pub account: Option<i64>,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub tickets: u32,
}

/// Reads purchase line items from a CSV source.
///
/// Expects the header `order, account, type, tickets`. Whitespace is trimmed
/// and records may be short; a missing `account` reads as absent.
pub struct PurchaseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PurchaseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows; a malformed line yields an `Err` and the
    /// iterator carries on with the next one.
    ///
    /// When the order number of a malformed line is still readable the error
    /// is [`TicketError::MalformedRow`], so the whole order can be failed.
    pub fn rows(mut self) -> impl Iterator<Item = Result<PurchaseRow>> {
        let headers = self.reader.headers().ok().cloned();
        self.reader.into_records().map(move |record| {
            let record = record?;
            let row: std::result::Result<PurchaseRow, csv::Error> =
                record.deserialize(headers.as_ref());
            row.map_err(|e| match parse_field::<u32>(&record, 0) {
                Some(order) => TicketError::MalformedRow {
                    order,
                    account: parse_field(&record, 1),
                    reason: e.to_string(),
                },
                None => TicketError::from(e),
            })
        })
    }
}

fn parse_field<T: std::str::FromStr>(record: &csv::StringRecord, index: usize) -> Option<T> {
    record.get(index).and_then(|field| field.parse().ok())
}

/// All line items of one order, in file order.
///
/// `rejection` is set when any row of the order was malformed or named
/// another account; such an order must not be purchased at all.
#[derive(Debug, PartialEq, Clone)]
pub struct PurchaseOrder {
    pub order: u32,
    pub account: Option<i64>,
    pub requests: Vec<TicketTypeRequest>,
    pub rejection: Option<String>,
}

impl PurchaseOrder {
    fn new(order: u32, account: Option<i64>) -> Self {
        Self {
            order,
            account,
            requests: Vec::new(),
            rejection: None,
        }
    }
}

/// Groups rows into orders, keeping orders in order of first appearance.
#[derive(Debug, Default)]
pub struct PurchaseBatch {
    orders: Vec<PurchaseOrder>,
    index: HashMap<u32, usize>,
}

impl PurchaseBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one result from [`PurchaseReader::rows`] into the batch.
    ///
    /// A malformed row fails its whole order. Errors are returned for
    /// reporting; one whose order is unknown leaves the batch untouched.
    pub fn record(&mut self, row: Result<PurchaseRow>) -> Result<()> {
        match row {
            Ok(row) => self.add(row),
            Err(e @ TicketError::MalformedRow { order, account, .. }) => {
                self.reject(order, account, e.to_string());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Adds a row to its order. The account is fixed by the order's first
    /// row; a row naming another account fails the whole order.
    pub fn add(&mut self, row: PurchaseRow) -> Result<()> {
        let order = self.entry(row.order, row.account);
        if order.rejection.is_some() {
            return Ok(());
        }
        if order.account != row.account {
            let reason = format!(
                "order {} belongs to account {}, not {}",
                row.order,
                describe_account(order.account),
                describe_account(row.account)
            );
            order.rejection = Some(TicketError::Batch(reason.clone()).to_string());
            return Err(TicketError::Batch(reason));
        }
        order
            .requests
            .push(TicketTypeRequest::new(row.ticket_type, row.tickets));
        Ok(())
    }

    /// Fails an order. Only the first reason is kept.
    pub fn reject(&mut self, order: u32, account: Option<i64>, reason: String) {
        let order = self.entry(order, account);
        order.rejection.get_or_insert(reason);
    }

    fn entry(&mut self, order: u32, account: Option<i64>) -> &mut PurchaseOrder {
        let position = *self.index.entry(order).or_insert_with(|| {
            self.orders.push(PurchaseOrder::new(order, account));
            self.orders.len() - 1
        });
        &mut self.orders[position]
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn into_orders(self) -> Vec<PurchaseOrder> {
        self.orders
    }
}

fn describe_account(account: Option<i64>) -> String {
    account.map_or_else(|| "<none>".to_string(), |id| id.to_string())
}
