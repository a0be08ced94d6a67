use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use ticket_service::application::ticket_service::TicketService;
use ticket_service::domain::purchase::PurchasePolicy;
use ticket_service::error::TicketError;
use ticket_service::infrastructure::in_memory::{InMemoryPaymentGateway, InMemorySeatBooking};
use ticket_service::interfaces::csv::outcome_writer::{OutcomeWriter, PurchaseOutcome};
use ticket_service::interfaces::csv::purchase_reader::{PurchaseBatch, PurchaseReader};
use ticket_service::logger::init_cli_logger;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input purchases CSV file (order, account, type, tickets)
    input: PathBuf,

    /// JSON file with purchase limits, e.g. {"max_tickets": 25}
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Maximum number of tickets per order. Overrides the policy file.
    #[arg(long)]
    max_tickets: Option<u32>,

    /// Log every purchase decision
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut policy = match &cli.policy {
        Some(path) => PurchasePolicy::from_path(path).into_diagnostic()?,
        None => PurchasePolicy::default(),
    };
    if let Some(max_tickets) = cli.max_tickets {
        policy = PurchasePolicy::new(max_tickets).into_diagnostic()?;
    }
    debug!(max_tickets = policy.max_tickets, "purchase policy loaded");

    let payments = InMemoryPaymentGateway::new();
    let seats = InMemorySeatBooking::new();
    let service =
        TicketService::with_policy(Box::new(payments.clone()), Box::new(seats.clone()), policy);

    // Collect line items into orders
    let file = File::open(&cli.input).into_diagnostic()?;
    let mut batch = PurchaseBatch::new();
    for row in PurchaseReader::new(file).rows() {
        if let Err(e) = batch.record(row) {
            warn!("Error reading purchase: {}", e);
        }
    }
    if batch.is_empty() {
        warn!("No purchases found in {}", cli.input.display());
    }

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    let mut confirmed = 0usize;
    for order in batch.into_orders() {
        if let Some(reason) = order.rejection {
            warn!("Skipping order {}: {}", order.order, reason);
            let outcome = PurchaseOutcome::failed(order.order, order.account, reason);
            writer.write_outcome(&outcome).into_diagnostic()?;
            continue;
        }
        let outcome = match service
            .purchase_tickets(order.account, &order.requests)
            .await
        {
            Ok(receipt) => {
                debug!(
                    order = order.order,
                    cost = receipt.cost,
                    seats = receipt.seats,
                    "purchase confirmed"
                );
                confirmed += 1;
                PurchaseOutcome::confirmed(order.order, order.account, &receipt)
            }
            Err(e @ TicketError::InvalidPurchase(_)) => {
                debug!(order = order.order, reason = %e, "purchase rejected");
                PurchaseOutcome::from_error(order.order, order.account, &e)
            }
            Err(e) => {
                warn!("Error processing order {}: {}", order.order, e);
                PurchaseOutcome::from_error(order.order, order.account, &e)
            }
        };
        writer.write_outcome(&outcome).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    info!(
        confirmed,
        payments = payments.payments().await.len(),
        seats = seats.seats_reserved().await,
        "batch complete"
    );

    Ok(())
}
