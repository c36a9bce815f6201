use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use minishop_orders::application::service::OrderService;
use minishop_orders::config::{ConfigArgs, ServiceConfig};
use minishop_orders::domain::order::Order;
use minishop_orders::domain::payment::PaymentRequest;
use minishop_orders::domain::ports::OrderStoreBox;
use minishop_orders::infrastructure::http::HttpPaymentGateway;
use minishop_orders::infrastructure::in_memory::InMemoryOrderStore;
use minishop_orders::infrastructure::sqlite::SqliteOrderStore;
use minishop_orders::infrastructure::tracing_events::TracingEventPublisher;
use minishop_orders::interfaces::csv::order_reader::OrderReader;
use minishop_orders::interfaces::csv::order_writer::OrderWriter;
use minishop_orders::logging::init_logging;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create one order and print it
    Create {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        user_id: i32,
        #[arg(long)]
        product_id: i32,
        #[arg(long)]
        quantity: i32,
        #[arg(long)]
        total: Decimal,
    },
    /// Print every order of a user
    List {
        #[arg(long)]
        user_id: i32,
    },
    /// Create every order listed in a CSV file
    Import {
        /// CSV with an id,user_id,product_id,quantity,total header
        input: PathBuf,
    },
    /// Charge a card through the payment API
    Pay {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        card_token: String,
    },
}

async fn build_service(config: &ServiceConfig) -> Result<OrderService> {
    let order_store: OrderStoreBox = if let Some(database_url) = &config.database_url {
        Box::new(SqliteOrderStore::connect(database_url).await.into_diagnostic()?)
    } else {
        warn!("No database URL configured. Using in-memory storage; orders will not outlive this run.");
        Box::new(InMemoryOrderStore::new())
    };

    let gateway = HttpPaymentGateway::new(&config.payment_url).into_diagnostic()?;

    Ok(OrderService::new(
        order_store,
        Box::new(gateway),
        Box::new(TracingEventPublisher::new()),
    ))
}

fn print_orders(orders: Vec<Order>) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(orders).into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::from(cli.config);
    init_logging(&config.log_level);
    config.validate().into_diagnostic()?;

    let service = build_service(&config).await?;

    match cli.command {
        Command::Create {
            id,
            user_id,
            product_id,
            quantity,
            total,
        } => {
            let order = Order::new(id, user_id, product_id, quantity, total);
            let created = service.create_order(order).await.into_diagnostic()?;
            print_orders(vec![created])?;
        }
        Command::List { user_id } => {
            let orders = service.orders_by_user(user_id).await.into_diagnostic()?;
            print_orders(orders)?;
        }
        Command::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = OrderReader::new(file);

            let mut created = Vec::new();
            for order_result in reader.orders() {
                match order_result {
                    Ok(order) => match service.create_order(order).await {
                        Ok(order) => created.push(order),
                        Err(e) => error!("Error creating order: {}", e),
                    },
                    Err(e) => error!("Error reading order: {}", e),
                }
            }
            print_orders(created)?;
        }
        Command::Pay { amount, card_token } => {
            let request = PaymentRequest::new(amount, card_token);
            let result = service.process_payment(request).await.into_diagnostic()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&result).into_diagnostic()?
            );
        }
    }

    Ok(())
}
