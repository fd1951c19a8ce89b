//! # Cart Recipe Demo
//!
//! Applies a cart command against the configured storefront API and prints
//! the resulting cart. The cart is persisted between runs.
//!
//! ```bash
//! cart_recipe add 1 1 2
//! cart_recipe update 1 3
//! cart_recipe remove 2
//! cart_recipe show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn, Instrument};

use cart_recipe::cart_actor::UpdateProductAmount;
use cart_recipe::config::CartConfig;
use cart_recipe::lifecycle::{setup_tracing, CartSystem};
use cart_recipe::model::ProductId;
use cart_recipe::notice::{cart_size_label, CartOperation, Notice};

#[derive(Parser, Debug)]
#[command(name = "cart_recipe")]
#[command(version)]
#[command(about = "Storefront shopping cart backed by a remote catalog")]
struct Cli {
    /// Catalog base URL
    #[arg(long = "api-url", env = "CART_API_URL")]
    api_url: Option<String>,

    /// Directory holding the persisted cart
    #[arg(long = "store-dir", env = "CART_STORE_DIR")]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add one unit of each product, in order
    Add {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Remove each product from the cart
    Remove {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Request an amount for a product already in the cart
    Update {
        id: u32,

        #[arg(allow_negative_numbers = true)]
        amount: i32,
    },

    /// Print the cart without changing it
    Show,
}

#[derive(Debug)]
enum Command {
    Add(ProductId),
    Remove(ProductId),
    Update(UpdateProductAmount),
}

impl Commands {
    fn into_commands(self) -> Vec<Command> {
        match self {
            Commands::Add { ids } => ids.into_iter().map(|id| Command::Add(ProductId(id))).collect(),
            Commands::Remove { ids } => ids
                .into_iter()
                .map(|id| Command::Remove(ProductId(id)))
                .collect(),
            Commands::Update { id, amount } => vec![Command::Update(UpdateProductAmount::new(
                ProductId(id),
                amount,
            ))],
            Commands::Show => Vec::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let mut config = CartConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(store_dir) = cli.store_dir {
        config.store_dir = store_dir;
    }
    let commands = cli.command.into_commands();
    let system = CartSystem::new(&config);

    for command in commands {
        let span = tracing::info_span!("command", ?command);
        let (operation, result) = async {
            match command {
                Command::Add(id) => (CartOperation::Add, system.cart_client.add_product(id).await),
                Command::Remove(id) => (
                    CartOperation::Remove,
                    system.cart_client.remove_product(id).await,
                ),
                Command::Update(update) => (
                    CartOperation::UpdateAmount,
                    system.cart_client.update_product_amount(update).await,
                ),
            }
        }
        .instrument(span)
        .await;

        if let Err(e) = result {
            let notice = Notice::for_failure(operation, &e);
            warn!(error = %e, "{}", notice);
        }
    }

    let cart = system
        .cart_client
        .snapshot()
        .await
        .map_err(|e| e.to_string())?;

    println!("Meu carrinho: {}", cart_size_label(&cart));
    for item in cart.items() {
        println!(
            "  {:>4} x {} ({:.2}) = {:.2}",
            item.amount,
            item.name,
            item.price,
            item.line_total()
        );
    }
    println!("  total: {:.2}", cart.subtotal());

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
