mod shop;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the product query string the shop page would send, without any I/O
    Where {
        #[command(flatten)]
        filters: FilterArgs,
        /// Page size
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Run the shop query against the configured content store and print the cards
    Shop {
        #[command(flatten)]
        filters: FilterArgs,
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
    },
}

/// Shop filters, mirroring the `/shop` URL parameters.
#[derive(Debug, Clone, Default, Args)]
struct FilterArgs {
    /// Search text matched against title and description
    #[arg(long)]
    q: Option<String>,
    /// Category document ID
    #[arg(long)]
    category: Option<String>,
    /// Lower price bound; ignored unless it starts with a number
    #[arg(long, allow_hyphen_values = true)]
    min_price: Option<String>,
    /// Upper price bound; ignored unless it starts with a number
    #[arg(long, allow_hyphen_values = true)]
    max_price: Option<String>,
    /// Only products with inventory
    #[arg(long)]
    in_stock: bool,
    /// Sort key, e.g. `-priceInUSD`
    #[arg(long, allow_hyphen_values = true)]
    sort: Option<String>,
}

impl FilterArgs {
    /// The flags as `/shop` query pairs.
    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<&String>| {
            if let Some(value) = value {
                pairs.push((key.to_owned(), value.clone()));
            }
        };
        push("q", self.q.as_ref());
        push("category", self.category.as_ref());
        push("minPrice", self.min_price.as_ref());
        push("maxPrice", self.max_price.as_ref());
        push("sort", self.sort.as_ref());
        if self.in_stock {
            pairs.push(("inStock".to_owned(), "true".to_owned()));
        }
        pairs
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Where { filters, limit } => {
            println!("{}", shop::encode_where(&filters.to_pairs(), limit));
        }
        Commands::Shop { filters, page } => {
            let config = storefront_core::load_app_config()?;
            shop::run_shop(&config, &filters.to_pairs(), page).await?;
        }
    }

    Ok(())
}
