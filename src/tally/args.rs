use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Command-line inventory and sales tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog data file (overrides the configured location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the catalog
    #[command(alias = "a")]
    Add {
        /// Unique product ID
        id: u32,

        /// Product name (no '|' or line breaks, max 49 characters)
        name: String,

        /// Unit price
        price: Decimal,

        /// Initial stock on hand
        quantity: u32,
    },

    /// List all products with stock and revenue figures
    #[command(alias = "ls")]
    List,

    /// Overwrite a product's stock level
    Stock {
        /// Product ID
        id: u32,

        /// New stock quantity
        quantity: u32,
    },

    /// Record a sale, decrementing stock and accumulating revenue
    Sell {
        /// Product ID
        id: u32,

        /// Units sold
        quantity: u32,
    },

    /// Show one product by ID
    Find {
        /// Product ID
        id: u32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
