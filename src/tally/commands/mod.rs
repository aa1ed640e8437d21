//! Business logic for each operation.
//!
//! Every command is a pure validate-then-apply function over a
//! `&mut Catalog` (or `&Catalog` for reads) plus typed arguments, returning
//! a [`CmdResult`]. Nothing in here touches the console; the CLI side turns
//! results into output. A command that returns an error has not mutated
//! the catalog.

use crate::catalog::Sale;
use crate::model::Product;
use rust_decimal::Decimal;

pub mod add;
pub mod list;
pub mod sale;
pub mod search;
pub mod stock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created or mutated by the command.
    pub affected: Vec<Product>,
    /// Products returned by a read (list/search), in catalog order.
    pub listed: Vec<Product>,
    /// Catalog-wide revenue, when the command reports it.
    pub total_revenue: Option<Decimal>,
    /// Details of a recorded sale.
    pub sale: Option<Sale>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, products: Vec<Product>) -> Self {
        self.listed = products;
        self
    }

    pub fn with_total_revenue(mut self, total: Decimal) -> Self {
        self.total_revenue = Some(total);
        self
    }
}

/// Typed request for the add operation.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}
