use crate::error::{Result, TallyError};
use rust_decimal::Decimal;

/// Maximum displayable length of a product name. The legacy data format
/// reserved 50 bytes per name including the terminator.
pub const NAME_MAX_LEN: usize = 49;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Current stock on hand.
    pub quantity: u32,
    /// Cumulative units sold since creation.
    pub units_sold: u64,
    /// Cumulative revenue from this product.
    pub revenue: Decimal,
}

impl Product {
    /// Create a fresh product with zeroed sale counters.
    pub fn new(id: u32, name: String, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            units_sold: 0,
            revenue: Decimal::ZERO,
        }
    }

    /// Validate a product name against the persisted format's constraints.
    ///
    /// The data file is pipe-delimited with one record per line, so a name
    /// containing `|` or a newline would corrupt the record on the next
    /// load. Such names are rejected up front rather than escaped.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(TallyError::InvalidInput(
                "Product name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(TallyError::InvalidInput(format!(
                "Product name is too long (max {} characters)",
                NAME_MAX_LEN
            )));
        }
        if name.contains('|') || name.contains('\n') || name.contains('\r') {
            return Err(TallyError::InvalidInput(
                "Product name cannot contain '|' or line breaks".to_string(),
            ));
        }
        Ok(())
    }
}
