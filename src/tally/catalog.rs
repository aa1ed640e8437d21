//! The in-memory product catalog.
//!
//! The catalog is an explicit owned value: it is built by
//! [`crate::store::CatalogStore::load`] at startup, passed into command
//! functions, and flushed by `save` at shutdown. It keeps two invariants:
//!
//! - product ids are unique, and insertion order is preserved for listing
//! - `total_revenue` equals the sum of every product's `revenue` after
//!   every mutation
//!
//! [`Catalog::apply_sale`] is the one compound update in the system; it
//! validates before touching anything so a failed sale leaves the product
//! and the aggregate completely unchanged.

use crate::error::{Result, TallyError};
use crate::model::Product;
use rust_decimal::Decimal;

/// Maximum number of products the catalog holds.
pub const CAPACITY: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    total_revenue: Decimal,
}

/// Snapshot of a successfully recorded sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// The product after the sale was applied.
    pub product: Product,
    pub quantity: u32,
    pub amount: Decimal,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-validated products, recomputing the
    /// revenue aggregate. Used by the storage layer on load.
    pub fn from_products(products: Vec<Product>) -> Self {
        let total_revenue = products.iter().map(|p| p.revenue).sum();
        Self {
            products,
            total_revenue,
        }
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Append a product, preserving insertion order.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.find(product.id).is_some() {
            return Err(TallyError::DuplicateId(product.id));
        }
        if self.products.len() >= CAPACITY {
            return Err(TallyError::CapacityExceeded(CAPACITY));
        }
        self.total_revenue += product.revenue;
        self.products.push(product);
        Ok(())
    }

    /// Overwrite a product's stock level. Sale counters are untouched:
    /// a stock update is a correction, not a transaction.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) -> Result<&Product> {
        let product = self.find_mut(id).ok_or(TallyError::NotFound(id))?;
        product.quantity = quantity;
        Ok(product)
    }

    /// Record a sale of `quantity` units: decrement stock, bump the sale
    /// counters and both revenue figures together. All checks run before
    /// any field changes, so a rejected sale mutates nothing.
    pub fn apply_sale(&mut self, id: u32, quantity: u32) -> Result<Sale> {
        let product = self.find_mut(id).ok_or(TallyError::NotFound(id))?;
        if quantity > product.quantity {
            return Err(TallyError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }

        let amount = product.price * Decimal::from(quantity);
        product.quantity -= quantity;
        product.units_sold += u64::from(quantity);
        product.revenue += amount;
        let snapshot = product.clone();
        self.total_revenue += amount;

        Ok(Sale {
            product: snapshot,
            quantity,
            amount,
        })
    }

    /// All products in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
