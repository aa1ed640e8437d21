//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! every UI. The facade owns the loaded catalog and its store: the catalog
//! is read once on construction and written back by [`TallyApi::save`].
//!
//! The facade does no business logic of its own, performs no console I/O,
//! and returns structured `Result<CmdResult>` values throughout. Generic
//! over [`CatalogStore`] so tests can run on
//! [`crate::store::memory::InMemoryStore`] while production uses
//! [`crate::store::fs::FileStore`].

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::store::CatalogStore;

pub struct TallyApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
}

impl<S: CatalogStore> TallyApi<S> {
    /// Load the catalog from the store. A store with nothing saved yet
    /// yields an empty catalog.
    pub fn load(store: S) -> Result<Self> {
        let catalog = store.load()?;
        Ok(Self { store, catalog })
    }

    pub fn add_product(&mut self, request: commands::NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, request)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn update_stock(&mut self, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::stock::run(&mut self.catalog, id, quantity)
    }

    pub fn record_sale(&mut self, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::sale::run(&mut self.catalog, id, quantity)
    }

    pub fn search_product(&self, id: u32) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, id)
    }

    /// Flush the catalog back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewProduct};
