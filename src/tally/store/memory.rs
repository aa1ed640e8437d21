use super::{codec, CatalogStore};
use crate::catalog::Catalog;
use crate::error::Result;

/// In-memory catalog store for tests.
///
/// Backed by a plain string in the same text format as [`super::fs::FileStore`],
/// so the codec runs on every load/save cycle.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    buffer: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw file contents, as if a previous run had
    /// written them.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            buffer: Some(contents.into()),
        }
    }

    /// The raw serialized contents, if a save has happened.
    pub fn contents(&self) -> Option<&str> {
        self.buffer.as_deref()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        match &self.buffer {
            Some(text) => Ok(codec::decode_catalog(text)),
            None => Ok(Catalog::new()),
        }
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.buffer = Some(codec::encode_catalog(catalog));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_loads_empty() {
        assert!(InMemoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn seeded_store_parses_contents() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|10|0|0.00\n");
        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].name, "Widget");
    }
}
