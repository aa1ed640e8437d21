//! # Storage Layer
//!
//! The catalog persists to a flat text file, one pipe-delimited record per
//! line (see [`codec`]). Persistence is abstracted behind the
//! [`CatalogStore`] trait so the API layer can run against:
//!
//! - [`fs::FileStore`]: the production file-backed store
//! - [`memory::InMemoryStore`]: an in-memory buffer for tests
//!
//! Both backends share the same codec, so even memory-backed tests
//! exercise the on-disk text format.
//!
//! ## Load/save cycle
//!
//! Unlike a database, the whole catalog is loaded once at startup and
//! written back wholesale at shutdown (or after each scripted command).
//! A missing source is the first-run case and yields an empty catalog;
//! malformed lines are skipped on a best-effort basis, never fatal.
//! There is no partial-write atomicity: a crash mid-save can truncate
//! the file. Accepted for the current scope.

use crate::catalog::Catalog;
use crate::error::Result;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Load the full catalog, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Catalog>;

    /// Serialize the full catalog, replacing any previous contents.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
