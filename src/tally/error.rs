use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("Product with ID {0} already exists")]
    DuplicateId(u32),

    #[error("Catalog is full ({0} products)")]
    CapacityExceeded(usize),

    #[error("Not enough stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
