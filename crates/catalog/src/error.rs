use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to load {url} ({status})")]
    Http { url: String, status: u16 },
    #[error("expected an array in {source_name}")]
    NotAnArray { source_name: String },
    #[error("catalog data corrupt: {0}")]
    Corrupt(String),
    #[error("duplicate id {id:?} in category {category}")]
    DuplicateId { category: String, id: String },
    #[error("record without id in category {category} (position {position})")]
    MissingId { category: String, position: usize },
    #[error("catalog io error: {0}")]
    Io(String),
}
