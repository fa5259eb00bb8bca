use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("missing page element #{0}")]
    MissingElement(String),
}
