use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("document id must not be empty")]
    InvalidDocumentId,
    #[error("unknown gallery category: {0}")]
    UnknownCategory(String),
    #[error("page and page size must be positive, got page={page} page_size={page_size}")]
    InvalidPageBounds { page: u32, page_size: u32 },
    #[error("malformed image reference: {0}")]
    MalformedImageRef(String),
}
