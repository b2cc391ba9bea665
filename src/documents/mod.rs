pub mod documents_model;
pub mod documents_service;

pub use documents_model::{DocumentPayload, DocumentType, LetterRequest};
pub use documents_service::DocumentService;
