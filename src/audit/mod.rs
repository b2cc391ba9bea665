pub mod audit_model;
pub mod audit_service;

pub use audit_model::{AuditEntry, GenerationMode, NewAuditEntry};
pub use audit_service::{AuditError, AuditLog};
