pub mod events_catalog;
pub mod events_errors;
pub mod events_model;

pub use events_catalog::EventCatalog;
pub use events_errors::CatalogError;
pub use events_model::EventRecord;
