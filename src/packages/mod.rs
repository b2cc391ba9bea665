pub mod packages_model;
pub mod packages_service;

pub use packages_model::{MultiMeetingPackage, PackageEvent, PackageEventConfig, PackageSummary};
pub use packages_service::PackageService;
