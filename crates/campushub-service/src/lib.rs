//! # campushub-service
//!
//! Business logic for CampusHub. The registration service owns every state
//! transition on students and attendee sets; the roster service turns
//! tabular uploads into provisioned student stubs; the catalog service
//! handles event CRUD and photo URL materialization.

pub mod catalog;
pub mod registration;
pub mod roster;

pub use catalog::service::CatalogService;
pub use registration::service::RegistrationService;
pub use roster::service::RosterService;
