//! Student domain entities.

pub mod model;

pub use model::{Activation, AttendeeProfile, ProvisionedStudent, Student};
