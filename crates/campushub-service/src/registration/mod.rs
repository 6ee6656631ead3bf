//! The registration core: account activation, login, event signup.

pub mod service;

pub use service::{ActivateStudent, LoginOutcome, RegistrationService};
