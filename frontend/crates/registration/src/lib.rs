//! Registration Module
//!
//! Clean Architecture structure:
//! - `domain/` - Form state, field rules, payloads, service trait
//! - `application/` - Form controller and configuration
//! - `infra/` - HTTP implementation of the registration service
//!
//! ## Features
//! - Two registration modes: applicant (candidato) and organization (empresa)
//! - Validator sets are constants; the active set is a function of the mode
//! - Field errors only surface once a field has been touched
//! - One submission in flight at a time

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::RegistrationConfig;
pub use application::controller::{RegistrationFormController, SubmitOutcome};
pub use error::{RegistrationError, RegistrationResult};
pub use infra::http::HttpRegistrationService;

pub mod models {
    pub use crate::domain::form::*;
    pub use crate::domain::payload::*;
    pub use crate::domain::validator::*;
    pub use crate::domain::value_object::*;
}
