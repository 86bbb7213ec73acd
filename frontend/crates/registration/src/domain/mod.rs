//! Domain Layer
//!
//! Form state, validation rules, payloads and the service trait.

pub mod form;
pub mod payload;
pub mod service;
pub mod validator;
pub mod value_object;

// Re-exports
pub use form::{FormValues, RegistrationForm, ValidationReport};
pub use payload::{ApplicantPayload, OrganizationPayload, RegistrationPayload};
pub use service::{LocalRegistrationService, RegistrationService};
pub use value_object::{field::Field, gender::Gender, user_type::UserType};
