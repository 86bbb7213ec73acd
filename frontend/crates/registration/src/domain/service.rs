//! Service Traits
//!
//! Interface to the registration backend. Implementation is in the
//! infrastructure layer.

use crate::domain::payload::{ApplicantPayload, OrganizationPayload};
use crate::error::RegistrationResult;

/// Registration service trait
#[trait_variant::make(RegistrationService: Send)]
pub trait LocalRegistrationService {
    /// Create an applicant (candidato) account
    async fn register_applicant(&self, payload: &ApplicantPayload) -> RegistrationResult<()>;

    /// Create an organization (empresa) account
    async fn register_organization(&self, payload: &OrganizationPayload) -> RegistrationResult<()>;
}
