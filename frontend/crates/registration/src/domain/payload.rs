//! Registration Payloads
//!
//! Request bodies for the two registration endpoints. Only the fields of
//! the active mode exist on each type, so an applicant payload can never
//! carry `descripcion` and vice versa.

use chrono::NaiveDate;
use serde::Serialize;

use super::value_object::{email::Email, gender::Gender, user_type::UserType};

/// Body of `POST /auth/register/candidato`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantPayload {
    pub email: Email,
    pub password: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "genero")]
    pub gender: Gender,
    /// Serialized as `YYYY-MM-DD`
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
}

/// Body of `POST /auth/register/empresa`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationPayload {
    pub email: Email,
    pub password: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl std::fmt::Debug for ApplicantPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicantPayload")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("gender", &self.gender)
            .field("birth_date", &self.birth_date)
            .finish()
    }
}

impl std::fmt::Debug for OrganizationPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationPayload")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Payload for whichever mode was active at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RegistrationPayload {
    Applicant(ApplicantPayload),
    Organization(OrganizationPayload),
}

impl RegistrationPayload {
    pub fn user_type(&self) -> UserType {
        match self {
            RegistrationPayload::Applicant(_) => UserType::Applicant,
            RegistrationPayload::Organization(_) => UserType::Organization,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            RegistrationPayload::Applicant(p) => p.email.as_str(),
            RegistrationPayload::Organization(p) => p.email.as_str(),
        }
    }
}
