//! User Type Value Object
//!
//! The registration mode. Exactly one is active on a form at any time.

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum UserType {
    /// Individual job seeker
    #[default]
    #[serde(rename = "candidato")]
    #[display("candidato")]
    Applicant,
    /// Employer
    #[serde(rename = "empresa")]
    #[display("empresa")]
    Organization,
}

impl UserType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserType::Applicant => "candidato",
            UserType::Organization => "empresa",
        }
    }
}
