//! Gender Value Object

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Gender {
    #[serde(rename = "masculino")]
    #[display("masculino")]
    Male,
    #[serde(rename = "femenino")]
    #[display("femenino")]
    Female,
    #[serde(rename = "otro")]
    #[display("otro")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Gender::Male => "masculino",
            Gender::Female => "femenino",
            Gender::Other => "otro",
        }
    }

    /// Accepts the wire code or the English name, case-insensitively
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "masculino" | "male" => Some(Gender::Male),
            "femenino" | "female" => Some(Gender::Female),
            "otro" | "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Input that is not one of the known genders
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::parse(s).ok_or_else(|| UnknownGender(s.to_string()))
    }
}
