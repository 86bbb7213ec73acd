//! Field Rules
//!
//! Validator sets are constants. Switching modes never mutates a rule set;
//! [`validator_set`] picks the one that applies.
//!
//! ## Rule sets
//! - Common: email, password, confirmPassword, nombre, terms
//! - Applicant: apellido, gender, birthDate
//! - Organization: descripcion
//!
//! Format rules skip empty input; presence is the job of the required rule.

use chrono::NaiveDate;

use super::value_object::{
    birth_date::{MINIMUM_AGE, is_at_least, parse_birth_date},
    email::is_valid_email,
    field::Field,
    gender::Gender,
    person_name::is_letters_only,
    user_type::UserType,
};

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Value of a field as the rules see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    Text(&'a str),
    Flag(bool),
}

/// A single check attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty text
    Required,
    /// Checked flag
    RequiredTrue,
    Email,
    MinLength(usize),
    LettersOnly,
    /// One of the known genders
    GenderChoice,
    /// Parses as a `YYYY-MM-DD` date
    CalendarDate,
    MinimumAge(i32),
}

/// Why a field is invalid
///
/// Variant order is message priority: when several rules fail, the first
/// failure in this order decides the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Failure {
    Required,
    Email,
    MinLength { min: usize, actual: usize },
    LettersOnly,
    Underage { min_age: i32 },
    InvalidDate,
    InvalidOption,
}

impl Failure {
    /// Message shown under the field
    pub fn message(&self, field: Field) -> String {
        match self {
            Failure::Required => format!("{} es requerido", field.id()),
            Failure::Email => "Formato de email inválido".to_string(),
            Failure::MinLength { min, .. } => {
                format!("Contraseña debe tener al menos {min} caracteres")
            }
            Failure::LettersOnly => "Solo se permiten letras".to_string(),
            Failure::Underage { min_age } => format!("Debes ser mayor de {min_age} años"),
            Failure::InvalidDate => "Fecha de nacimiento inválida".to_string(),
            Failure::InvalidOption => "Opción inválida".to_string(),
        }
    }
}

impl Rule {
    /// Run the rule against one input
    pub fn check(&self, input: FieldInput<'_>, today: NaiveDate) -> Option<Failure> {
        match (self, input) {
            (Rule::Required, FieldInput::Text(text)) => {
                text.is_empty().then_some(Failure::Required)
            }
            (Rule::Required, FieldInput::Flag(_)) => None,
            (Rule::RequiredTrue, FieldInput::Flag(checked)) => {
                (!checked).then_some(Failure::Required)
            }
            (Rule::RequiredTrue, FieldInput::Text(text)) => {
                (text != "true").then_some(Failure::Required)
            }
            (_, FieldInput::Flag(_)) => None,
            (_, FieldInput::Text("")) => None,
            (Rule::Email, FieldInput::Text(text)) => {
                (!is_valid_email(text)).then_some(Failure::Email)
            }
            (Rule::MinLength(min), FieldInput::Text(text)) => {
                let actual = text.chars().count();
                (actual < *min).then_some(Failure::MinLength { min: *min, actual })
            }
            (Rule::LettersOnly, FieldInput::Text(text)) => {
                (!is_letters_only(text)).then_some(Failure::LettersOnly)
            }
            (Rule::GenderChoice, FieldInput::Text(text)) => {
                Gender::parse(text).is_none().then_some(Failure::InvalidOption)
            }
            (Rule::CalendarDate, FieldInput::Text(text)) => {
                parse_birth_date(text).is_none().then_some(Failure::InvalidDate)
            }
            (Rule::MinimumAge(min_age), FieldInput::Text(text)) => match parse_birth_date(text) {
                Some(birth) if !is_at_least(birth, today, *min_age) => {
                    Some(Failure::Underage { min_age: *min_age })
                }
                // unparseable dates are reported by CalendarDate
                _ => None,
            },
        }
    }
}

/// Rules attached to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

/// Always active, whatever the mode
pub const COMMON_RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::Email,
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRules {
        field: Field::Password,
        rules: &[Rule::Required, Rule::MinLength(PASSWORD_MIN_LENGTH)],
    },
    FieldRules {
        field: Field::ConfirmPassword,
        rules: &[Rule::Required],
    },
    FieldRules {
        field: Field::Name,
        rules: &[Rule::Required],
    },
    FieldRules {
        field: Field::Terms,
        rules: &[Rule::RequiredTrue],
    },
];

pub const APPLICANT_RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::Surname,
        rules: &[Rule::Required, Rule::LettersOnly],
    },
    FieldRules {
        field: Field::Gender,
        rules: &[Rule::Required, Rule::GenderChoice],
    },
    FieldRules {
        field: Field::BirthDate,
        rules: &[Rule::Required, Rule::CalendarDate, Rule::MinimumAge(MINIMUM_AGE)],
    },
];

pub const ORGANIZATION_RULES: &[FieldRules] = &[FieldRules {
    field: Field::Description,
    rules: &[Rule::Required],
}];

/// Rules active for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorSet {
    pub user_type: UserType,
    specific: &'static [FieldRules],
}

/// Pick the validator set for a mode
pub const fn validator_set(user_type: UserType) -> ValidatorSet {
    let specific = match user_type {
        UserType::Applicant => APPLICANT_RULES,
        UserType::Organization => ORGANIZATION_RULES,
    };
    ValidatorSet {
        user_type,
        specific,
    }
}

impl ValidatorSet {
    /// Every field with at least one active rule
    pub fn entries(&self) -> impl Iterator<Item = &'static FieldRules> {
        COMMON_RULES.iter().chain(self.specific.iter())
    }

    /// Active rules for `field`; empty when the field is not validated
    pub fn rules_for(&self, field: Field) -> &'static [Rule] {
        self.entries()
            .find(|entry| entry.field == field)
            .map(|entry| entry.rules)
            .unwrap_or(&[])
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.rules_for(field)
            .iter()
            .any(|rule| matches!(rule, Rule::Required | Rule::RequiredTrue))
    }

    /// All failures of `field`, sorted by message priority
    pub fn check(&self, field: Field, input: FieldInput<'_>, today: NaiveDate) -> Vec<Failure> {
        let mut failures: Vec<Failure> = self
            .rules_for(field)
            .iter()
            .filter_map(|rule| rule.check(input, today))
            .collect();
        failures.sort();
        failures
    }
}
