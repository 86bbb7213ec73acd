//! Registration Form
//!
//! Field values, touched flags and the active mode. Validation is computed
//! on demand from the validator set of the current mode; nothing is cached,
//! so a mode switch takes effect on the very next query.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::payload::{ApplicantPayload, OrganizationPayload, RegistrationPayload};
use super::validator::{Failure, FieldInput, ValidatorSet, validator_set};
use super::value_object::{
    birth_date::parse_birth_date, email::Email, field::Field, gender::Gender,
    user_type::UserType,
};
use crate::error::{RegistrationError, RegistrationResult};

/// Form-level (cross-field) failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormFailure {
    /// password and confirmPassword differ
    PasswordMismatch,
}

impl FormFailure {
    pub const fn message(&self) -> &'static str {
        match self {
            FormFailure::PasswordMismatch => "Las contraseñas no coinciden",
        }
    }
}

/// Raw input values, as typed by the user
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub birth_date: String,
    pub description: String,
    pub terms: bool,
}

impl FormValues {
    pub fn input(&self, field: Field) -> FieldInput<'_> {
        match field {
            Field::Email => FieldInput::Text(&self.email),
            Field::Password => FieldInput::Text(&self.password),
            Field::ConfirmPassword => FieldInput::Text(&self.confirm_password),
            Field::Name => FieldInput::Text(&self.name),
            Field::Surname => FieldInput::Text(&self.surname),
            Field::Gender => FieldInput::Text(&self.gender),
            Field::BirthDate => FieldInput::Text(&self.birth_date),
            Field::Description => FieldInput::Text(&self.description),
            Field::Terms => FieldInput::Flag(self.terms),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Name => Some(&mut self.name),
            Field::Surname => Some(&mut self.surname),
            Field::Gender => Some(&mut self.gender),
            Field::BirthDate => Some(&mut self.birth_date),
            Field::Description => Some(&mut self.description),
            Field::Terms => None,
        }
    }

    fn reset(&mut self, field: Field) {
        match self.text_mut(field) {
            Some(text) => text.clear(),
            None => self.terms = false,
        }
    }
}

impl std::fmt::Debug for FormValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValues")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("gender", &self.gender)
            .field("birth_date", &self.birth_date)
            .field("description", &self.description)
            .field("terms", &self.terms)
            .finish()
    }
}

/// Outcome of validating the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Failing fields with their failures, highest priority first
    pub fields: BTreeMap<Field, Vec<Failure>>,
    pub form: Vec<FormFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }

    /// Failure that decides the message of `field`
    pub fn primary(&self, field: Field) -> Option<Failure> {
        self.fields.get(&field).and_then(|failures| failures.first().copied())
    }

    /// One labelled message per failing field, plus form-level messages
    pub fn messages(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter_map(|&field| {
                self.primary(field)
                    .map(|failure| format!("{}: {}", field.label(), failure.message(field)))
            })
            .chain(self.form.iter().map(|f| f.message().to_string()))
            .collect()
    }
}

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    user_type: UserType,
    values: FormValues,
    touched: BTreeSet<Field>,
}

impl RegistrationForm {
    /// Empty form in applicant mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn validators(&self) -> ValidatorSet {
        validator_set(self.user_type)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Switch mode and clear the fields the new mode does not use
    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
        for field in Field::ALL {
            if !field.applies_to(user_type) {
                self.values.reset(field);
            }
        }
        tracing::debug!(user_type = %user_type, "Registration mode switched");
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> RegistrationResult<()> {
        let slot = self
            .values
            .text_mut(field)
            .ok_or(RegistrationError::NotATextField(field))?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.values.terms = accepted;
    }

    /// Mark a field as interacted with
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Failures of one field under the active rules
    pub fn field_failures(&self, field: Field, today: NaiveDate) -> Vec<Failure> {
        self.validators()
            .check(field, self.values.input(field), today)
    }

    pub fn form_failures(&self) -> Vec<FormFailure> {
        let mut failures = Vec::new();
        if self.values.password != self.values.confirm_password {
            failures.push(FormFailure::PasswordMismatch);
        }
        failures
    }

    pub fn validate(&self, today: NaiveDate) -> ValidationReport {
        let fields = Field::ALL
            .into_iter()
            .filter_map(|field| {
                let failures = self.field_failures(field, today);
                (!failures.is_empty()).then_some((field, failures))
            })
            .collect();

        ValidationReport {
            fields,
            form: self.form_failures(),
        }
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.validate(today).is_valid()
    }

    /// Message under `field`: only once touched, and only while failing
    pub fn field_error(&self, field: Field, today: NaiveDate) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.field_failures(field, today)
            .first()
            .map(|failure| failure.message(field))
    }

    /// Password mismatch message, once the confirmation has been touched
    pub fn form_error(&self) -> Option<&'static str> {
        if !self.is_touched(Field::ConfirmPassword) {
            return None;
        }
        self.form_failures().first().map(FormFailure::message)
    }

    /// Build the payload for the active mode, or report why it cannot be built
    pub fn to_payload(&self, today: NaiveDate) -> Result<RegistrationPayload, ValidationReport> {
        let report = self.validate(today);
        if !report.is_valid() {
            return Err(report);
        }

        let values = &self.values;
        let email = Email::parse(&values.email)
            .ok_or_else(|| single_failure(Field::Email, Failure::Email))?;
        let payload = match self.user_type {
            UserType::Applicant => {
                let gender = Gender::parse(&values.gender)
                    .ok_or_else(|| single_failure(Field::Gender, Failure::InvalidOption))?;
                let birth_date = parse_birth_date(&values.birth_date)
                    .ok_or_else(|| single_failure(Field::BirthDate, Failure::InvalidDate))?;

                RegistrationPayload::Applicant(ApplicantPayload {
                    email,
                    password: values.password.clone(),
                    name: values.name.clone(),
                    surname: values.surname.clone(),
                    gender,
                    birth_date,
                })
            }
            UserType::Organization => RegistrationPayload::Organization(OrganizationPayload {
                email,
                password: values.password.clone(),
                name: values.name.clone(),
                description: values.description.clone(),
            }),
        };

        Ok(payload)
    }
}

fn single_failure(field: Field, failure: Failure) -> ValidationReport {
    ValidationReport {
        fields: BTreeMap::from([(field, vec![failure])]),
        form: Vec::new(),
    }
}
