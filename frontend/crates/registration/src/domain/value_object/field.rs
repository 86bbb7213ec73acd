//! Form Field identifiers
//!
//! `id()` is the form-control identifier; it is also what error messages
//! interpolate. `label()` is the Spanish display label.

use derive_more::Display;

use super::user_type::UserType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Field {
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("confirmPassword")]
    ConfirmPassword,
    #[display("nombre")]
    Name,
    #[display("apellido")]
    Surname,
    #[display("gender")]
    Gender,
    #[display("birthDate")]
    BirthDate,
    #[display("descripcion")]
    Description,
    #[display("terms")]
    Terms,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Name,
        Field::Surname,
        Field::Gender,
        Field::BirthDate,
        Field::Description,
        Field::Terms,
    ];

    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Name => "nombre",
            Field::Surname => "apellido",
            Field::Gender => "gender",
            Field::BirthDate => "birthDate",
            Field::Description => "descripcion",
            Field::Terms => "terms",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Contraseña",
            Field::ConfirmPassword => "Confirmar contraseña",
            Field::Name => "Nombre",
            Field::Surname => "Apellido",
            Field::Gender => "Género",
            Field::BirthDate => "Fecha de nacimiento",
            Field::Description => "Descripción",
            Field::Terms => "Términos y condiciones",
        }
    }

    /// Mode the field belongs to; `None` for fields shared by both modes
    #[inline]
    pub const fn owner(&self) -> Option<UserType> {
        match self {
            Field::Surname | Field::Gender | Field::BirthDate => Some(UserType::Applicant),
            Field::Description => Some(UserType::Organization),
            _ => None,
        }
    }

    /// Whether the field is shown (and validated) in `user_type` mode
    #[inline]
    pub fn applies_to(&self, user_type: UserType) -> bool {
        self.owner().is_none_or(|owner| owner == user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_id(field.id()), Some(field));
            assert_eq!(field.to_string(), field.id());
        }
        assert_eq!(Field::from_id("surname"), None);
    }

    #[test]
    fn test_mode_ownership() {
        assert!(Field::Surname.applies_to(UserType::Applicant));
        assert!(!Field::Surname.applies_to(UserType::Organization));
        assert!(Field::Description.applies_to(UserType::Organization));
        assert!(!Field::Description.applies_to(UserType::Applicant));
        assert!(Field::Email.applies_to(UserType::Applicant));
        assert!(Field::Email.applies_to(UserType::Organization));
    }
}
