//! Value Object Module

pub mod birth_date;
pub mod email;
pub mod field;
pub mod gender;
pub mod person_name;
pub mod user_type;
