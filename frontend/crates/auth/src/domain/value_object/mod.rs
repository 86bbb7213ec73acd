//! Value Object Module

pub mod guard_state;
pub mod route;
pub mod user_role;
