//! Entity Module

pub mod current_user;
