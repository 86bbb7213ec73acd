//! Shared Kernel - vocabulary every client crate agrees on
//!
//! This crate contains the smallest common core:
//! - The unified [`error::app_error::AppError`] shown to the user
//! - [`error::kind::ErrorKind`], the classification backing it
//! - Conversions from the error types the client stack produces
//!
//! **Design Principle**: Only include things that mean the same thing in the
//! registration flow and in the auth flow.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
