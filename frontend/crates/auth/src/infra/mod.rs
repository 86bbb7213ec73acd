//! Infrastructure Layer
//!
//! HTTP implementations of the auth and user services.

pub mod dto;
pub mod http;

pub use http::{HttpAuthService, HttpUserService};
