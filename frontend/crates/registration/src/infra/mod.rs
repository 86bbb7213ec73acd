//! Infrastructure Layer
//!
//! HTTP implementation of the registration service.

pub mod http;

pub use http::HttpRegistrationService;
