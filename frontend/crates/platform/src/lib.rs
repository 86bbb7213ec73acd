//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the technical foundations shared by the client:
//! - JSON API client over `reqwest` with error-detail extraction
//! - Local credential storage (the cached authentication state)
//! - Clock abstraction for date-dependent validation

pub mod clock;
pub mod http;
pub mod storage;
