//! Guard State Machine
//!
//! ```text
//! Unchecked --cache false--> CacheDenied
//! Unchecked --cache true---> Validating --valid--------> Allowed
//!                                       --invalid/error-> Denied
//! ```
//!
//! Every state other than `Unchecked` and `Validating` is terminal.

use super::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    /// No stored credential; nothing was asked remotely
    CacheDenied,
    /// Waiting for the token validation
    Validating,
    Allowed,
    /// Token rejected or validation failed
    Denied,
}

/// Why a guard refused navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NoCredential,
    InvalidToken,
    ValidationFailed,
    /// Authenticated, but without the required role
    Forbidden,
}

/// Result of running a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny { reason: DenyReason, redirect_to: Route },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Where navigation goes instead, when denied
    pub fn redirect(&self) -> Option<Route> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Deny { redirect_to, .. } => Some(*redirect_to),
        }
    }
}

impl GuardState {
    /// Apply the cached authentication state
    pub fn on_cache(self, cached_authenticated: bool) -> Self {
        match self {
            GuardState::Unchecked if cached_authenticated => GuardState::Validating,
            GuardState::Unchecked => GuardState::CacheDenied,
            other => other,
        }
    }

    /// Apply the outcome of the token validation; `None` means it failed
    pub fn on_validation(self, valid: Option<bool>) -> Self {
        match (self, valid) {
            (GuardState::Validating, Some(true)) => GuardState::Allowed,
            (GuardState::Validating, _) => GuardState::Denied,
            (other, _) => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GuardState::CacheDenied | GuardState::Allowed | GuardState::Denied
        )
    }
}
