//! In-memory service doubles shared by the application tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::watch;

use crate::domain::entity::current_user::CurrentUser;
use crate::domain::service::{AuthService, UserService};
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy)]
pub enum Validation {
    Valid,
    Invalid,
    Fail,
}

pub struct MockAuth {
    cached: AtomicBool,
    validation: Validation,
    validate_calls: AtomicUsize,
    state: watch::Sender<bool>,
}

impl MockAuth {
    pub fn new(cached: bool, validation: Validation) -> Self {
        Self {
            cached: AtomicBool::new(cached),
            validation,
            validate_calls: AtomicUsize::new(0),
            state: watch::Sender::new(cached),
        }
    }

    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }

    pub fn publish(&self, logged_in: bool) {
        self.cached.store(logged_in, Ordering::SeqCst);
        self.state.send_replace(logged_in);
    }
}

impl AuthService for MockAuth {
    fn is_authenticated(&self) -> bool {
        self.cached.load(Ordering::SeqCst)
    }

    async fn validate_token(&self) -> AuthResult<bool> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        match self.validation {
            Validation::Valid => Ok(true),
            Validation::Invalid => Ok(false),
            Validation::Fail => Err(AuthError::Rejected {
                status: 503,
                detail: None,
            }),
        }
    }

    async fn login(&self, _email: &str, _password: &str) -> AuthResult<()> {
        self.publish(true);
        Ok(())
    }

    fn logout(&self) -> AuthResult<()> {
        self.publish(false);
        Ok(())
    }

    fn login_state(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

pub struct MockUsers {
    user: Mutex<Option<CurrentUser>>,
    calls: AtomicUsize,
}

impl MockUsers {
    pub fn with_role(role: UserRole) -> Self {
        Self {
            user: Mutex::new(Some(user_with_role(role))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails
    pub fn failing() -> Self {
        Self {
            user: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UserService for MockUsers {
    async fn current_user(&self) -> AuthResult<CurrentUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let user = self.user.lock().unwrap().clone();
        user.ok_or(AuthError::Rejected {
            status: 500,
            detail: None,
        })
    }
}

pub fn user_with_role(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: 1,
        email: "a@b.com".to_string(),
        name: "Ana".to_string(),
        role,
        surname: None,
        description: None,
    }
}
