//! Session View
//!
//! Login state, current user and admin flag as shown by the header.
//!
//! ## Behaviour
//! - Start-up revalidates the token once and adopts the result
//! - Login state `true` loads the current user and derives the admin flag
//! - Login state `false` clears the user and the admin flag
//! - A failed user load keeps the session but drops the admin flag

use std::sync::Arc;

use tokio::sync::watch;

use crate::application::config::AuthConfig;
use crate::domain::entity::current_user::CurrentUser;
use crate::domain::service::{AuthService, UserService};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    pub user: Option<CurrentUser>,
    pub is_admin: bool,
}

pub struct SessionView<A, U>
where
    A: AuthService,
    U: UserService,
{
    auth: Arc<A>,
    users: Arc<U>,
    config: Arc<AuthConfig>,
    snapshot: watch::Sender<SessionSnapshot>,
}

impl<A, U> SessionView<A, U>
where
    A: AuthService + Send + Sync,
    U: UserService + Send + Sync,
{
    pub fn new(auth: Arc<A>, users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            auth,
            users,
            config,
            snapshot: watch::Sender::new(SessionSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot.borrow().logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.borrow().is_admin
    }

    /// Initial state: remote validation, or the cached state when disabled
    pub async fn start(&self) {
        let logged_in = if self.config.validate_on_start {
            match self.auth.validate_token().await {
                Ok(valid) => valid,
                Err(e) => {
                    e.log();
                    false
                }
            }
        } else {
            self.auth.is_authenticated()
        };
        self.apply(logged_in).await;
    }

    /// Follow the login-state signal until its sender goes away
    pub async fn run(&self) {
        let mut login_state = self.auth.login_state();
        let current = *login_state.borrow_and_update();
        self.apply(current).await;

        while login_state.changed().await.is_ok() {
            let logged_in = *login_state.borrow_and_update();
            self.apply(logged_in).await;
        }
        tracing::debug!("Login-state signal closed");
    }

    /// Adopt a login state, loading the user when logged in
    pub async fn apply(&self, logged_in: bool) {
        if !logged_in {
            self.snapshot.send_replace(SessionSnapshot::default());
            return;
        }

        self.snapshot.send_modify(|s| s.logged_in = true);

        let snapshot = match self.users.current_user().await {
            Ok(user) => SessionSnapshot {
                logged_in: true,
                is_admin: user.is_admin(),
                user: Some(user),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load current user");
                SessionSnapshot {
                    logged_in: true,
                    user: None,
                    is_admin: false,
                }
            }
        };
        tracing::debug!(is_admin = snapshot.is_admin, "Session user loaded");
        self.snapshot.send_replace(snapshot);
    }
}
