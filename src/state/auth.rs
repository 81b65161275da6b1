//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the bearer token and the current user. The router
//! reads it for the auth/admin gates, pages read it for permission checks,
//! and the user badge/sidebar re-render through the change listener.
//!
//! DESIGN
//! ======
//! One store per `AppContext`; nothing here is global. The authenticated
//! flag is derived from `current_user`, so it cannot drift from it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LOGIN_PATH;
use crate::error::SessionError;
use crate::net::api::ApiClient;
use crate::net::transport::HttpTransport;
use crate::net::types::{LoginResponse, Role, User};
use crate::state::token_store::TokenStore;
use crate::util::redirect::Redirect;

/// Capability checked by pages before offering an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewForms,
    EditForms,
    ViewUsers,
    ViewMessages,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewForms => "view_forms",
            Self::EditForms => "edit_forms",
            Self::ViewUsers => "view_users",
            Self::ViewMessages => "view_messages",
        }
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "view_forms" => Ok(Self::ViewForms),
            "edit_forms" => Ok(Self::EditForms),
            "view_users" => Ok(Self::ViewUsers),
            "view_messages" => Ok(Self::ViewMessages),
            other => Err(format!("unknown permission: {other}")),
        }
    }
}

/// Static permission table for non-admin roles. Admin bypasses it.
pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Subadmin => &[Permission::ViewForms, Permission::EditForms, Permission::ViewUsers, Permission::ViewMessages],
        Role::User => &[Permission::ViewForms, Permission::ViewMessages],
        Role::Admin | Role::Unknown => &[],
    }
}

/// Snapshot of who is logged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub current_user: Option<User>,
}

impl Session {
    pub fn authenticated(token: String, user: User) -> Self {
        Self { token: Some(token), current_user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(User::is_admin)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        match self.role() {
            None => false,
            Some(Role::Admin) => true,
            Some(role) => role_permissions(role).contains(&permission),
        }
    }
}

pub type SessionListener = Arc<dyn Fn(&Session) + Send + Sync>;

pub struct SessionStore<T> {
    api: Arc<ApiClient<T>>,
    tokens: Arc<dyn TokenStore>,
    redirect: Arc<dyn Redirect>,
    state: RwLock<Session>,
    listener: RwLock<Option<SessionListener>>,
}

impl<T: HttpTransport> SessionStore<T> {
    pub fn new(api: Arc<ApiClient<T>>, tokens: Arc<dyn TokenStore>, redirect: Arc<dyn Redirect>) -> Self {
        Self { api, tokens, redirect, state: RwLock::new(Session::default()), listener: RwLock::new(None) }
    }

    /// Register the UI-update callback invoked after every state change.
    pub fn set_listener(&self, listener: SessionListener) {
        *self.listener.write() = Some(listener);
    }

    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().current_user.clone()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.state.read().has_permission(permission)
    }

    fn replace(&self, session: Session) {
        *self.state.write() = session.clone();
        let listener = self.listener.read().clone();
        if let Some(listener) = listener {
            listener(&session);
        }
    }

    /// Re-validate a persisted token with `GET /auth/me`.
    ///
    /// Returns `true` only when the server confirms the user. Any failure
    /// clears the token and leaves the session unauthenticated; there is no
    /// retry.
    pub async fn initialize(&self) -> bool {
        let Some(token) = self.tokens.load() else {
            return false;
        };
        match self.api.current_user().await {
            Ok(Some(user)) => {
                log::debug!("session restored for user {}", user.id);
                self.replace(Session::authenticated(token, user));
                true
            }
            Ok(None) => {
                self.expire();
                false
            }
            Err(e) => {
                log::warn!("failed to initialize auth: {e}");
                self.expire();
                false
            }
        }
    }

    /// Exchange credentials for a token and adopt the returned user.
    ///
    /// # Errors
    ///
    /// `SessionError::LoginFailed` for rejected credentials, a response
    /// without token/user, or a transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        match self.api.login(email, password).await {
            Ok(Some(LoginResponse { token: Some(token), user: Some(user) })) => {
                self.tokens.save(&token);
                self.replace(Session::authenticated(token, user.clone()));
                Ok(user)
            }
            Ok(_) => Err(SessionError::LoginFailed),
            Err(e) => {
                log::error!("login failed: {e}");
                Err(SessionError::LoginFailed)
            }
        }
    }

    /// Drop the session and token, then leave for the login view.
    pub fn logout(&self) {
        self.expire();
        self.redirect.redirect(LOGIN_PATH);
    }

    /// Drop the session and token without navigating. Used when a call
    /// comes back unauthorized and the API client already redirected.
    pub fn expire(&self) {
        self.tokens.clear();
        self.replace(Session::default());
    }
}
