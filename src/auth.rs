//! Session state management, decoupled from the router.
//!
//! The router consumes an injected `SessionStatus` signal; nothing here
//! touches the History API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Admin;

/// Session state. A token alone is never sufficient: `is_authenticated` is
/// strictly "the identity check succeeded".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub token: Option<String>,
    /// True while the startup identity check is in flight.
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_loading {
            SessionStatus::Pending
        } else if self.admin.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup identity check still in flight; admin routes show a spinner.
    Pending,
    Authenticated,
    Anonymous,
}

/// Shared via context from the application root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        // Pending until init_auth resolves the persisted token (or finds none).
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn session_status_signal(ctx: &AuthContext) -> Signal<SessionStatus> {
    let state = ctx.state;
    Signal::derive(move || state.with(|s| s.status()))
}

/// Startup check: a persisted token is only trusted after `/auth/me`
/// confirms it. Any failure clears the token and leaves the session
/// anonymous.
pub fn init_auth(ctx: &AuthContext) {
    let Some(token) = api::stored_token() else {
        ctx.set_state.update(|s| s.is_loading = false);
        return;
    };

    ctx.set_state.update(|s| s.token = Some(token));
    let set_state = ctx.set_state;
    spawn_local(async move {
        match api::auth::me().await {
            Ok(admin) => {
                let _ = set_state.try_update(|s| {
                    s.admin = Some(admin);
                    s.is_loading = false;
                });
            }
            Err(err) => {
                web_sys::console::log_1(
                    &format!("[Auth] Identity check failed ({err}), clearing session").into(),
                );
                api::clear_token();
                let _ = set_state.try_update(|s| {
                    *s = AuthState {
                        is_loading: false,
                        ..AuthState::default()
                    };
                });
            }
        }
    });
}

/// Logs in and persists the token. The router reacts to the status change.
pub async fn login(ctx: &AuthContext, username: String, password: String) -> Result<(), String> {
    let response = api::auth::login(&username, &password)
        .await
        .map_err(|e| e.to_string())?;
    api::store_token(&response.token);
    ctx.set_state.update(|s| {
        s.token = Some(response.token.clone());
        s.admin = Some(response.admin.clone());
        s.is_loading = false;
    });
    Ok(())
}

/// Clears persisted token and in-memory state. Redirecting away from admin
/// routes is handled by the router's status listener.
pub fn logout(ctx: &AuthContext) {
    api::clear_token();
    ctx.set_state.update(|s| {
        *s = AuthState {
            is_loading: false,
            ..AuthState::default()
        };
    });
    // Best-effort server-side session invalidation.
    spawn_local(async {
        let _ = api::auth::logout().await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Admin {
        Admin {
            id: "a1".into(),
            username: "root".into(),
        }
    }

    #[test]
    fn token_alone_is_not_authenticated() {
        let state = AuthState {
            admin: None,
            token: Some("stale".into()),
            is_loading: false,
        };
        assert!(!state.is_authenticated());
        assert_eq!(state.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn pending_while_identity_check_in_flight() {
        let state = AuthState {
            admin: None,
            token: Some("t".into()),
            is_loading: true,
        };
        assert_eq!(state.status(), SessionStatus::Pending);
    }

    #[test]
    fn confirmed_identity_is_authenticated() {
        let state = AuthState {
            admin: Some(admin()),
            token: Some("t".into()),
            is_loading: false,
        };
        assert!(state.is_authenticated());
        assert_eq!(state.status(), SessionStatus::Authenticated);
    }

    #[test]
    fn cleared_session_matches_initial_empty_state() {
        let cleared = AuthState {
            is_loading: false,
            ..AuthState::default()
        };
        assert_eq!(cleared.admin, None);
        assert_eq!(cleared.token, None);
        assert_eq!(cleared.status(), SessionStatus::Anonymous);
    }
}
