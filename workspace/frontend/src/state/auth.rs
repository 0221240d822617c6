//! Client-side authentication state.
//!
//! Transitions are pure: persisting the token and talking to the server
//! happen in [`crate::actions`], which then dispatch the outcome here.

use common::UserResponse;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True until the first `load_user` attempt has finished
    pub loading: bool,
    pub user: Option<UserResponse>,
}

impl AuthState {
    /// State at page load, before the stored token has been checked
    pub fn initial(token: Option<String>) -> Self {
        Self {
            token,
            is_authenticated: false,
            loading: true,
            user: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    UserLoaded(UserResponse),
    AuthError,
    RegisterSuccess(String),
    RegisterFail,
    LoginSuccess(String),
    LoginFail,
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Auth transition: {:?}", action);
        let next = match action {
            AuthAction::UserLoaded(user) => AuthState {
                token: self.token.clone(),
                is_authenticated: true,
                loading: false,
                user: Some(user),
            },
            AuthAction::RegisterSuccess(token) | AuthAction::LoginSuccess(token) => AuthState {
                token: Some(token),
                is_authenticated: true,
                loading: false,
                user: self.user.clone(),
            },
            AuthAction::AuthError
            | AuthAction::RegisterFail
            | AuthAction::LoginFail
            | AuthAction::Logout => AuthState {
                token: None,
                is_authenticated: false,
                loading: false,
                user: None,
            },
        };
        Rc::new(next)
    }
}

/// Handle to the auth state, shared with every page through context
pub type AuthContext = UseReducerHandle<AuthState>;
