//! Auth side effects: talk to the API, keep the stored token in sync, report
//! failures as alerts, then dispatch the outcome to the auth reducer.

use crate::api_client::{self, ClientError};
use crate::components::toast::ToastContext;
use crate::state::auth::{AuthAction, AuthState};
use crate::storage;
use common::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseReducerDispatcher;

pub type AuthDispatcher = UseReducerDispatcher<AuthState>;

fn report(toast: &ToastContext, error: &ClientError) {
    for message in &error.messages {
        toast.show_error(message.clone());
    }
}

/// Loads the user behind the stored token. Any failure ends in `AuthError`.
pub fn load_user(dispatch: AuthDispatcher) {
    spawn_local(async move {
        if storage::stored_token().is_none() {
            log::debug!("No stored token, skipping user load");
            dispatch.dispatch(AuthAction::AuthError);
            return;
        }

        match api_client::auth::load_user().await {
            Ok(user) => dispatch.dispatch(AuthAction::UserLoaded(user)),
            Err(e) => {
                log::warn!("Stored token rejected: {}", e);
                storage::clear_token();
                dispatch.dispatch(AuthAction::AuthError);
            }
        }
    });
}

pub fn register(dispatch: AuthDispatcher, toast: ToastContext, request: RegisterRequest) {
    spawn_local(async move {
        match api_client::auth::register(&request).await {
            Ok(response) => {
                log::info!("Registered {}", request.email);
                storage::store_token(&response.token);
                dispatch.dispatch(AuthAction::RegisterSuccess(response.token));
                load_user(dispatch);
            }
            Err(e) => {
                report(&toast, &e);
                storage::clear_token();
                dispatch.dispatch(AuthAction::RegisterFail);
            }
        }
    });
}

pub fn login(dispatch: AuthDispatcher, toast: ToastContext, request: LoginRequest) {
    spawn_local(async move {
        match api_client::auth::login(&request).await {
            Ok(response) => {
                log::info!("Logged in as {}", request.email);
                storage::store_token(&response.token);
                dispatch.dispatch(AuthAction::LoginSuccess(response.token));
                load_user(dispatch);
            }
            Err(e) => {
                report(&toast, &e);
                storage::clear_token();
                dispatch.dispatch(AuthAction::LoginFail);
            }
        }
    });
}

pub fn logout(dispatch: AuthDispatcher) {
    log::info!("Logging out");
    storage::clear_token();
    dispatch.dispatch(AuthAction::Logout);
}
