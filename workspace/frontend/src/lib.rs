use yew::prelude::*;
use yew_router::prelude::*;

pub mod actions;
pub mod api_client;
pub mod components;
mod pages;
pub mod router;
pub mod settings;
pub mod state;
pub mod storage;

use components::toast::ToastProvider;
use router::{switch, Route};
use state::auth::{AuthContext, AuthState};

#[derive(Properties, PartialEq)]
struct AuthProviderProps {
    children: Children,
}

/// Owns the auth state and checks the stored token once at startup
#[function_component(AuthProvider)]
fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(|| AuthState::initial(storage::stored_token()));

    {
        let dispatch = auth.dispatcher();
        use_effect_with((), move |_| {
            actions::load_user(dispatch);
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== DevConnect Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
