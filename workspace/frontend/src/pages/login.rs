use crate::actions;
use crate::components::toast::ToastContext;
use crate::router::Route;
use crate::state::auth::AuthContext;
use common::LoginRequest;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_context::<AuthContext>();
    let toast = use_context::<ToastContext>();
    let form_ref = use_node_ref();

    let Some(auth) = auth else {
        log::error!("LoginPage rendered outside of the auth provider");
        return html! {};
    };
    if auth.is_authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_submit = {
        let dispatch = auth.dispatcher();
        let form_ref = form_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                log::error!("Could not read the login form");
                return;
            };
            let Some(toast) = toast.clone() else {
                log::error!("LoginPage rendered outside of the toast provider");
                return;
            };

            let request = LoginRequest {
                email: form_data.get("email").as_string().unwrap_or_default(),
                password: form_data.get("password").as_string().unwrap_or_default(),
            };
            actions::login(dispatch.clone(), toast, request);
        })
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card w-full max-w-md bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-3xl">{"Sign In"}</h1>
                    <p class="text-sm text-gray-500">{"Sign into Your Account"}</p>
                    <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                        <input type="email" name="email" placeholder="Email Address" class="input input-bordered w-full" />
                        <input type="password" name="password" placeholder="Password" class="input input-bordered w-full" />
                        <button type="submit" class="btn btn-primary w-full">{"Login"}</button>
                    </form>
                    <p class="text-sm">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Register} classes="link">{"Sign Up"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
