use crate::actions;
use crate::components::toast::ToastContext;
use crate::router::Route;
use crate::state::auth::AuthContext;
use common::RegisterRequest;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_context::<AuthContext>();
    let toast = use_context::<ToastContext>();
    let form_ref = use_node_ref();

    let Some(auth) = auth else {
        log::error!("RegisterPage rendered outside of the auth provider");
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
                log::error!("Could not read the registration form");
                return;
            };
            let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

            let Some(toast) = toast.clone() else {
                log::error!("RegisterPage rendered outside of the toast provider");
                return;
            };
            if field("password") != field("password2") {
                toast.show_error("Passwords do not match".to_string());
                return;
            }

            let request = RegisterRequest {
                name: field("name"),
                email: field("email"),
                password: field("password"),
            };
            actions::register(dispatch.clone(), toast, request);
        })
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card w-full max-w-md bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-3xl">{"Sign Up"}</h1>
                    <p class="text-sm text-gray-500">{"Create Your Account"}</p>
                    <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                        <input type="text" name="name" placeholder="Name" class="input input-bordered w-full" />
                        <input type="email" name="email" placeholder="Email Address" class="input input-bordered w-full" />
                        <input type="password" name="password" placeholder="Password" class="input input-bordered w-full" />
                        <input type="password" name="password2" placeholder="Confirm Password" class="input input-bordered w-full" />
                        <button type="submit" class="btn btn-primary w-full">{"Register"}</button>
                    </form>
                    <p class="text-sm">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="link">{"Sign In"}</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
