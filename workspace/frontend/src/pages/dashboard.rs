use crate::actions;
use crate::api_client::{self, ClientError};
use crate::router::Route;
use crate::state::auth::AuthContext;
use common::ProfileResponse;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
enum ProfileView {
    Loading,
    Missing,
    Loaded(ProfileResponse),
    Failed(String),
}

impl From<Result<ProfileResponse, ClientError>> for ProfileView {
    fn from(result: Result<ProfileResponse, ClientError>) -> Self {
        match result {
            Ok(profile) => ProfileView::Loaded(profile),
            // The API reports a missing profile as a 400 with a message
            Err(ClientError { status: Some(400), .. }) => ProfileView::Missing,
            Err(e) => ProfileView::Failed(e.to_string()),
        }
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_context::<AuthContext>();
    let profile = use_state(|| ProfileView::Loading);

    let user_id = auth.as_ref().and_then(|auth| auth.user.as_ref().map(|u| u.id));
    {
        let profile = profile.clone();
        use_effect_with(user_id, move |user_id| {
            if user_id.is_some() {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api_client::profile::get_current_profile().await;
                    profile.set(result.into());
                });
            }
            || ()
        });
    }

    let Some(auth) = auth else {
        log::error!("DashboardPage rendered outside of the auth provider");
        return html! {};
    };
    if auth.loading {
        return html! {
            <div class="flex justify-center items-center py-12">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        };
    }
    if !auth.is_authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let on_logout = {
        let dispatch = auth.dispatcher();
        Callback::from(move |_| actions::logout(dispatch.clone()))
    };

    let name = auth.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let avatar = auth.user.as_ref().and_then(|u| u.avatar.clone());

    html! {
        <div class="p-6 max-w-3xl mx-auto space-y-6">
            <div class="flex items-center gap-4">
                {if let Some(avatar) = avatar {
                    html! {
                        <div class="avatar">
                            <div class="w-16 rounded-full"><img src={avatar} alt={name.clone()} /></div>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <h1 class="text-3xl font-bold">{format!("Welcome {}", name)}</h1>
                <button class="btn btn-ghost ml-auto" onclick={on_logout}>
                    <i class="fas fa-sign-out-alt"></i>{" Logout"}
                </button>
            </div>
            {match &*profile {
                ProfileView::Loading => html! { <span class="loading loading-spinner"></span> },
                ProfileView::Missing => html! {
                    <p>{"You have not yet setup a profile, please add some info"}</p>
                },
                ProfileView::Failed(error) => html! {
                    <div class="alert alert-error"><span>{error}</span></div>
                },
                ProfileView::Loaded(profile) => html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{&profile.status}</h2>
                            {for profile.company.iter().map(|company| html! { <p>{format!("at {}", company)}</p> })}
                            <div class="flex flex-wrap gap-2">
                                {for profile.skills.iter().map(|skill| html! {
                                    <span class="badge badge-outline">{skill}</span>
                                })}
                            </div>
                            <p class="text-sm text-gray-500">
                                {format!("{} experience entries", profile.experience.len())}
                            </p>
                        </div>
                    </div>
                },
            }}
        </div>
    }
}
