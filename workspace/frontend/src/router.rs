use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Landing page");
            html! {
                <div class="hero min-h-screen bg-base-200">
                    <div class="hero-content text-center">
                        <div class="max-w-md">
                            <h1 class="text-5xl font-bold">{"DevConnect"}</h1>
                            <p class="py-6">
                                {"Create a developer profile, share posts and get help from other developers"}
                            </p>
                            <div class="flex gap-4 justify-center">
                                <Link<Route> to={Route::Register} classes="btn btn-primary">{"Sign Up"}</Link<Route>>
                                <Link<Route> to={Route::Login} classes="btn btn-outline">{"Login"}</Link<Route>>
                            </div>
                        </div>
                    </div>
                </div>
            }
        }
        Route::Register => {
            log::trace!("Rendering Register page");
            html! { <RegisterPage /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1 class="text-3xl p-6">{"404 Not Found"}</h1> }
        }
    }
}
