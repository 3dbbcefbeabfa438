use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod utils;

pub use logs::init_logging;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{
    AuthPage, BookingPage, CoachProfilePage, HomePage, NotFoundPage,
    SportCategoryPage,
};

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white text-gray-900">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Route parameters are carried but do not pick a record; see
/// `catalog::lookup`.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[at("/booking")]
    Booking,
    #[at("/sport/:sport_name")]
    Sport { sport_name: String },
    #[at("/coach/:coach_id")]
    Coach { coach_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    tracing::debug!(?route, "rendering route");
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Auth => html! { <AuthPage /> },
        Route::Booking => html! { <BookingPage /> },
        Route::Sport { sport_name } => {
            html! { <SportCategoryPage {sport_name} /> }
        }
        Route::Coach { coach_id } => {
            html! { <CoachProfilePage {coach_id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
