use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page Not Found");

    let path = use_location().map(|location| location.path().to_string());
    use_effect_with(path, |path| {
        tracing::warn!(path = path.as_deref().unwrap_or_default(), "no route matched");
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{"404"}</h1>
                <p class="text-xl text-gray-600 mb-4">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="text-blue-500 hover:text-blue-700 underline">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
