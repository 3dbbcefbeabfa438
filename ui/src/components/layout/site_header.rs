use catalog::ACADEMY_NAME;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SECTION_LINKS: &[(&str, &str)] = &[
    ("Sports", "#sports"),
    ("Features", "#features"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

/// Sticky landing page navigation with in-page anchors.
#[function_component]
pub fn SiteHeader() -> Html {
    html! {
        <nav class="sticky top-0 z-40 bg-white/90 backdrop-blur-md shadow-sm">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                    <span class="text-2xl">{"🏆"}</span>
                    <span class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-green-600 bg-clip-text text-transparent">
                        {ACADEMY_NAME}
                    </span>
                </Link<Route>>

                <div class="hidden md:flex items-center space-x-8">
                    {for SECTION_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="text-gray-700 hover:text-blue-600 transition-colors">{*label}</a>
                    })}
                    <Link<Route> to={Route::Booking} classes="text-gray-700 hover:text-blue-600 transition-colors">
                        {"Booking"}
                    </Link<Route>>
                </div>

                <div class="flex items-center space-x-4">
                    <Link<Route>
                        to={Route::Auth}
                        classes="px-4 py-2 rounded-md border border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white transition-colors"
                    >
                        {"Login"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Auth}
                        classes="px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 transition-colors"
                    >
                        {"Get Started"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}
