use catalog::ACADEMY_NAME;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SUPPORT_ITEMS: &[&str] =
    &["Help Center", "24/7 AI Support", "Community", "Contact Us"];
const TECHNOLOGY_ITEMS: &[&str] =
    &["AI Call Tracking", "AR/VR Training", "Wallet Payments", "Multi-language"];

#[function_component]
pub fn SiteFooter() -> Html {
    let link_class = "text-gray-400 hover:text-white transition-colors";

    html! {
        <footer class="py-12 px-4 bg-gray-900 text-white">
            <div class="container mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center space-x-2 mb-4">
                            <span class="text-xl">{"🏆"}</span>
                            <span class="text-xl font-bold">{ACADEMY_NAME}</span>
                        </div>
                        <p class="text-gray-400 mb-4">
                            {"Empowering athletes worldwide with AI-powered coaching and cutting-edge training technology."}
                        </p>
                    </div>
                    <div>
                        <h3 class="font-bold mb-4">{"Quick Links"}</h3>
                        <ul class="space-y-2">
                            <li><a href="#sports" class={link_class}>{"Sports"}</a></li>
                            <li>
                                <Link<Route> to={Route::Booking} classes={link_class}>
                                    {"Book a Session"}
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::Auth} classes={link_class}>
                                    {"Sign In"}
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>
                    <FooterList title="Support" items={SUPPORT_ITEMS} />
                    <FooterList title="Technology" items={TECHNOLOGY_ITEMS} />
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400">
                    <p>{format!("© 2024 {ACADEMY_NAME}. All rights reserved. | Powered by AI Technology")}</p>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct FooterListProps {
    title: AttrValue,
    items: &'static [&'static str],
}

#[function_component]
fn FooterList(props: &FooterListProps) -> Html {
    html! {
        <div>
            <h3 class="font-bold mb-4">{&props.title}</h3>
            <ul class="space-y-2 text-gray-400">
                {for props.items.iter().map(|item| html! { <li>{*item}</li> })}
            </ul>
        </div>
    }
}
