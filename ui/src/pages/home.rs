use catalog::landing::{ACADEMY_BADGES, ATHLETE_STORIES, PLATFORM_FEATURES};
use catalog::sport::sport_summaries;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{SiteFooter, SiteHeader, StarRating};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_push_route, use_title};
use crate::utils::sport_slug;

const HERO_HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🎯", "Personalized Training", "AI-customized sessions for your skill level"),
    ("🥽", "AR/VR Training", "Immersive technology for better learning"),
    ("💰", "Affordable Sessions", "Quality coaching at competitive prices"),
];

#[function_component]
pub fn HomePage() -> Html {
    use_title("Unlock Your Athletic Potential");

    let toasts = use_toast();
    let push_route = use_push_route();
    let search = use_state(String::new);

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    // Jump to the first sport whose name contains the query.
    let on_find_coach = {
        let search = search.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = search.trim().to_lowercase();
            let found = sport_summaries()
                .into_iter()
                .find(|sport| sport.name.to_lowercase().contains(&query));
            match found {
                Some(sport) => push_route.emit(Route::Sport {
                    sport_name: sport_slug(sport.name),
                }),
                None => toasts.info(format!("No sports match \"{}\"", search.trim())),
            }
        })
    };

    let on_chat = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.info("AI Chat coming soon! 🤖"))
    };

    let on_floating_chat = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            toasts.success("AI Chat coming soon! 🤖")
        })
    };

    let on_contact_submit = {
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            toasts.info("Thanks for reaching out! We'll get back to you soon.");
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50">
            <SiteHeader />

            // Hero
            <section class="py-20 px-4">
                <div class="container mx-auto text-center max-w-4xl">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-blue-600 via-purple-600 to-green-600 bg-clip-text text-transparent">
                        {"Unlock Your Athletic Potential"}
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 mb-8">
                        {"Join thousands of athletes training with world-class coaches through our AI-powered platform. \
                          Experience the future of sports training with personalized coaching, AR/VR modules, and 24/7 support."}
                    </p>

                    <form onsubmit={on_find_coach} class="flex flex-col sm:flex-row gap-4 max-w-2xl mx-auto mb-8">
                        <input
                            type="text"
                            value={(*search).clone()}
                            oninput={on_search_input}
                            placeholder="Search for sports or coaches..."
                            class="flex-1 h-12 px-4 text-lg rounded-md border-2 border-gray-200 focus:border-blue-500 focus:outline-none"
                        />
                        <button type="submit" class="h-12 px-8 rounded-md bg-blue-600 hover:bg-blue-700 text-white text-lg">
                            {"Find Coach"}
                        </button>
                    </form>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        {for ACADEMY_BADGES.iter().chain(["🚀 AI-Powered"].iter()).map(|badge| html! {
                            <span class="px-4 py-2 text-lg rounded-full bg-gray-100 text-gray-800">{*badge}</span>
                        })}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {for HERO_HIGHLIGHTS.iter().map(|(glyph, title, text)| html! {
                            <div class="p-6 rounded-lg bg-white shadow-sm hover:shadow-lg transition-shadow">
                                <div class="text-4xl mb-4">{*glyph}</div>
                                <h3 class="font-bold text-lg mb-2">{*title}</h3>
                                <p class="text-gray-600">{*text}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            // Sports categories
            <section id="sports" class="py-16 px-4 bg-white">
                <div class="container mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{"Explore Sports Categories"}</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            {"Discover your passion with our comprehensive range of sports. Each category features expert coaches, \
                              proven methodologies, and success stories from athletes worldwide."}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {for sport_summaries().into_iter().map(|sport| html! {
                            <div class="rounded-lg border bg-white p-6 hover:shadow-xl transition-all duration-300 hover:scale-105">
                                <div class="text-center mb-4">
                                    <div class="text-6xl mb-4">{sport.icon}</div>
                                    <h3 class="text-2xl font-semibold">{sport.name}</h3>
                                    <div class="flex items-center justify-center gap-1 mt-2">
                                        <span class="text-yellow-400">{"★"}</span>
                                        <span class="font-semibold">{sport.rating.to_string()}</span>
                                    </div>
                                </div>
                                <div class="space-y-2">
                                    <div class="flex justify-between">
                                        <span class="text-gray-600">{"Coaches:"}</span>
                                        <span class="px-2 rounded border text-sm">{sport.coaches.to_string()}</span>
                                    </div>
                                    <div class="flex justify-between">
                                        <span class="text-gray-600">{"Sessions:"}</span>
                                        <span class="px-2 rounded border text-sm">{format!("{}+", sport.sessions)}</span>
                                    </div>
                                    <Link<Route>
                                        to={Route::Sport { sport_name: sport_slug(sport.name) }}
                                        classes="block w-full mt-4 py-2 text-center rounded-md bg-blue-600 hover:bg-blue-700 text-white"
                                    >
                                        {format!("Explore {}", sport.name)}
                                    </Link<Route>>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            // Features
            <section id="features" class="py-16 px-4 bg-gradient-to-r from-blue-50 to-green-50">
                <div class="container mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{"Why Choose Elite Sports Academy?"}</h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            {"Our cutting-edge platform combines traditional coaching excellence with innovative technology \
                              to deliver an unparalleled training experience."}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {for PLATFORM_FEATURES.iter().map(|feature| html! {
                            <div class="text-center p-6 rounded-lg bg-white hover:shadow-lg transition-shadow">
                                <div class="text-5xl mb-4">{feature.glyph}</div>
                                <h3 class="text-xl font-bold mb-3">{feature.title}</h3>
                                <p class="text-gray-600">{feature.description}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            // Testimonials
            <section id="testimonials" class="py-16 px-4 bg-white">
                <div class="container mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{"What Our Athletes Say"}</h2>
                        <p class="text-xl text-gray-600">{"Real stories from real athletes who transformed their game"}</p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        {for ATHLETE_STORIES.iter().map(|story| html! {
                            <div class="text-center p-6 rounded-lg border">
                                <div class="flex justify-center mb-4">
                                    <StarRating stars={story.rating} size="text-xl" />
                                </div>
                                <p class="text-gray-600 mb-4 italic">{format!("\"{}\"", story.text)}</p>
                                <h4 class="font-bold">{story.name}</h4>
                                <p class="text-sm text-blue-600">{format!("{} Athlete", story.sport)}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-16 px-4 bg-gradient-to-r from-blue-600 to-green-600 text-white">
                <div class="container mx-auto text-center">
                    <h2 class="text-4xl font-bold mb-4">{"Ready to Start Your Journey?"}</h2>
                    <p class="text-xl mb-8 max-w-2xl mx-auto">
                        {"Join thousands of athletes who have already transformed their performance with our AI-powered coaching platform."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route>
                            to={Route::Booking}
                            classes="px-8 py-3 rounded-md bg-white text-blue-600 hover:bg-gray-100 text-lg"
                        >
                            {"📅 Book Free Session"}
                        </Link<Route>>
                        <button
                            onclick={on_chat}
                            class="px-8 py-3 rounded-md border border-white text-white hover:bg-white hover:text-blue-600 text-lg"
                        >
                            {"💬 Chat with AI"}
                        </button>
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="py-16 px-4 bg-gray-50">
                <div class="container mx-auto max-w-4xl">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl font-bold mb-4">{"Get in Touch"}</h2>
                        <p class="text-xl text-gray-600">{"Have questions? We're here to help you succeed."}</p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>
                            <h3 class="text-2xl font-bold mb-6">{"Contact Information"}</h3>
                            <div class="space-y-4">
                                <div class="flex items-center"><span class="mr-3">{"📞"}</span><span>{"+1 (555) 123-4567"}</span></div>
                                <div class="flex items-center"><span class="mr-3">{"✉️"}</span><span>{"support@elitesportsacademy.com"}</span></div>
                                <div class="flex items-center"><span class="mr-3">{"🌍"}</span><span>{"Available 24/7 Worldwide"}</span></div>
                            </div>
                        </div>
                        <form onsubmit={on_contact_submit} class="space-y-4">
                            <input placeholder="Your Name" class="w-full px-3 py-2 rounded-md border" />
                            <input placeholder="Email Address" type="email" class="w-full px-3 py-2 rounded-md border" />
                            <input placeholder="Subject" class="w-full px-3 py-2 rounded-md border" />
                            <textarea placeholder="Your Message" class="w-full p-3 border rounded-md resize-none h-24"></textarea>
                            <button type="submit" class="w-full py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white">
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>
            </section>

            <SiteFooter />

            <button
                onclick={on_floating_chat}
                class="fixed bottom-6 right-6 h-14 w-14 rounded-full bg-blue-600 hover:bg-blue-700 text-white text-2xl shadow-lg"
                title="Chat with AI"
            >
                {"💬"}
            </button>
        </div>
    }
}
