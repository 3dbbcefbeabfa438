use catalog::forms::roster_booking_message;
use catalog::{CoachFilter, RosterCoach, format_price, lookup};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CoachAvatar, StarRating};
use crate::contexts::toast::use_toast;
use crate::hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct SportCategoryPageProps {
    /// Accepted from the route but every value renders the sample sport.
    pub sport_name: AttrValue,
}

#[function_component]
pub fn SportCategoryPage(props: &SportCategoryPageProps) -> Html {
    let sport = {
        let sport_name = props.sport_name.clone();
        use_memo(sport_name, |sport_name| lookup::sport_by_name(sport_name))
    };
    use_title(&sport.name);

    let toasts = use_toast();
    let filter = use_state(CoachFilter::default);
    let chat_open = use_state(|| false);

    let on_query = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let query = e.target_unchecked_into::<HtmlInputElement>().value();
            filter.set(CoachFilter {
                query,
                ..(*filter).clone()
            });
        })
    };

    let on_toggle_available = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            next.toggle_available();
            filter.set(next);
        })
    };

    let on_toggle_chat = {
        let chat_open = chat_open.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            chat_open.set(!*chat_open);
            toasts.info("AI Sports Assistant activated! 🤖");
        })
    };

    let on_close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(false))
    };

    let on_book = {
        let toasts = toasts.clone();
        Callback::from(move |coach_name: AttrValue| {
            toasts.success(roster_booking_message(&coach_name));
        })
    };

    let matches = filter.apply(&sport.coaches);

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50">
            // Header
            <section class="py-16 px-4 bg-gradient-to-r from-blue-600 to-green-600 text-white">
                <div class="container mx-auto text-center">
                    <div class="text-8xl mb-6">{&sport.icon}</div>
                    <h1 class="text-5xl font-bold mb-4">{&sport.name}</h1>
                    <p class="text-xl max-w-3xl mx-auto mb-8">{&sport.description}</p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <HeaderBadge text={format!("👥 {} Expert Coaches", sport.coaches.len())} />
                        <HeaderBadge text="🏆 100+ Success Stories" />
                        <HeaderBadge text="🕒 24/7 AI Support" />
                    </div>
                </div>
            </section>

            // Methodology
            <section class="py-12 px-4 bg-white">
                <div class="container mx-auto">
                    <div class="max-w-4xl mx-auto rounded-lg border shadow-sm p-6">
                        <div class="text-center mb-4">
                            <h2 class="text-3xl font-semibold">{format!("Our {} Methodology", sport.name)}</h2>
                            <p class="text-lg text-gray-500">{"Proven techniques that deliver results"}</p>
                        </div>
                        <p class="text-gray-700 leading-relaxed text-lg">{&sport.methodology}</p>
                    </div>
                </div>
            </section>

            // Search and filter
            <section class="py-8 px-4 bg-gray-50">
                <div class="container mx-auto">
                    <div class="flex flex-col md:flex-row gap-4 max-w-4xl mx-auto">
                        <div class="relative flex-1">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{"🔍"}</span>
                            <input
                                type="text"
                                value={filter.query.clone()}
                                oninput={on_query}
                                placeholder="Search coaches by name..."
                                class="w-full pl-10 pr-3 py-2 rounded-md border bg-white"
                            />
                        </div>
                        <button
                            onclick={on_toggle_available}
                            aria-pressed={filter.available_only.to_string()}
                            class={format!(
                                "px-4 py-2 rounded-md flex items-center gap-2 {}",
                                if filter.available_only {
                                    "bg-gray-900 text-white"
                                } else {
                                    "border bg-white text-gray-900"
                                }
                            )}
                        >
                            {"Available Only"}
                        </button>
                        <button onclick={on_toggle_chat} class="px-4 py-2 rounded-md bg-green-600 hover:bg-green-700 text-white">
                            {"💬 AI Assistant"}
                        </button>
                    </div>
                </div>
            </section>

            // Coaches
            <section class="py-12 px-4">
                <div class="container mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">{format!("Meet Our {} Coaches", sport.name)}</h2>
                    if matches.is_empty() {
                        <p class="text-center text-gray-500">{"No coaches match your search"}</p>
                    }
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {for matches.into_iter().map(|coach| html! {
                            <RosterCard key={coach.id.to_string()} coach={coach.clone()} on_book={on_book.clone()} />
                        })}
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="py-12 px-4 bg-gray-50">
                <div class="container mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">{format!("{} Success Stories", sport.name)}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        {for sport.testimonials.iter().map(|testimonial| html! {
                            <div class="text-center rounded-lg border bg-white p-6">
                                <div class="flex justify-center mb-4">
                                    <StarRating stars={testimonial.rating} size="text-xl" />
                                </div>
                                <p class="text-gray-600 mb-4 italic">{format!("\"{}\"", testimonial.text)}</p>
                                <h4 class="font-bold">{&testimonial.author}</h4>
                                <p class="text-sm text-blue-600">{format!("{} Student", sport.name)}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            if *chat_open {
                <div class="fixed bottom-20 right-6 w-80 h-96 bg-white rounded-lg shadow-2xl border z-50">
                    <div class="bg-blue-600 text-white p-4 rounded-t-lg flex justify-between items-center">
                        <h3 class="font-bold">{format!("{} AI Assistant", sport.name)}</h3>
                        <button onclick={on_close_chat} class="px-2 rounded hover:bg-blue-700" title="Close">
                            {"✕"}
                        </button>
                    </div>
                    <div class="p-4 h-64 overflow-y-auto">
                        <div class="bg-gray-100 p-3 rounded-lg">
                            <p class="text-sm">
                                {format!("Hi! I'm your {} AI assistant. I can help you with:", sport.name)}
                            </p>
                            <ul class="text-sm mt-2 space-y-1">
                                <li>{"• Finding the right coach"}</li>
                                <li>{"• Booking training sessions"}</li>
                                <li>{format!("• {} technique tips", sport.name)}</li>
                                <li>{"• Equipment recommendations"}</li>
                            </ul>
                        </div>
                    </div>
                    <div class="p-4 border-t flex gap-2">
                        <input placeholder="Ask me anything..." class="flex-1 px-3 py-1 rounded-md border" />
                        <button class="px-3 py-1 rounded-md bg-blue-600 hover:bg-blue-700 text-white text-sm">
                            {"Send"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderBadgeProps {
    text: AttrValue,
}

#[function_component]
fn HeaderBadge(props: &HeaderBadgeProps) -> Html {
    html! {
        <span class="px-4 py-2 text-lg rounded-full bg-white/20">{&props.text}</span>
    }
}

#[derive(Properties, PartialEq)]
struct RosterCardProps {
    coach: RosterCoach,
    on_book: Callback<AttrValue>,
}

#[function_component]
fn RosterCard(props: &RosterCardProps) -> Html {
    let coach = &props.coach;

    let on_click = {
        let name = AttrValue::from(coach.name.clone());
        props.on_book.reform(move |_: MouseEvent| name.clone())
    };

    html! {
        <div class="rounded-lg border bg-white shadow-sm hover:shadow-xl transition-all duration-300 hover:scale-105">
            <div class="p-6 text-center">
                <div class="flex justify-center mb-4">
                    <CoachAvatar initials={coach.initials()} />
                </div>
                <h3 class="text-xl font-semibold">{&coach.name}</h3>
                <p class="font-semibold text-blue-600">{&coach.specialty}</p>
                <div class="flex items-center justify-center gap-1">
                    <span class="text-yellow-400">{"★"}</span>
                    <span class="font-semibold">{coach.rating.to_string()}</span>
                </div>
            </div>
            <div class="px-6 pb-6 space-y-3">
                <div class="flex justify-between">
                    <span class="text-gray-600">{"Experience:"}</span>
                    <span class="font-semibold">{format!("{} years", coach.experience_years)}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-600">{"Price:"}</span>
                    <span class="font-semibold text-green-600">{format!("{}/session", format_price(coach.price))}</span>
                </div>
                <div class="pt-2">
                    <h4 class="font-semibold mb-2">{"Achievements:"}</h4>
                    <div class="flex flex-wrap gap-1">
                        {for coach.achievements.iter().take(2).map(|achievement| html! {
                            <span class="px-2 py-0.5 rounded-full border text-xs">{achievement}</span>
                        })}
                    </div>
                </div>
                <button
                    onclick={on_click}
                    disabled={!coach.available}
                    class="w-full mt-2 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if coach.available { "📅 Book Session" } else { "Unavailable" }}
                </button>
                if coach.available {
                    <div class="w-full text-center rounded-full bg-gray-100 text-green-600 text-sm py-1">
                        {"Available Now"}
                    </div>
                }
            </div>
        </div>
    }
}
