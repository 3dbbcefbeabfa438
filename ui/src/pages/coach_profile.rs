use catalog::forms::CoachBooking;
use catalog::{Coach, TimeSlot, format_date, format_price, lookup};
use jiff::civil::Date;
use yew::prelude::*;

use crate::components::{Calendar, CoachAvatar, StarRating, TabBar};
use crate::contexts::toast::use_toast;
use crate::hooks::use_title;
use crate::utils::today;

#[derive(Properties, PartialEq)]
pub struct CoachProfilePageProps {
    /// Accepted from the route but every value renders the sample coach.
    pub coach_id: AttrValue,
}

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    About,
    Philosophy,
    Achievements,
    Reviews,
}

impl ProfileTab {
    const ALL: [ProfileTab; 4] = [
        ProfileTab::About,
        ProfileTab::Philosophy,
        ProfileTab::Achievements,
        ProfileTab::Reviews,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Philosophy => "Philosophy",
            ProfileTab::Achievements => "Achievements",
            ProfileTab::Reviews => "Reviews",
        }
    }
}

#[function_component]
pub fn CoachProfilePage(props: &CoachProfilePageProps) -> Html {
    let coach = {
        let coach_id = props.coach_id.clone();
        use_memo(coach_id, |coach_id| lookup::coach_by_id(coach_id))
    };
    use_title(&coach.name);

    let toasts = use_toast();
    let tab = use_state(|| ProfileTab::About);

    let on_message = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.info("Opening chat with coach..."))
    };

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| {
            if let Some(selected) = ProfileTab::ALL.get(index) {
                tab.set(*selected);
            }
        })
    };

    let active_index = ProfileTab::ALL
        .iter()
        .position(|t| t == &*tab)
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50 py-8 px-4">
            <div class="container mx-auto max-w-6xl">
                // Coach header
                <div class="mb-8 overflow-hidden rounded-lg border shadow-sm">
                    <div class="bg-gradient-to-r from-blue-600 to-green-600 p-8 text-white">
                        <div class="flex flex-col md:flex-row items-center gap-6">
                            <CoachAvatar initials={coach.initials()} classes="w-32 h-32 text-4xl bg-white/20" />

                            <div class="text-center md:text-left flex-1">
                                <h1 class="text-4xl font-bold mb-2">{&coach.name}</h1>
                                <p class="text-xl mb-4">{format!("{} • {}", coach.title, coach.sport)}</p>
                                <div class="flex flex-wrap justify-center md:justify-start gap-4 mb-4">
                                    <span>
                                        <span class="text-yellow-400">{"★ "}</span>
                                        <span class="font-semibold">{coach.rating.to_string()}</span>
                                        <span class="opacity-90">{format!(" ({} reviews)", coach.reviews)}</span>
                                    </span>
                                    <span>{format!("🏆 {} years experience", coach.experience_years)}</span>
                                    <span>{format!("📍 {}", coach.location)}</span>
                                </div>
                                <div class="flex flex-wrap gap-2">
                                    {for coach.specialties.iter().map(|specialty| html! {
                                        <span class="px-3 py-1 rounded-full bg-white/20 text-white text-sm">{specialty}</span>
                                    })}
                                </div>
                            </div>

                            <div class="text-center">
                                <div class="text-3xl font-bold mb-2">{format_price(coach.price)}</div>
                                <div class="text-lg opacity-90">{"per session"}</div>
                                <div class="flex gap-2 mt-4">
                                    <a href="#book-session" class="px-4 py-2 rounded-md bg-white text-blue-600 hover:bg-gray-100">
                                        {"📅 Book Now"}
                                    </a>
                                    <button
                                        onclick={on_message}
                                        class="px-4 py-2 rounded-md border border-white text-white hover:bg-white hover:text-blue-600"
                                    >
                                        {"💬 Message"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-6">
                        <TabBar
                            labels={ProfileTab::ALL.iter().map(|t| AttrValue::from(t.label())).collect::<Vec<_>>()}
                            active={active_index}
                            on_select={on_tab}
                        />
                        {match *tab {
                            ProfileTab::About => about_panel(&coach),
                            ProfileTab::Philosophy => html! {
                                <Card title="Coaching Philosophy" subtitle="My approach to training and development">
                                    <p class="text-gray-700 leading-relaxed text-lg">{&coach.philosophy}</p>
                                </Card>
                            },
                            ProfileTab::Achievements => html! {
                                <Card title="🏆 Major Achievements">
                                    <div class="grid gap-4">
                                        {for coach.achievements.iter().map(|achievement| html! {
                                            <div class="flex items-center gap-3 p-4 bg-gradient-to-r from-yellow-50 to-orange-50 rounded-lg border-l-4 border-yellow-400">
                                                <span class="text-xl">{"🏆"}</span>
                                                <span class="font-medium">{achievement}</span>
                                            </div>
                                        })}
                                    </div>
                                </Card>
                            },
                            ProfileTab::Reviews => html! {
                                <div class="space-y-6">
                                    {for coach.testimonials.iter().map(|testimonial| html! {
                                        <div class="rounded-lg border bg-white p-6">
                                            <div class="flex justify-between items-start mb-4">
                                                <div>
                                                    <h4 class="font-bold">{&testimonial.author}</h4>
                                                    if let Some(date) = testimonial.date {
                                                        <p class="text-sm text-gray-500">{date.to_string()}</p>
                                                    }
                                                </div>
                                                <StarRating stars={testimonial.rating} />
                                            </div>
                                            <p class="text-gray-700 italic">{format!("\"{}\"", testimonial.text)}</p>
                                        </div>
                                    })}
                                </div>
                            },
                        }}
                    </div>

                    <div class="space-y-6">
                        <BookingSidebar coach={(*coach).clone()} />
                        <Card title="Contact Information">
                            <div class="space-y-3 text-sm">
                                <div>{"✉️ coach@example.com"}</div>
                                <div>{"📞 +1 (555) 123-4567"}</div>
                                <div>{"🕒 Response within 2 hours"}</div>
                            </div>
                        </Card>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn about_panel(coach: &Coach) -> Html {
    html! {
        <div class="space-y-6">
            <Card title="👥 Biography">
                <p class="text-gray-700 leading-relaxed">{&coach.bio}</p>
            </Card>
            <Card title="📘 Credentials & Certifications">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {for coach.credentials.iter().map(|credential| html! {
                        <div class="flex items-center gap-2 p-3 bg-blue-50 rounded-lg">
                            <span class="text-blue-600">{"🎖"}</span>
                            <span class="font-medium">{credential}</span>
                        </div>
                    })}
                </div>
            </Card>
            <Card title="Languages">
                <div class="flex flex-wrap gap-2">
                    {for coach.languages.iter().map(|language| html! {
                        <span class="px-3 py-1 rounded-full border text-sm">{language}</span>
                    })}
                </div>
            </Card>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookingSidebarProps {
    coach: Coach,
}

/// Date picker, the coach's slots for the picked date, and the book button.
#[function_component]
fn BookingSidebar(props: &BookingSidebarProps) -> Html {
    let toasts = use_toast();
    let selected_date = use_state(|| Some(today()));
    let selected_time = use_state(|| None::<TimeSlot>);

    let on_select_date = {
        let selected_date = selected_date.clone();
        Callback::from(move |date: Option<Date>| selected_date.set(date))
    };

    let on_book = {
        let toasts = toasts.clone();
        let booking = CoachBooking {
            date: *selected_date,
            time: *selected_time,
        };
        let coach_name = props.coach.name.clone();
        Callback::from(move |_: MouseEvent| match booking.confirm(&coach_name) {
            Ok(message) => toasts.success(message),
            Err(error) => toasts.error(error.to_string()),
        })
    };

    let slots = selected_date
        .map(|date| props.coach.availability.slots_on(date))
        .unwrap_or_default();

    html! {
        <div id="book-session" class="sticky top-4 rounded-lg border bg-white shadow-sm p-6 space-y-4">
            <div>
                <h3 class="text-2xl font-semibold">{"📅 Book a Session"}</h3>
                <p class="text-sm text-gray-500">{"Select your preferred date and time"}</p>
            </div>

            <Calendar selected={*selected_date} on_select={on_select_date} />

            if let Some(date) = *selected_date {
                <div>
                    <h4 class="font-semibold mb-3">
                        {format!("Available Times · {}", format_date(date))}
                    </h4>
                    if slots.is_empty() {
                        <p class="text-gray-500 text-sm">{"No available times for this date"}</p>
                    } else {
                        <div class="grid grid-cols-2 gap-2">
                            {for slots.iter().map(|slot| {
                                let slot = *slot;
                                let is_selected = *selected_time == Some(slot);
                                let onclick = {
                                    let selected_time = selected_time.clone();
                                    Callback::from(move |_: MouseEvent| selected_time.set(Some(slot)))
                                };
                                html! {
                                    <button
                                        {onclick}
                                        class={format!(
                                            "w-full py-1.5 rounded-md text-sm {}",
                                            if is_selected { "bg-gray-900 text-white" } else { "border hover:bg-gray-100" }
                                        )}
                                    >
                                        {slot.to_string()}
                                    </button>
                                }
                            })}
                        </div>
                    }
                </div>
            }

            <div class="border-t pt-4">
                <div class="flex justify-between items-center mb-4">
                    <span class="font-semibold">{"Session Price:"}</span>
                    <span class="text-2xl font-bold text-green-600">{format_price(props.coach.price)}</span>
                </div>
                <button onclick={on_book} class="w-full py-3 rounded-md bg-blue-600 hover:bg-blue-700 text-white text-lg">
                    {"Book Session"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
    children: Html,
}

#[function_component]
fn Card(props: &CardProps) -> Html {
    html! {
        <div class="rounded-lg border bg-white shadow-sm">
            <div class="p-6 pb-2">
                <h3 class="text-2xl font-semibold">{&props.title}</h3>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-gray-500">{subtitle}</p>
                }
            </div>
            <div class="p-6 pt-2">{props.children.clone()}</div>
        </div>
    }
}
