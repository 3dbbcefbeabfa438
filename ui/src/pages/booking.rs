use catalog::forms::BookingRequest;
use catalog::session::{
    BOOKABLE_COACHES, BOOKABLE_SPORTS, BOOKABLE_TIMES, booking_price, upcoming_sessions,
};
use catalog::{Session, SessionStatus, SessionType, TimeSlot, format_date, format_price};
use jiff::civil::Date;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{Calendar, TabBar};
use crate::contexts::toast::use_toast;
use crate::hooks::use_title;
use crate::utils::today;

const TABS: [&str; 3] = ["Book Session", "Upcoming", "History"];
const BOOK_TAB: usize = 0;
const UPCOMING_TAB: usize = 1;

#[function_component]
pub fn BookingPage() -> Html {
    use_title("Book a Session");

    let active_tab = use_state(|| BOOK_TAB);
    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |index: usize| active_tab.set(index))
    };
    let back_to_booking = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(BOOK_TAB))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50 py-8 px-4">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold mb-4 bg-gradient-to-r from-blue-600 to-green-600 bg-clip-text text-transparent">
                        {"Book Your Training Session"}
                    </h1>
                    <p class="text-xl text-gray-600">
                        {"Schedule sessions with world-class coaches and track your progress"}
                    </p>
                </div>

                <TabBar
                    labels={TABS.iter().map(|label| AttrValue::from(*label)).collect::<Vec<_>>()}
                    active={*active_tab}
                    on_select={on_tab}
                    class="mb-6"
                />

                {match *active_tab {
                    BOOK_TAB => html! { <BookSessionPanel /> },
                    UPCOMING_TAB => html! { <UpcomingSessions /> },
                    _ => html! {
                        <div class="rounded-lg border bg-white shadow-sm p-6">
                            <h3 class="text-2xl font-semibold">{"Session History"}</h3>
                            <p class="text-sm text-gray-500 mb-6">{"Your completed training sessions"}</p>
                            <div class="text-center py-12">
                                <div class="text-6xl mb-4">{"📅"}</div>
                                <h3 class="text-xl font-semibold mb-2">{"No completed sessions yet"}</h3>
                                <p class="text-gray-600 mb-4">{"Book your first session to start your training journey"}</p>
                                <button onclick={back_to_booking} class="px-4 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white">
                                    {"Book Your First Session"}
                                </button>
                            </div>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

/// The booking form with its calendar, time picker and summary.
#[function_component]
fn BookSessionPanel() -> Html {
    let toasts = use_toast();
    let request = use_state(|| BookingRequest {
        date: Some(today()),
        ..BookingRequest::default()
    });

    let update = |apply: fn(&mut BookingRequest, String)| {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            apply(&mut next, select.value());
            request.set(next);
        })
    };
    let on_sport = update(|r, value| r.sport = Some(value));
    let on_coach = update(|r, value| r.coach = Some(value));
    let on_type = update(|r, value| {
        if let Ok(session_type) = value.parse::<SessionType>() {
            r.session_type = session_type;
        }
    });

    let on_date = {
        let request = request.clone();
        Callback::from(move |date: Option<Date>| {
            let mut next = (*request).clone();
            next.date = date;
            request.set(next);
        })
    };

    let on_book = {
        let request = request.clone();
        Callback::from(move |_: MouseEvent| match request.confirm() {
            Ok(message) => toasts.success(message),
            Err(error) => toasts.error(error.to_string()),
        })
    };

    let price = format_price(booking_price());

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 rounded-lg border bg-white shadow-sm p-6 space-y-6">
                <div>
                    <h3 class="text-2xl font-semibold">{"Schedule a New Session"}</h3>
                    <p class="text-sm text-gray-500">{"Choose your sport, coach, and preferred time"}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <Picker
                        label="Sport"
                        placeholder="Select sport"
                        value={request.sport.clone().unwrap_or_default()}
                        onchange={on_sport}
                    >
                        {for BOOKABLE_SPORTS.iter().map(|sport| html! {
                            <option value={*sport}>{*sport}</option>
                        })}
                    </Picker>
                    <Picker
                        label="Coach"
                        placeholder="Select coach"
                        value={request.coach.clone().unwrap_or_default()}
                        onchange={on_coach}
                    >
                        {for BOOKABLE_COACHES.iter().map(|coach| html! {
                            <option value={*coach}>{*coach}</option>
                        })}
                    </Picker>
                    <Picker
                        label="Session Type"
                        value={request.session_type.to_string()}
                        onchange={on_type}
                    >
                        {for SessionType::ALL.iter().map(|session_type| html! {
                            <option value={session_type.to_string()}>{session_type.label()}</option>
                        })}
                    </Picker>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label class="block text-sm font-medium mb-3">{"Select Date"}</label>
                        <Calendar selected={request.date} on_select={on_date} />
                    </div>

                    if request.date.is_some() {
                        <div>
                            <label class="block text-sm font-medium mb-3">{"Available Times"}</label>
                            <div class="grid grid-cols-3 gap-2">
                                {for BOOKABLE_TIMES.iter().map(|slot| {
                                    let slot: TimeSlot = *slot;
                                    let is_selected = request.time == Some(slot);
                                    let onclick = {
                                        let request = request.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            let mut next = (*request).clone();
                                            next.time = Some(slot);
                                            request.set(next);
                                        })
                                    };
                                    html! {
                                        <button
                                            {onclick}
                                            class={format!(
                                                "py-1.5 rounded-md text-sm {}",
                                                if is_selected { "bg-gray-900 text-white" } else { "border hover:bg-gray-100" }
                                            )}
                                        >
                                            {slot.to_string()}
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    }
                </div>

                <button
                    onclick={on_book}
                    class="w-full py-3 rounded-md bg-gradient-to-r from-blue-600 to-green-600 hover:from-blue-700 hover:to-green-700 text-white text-lg"
                >
                    {format!("💳 Book Session - {price}")}
                </button>
            </div>

            <BookingSummary request={(*request).clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PickerProps {
    label: AttrValue,
    #[prop_or_default]
    placeholder: Option<AttrValue>,
    value: AttrValue,
    onchange: Callback<Event>,
    children: Html,
}

#[function_component]
fn Picker(props: &PickerProps) -> Html {
    html! {
        <div>
            <label class="block text-sm font-medium mb-2">{&props.label}</label>
            <select
                value={props.value.clone()}
                onchange={props.onchange.clone()}
                class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white"
            >
                if let Some(placeholder) = &props.placeholder {
                    <option value="" disabled={true}>{placeholder}</option>
                }
                {props.children.clone()}
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookingSummaryProps {
    request: BookingRequest,
}

/// Mirrors the current selections. Unset rows fall back to a placeholder.
#[function_component]
fn BookingSummary(props: &BookingSummaryProps) -> Html {
    let request = &props.request;
    let or_dash = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "Not selected".into());

    let rows = [
        ("Sport:", or_dash(request.sport.clone())),
        ("Coach:", or_dash(request.coach.clone())),
        ("Type:", request.session_type.to_string()),
        ("Date:", or_dash(request.date.map(format_date))),
        ("Time:", or_dash(request.time.map(|t| t.to_string()))),
    ];

    html! {
        <div class="rounded-lg border bg-white shadow-sm p-6 space-y-4 h-fit">
            <h3 class="text-2xl font-semibold">{"Booking Summary"}</h3>
            <div class="space-y-2">
                {for rows.into_iter().map(|(label, value)| html! {
                    <div class="flex justify-between">
                        <span class="text-gray-600">{label}</span>
                        <span class="font-medium capitalize">{value}</span>
                    </div>
                })}
            </div>
            <div class="border-t pt-4 flex justify-between text-lg font-semibold">
                <span>{"Total:"}</span>
                <span class="text-green-600">{format!("${:.2}", booking_price())}</span>
            </div>
            <div class="space-y-2 text-sm text-gray-600">
                <p>{"🔔 Reminder notifications enabled"}</p>
                <p>{"💳 Payment via wallet system"}</p>
            </div>
        </div>
    }
}

#[function_component]
fn UpcomingSessions() -> Html {
    let toasts = use_toast();
    let sessions = use_memo((), |_| upcoming_sessions());

    html! {
        <div class="rounded-lg border bg-white shadow-sm p-6">
            <h3 class="text-2xl font-semibold">{"Upcoming Sessions"}</h3>
            <p class="text-sm text-gray-500 mb-6">{"Manage your scheduled training sessions"}</p>
            <div class="space-y-4">
                {for sessions.iter().map(|session| {
                    let on_reschedule = {
                        let toasts = toasts.clone();
                        let notice = session.reschedule_notice();
                        Callback::from(move |_: MouseEvent| toasts.info(notice.clone()))
                    };
                    let on_cancel = {
                        let toasts = toasts.clone();
                        let notice = session.cancellation_notice();
                        Callback::from(move |_: MouseEvent| toasts.info(notice.clone()))
                    };
                    html! {
                        <SessionRow
                            key={session.id.to_string()}
                            session={session.clone()}
                            {on_reschedule}
                            {on_cancel}
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SessionRowProps {
    session: Session,
    on_reschedule: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
}

#[function_component]
fn SessionRow(props: &SessionRowProps) -> Html {
    let session = &props.session;
    let badge = match session.status {
        SessionStatus::Upcoming => "bg-blue-100 text-blue-800",
        SessionStatus::Completed => "bg-green-100 text-green-800",
        SessionStatus::Cancelled => "bg-red-100 text-red-800",
    };
    let icon = match session.session_type {
        SessionType::Individual => "👤",
        SessionType::Group => "👥",
        SessionType::Virtual => "🎥",
    };

    html! {
        <div class="border rounded-lg p-4 hover:shadow-md transition-shadow">
            <div class="flex justify-between items-start mb-3">
                <div class="flex items-center gap-3">
                    <span class="text-xl">{icon}</span>
                    <div>
                        <h4 class="font-semibold">{format!("{} Session", session.sport)}</h4>
                        <p class="text-gray-600">{format!("with {}", session.coach)}</p>
                    </div>
                </div>
                <span class={format!("px-2 py-0.5 rounded text-xs font-medium {badge}")}>
                    {session.status.to_string()}
                </span>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm mb-4">
                <div>{format!("📅 {}", format_date(session.date))}</div>
                <div>{format!("🕒 {}", session.time)}</div>
                <div>{format!("{} minutes", session.duration_minutes)}</div>
                <div class="font-semibold text-green-600">{format_price(session.price)}</div>
            </div>

            if let Some(location) = &session.location {
                <p class="text-sm text-gray-600 mb-4">{format!("📍 {location}")}</p>
            }

            <div class="flex gap-2">
                <button onclick={props.on_reschedule.clone()} class="px-3 py-1 rounded-md border text-sm hover:bg-gray-100">
                    {"Reschedule"}
                </button>
                <button onclick={props.on_cancel.clone()} class="px-3 py-1 rounded-md text-sm bg-red-600 hover:bg-red-700 text-white">
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
