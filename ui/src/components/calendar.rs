use catalog::calendar::{MonthCursor, WEEKDAY_HEADINGS};
use jiff::civil::Date;
use yew::prelude::*;

use crate::utils::today;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub selected: Option<Date>,
    /// Emits the clicked date, or `None` when the selected date is clicked
    /// again.
    pub on_select: Callback<Option<Date>>,
}

/// Single-date month picker.
#[function_component]
pub fn Calendar(props: &CalendarProps) -> Html {
    let today = today();
    let cursor = {
        let start = props.selected.unwrap_or(today);
        use_state(move || MonthCursor::containing(start))
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.prev()))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };

    let nav_button = "h-7 w-7 rounded-md border border-gray-200 text-gray-600 hover:bg-gray-100";

    html! {
        <div class="rounded-md border border-gray-200 p-3 w-fit">
            <div class="flex items-center justify-between mb-2">
                <button type="button" onclick={on_prev} class={nav_button} aria-label="Previous month">
                    {"‹"}
                </button>
                <span class="text-sm font-medium">{cursor.label()}</span>
                <button type="button" onclick={on_next} class={nav_button} aria-label="Next month">
                    {"›"}
                </button>
            </div>
            <div class="grid grid-cols-7 gap-1 text-center">
                {for WEEKDAY_HEADINGS.iter().map(|heading| html! {
                    <span class="w-9 text-xs font-normal text-gray-500">{*heading}</span>
                })}
                {for cursor.grid().into_iter().map(|cell| match cell {
                    None => html! { <span class="w-9 h-9" /> },
                    Some(date) => {
                        let is_selected = props.selected == Some(date);
                        let on_click = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_select.emit((!is_selected).then_some(date));
                            })
                        };
                        let state_classes = if is_selected {
                            "bg-blue-600 text-white hover:bg-blue-600"
                        } else if date == today {
                            "bg-gray-100 text-gray-900"
                        } else {
                            "text-gray-900"
                        };
                        html! {
                            <button
                                type="button"
                                onclick={on_click}
                                class={format!("w-9 h-9 rounded-md text-sm hover:bg-gray-100 {}", state_classes)}
                            >
                                {date.day().to_string()}
                            </button>
                        }
                    }
                })}
            </div>
        </div>
    }
}
