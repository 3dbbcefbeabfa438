use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub labels: Vec<AttrValue>,
    pub active: usize,
    pub on_select: Callback<usize>,
    /// Extra classes for the bar container.
    #[prop_or_default]
    pub class: AttrValue,
}

/// Segmented tab switcher. The caller owns which tab is active and renders
/// the matching panel.
#[function_component]
pub fn TabBar(props: &TabBarProps) -> Html {
    let columns = format!(
        "grid gap-1 rounded-md bg-gray-100 p-1 grid-cols-{} {}",
        props.labels.len(),
        props.class
    );

    html! {
        <div class={columns} role="tablist">
            {for props.labels.iter().enumerate().map(|(index, label)| {
                let is_active = index == props.active;
                let onclick = props.on_select.reform(move |_: MouseEvent| index);
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={is_active.to_string()}
                        {onclick}
                        class={format!(
                            "rounded-sm px-3 py-1.5 text-sm font-medium transition-all {}",
                            if is_active {
                                "bg-white text-gray-900 shadow-sm"
                            } else {
                                "text-gray-500 hover:text-gray-900"
                            }
                        )}
                    >
                        {label.clone()}
                    </button>
                }
            })}
        </div>
    }
}
