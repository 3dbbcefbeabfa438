use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub stars: u8,
    #[prop_or_else(|| "text-base".into())]
    pub size: AttrValue,
}

#[function_component]
pub fn StarRating(props: &StarRatingProps) -> Html {
    html! {
        <span class={format!("text-yellow-400 {}", props.size)} aria-label={format!("{} stars", props.stars)}>
            {for (0..props.stars).map(|_| html! { <span>{"★"}</span> })}
        </span>
    }
}
