use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CoachAvatarProps {
    pub initials: AttrValue,
    /// Size, shape and colour classes.
    #[prop_or_else(|| "w-24 h-24 text-2xl bg-gradient-to-br from-blue-400 to-green-400 text-white".into())]
    pub classes: AttrValue,
}

/// Circle with a coach's initials, standing in for a photo.
#[function_component]
pub fn CoachAvatar(props: &CoachAvatarProps) -> Html {
    html! {
        <div class={format!("rounded-full flex items-center justify-center font-bold {}", props.classes)}>
            {&props.initials}
        </div>
    }
}
