use catalog::ACADEMY_NAME;
use yew::prelude::*;

/// Sets the document title to "{title} | Elite Sports Academy". No cleanup
/// on unmount since each page sets its own title, and unmount/mount
/// ordering isn't guaranteed during route transitions.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} | {ACADEMY_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
