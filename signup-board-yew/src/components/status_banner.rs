use yew::prelude::*;

use crate::hooks::use_activities;

/// Transient success/error banner shown after a mutation
#[function_component(StatusBanner)]
pub fn status_banner() -> Html {
    let activities = use_activities();

    match &activities.status {
        Some(message) => html! {
            <div class={classes!("signup-status", message.severity.css_class())}>
                {&message.text}
            </div>
        },
        None => html! {
            <div class={classes!("signup-status", "hidden")}></div>
        },
    }
}
