use signup_board_core::{Activity, MutationOutcome};
use yew::prelude::*;

use crate::hooks::use_activities;

const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
}

/// One activity: name, description, schedule, capacity line, and a roster of
/// participant emails with a remove button each.
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activities = use_activities();

    let on_remove = {
        let api = activities.api.clone();
        let announce = activities.announce.clone();
        let reload = activities.reload.clone();
        let name = props.name.clone();

        Callback::from(move |email: String| {
            let api = api.clone();
            let announce = announce.clone();
            let reload = reload.clone();
            let name = name.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = api.unregister(&name, &email).await;
                let outcome = MutationOutcome::evaluate(result, UNREGISTER_FAILED);
                if outcome.reload {
                    reload();
                }
                announce(outcome.status);
            });
        })
    };

    html! {
        <div class="signup-card">
            <h4 class="signup-card__name">{props.name.clone()}</h4>
            <p class="signup-card__description">{&props.activity.description}</p>
            <p class="signup-card__schedule">
                <strong>{"Schedule: "}</strong>
                {&props.activity.schedule}
            </p>
            <p class="signup-card__capacity">
                <strong>{"Capacity: "}</strong>
                {props.activity.capacity_label()}
            </p>

            <div class="signup-card__participants">
                <h5 class="signup-card__participants-title">
                    {"Participants "}
                    <span class="signup-card__count">{props.activity.participant_count()}</span>
                </h5>
                <ul class="signup-card__roster">
                    {for props.activity.participants.iter().map(|email| {
                        let on_remove = on_remove.clone();
                        let address = email.clone();
                        html! {
                            <li class="signup-card__entry">
                                <span class="signup-card__email">{email}</span>
                                <button
                                    class="signup-card__remove"
                                    title="Remove participant"
                                    onclick={move |_| on_remove.emit(address.clone())}
                                >
                                    {"✕"}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </div>
    }
}
