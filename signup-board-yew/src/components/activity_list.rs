use yew::prelude::*;

use crate::components::ActivityCard;
use crate::hooks::{use_activities, SnapshotState};

/// Renders the activity snapshot: a loading line, one card per activity, or
/// a static failure notice when the load failed.
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let activities = use_activities();

    html! {
        <div class="signup-list">
            {match &activities.snapshot {
                SnapshotState::Loading => html! {
                    <p class="signup-list__loading">{"Loading activities..."}</p>
                },
                SnapshotState::Unavailable => html! {
                    <p class="signup-list__failed">
                        {"Failed to load activities. Please try again later."}
                    </p>
                },
                SnapshotState::Ready(catalog) if catalog.is_empty() => html! {
                    <p class="signup-list__empty">{"No activities yet"}</p>
                },
                SnapshotState::Ready(catalog) => html! {
                    <>
                        {for catalog.iter().map(|(name, activity)| html! {
                            <ActivityCard
                                key={name.to_string()}
                                name={name.to_string()}
                                activity={activity.clone()}
                            />
                        })}
                    </>
                },
            }}
        </div>
    }
}
