use signup_board_core::MutationOutcome;
use yew::prelude::*;

use crate::hooks::{use_activities, SnapshotState};

const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const PLACEHOLDER: &str = "-- Select an activity --";

/// Dropdown entries: one placeholder plus one entry per activity name, in
/// snapshot order. The placeholder's value is empty so an untouched select
/// never submits.
fn select_entries(snapshot: &SnapshotState) -> Vec<(String, String)> {
    let mut entries = vec![(String::new(), PLACEHOLDER.to_string())];
    if let SnapshotState::Ready(catalog) = snapshot {
        entries.extend(catalog.names().map(|n| (n.to_string(), n.to_string())));
    }
    entries
}

/// Email + activity selection form.
///
/// On success the server message is shown, the form clears, and the snapshot
/// reloads; on failure the error is shown and the form keeps its values.
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let activities = use_activities();
    let email = use_state(String::new);
    let selected = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_select_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let selected = selected.clone();
        let api = activities.api.clone();
        let announce = activities.announce.clone();
        let reload = activities.reload.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let activity = (*selected).clone();
            let address = (*email).clone();
            if activity.is_empty() || address.is_empty() {
                return;
            }

            let email = email.clone();
            let selected = selected.clone();
            let api = api.clone();
            let announce = announce.clone();
            let reload = reload.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = api.signup(&activity, &address).await;
                let outcome = MutationOutcome::evaluate(result, SIGNUP_FAILED);

                if outcome.clear_form {
                    email.set(String::new());
                    selected.set(String::new());
                }
                if outcome.reload {
                    reload();
                }
                announce(outcome.status);
            });
        })
    };

    html! {
        <form class="signup-form" onsubmit={on_submit}>
            <label class="signup-form__label" for="email">{"Student Email:"}</label>
            <input
                id="email"
                class="signup-form__input"
                type="email"
                required={true}
                placeholder="your-email@example.edu"
                value={(*email).clone()}
                oninput={on_email_input}
            />

            <label class="signup-form__label" for="activity">{"Select Activity:"}</label>
            <select
                id="activity"
                class="signup-form__select"
                required={true}
                onchange={on_select_change}
            >
                {for select_entries(&activities.snapshot).into_iter().map(|(value, label)| {
                    let is_selected = value == *selected;
                    html! {
                        <option value={value} selected={is_selected}>{label}</option>
                    }
                })}
            </select>

            <button class="signup-form__submit" type="submit">{"Sign Up"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_board_core::{Activity, ActivityCatalog};

    fn catalog(names: &[&str]) -> ActivityCatalog {
        names
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    Activity {
                        description: String::new(),
                        schedule: String::new(),
                        max_participants: 10,
                        participants: vec![],
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_one_entry_per_activity_plus_placeholder() {
        let snapshot = SnapshotState::Ready(catalog(&["Chess Club", "Art Studio", "Drama Club"]));

        let entries = select_entries(&snapshot);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], (String::new(), PLACEHOLDER.to_string()));
        let names: Vec<_> = entries[1..].iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Art Studio", "Drama Club"]);
    }

    #[test]
    fn test_entries_keep_snapshot_order() {
        let snapshot = SnapshotState::Ready(catalog(&["Zebra Watching", "Art Studio"]));

        let entries = select_entries(&snapshot);

        // Snapshot order, never sorted
        assert_eq!(entries[1].0, "Zebra Watching");
        assert_eq!(entries[2].0, "Art Studio");
    }

    #[test]
    fn test_only_placeholder_while_loading_or_unavailable() {
        for snapshot in [SnapshotState::Loading, SnapshotState::Unavailable] {
            let entries = select_entries(&snapshot);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].1, PLACEHOLDER);
        }
    }
}
