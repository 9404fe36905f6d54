use std::rc::Rc;

use signup_board_core::{StatusMessage, STATUS_VISIBLE_MS};
use yew::prelude::*;

use crate::hooks::{ActivitiesContext, SnapshotState};
use crate::services::ActivitiesApi;

#[derive(Properties, PartialEq)]
pub struct ActivitiesProviderProps {
    /// Backend base URL; empty means same-origin relative requests
    #[prop_or_default]
    pub base_url: AttrValue,
    pub children: Children,
}

/// Owns the rendered snapshot and the transient status message, and exposes
/// them (plus the backend client) to descendants through
/// [`ActivitiesContext`].
///
/// The snapshot is fetched once on mount and wholly replaced on every
/// reload; mutations in flight are never cancelled, so the last response to
/// resolve determines the final rendered state.
#[function_component(ActivitiesProvider)]
pub fn activities_provider(props: &ActivitiesProviderProps) -> Html {
    let snapshot = use_state(|| SnapshotState::Loading);
    let status = use_state(|| None::<StatusMessage>);
    let api = use_memo(props.base_url.clone(), |base| {
        ActivitiesApi::new(base.to_string())
    });

    let reload = {
        let snapshot = snapshot.clone();
        let api = api.clone();
        Rc::new(move || {
            let snapshot = snapshot.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_activities().await {
                    Ok(catalog) => {
                        tracing::info!("loaded {} activities", catalog.len());
                        snapshot.set(SnapshotState::Ready(catalog));
                    }
                    Err(err) => {
                        tracing::error!("failed to load activities: {err}");
                        snapshot.set(SnapshotState::Unavailable);
                    }
                }
            });
        }) as Rc<dyn Fn()>
    };

    let announce = {
        let status = status.clone();
        Rc::new(move |message: StatusMessage| {
            status.set(Some(message));

            // Each message arms its own hide timer; timers are never
            // cancelled, so an earlier one may hide a later message.
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(STATUS_VISIBLE_MS).await;
                status.set(None);
            });
        }) as Rc<dyn Fn(StatusMessage)>
    };

    // Initial load on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload();
            move || {}
        });
    }

    let context = ActivitiesContext {
        snapshot: (*snapshot).clone(),
        status: (*status).clone(),
        api,
        reload,
        announce,
    };

    html! {
        <ContextProvider<ActivitiesContext> {context}>
            {props.children.clone()}
        </ContextProvider<ActivitiesContext>>
    }
}
