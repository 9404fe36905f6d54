use yew::prelude::*;

use crate::pages::BoardScreen;
use crate::providers::ActivitiesProvider;

/// Application root: wires the provider around the board screen.
///
/// The provider's default base URL is empty, so all requests go to the
/// origin that served the page.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="signup-board">
            <ActivitiesProvider>
                <BoardScreen />
            </ActivitiesProvider>
        </div>
    }
}
