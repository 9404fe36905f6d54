use yew::prelude::*;

use crate::components::{ActivityList, SignupForm, StatusBanner};

/// Main screen: the activity cards on one side, the signup form and status
/// banner on the other.
#[function_component(BoardScreen)]
pub fn board_screen() -> Html {
    html! {
        <>
            <header class="signup-board__header">
                <h1 class="signup-board__title">{"Activity Signup Board"}</h1>
                <p class="signup-board__tagline">
                    {"Discover and sign up for extracurricular activities"}
                </p>
            </header>

            <main class="signup-board__main">
                <section class="signup-board__activities">
                    <h3>{"Available Activities"}</h3>
                    <ActivityList />
                </section>

                <section class="signup-board__signup">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupForm />
                    <StatusBanner />
                </section>
            </main>
        </>
    }
}
