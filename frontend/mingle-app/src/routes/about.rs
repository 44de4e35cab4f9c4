use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About - Mingle" />
        <div class="about">
            <h2>"About Mingle"</h2>
            <p>
                "Mingle is a small user directory. Browse the roster on the home page,
                open a profile, and flip between its posts and friends tabs."
            </p>
            <p>
                "The roster is served by the dev API on port 4000; start it before
                loading the app or you'll be browsing an empty room."
            </p>
        </div>
    }
}
