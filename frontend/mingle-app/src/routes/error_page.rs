use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Fallback for anything the route table doesn't match.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Mingle" />
        <div class="error-page">
            <h1>"404"</h1>
            <p>"There's nothing at this address."</p>
            <A href="/" attr:class="btn">"Back to the directory"</A>
        </div>
    }
}
