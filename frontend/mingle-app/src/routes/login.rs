use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use mingle_api_types::User;

use crate::context::SessionContext;

/// Not real authentication: pick anyone from the roster and browse as them.
#[component]
pub fn Login() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let users = session.users;
    let set_current_user = session.set_current_user;
    let navigate = use_navigate();

    view! {
        <Title text="Login - Mingle" />
        <div class="login">
            <h2>"Who are you?"</h2>
            <For
                each=move || users.get()
                key=|user| user.id
                children=move |user: User| {
                    let choice = user.clone();
                    let navigate = navigate.clone();
                    view! {
                        <button
                            class="btn login-choice"
                            on:click=move |_| {
                                set_current_user.set(Some(choice.clone()));
                                navigate("/", NavigateOptions::default());
                            }
                        >
                            <img class="avatar" src=user.avatar.clone() alt=user.name.clone() />
                            {format!("Continue as {}", user.name)}
                        </button>
                    }
                }
            />
        </div>
    }
}
