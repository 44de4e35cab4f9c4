use leptos::prelude::*;
use leptos_router::components::A;
use mingle_api_types::User;

/// One roster row on the home page, linking to that user's profile.
#[component]
pub fn UserCard(user: User, current_user: ReadSignal<Option<User>>) -> impl IntoView {
    let user_id = user.id;
    let is_you =
        move || current_user.with(|current| current.as_ref().is_some_and(|c| c.id == user_id));

    view! {
        <A href=format!("/profile/{user_id}") attr:class="user-card">
            <img class="avatar" src=user.avatar.clone() alt=format!("{}'s avatar", user.name) />
            <span class="user-name">{user.name.clone()}</span>
            <Show when=is_you>
                <span class="badge">"You"</span>
            </Show>
        </A>
    }
}
