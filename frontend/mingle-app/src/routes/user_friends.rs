use leptos::prelude::*;
use mingle_api_types::User;

use crate::context::ProfileContext;

/// Friends tab: everyone on the roster except the profile's owner.
#[component]
pub fn UserFriends() -> impl IntoView {
    let profile = expect_context::<ProfileContext>();
    let user = profile.user;
    let users = profile.users;

    let friends = move || {
        let Some(user) = user.get() else {
            return Vec::new();
        };
        users.with(|users| {
            users
                .iter()
                .filter(|friend| friend.id != user.id)
                .cloned()
                .collect::<Vec<User>>()
        })
    };

    view! {
        <section class="profile-friends">
            <h3>"Friends"</h3>
            <ul class="friend-list">
                <For each=friends key=|friend| friend.id let:friend>
                    <li class="friend">
                        <img class="avatar" src=friend.avatar.clone() alt=friend.name.clone() />
                        <span>{friend.name.clone()}</span>
                    </li>
                </For>
            </ul>
        </section>
    }
}
