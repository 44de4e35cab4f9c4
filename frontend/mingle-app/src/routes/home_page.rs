use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::user_card::UserCard;
use crate::context::{HomeContext, SessionContext};

/// The roster listing, with the profile chain nested in its outlet.
#[component]
pub fn Home() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    // Children get a fresh, narrowed context: no loading flag, no setter.
    let home = HomeContext::narrow(&session);
    provide_context(home);
    let users = home.users;
    let current_user = home.current_user;

    view! {
        <div class="home-layout">
            <section class="user-list">
                <h2>"All Users"</h2>
                <For each=move || users.get() key=|user| user.id let:user>
                    <UserCard user current_user />
                </For>
            </section>
            <section class="user-detail">
                <Outlet />
            </section>
        </div>
    }
}
