use leptos::prelude::*;

use crate::context::ProfileContext;

/// Posts tab. Purely presentational; everything it shows comes from the
/// profile context.
#[component]
pub fn UserPosts() -> impl IntoView {
    let profile = expect_context::<ProfileContext>();
    let user = profile.user;

    view! {
        <section class="profile-posts">
            <h3>"Posts"</h3>
            {move || {
                user.get().map(|user| {
                    view! {
                        <p class="empty-feed">
                            {format!("{} hasn't posted anything yet.", user.name)}
                        </p>
                    }
                })
            }}
        </section>
    }
}
