use icondata as i;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_router::components::A;

use crate::context::SessionContext;

/// Top navigation. Shows who is browsing when a current user is loaded,
/// otherwise a login link.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let current_user = session.current_user;

    view! {
        <nav class="header">
            <A href="/" attr:class="nav-item">
                <Icon icon=i::AiHomeOutlined width="1.2em" height="1.2em" />
                "Home"
            </A>
            <A href="/about" attr:class="nav-item">
                <Icon icon=i::AiInfoCircleOutlined width="1.2em" height="1.2em" />
                "About"
            </A>
            {move || match current_user.get() {
                Some(user) => Either::Left(view! {
                    <span class="nav-item nav-user">
                        <img class="avatar" src=user.avatar.clone() alt=user.name.clone() />
                        {user.name.clone()}
                    </span>
                }),
                None => Either::Right(view! {
                    <A href="/login" attr:class="btn nav-item">"Login"</A>
                }),
            }}
        </nav>
    }
}
