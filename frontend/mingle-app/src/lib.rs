pub(crate) mod api;
pub mod components;
pub(crate) mod context;
pub mod error;
pub(crate) mod main_nav;
pub mod routes;
pub(crate) mod session;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::loading::Loading;
use crate::main_nav::NavBar;
use crate::routes::about::About;
use crate::routes::error_page::ErrorPage;
use crate::routes::home_page::Home;
use crate::routes::login::Login;
use crate::routes::profile::UserProfile;
use crate::routes::user_friends::UserFriends;
use crate::routes::user_posts::UserPosts;
use crate::session::provide_session;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = provide_session();
    let is_loading = session.is_loading;

    view! {
        <Title text="Mingle" />
        <Router>
            {move || {
                if is_loading.get() {
                    // Nothing else renders until both fetches settle; no
                    // partially loaded shell is ever shown.
                    Either::Left(view! { <Loading /> })
                } else {
                    Either::Right(view! {
                        <div class="app">
                            <header>
                                <NavBar />
                            </header>
                            <main>
                                <Routes fallback=ErrorPage>
                                    <ParentRoute path=path!("") view=Home>
                                        <ParentRoute path=path!("profile/:id") view=UserProfile>
                                            <Route path=path!("posts") view=UserPosts />
                                            <Route path=path!("friends") view=UserFriends />
                                            <Route path=path!("") view=|| () />
                                        </ParentRoute>
                                        <Route path=path!("") view=|| () />
                                    </ParentRoute>
                                    <Route path=path!("about") view=About />
                                    <Route path=path!("login") view=Login />
                                </Routes>
                            </main>
                        </div>
                    })
                }
            }}
        </Router>
    }
}
