use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_params_map;
use mingle_api_types::User;

use crate::context::{HomeContext, ProfileContext};

/// Resolve the `:id` route segment against the roster. The segment must be
/// an exact numeric id; anything else is treated as not-found rather than an
/// error.
fn resolve_user(users: &[User], raw_id: &str) -> Option<User> {
    let id: u64 = raw_id.parse().ok()?;
    users.iter().find(|user| user.id == id).cloned()
}

fn is_own_profile(current_user: Option<&User>, user: &User) -> bool {
    current_user.is_some_and(|current| current.id == user.id)
}

/// Profile panel nested in Home's outlet; hosts the posts/friends tabs in
/// its own outlet.
#[component]
pub fn UserProfile() -> impl IntoView {
    let params = use_params_map();
    let home = expect_context::<HomeContext>();
    let users = home.users;
    let current_user = home.current_user;

    let profile_user = Memo::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        users.with(|users| resolve_user(users, &raw))
    });
    provide_context(ProfileContext {
        user: profile_user,
        current_user,
        users,
    });

    view! {
        {move || match profile_user.get() {
            None => Either::Left(view! { <div class="not-found">"User not found"</div> }),
            Some(user) => {
                let own = current_user.with(|current| is_own_profile(current.as_ref(), &user));
                Either::Right(view! {
                    <aside class="user-profile">
                        <div class="profile-header">
                            <img
                                class="avatar"
                                src=user.avatar.clone()
                                alt=format!("{}'s avatar", user.name)
                            />
                            <h1>{user.name.clone()}</h1>
                            <Show when=move || own>
                                <span class="badge">"You"</span>
                            </Show>
                        </div>
                        // Active-tab styling rides on the aria-current
                        // attribute the router sets on the matching link.
                        <nav class="profile-nav">
                            <A href="posts" attr:class="profile-tab">"Posts"</A>
                            <A href="friends" attr:class="profile-tab">"Friends"</A>
                        </nav>
                        <Outlet />
                    </aside>
                })
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                avatar: "http://localhost:4000/avatars/1.png".to_string(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                avatar: "http://localhost:4000/avatars/2.png".to_string(),
            },
        ]
    }

    #[test]
    fn resolves_matching_id() {
        let user = resolve_user(&roster(), "1").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.avatar, "http://localhost:4000/avatars/1.png");
    }

    #[test]
    fn absent_id_is_not_found() {
        assert_eq!(resolve_user(&roster(), "99"), None);
        assert_eq!(resolve_user(&[], "1"), None);
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        assert_eq!(resolve_user(&roster(), "abc"), None);
        assert_eq!(resolve_user(&roster(), ""), None);
        // Strict parsing: a numeric prefix is not enough.
        assert_eq!(resolve_user(&roster(), "1abc"), None);
    }

    #[test]
    fn own_profile_requires_matching_current_user() {
        let users = roster();
        assert!(is_own_profile(Some(&users[0]), &users[0]));
        assert!(!is_own_profile(Some(&users[0]), &users[1]));
        assert!(!is_own_profile(None, &users[0]));
    }
}
