use leptos::prelude::*;
use mingle_api_types::User;

/// Context the root [`App`](crate::App) provides to the whole route tree.
///
/// Data flows strictly downward; `set_current_user` is the only upward
/// channel and is consumed by the login view.
#[derive(Clone, Copy)]
pub(crate) struct SessionContext {
    pub users: ReadSignal<Vec<User>>,
    pub current_user: ReadSignal<Option<User>>,
    pub set_current_user: WriteSignal<Option<User>>,
    pub is_loading: ReadSignal<bool>,
}

/// What `Home` publishes to its outlet: the session minus the loading flag
/// and the setter. Rebuilt fresh on every mount of `Home`.
#[derive(Clone, Copy)]
pub(crate) struct HomeContext {
    pub users: ReadSignal<Vec<User>>,
    pub current_user: ReadSignal<Option<User>>,
}

impl HomeContext {
    pub(crate) fn narrow(session: &SessionContext) -> Self {
        Self {
            users: session.users,
            current_user: session.current_user,
        }
    }
}

/// What `UserProfile` publishes to the posts/friends outlet. `user` is
/// `None` when the `:id` segment doesn't resolve to anyone on the roster;
/// the outlet is not rendered in that case.
#[derive(Clone, Copy)]
pub(crate) struct ProfileContext {
    pub user: Memo<Option<User>>,
    pub current_user: ReadSignal<Option<User>>,
    pub users: ReadSignal<Vec<User>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            avatar: format!("http://localhost:4000/avatars/{id}.png"),
        }
    }

    #[test]
    fn narrowed_home_context_is_field_equal_to_session() {
        let owner = Owner::new();
        owner.set();

        let (users, _set_users) = signal(vec![user(1, "John Doe"), user(2, "Jane Smith")]);
        let (current_user, set_current_user) = signal(Some(user(1, "John Doe")));
        let (is_loading, _set_is_loading) = signal(false);
        let session = SessionContext {
            users,
            current_user,
            set_current_user,
            is_loading,
        };

        let home = HomeContext::narrow(&session);
        assert_eq!(
            home.users.get_untracked(),
            session.users.get_untracked(),
            "roster must survive narrowing unchanged"
        );
        assert_eq!(
            home.current_user.get_untracked(),
            session.current_user.get_untracked()
        );
    }

    #[test]
    fn narrowed_context_tracks_later_session_updates() {
        let owner = Owner::new();
        owner.set();

        let (users, _set_users) = signal(vec![user(1, "John Doe")]);
        let (current_user, set_current_user) = signal(None);
        let (is_loading, _set_is_loading) = signal(false);
        let session = SessionContext {
            users,
            current_user,
            set_current_user,
            is_loading,
        };
        let home = HomeContext::narrow(&session);

        set_current_user.set(Some(user(1, "John Doe")));
        assert_eq!(
            home.current_user.get_untracked().map(|u| u.id),
            Some(1),
            "narrowing shares the signal, it does not snapshot it"
        );
    }
}
