use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mingle_api_types::User;
use send_wrapper::SendWrapper;

use crate::api::{get_current_user, get_users};
use crate::context::SessionContext;
use crate::error::AppResult;

/// Everything the initial load produces.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SessionData {
    pub users: Vec<User>,
    pub current_user: Option<User>,
}

/// Fetch the roster and the current user concurrently, waiting for both to
/// settle before reporting anything.
pub(crate) async fn load_session(abort: Option<&web_sys::AbortSignal>) -> SessionData {
    let (users, current_user) = join!(get_users(abort), get_current_user(abort));
    settle(users, current_user)
}

/// Either request failing drops both results: a coherent empty state beats a
/// half-loaded one.
fn settle(users: AppResult<Vec<User>>, current_user: AppResult<Option<User>>) -> SessionData {
    match (users, current_user) {
        (Ok(users), Ok(current_user)) => SessionData {
            users,
            current_user,
        },
        (users, current_user) => {
            if let Err(e) = users {
                log::warn!("loading /users failed: {e}");
            }
            if let Err(e) = current_user {
                log::warn!("loading /current-user failed: {e}");
            }
            SessionData::default()
        }
    }
}

/// Create the root session signals, kick off the initial load, and provide
/// the resulting [`SessionContext`] to the component tree.
pub(crate) fn provide_session() -> SessionContext {
    let (users, set_users) = signal(Vec::new());
    let (current_user, set_current_user) = signal(None);
    let (is_loading, set_is_loading) = signal(true);

    let abort_controller = web_sys::AbortController::new().ok().map(SendWrapper::new);
    let abort_signal = abort_controller.as_deref().map(|a| a.signal());
    // Abort in-flight requests if the root is torn down mid-load; a late
    // result must never touch a disposed view.
    on_cleanup(move || {
        if let Some(controller) = abort_controller {
            controller.abort();
        }
    });

    spawn_local(async move {
        let session = load_session(abort_signal.as_ref()).await;
        set_users.set(session.users);
        set_current_user.set(session.current_user);
        set_is_loading.set(false);
    });

    let context = SessionContext {
        users,
        current_user,
        set_current_user,
        is_loading,
    };
    provide_context(context);
    context
}
