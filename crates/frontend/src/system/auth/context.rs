use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::{api_base, ApiClient, Session};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some() && self.user_info.is_some()
    }

    /// Transport bound to this state's session.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(api_base(), self.session.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        session: storage::get_access_token().map(Session::new),
        user_info: storage::get_user_info(),
    });

    // Re-validate a restored session once on mount
    if let Some(session) = auth_state.get_untracked().session {
        spawn_local(async move {
            let client = ApiClient::new(api_base(), Some(session.clone()));
            match api::get_current_user(&client).await {
                Ok(user_info) => {
                    storage::save_user_info(&user_info);
                    let _ = auth_state.try_set(AuthState {
                        session: Some(session),
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    log::error!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    let _ = auth_state.try_set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// API client carrying the current session. Re-read it per request so a
/// logout in between is honoured.
pub fn use_api() -> Signal<ApiClient> {
    let auth_state = use_auth();
    Signal::derive(move || auth_state.with(AuthState::client))
}

/// Persist a successful login and switch the shell to the main layout
pub fn complete_login(auth_state: RwSignal<AuthState>, response: LoginResponse) {
    storage::save_access_token(&response.access_token);
    storage::save_user_info(&response.user);
    auth_state.set(AuthState {
        session: Some(Session::new(response.access_token)),
        user_info: Some(response.user),
    });
}

/// Helper: Perform logout
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    let client = auth_state.get_untracked().client();
    storage::clear_tokens();
    auth_state.set(AuthState::default());
    spawn_local(async move {
        if let Err(e) = api::logout(&client).await {
            log::debug!("Logout request failed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    #[test]
    fn test_authenticated_needs_session_and_user() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());
        state.session = Some(Session::new("t"));
        assert!(!state.is_authenticated());
        state.user_info = Some(UserInfo {
            id: "1".into(),
            username: "admin".into(),
            full_name: None,
            role: Role::Admin,
            customer_id: None,
        });
        assert!(state.is_authenticated());
    }
}
