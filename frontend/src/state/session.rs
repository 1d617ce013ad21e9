use crate::{
    access::{Role, RoleSet},
    api::{ApiClient, ApiError, UserResponse},
};
use leptos::*;

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserResponse>,
    pub roles: RoleSet,
    pub loading: bool,
}

impl SessionState {
    pub fn resolving() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn signed_in(user: UserResponse) -> Self {
        let roles = RoleSet::from_tags(&user.roles);
        Self {
            user: Some(user),
            roles,
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.is_authenticated() && self.roles.contains(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.is_authenticated() && self.roles.contains_any(roles)
    }
}

/// Folds the outcome of session resolution into the session signal.
pub fn apply_resolution(
    set_session: WriteSignal<SessionState>,
    result: Result<UserResponse, ApiError>,
) {
    let next = match result {
        Ok(user) => SessionState::signed_in(user),
        Err(err) if err.is_unauthorized() => SessionState::anonymous(),
        Err(err) => {
            log::warn!("session resolution failed: {} ({})", err, err.code);
            SessionState::anonymous()
        }
    };
    set_session.set(next);
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState::resolving());

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        let result = api_client.get_me().await;
        apply_resolution(set_session, result);
    });

    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}
