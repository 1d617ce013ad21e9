//! UI-only access gates. They keep protected views off screen for visitors
//! who lack a session or role; the API must still authorize every request.

use crate::{
    access::{
        evaluate, redirect_target, use_navigator, AccessDecision, AccessPolicy, RedirectObserver,
        RoleRequirement, SIGN_IN_PATH,
    },
    components::layout::{AccessDeniedMessage, LoadingSpinner},
    state::session::use_session,
};
use leptos::*;
use leptos_router::Redirect;

// `required_roles` is fixed for the life of the gate; the flag and path may be signals.
fn policy_memo(
    required_roles: RoleRequirement,
    require_auth: MaybeSignal<bool>,
    path: MaybeSignal<String>,
) -> Memo<AccessPolicy> {
    let required_roles = store_value(required_roles);
    create_memo(move |_| AccessPolicy {
        required_roles: required_roles.get_value(),
        require_auth: require_auth.get(),
        fallback_path: path.get(),
    })
}

/// Renders children once access is granted and pushes denied visitors away:
/// to `fallback_path` without a session, to `/` without a required role.
/// Re-evaluates when the session, `require_auth` or `fallback_path` change.
#[component]
pub fn RequireAccess(
    children: ChildrenFn,
    #[prop(optional, into)] required_roles: RoleRequirement,
    #[prop(optional, into)] require_auth: MaybeSignal<bool>,
    #[prop(default = MaybeSignal::Static(SIGN_IN_PATH.to_string()), into)]
    fallback_path: MaybeSignal<String>,
) -> impl IntoView {
    let (session, _) = use_session();
    let navigator = use_navigator();
    let policy = policy_memo(required_roles, require_auth, fallback_path);
    let decision = create_memo(move |_| session.with(|s| policy.with(|p| evaluate(s, p))));

    create_effect(move |observer: Option<RedirectObserver>| {
        let mut observer = observer.unwrap_or_else(|| RedirectObserver::new(navigator.clone()));
        let target = policy.with(|p| redirect_target(decision.get(), p));
        observer.observe(target);
        observer
    });

    move || match decision.get() {
        AccessDecision::Loading => view! { <LoadingSpinner /> }.into_view(),
        AccessDecision::Allowed => children().into_view(),
        // Nothing until the navigation lands.
        AccessDecision::DeniedByAuth | AccessDecision::DeniedByRole => ().into_view(),
    }
}

/// Renders children, a sign-in redirect, or an inline denial. A missing role
/// never redirects. The sign-in redirect needs an enclosing `<Router/>`.
#[component]
pub fn RoleGuard(
    children: ChildrenFn,
    #[prop(optional, into)] required_roles: RoleRequirement,
    #[prop(default = MaybeSignal::Static(true), into)] require_auth: MaybeSignal<bool>,
    #[prop(default = MaybeSignal::Static(SIGN_IN_PATH.to_string()), into)]
    sign_in_path: MaybeSignal<String>,
) -> impl IntoView {
    let (session, _) = use_session();
    let policy = policy_memo(required_roles, require_auth, sign_in_path);
    let decision = create_memo(move |_| session.with(|s| policy.with(|p| evaluate(s, p))));

    move || match decision.get() {
        AccessDecision::Loading => view! { <LoadingSpinner /> }.into_view(),
        AccessDecision::DeniedByAuth => {
            let path = policy.with_untracked(|p| p.fallback_path.clone());
            view! { <Redirect path=path /> }.into_view()
        }
        AccessDecision::DeniedByRole => {
            log::debug!("access denied by role; rendering denial message");
            view! { <AccessDeniedMessage /> }.into_view()
        }
        AccessDecision::Allowed => children().into_view(),
    }
}
