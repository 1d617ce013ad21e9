use super::{role::RoleRequirement, ROOT_PATH, SIGN_IN_PATH};
use crate::state::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub required_roles: RoleRequirement,
    pub require_auth: bool,
    pub fallback_path: String,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            required_roles: RoleRequirement::none(),
            require_auth: false,
            fallback_path: SIGN_IN_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Allowed,
    DeniedByAuth,
    DeniedByRole,
}

pub fn evaluate(session: &SessionState, policy: &AccessPolicy) -> AccessDecision {
    if session.loading {
        return AccessDecision::Loading;
    }
    if policy.require_auth && !session.is_authenticated() {
        return AccessDecision::DeniedByAuth;
    }
    if !policy.required_roles.is_unrestricted()
        && !session.has_any_role(policy.required_roles.as_slice())
    {
        return AccessDecision::DeniedByRole;
    }
    AccessDecision::Allowed
}

/// Route the redirecting gate sends a denied visitor to.
pub fn redirect_target(decision: AccessDecision, policy: &AccessPolicy) -> Option<String> {
    match decision {
        AccessDecision::DeniedByAuth => Some(policy.fallback_path.clone()),
        AccessDecision::DeniedByRole => Some(ROOT_PATH.to_string()),
        AccessDecision::Loading | AccessDecision::Allowed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Role;
    use crate::test_support::helpers::{anonymous_session, loading_session, session_with_roles};

    fn policy(required: impl Into<RoleRequirement>, require_auth: bool) -> AccessPolicy {
        AccessPolicy {
            required_roles: required.into(),
            require_auth,
            ..AccessPolicy::default()
        }
    }

    #[test]
    fn loading_overrides_every_policy() {
        let session = loading_session();
        for require_auth in [false, true] {
            for required in [vec![], vec![Role::Admin], vec![Role::Editor, Role::Viewer]] {
                assert_eq!(
                    evaluate(&session, &policy(required, require_auth)),
                    AccessDecision::Loading
                );
            }
        }
    }

    #[test]
    fn missing_user_is_denied_by_auth_when_required() {
        let decision = evaluate(&anonymous_session(), &policy(RoleRequirement::none(), true));
        assert_eq!(decision, AccessDecision::DeniedByAuth);
    }

    #[test]
    fn auth_denial_takes_precedence_over_roles() {
        let decision = evaluate(&anonymous_session(), &policy(Role::Admin, true));
        assert_eq!(decision, AccessDecision::DeniedByAuth);
    }

    #[test]
    fn anonymous_visitor_without_auth_requirement_fails_role_check() {
        let decision = evaluate(&anonymous_session(), &policy(Role::Admin, false));
        assert_eq!(decision, AccessDecision::DeniedByRole);
    }

    #[test]
    fn anonymous_visitor_passes_open_policy() {
        let decision = evaluate(&anonymous_session(), &AccessPolicy::default());
        assert_eq!(decision, AccessDecision::Allowed);
    }

    #[test]
    fn any_matching_role_grants_access() {
        let session = session_with_roles(&[Role::Editor]);
        assert_eq!(
            evaluate(&session, &policy([Role::Admin, Role::Editor], true)),
            AccessDecision::Allowed
        );
        assert_eq!(
            evaluate(&session, &policy(Role::Admin, true)),
            AccessDecision::DeniedByRole
        );
    }

    #[test]
    fn empty_role_list_means_no_restriction() {
        let session = session_with_roles(&[]);
        assert_eq!(
            evaluate(&session, &policy(Vec::<Role>::new(), true)),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn evaluation_is_stable_for_unchanged_inputs() {
        let session = session_with_roles(&[Role::Admin]);
        let policy = policy(Role::Editor, true);
        let first = evaluate(&session, &policy);
        assert_eq!(first, evaluate(&session, &policy));
        assert_eq!(first, AccessDecision::DeniedByRole);
    }

    #[test]
    fn redirect_targets_follow_denial_kind() {
        let policy = AccessPolicy {
            fallback_path: "/sign-in".into(),
            ..AccessPolicy::default()
        };
        assert_eq!(
            redirect_target(AccessDecision::DeniedByAuth, &policy).as_deref(),
            Some("/sign-in")
        );
        assert_eq!(
            redirect_target(AccessDecision::DeniedByRole, &policy).as_deref(),
            Some("/")
        );
        assert_eq!(redirect_target(AccessDecision::Loading, &policy), None);
        assert_eq!(redirect_target(AccessDecision::Allowed, &policy), None);
    }
}
