use leptos::*;
use leptos_router::*;

use crate::{
    access::{Role, RouterNavigation, ROOT_PATH, SIGN_IN_PATH},
    components::guard::{RequireAccess, RoleGuard},
    pages::{AdminPage, EditorPage, HomePage, MembersPage, SignInPage},
    state::session::SessionProvider,
};

pub const MEMBERS_PATH: &str = "/members";
pub const EDITOR_PATH: &str = "/editor";
pub const ADMIN_PATH: &str = "/admin";

pub const ROUTE_PATHS: &[&str] = &[
    ROOT_PATH,
    SIGN_IN_PATH,
    MEMBERS_PATH,
    EDITOR_PATH,
    ADMIN_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[MEMBERS_PATH, EDITOR_PATH, ADMIN_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[ROOT_PATH, SIGN_IN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <RouterNavigation>
                    <Routes>
                        <Route path=ROOT_PATH view=HomePage/>
                        <Route path=SIGN_IN_PATH view=SignInPage/>
                        <Route path=MEMBERS_PATH view=ProtectedMembers/>
                        <Route path=EDITOR_PATH view=GuardedEditor/>
                        <Route path=ADMIN_PATH view=ProtectedAdmin/>
                    </Routes>
                </RouterNavigation>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedMembers() -> impl IntoView {
    view! { <RequireAccess require_auth=true><MembersPage/></RequireAccess> }
}

#[component]
fn GuardedEditor() -> impl IntoView {
    view! { <RoleGuard required_roles={[Role::Editor, Role::Admin]}><EditorPage/></RoleGuard> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAccess require_auth=true required_roles=Role::Admin><AdminPage/></RequireAccess> }
}
