use crate::{
    access::{Role, ROOT_PATH},
    router::{ADMIN_PATH, EDITOR_PATH, MEMBERS_PATH},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let display_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
    };
    let can_edit = move || session.with(|s| s.has_any_role(&[Role::Editor, Role::Admin]));
    let can_administer = move || session.with(|s| s.has_role(Role::Admin));
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=ROOT_PATH class="text-xl font-semibold text-fg">"Accessgate"</a>
                    <nav class="flex space-x-4">
                        <a href=MEMBERS_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                            "Members"
                        </a>
                        <Show when=can_edit>
                            <a href=EDITOR_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Editor"
                            </a>
                        </Show>
                        <Show when=can_administer>
                            <a href=ADMIN_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Admin"
                            </a>
                        </Show>
                    </nav>
                    <span class="text-sm text-fg-muted">
                        {move || display_name().unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

pub const ACCESS_DENIED_TITLE: &str = "Access Denied";

#[component]
pub fn AccessDeniedMessage() -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-lock"></i>
                </div>
                <div class="ml-3">
                    <p class="font-bold">{ACCESS_DENIED_TITLE}</p>
                    <p class="text-sm">"You do not have permission to view this page."</p>
                </div>
            </div>
        </div>
    }
}
