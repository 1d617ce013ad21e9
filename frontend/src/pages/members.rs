use crate::{components::layout::Layout, state::session::use_session};
use leptos::*;

#[component]
pub fn MembersPage() -> impl IntoView {
    let (session, _) = use_session();
    let roles = move || {
        session.with(|s| {
            s.roles
                .iter()
                .map(|role| role.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
    };
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg">"Members"</h2>
            <p class="text-fg-muted">"Your roles: " {roles}</p>
        </Layout>
    }
}

#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg">"Editor"</h2>
            <p class="text-fg-muted">"Drafts awaiting review appear here."</p>
        </Layout>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg">"Administration"</h2>
            <p class="text-fg-muted">"Manage members and their roles."</p>
        </Layout>
    }
}
