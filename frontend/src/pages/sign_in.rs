use crate::state::session::use_session;
use leptos::*;

/// Landing spot for redirected visitors. The identity provider owns the
/// actual sign-in flow.
#[component]
pub fn SignInPage() -> impl IntoView {
    let (session, _) = use_session();
    let signed_in_as = move || {
        session
            .get()
            .user
            .map(|user| user.display_name().to_string())
    };
    view! {
        <div class="max-w-md mx-auto py-12 px-4 space-y-4">
            <h2 class="text-2xl font-bold text-fg">"Sign in"</h2>
            {move || match signed_in_as() {
                Some(name) => view! {
                    <p class="text-fg-muted">"Signed in as " {name}</p>
                }.into_view(),
                None => view! {
                    <p class="text-fg-muted">"Sign in with your organization account to continue."</p>
                }.into_view(),
            }}
        </div>
    }
}
