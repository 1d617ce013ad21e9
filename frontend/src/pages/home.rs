use crate::{access::SIGN_IN_PATH, router::MEMBERS_PATH};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Accessgate"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Role-aware views for signed-in members"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <a href=SIGN_IN_PATH class="flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg">
                            "Sign in"
                        </a>
                        <a href=MEMBERS_PATH class="flex items-center justify-center px-8 py-3 border border-border text-base font-medium rounded-md text-fg">
                            "Members area"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
