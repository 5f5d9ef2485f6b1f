use crate::state::session::{use_logout, use_session};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _) = use_session();
    let logout = use_logout();
    let signed_in = move || session.get().is_authenticated;
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">
                        "DocBook"
                    </a>
                    <nav class="flex space-x-4">
                        <Show
                            when=signed_in
                            fallback=|| {
                                view! {
                                    <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                        "Sign in"
                                    </a>
                                    <a href="/register" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                        "Create account"
                                    </a>
                                }
                            }
                        >
                            <a href="/profile" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Profile"
                            </a>
                            <button
                                on:click=move |_| logout.call(())
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-5xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

/// Centered card used by the sign-in and verification pages.
#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                {children()}
            </div>
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

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded">
                <p class="text-sm">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
