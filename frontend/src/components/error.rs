use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                <p class="text-sm">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
