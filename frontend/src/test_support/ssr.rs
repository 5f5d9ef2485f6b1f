use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Runs `f` inside a reactive runtime on a `LocalSet`, so dispatched actions can spawn.
pub async fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let runtime = leptos::create_runtime();
    let result = tokio::task::LocalSet::new().run_until(f()).await;
    runtime.dispose();
    result
}

/// Yields until `pending` clears, giving spawned actions a chance to finish.
pub async fn settle(pending: ReadSignal<bool>) {
    for _ in 0..100 {
        if !pending.get_untracked() {
            return;
        }
        tokio::task::yield_now().await;
    }
}
