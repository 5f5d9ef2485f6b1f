use crate::otp::Countdown;
use leptos::*;

/// Remaining lifetime of the current code, plus the resend control.
#[component]
pub fn CountdownBadge(
    countdown: RwSignal<Countdown>,
    #[prop(into)] on_resend: Callback<()>,
    #[prop(optional, into)] resend_pending: MaybeSignal<bool>,
) -> impl IntoView {
    let expired = move || countdown.with(Countdown::is_expired);
    let resend_disabled = move || resend_pending.get() || !countdown.with(Countdown::can_resend);
    view! {
        <div class="flex items-center justify-between text-sm text-fg-muted">
            <span aria-live="polite">
                {move || {
                    if expired() {
                        "Code expired".to_string()
                    } else {
                        format!("Code expires in {}", countdown.with(Countdown::label))
                    }
                }}
            </span>
            <button
                type="button"
                class="text-link hover:text-link-hover disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=resend_disabled
                on:click=move |_| on_resend.call(())
            >
                {move || {
                    let wait = countdown.with(Countdown::resend_wait);
                    if wait > 0 && !expired() {
                        format!("Resend code ({}s)", wait)
                    } else {
                        "Resend code".to_string()
                    }
                }}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_remaining_time() {
        let html = render_to_string(move || {
            let countdown = create_rw_signal(Countdown::new(300, 10));
            view! { <CountdownBadge countdown=countdown on_resend=|_: ()| {} /> }
        });
        assert!(html.contains("Code expires in 05:00"));
        assert!(html.contains("Resend code"));
    }

    #[test]
    fn cooldown_is_shown_on_the_resend_button() {
        let html = render_to_string(move || {
            let mut countdown = Countdown::new(300, 10);
            countdown.restart().unwrap();
            let countdown = create_rw_signal(countdown);
            view! { <CountdownBadge countdown=countdown on_resend=|_: ()| {} /> }
        });
        assert!(html.contains("Resend code (10s)"));
    }

    #[test]
    fn expired_code_is_labelled() {
        let html = render_to_string(move || {
            let mut countdown = Countdown::new(1, 10);
            countdown.tick(false);
            let countdown = create_rw_signal(countdown);
            view! { <CountdownBadge countdown=countdown on_resend=|_: ()| {} /> }
        });
        assert!(html.contains("Code expired"));
    }
}
