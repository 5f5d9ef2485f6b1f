use crate::otp::{CollectorOutcome, OtpCollector, OtpKey};
use leptos::{html, *};
use wasm_bindgen::JsCast;

/// Plain text carried by a `paste` event, empty when there is none.
fn pasted_text(ev: ev::Event) -> String {
    ev.unchecked_into::<web_sys::ClipboardEvent>()
        .clipboard_data()
        .and_then(|data| data.get_data("text").ok())
        .unwrap_or_default()
}

/// One single-character field per digit, mirroring an [`OtpCollector`].
///
/// Focus follows the collector, so typing, Backspace, arrows and paste all
/// move through the same cell state.
#[component]
pub fn OtpInput(
    collector: RwSignal<OtpCollector>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let len = collector.with_untracked(OtpCollector::len);
    let refs: Vec<NodeRef<html::Input>> = (0..len).map(|_| create_node_ref()).collect();

    let focus_refs = refs.clone();
    create_effect(move |_| {
        let focus = collector.with(OtpCollector::focus);
        if let Some(input) = focus_refs.get(focus).and_then(|r| r.get()) {
            let _ = input.focus();
        }
    });

    let apply = move |index: usize, f: &dyn Fn(&mut OtpCollector) -> CollectorOutcome| {
        let outcome = collector
            .try_update(|c| {
                c.set_focus(index);
                f(c)
            })
            .unwrap_or(CollectorOutcome::Ignored);
        if outcome == CollectorOutcome::Submit {
            on_submit.call(());
        }
    };

    let cells = refs
        .into_iter()
        .enumerate()
        .map(|(index, node_ref)| {
            let on_keydown = move |ev: ev::KeyboardEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                    return;
                }
                let Some(key) = OtpKey::from_dom_key(&ev.key()) else {
                    return;
                };
                ev.prevent_default();
                apply(index, &move |c: &mut OtpCollector| c.key(key));
            };
            let on_input = move |ev: ev::Event| {
                let value = event_target_value(&ev);
                apply(index, &move |c: &mut OtpCollector| c.input_value(index, &value));
            };
            let on_paste = move |ev: ev::Event| {
                ev.prevent_default();
                let text = pasted_text(ev);
                apply(index, &move |c: &mut OtpCollector| c.paste(&text));
            };
            view! {
                <input
                    node_ref=node_ref
                    type="text"
                    inputmode="numeric"
                    autocomplete={if index == 0 { "one-time-code" } else { "off" }}
                    aria-label=format!("Digit {} of {}", index + 1, len)
                    class="w-12 h-14 text-center text-2xl font-semibold rounded-md border border-form-control-border bg-form-control-bg text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                    class:opacity-50=move || disabled.get()
                    disabled=move || disabled.get()
                    prop:value=move || {
                        collector.with(|c| c.cell(index).map(String::from).unwrap_or_default())
                    }
                    on:keydown=on_keydown
                    on:input=on_input
                    on:paste=on_paste
                    on:focus=move |_| collector.update(|c| c.set_focus(index))
                />
            }
        })
        .collect_view();

    view! {
        <div class="flex justify-center gap-2" role="group" aria-label="Verification code">
            {cells}
        </div>
    }
}
