//! Delete Confirm Button Component
//!
//! Two-step destructive action: the first click asks, the second one runs.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows "Tem certeza?" with
/// confirm/cancel buttons; nothing is sent before the confirm click.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g., "Excluir" or "Cancelar")
/// * `pending` - Disables every button while the action is in flight
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button
                        class="btn btn-danger btn-small"
                        disabled=move || pending.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Tem certeza?"</span>
                <button
                    class="btn btn-danger btn-small"
                    disabled=move || pending.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Sim"
                </button>
                <button
                    class="btn btn-secondary btn-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "Não"
                </button>
            </span>
        </Show>
    }
}
