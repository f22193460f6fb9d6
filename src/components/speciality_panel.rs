//! Speciality Panel Component
//!
//! A provider's single speciality: show, edit and replace.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, ErrorPanel, LoadingPlaceholder, StatusLine};
use crate::context::use_app_context;
use crate::notify;
use crate::resource::LoadState;
use crate::validation::validate_speciality;

#[component]
pub fn SpecialityPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<String>::Loading);
    let (reload, set_reload) = signal(0u32);
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = ctx.api().get_speciality().await;
            if let Err(e) = &result {
                log::warn!("[SPECIALITY] Load failed: {}", e);
            }
            set_state.set(LoadState::from_optional(result));
        });
    });

    let start_edit = move || {
        let current = state.with_untracked(|s| s.populated().cloned()).unwrap_or_default();
        set_draft.set(current);
        set_form_error.set(None);
        set_editing.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = match validate_speciality(&draft.get()) {
            Ok(value) => value,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };
        set_form_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = ctx.api().save_speciality(&value).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    set_editing.set(false);
                    notify::flash(set_notice, "Especialidade salva.");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("[SPECIALITY] Save failed: {}", e);
                    notify::alert_error(&e);
                }
            }
        });
    };

    let edit_form = move || {
        view! {
            <form class="inline-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ex.: Cabeleireiro"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || saving.get()
                    on:click=move |_| set_editing.set(false)
                >
                    "Cancelar"
                </button>
            </form>
            <StatusLine message=form_error error=true />
        }
    };

    view! {
        <section class="panel speciality-panel">
            <h2>"Minha especialidade"</h2>
            <StatusLine message=notice />
            {move || {
                if editing.get() {
                    return edit_form().into_any();
                }
                match state.get() {
                    LoadState::Loading => view! {
                        <LoadingPlaceholder message="Carregando especialidade..." />
                    }.into_any(),
                    LoadState::Populated(speciality) => view! {
                        <div class="speciality-value">
                            <span class="speciality-name">{speciality}</span>
                            <button class="btn btn-secondary btn-small" on:click=move |_| start_edit()>
                                "Editar"
                            </button>
                        </div>
                    }.into_any(),
                    LoadState::Empty => view! {
                        <EmptyState
                            message="Você ainda não definiu sua especialidade."
                            action_label="Definir especialidade"
                            on_action=move |_| start_edit()
                        />
                    }.into_any(),
                    LoadState::Error(message) => view! {
                        <ErrorPanel message=message on_retry=move |_| set_reload.update(|n| *n += 1) />
                    }.into_any(),
                }
            }}
        </section>
    }
}
