//! Service Modal Component
//!
//! Create and edit form for one service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Modal, StatusLine};
use crate::context::use_app_context;
use crate::models::Service;
use crate::notify;
use crate::validation::ServiceForm;

/// Service form dialog
///
/// `service` is `None` for a new service. `on_saved` fires after the
/// gateway accepted the write; the caller refetches.
#[component]
pub fn ServiceModal(
    service: Option<Service>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let title = if service.is_some() { "Editar serviço" } else { "Novo serviço" };
    let service_id = service.as_ref().map(|s| s.id.clone());
    let (form, set_form) = signal(service.as_ref().map(ServiceForm::from).unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = match form.get().validate() {
            Ok(input) => input,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        let service_id = service_id.clone();
        spawn_local(async move {
            let api = ctx.api();
            let result = match &service_id {
                Some(id) => api.update_service(id, &input).await,
                None => api.create_service(&input).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("[SERVICES] Save failed: {}", e);
                    notify::alert_error(&e);
                }
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Nome"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Descrição"
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Duração (minutos)"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.duration.clone())
                        on:input=move |ev| set_form.update(|f| f.duration = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Preço (R$)"
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| set_form.update(|f| f.price = event_target_value(&ev))
                    />
                </label>
                <StatusLine message=error error=true />
                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
