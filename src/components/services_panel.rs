//! Services Panel Component
//!
//! The provider's service catalog with create, edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    DeleteConfirmButton, EmptyState, ErrorPanel, LoadingPlaceholder, ServiceModal, StatusLine,
};
use crate::context::use_app_context;
use crate::models::{format_price, Service};
use crate::notify;
use crate::resource::LoadState;

/// Which service the modal is editing
#[derive(Clone, PartialEq)]
enum Editor {
    New,
    Existing(Service),
}

#[component]
pub fn ServicesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<Service>>::Loading);
    let (reload, set_reload) = signal(0u32);
    let (editor, set_editor) = signal::<Option<Editor>>(None);
    let (deleting, set_deleting) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let refetch = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = ctx.api().list_services().await;
            if let Err(e) = &result {
                log::warn!("[SERVICES] Load failed: {}", e);
            }
            set_state.set(LoadState::from_list(result));
        });
    });

    let delete_service = move |id: String| {
        set_deleting.set(Some(id.clone()));
        spawn_local(async move {
            let result = ctx.api().delete_service(&id).await;
            set_deleting.set(None);
            match result {
                Ok(()) => {
                    notify::flash(set_notice, "Serviço excluído.");
                    refetch();
                }
                Err(e) => {
                    log::error!("[SERVICES] Delete {} failed: {}", id, e);
                    notify::alert_error(&e);
                }
            }
        });
    };

    let on_saved = move |_| {
        let created = editor.with_untracked(|e| matches!(e, Some(Editor::New)));
        set_editor.set(None);
        notify::flash(set_notice, if created { "Serviço criado." } else { "Serviço atualizado." });
        refetch();
    };

    let service_card = move |service: Service| {
        let id = service.id.clone();
        let pending = Signal::derive({
            let id = id.clone();
            move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
        });
        let for_edit = service.clone();
        view! {
            <li class="service-card">
                <div class="service-info">
                    <strong>{service.name.clone()}</strong>
                    <span class="service-description">{service.description.clone()}</span>
                    <span class="service-meta">
                        {format!("{} min · {}", service.default_duration_in_minutes, format_price(service.default_price))}
                    </span>
                </div>
                <div class="service-actions">
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| set_editor.set(Some(Editor::Existing(for_edit.clone())))
                    >
                        "Editar"
                    </button>
                    <DeleteConfirmButton
                        label="Excluir"
                        pending=pending
                        on_confirm=move |_| delete_service(id.clone())
                    />
                </div>
            </li>
        }
    };

    view! {
        <section class="panel services-panel">
            <div class="panel-header">
                <h2>"Meus serviços"</h2>
                <button class="btn btn-primary" on:click=move |_| set_editor.set(Some(Editor::New))>
                    "Novo serviço"
                </button>
            </div>
            <StatusLine message=notice />

            {move || match state.get() {
                LoadState::Loading => view! {
                    <LoadingPlaceholder message="Carregando serviços..." />
                }.into_any(),
                LoadState::Populated(services) => view! {
                    <ul class="service-list">
                        <For
                            each=move || services.clone()
                            key=|service| service.id.clone()
                            children=service_card
                        />
                    </ul>
                }.into_any(),
                LoadState::Empty => view! {
                    <EmptyState
                        message="Nenhum serviço cadastrado."
                        action_label="Cadastrar primeiro serviço"
                        on_action=move |_| set_editor.set(Some(Editor::New))
                    />
                }.into_any(),
                LoadState::Error(message) => view! {
                    <ErrorPanel message=message on_retry=move |_| refetch() />
                }.into_any(),
            }}

            {move || editor.get().map(|mode| {
                let service = match mode {
                    Editor::New => None,
                    Editor::Existing(service) => Some(service),
                };
                view! {
                    <ServiceModal
                        service=service
                        on_close=move |_| set_editor.set(None)
                        on_saved=on_saved
                    />
                }
            })}
        </section>
    }
}
