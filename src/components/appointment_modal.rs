//! Appointment Modal Component
//!
//! Booking form: service, provider and start time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingPlaceholder, Modal, StatusLine};
use crate::context::use_app_context;
use crate::models::{format_price, Service, ServiceProvider};
use crate::notify;
use crate::resource::LoadState;
use crate::validation::AppointmentForm;

#[derive(Clone, PartialEq)]
struct Catalog {
    services: Vec<Service>,
    providers: Vec<ServiceProvider>,
}

#[component]
pub fn AppointmentModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_booked: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (catalog, set_catalog) = signal(LoadState::<Catalog>::Loading);
    let (form, set_form) = signal(AppointmentForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        let api = ctx.api();
        let (services, providers) = futures::join!(api.list_services(), api.list_providers());
        let state = match (services, providers) {
            (Ok(services), Ok(providers)) if services.is_empty() || providers.is_empty() => {
                LoadState::Empty
            }
            (Ok(services), Ok(providers)) => LoadState::Populated(Catalog { services, providers }),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("[BOOKING] Catalog load failed: {}", e);
                LoadState::Error(e.to_string())
            }
        };
        set_catalog.set(state);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.get().validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = ctx.api().create_appointment(&request).await;
            set_saving.set(false);
            match result {
                Ok(()) => on_booked.run(()),
                Err(e) => {
                    log::error!("[BOOKING] Create failed: {}", e);
                    notify::alert_error(&e);
                }
            }
        });
    };

    let booking_form = move |catalog: Catalog| {
        let service_options = catalog
            .services
            .into_iter()
            .map(|s| {
                let label = format!("{} ({} min · {})", s.name, s.default_duration_in_minutes, format_price(s.default_price));
                view! { <option value={s.id}>{label}</option> }
            })
            .collect_view();
        let provider_options = catalog
            .providers
            .into_iter()
            .map(|p| {
                let label = p.display_name();
                view! { <option value={p.id}>{label}</option> }
            })
            .collect_view();

        view! {
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Serviço"
                    <select
                        prop:value=move || form.with(|f| f.service_id.clone())
                        on:change=move |ev| set_form.update(|f| f.service_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {service_options}
                    </select>
                </label>
                <label>
                    "Prestador"
                    <select
                        prop:value=move || form.with(|f| f.provider_id.clone())
                        on:change=move |ev| set_form.update(|f| f.provider_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {provider_options}
                    </select>
                </label>
                <label>
                    "Data e hora"
                    <input
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.start.clone())
                        on:input=move |ev| set_form.update(|f| f.start = event_target_value(&ev))
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
                        {move || if saving.get() { "Agendando..." } else { "Agendar" }}
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <Modal title="Novo agendamento" on_close=on_close>
            {move || match catalog.get() {
                LoadState::Loading => view! {
                    <LoadingPlaceholder message="Carregando serviços e prestadores..." />
                }.into_any(),
                LoadState::Populated(catalog) => booking_form(catalog).into_any(),
                LoadState::Empty => view! {
                    <p class="empty-state">"Não há serviços ou prestadores disponíveis no momento."</p>
                }.into_any(),
                LoadState::Error(message) => view! {
                    <p class="error-text">{message}</p>
                }.into_any(),
            }}
        </Modal>
    }
}
