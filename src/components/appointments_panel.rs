//! Appointments Panel Component
//!
//! A client's bookings, enriched with service and provider names.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AppointmentModal, DeleteConfirmButton, EmptyState, ErrorPanel, LoadingPlaceholder, StatusLine,
};
use crate::context::use_app_context;
use crate::models::{format_date_time, format_price, AppointmentRow, AppointmentStatus};
use crate::notify;
use crate::resource::LoadState;

fn status_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "status-badge status-scheduled",
        AppointmentStatus::Confirmed => "status-badge status-confirmed",
        AppointmentStatus::Cancelled => "status-badge status-cancelled",
        AppointmentStatus::Completed => "status-badge status-completed",
    }
}

#[component]
pub fn AppointmentsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<AppointmentRow>>::Loading);
    let (reload, set_reload) = signal(0u32);
    let (booking, set_booking) = signal(false);
    let (cancelling, set_cancelling) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let refetch = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = ctx.api().list_appointment_rows().await;
            if let Err(e) = &result {
                log::warn!("[APPOINTMENTS] Load failed: {}", e);
            }
            set_state.set(LoadState::from_list(result));
        });
    });

    let cancel_appointment = move |id: String| {
        set_cancelling.set(Some(id.clone()));
        spawn_local(async move {
            let result = ctx.api().delete_appointment(&id).await;
            set_cancelling.set(None);
            match result {
                Ok(()) => {
                    notify::flash(set_notice, "Agendamento cancelado.");
                    refetch();
                }
                Err(e) => {
                    log::error!("[APPOINTMENTS] Cancel {} failed: {}", id, e);
                    notify::alert_error(&e);
                }
            }
        });
    };

    let on_booked = move |_| {
        set_booking.set(false);
        notify::flash(set_notice, "Agendamento realizado.");
        refetch();
    };

    let appointment_card = move |row: AppointmentRow| {
        let AppointmentRow { appointment, service_label, provider_label } = row;
        let status = appointment.status;
        let id = appointment.id.clone();
        let pending = Signal::derive({
            let id = id.clone();
            move || cancelling.with(|c| c.as_deref() == Some(id.as_str()))
        });
        view! {
            <li class="appointment-card">
                <div class="appointment-info">
                    <strong>{service_label}</strong>
                    <span>{format!("com {}", provider_label)}</span>
                    <span class="appointment-when">{format_date_time(&appointment.start_date_time)}</span>
                    <span class="appointment-meta">
                        {format!("{} min · {}", appointment.duration_in_minutes, format_price(appointment.price))}
                    </span>
                </div>
                <span class=status_class(status)>{status.label()}</span>
                {status.is_cancellable().then(|| view! {
                    <DeleteConfirmButton
                        label="Cancelar"
                        pending=pending
                        on_confirm=move |_| cancel_appointment(id.clone())
                    />
                })}
            </li>
        }
    };

    view! {
        <section class="panel appointments-panel">
            <div class="panel-header">
                <h2>"Meus agendamentos"</h2>
                <button class="btn btn-primary" on:click=move |_| set_booking.set(true)>
                    "Novo agendamento"
                </button>
            </div>
            <StatusLine message=notice />

            {move || match state.get() {
                LoadState::Loading => view! {
                    <LoadingPlaceholder message="Carregando agendamentos..." />
                }.into_any(),
                LoadState::Populated(rows) => view! {
                    <ul class="appointment-list">
                        <For
                            each=move || rows.clone()
                            key=|row| row.appointment.id.clone()
                            children=appointment_card
                        />
                    </ul>
                }.into_any(),
                LoadState::Empty => view! {
                    <EmptyState
                        message="Você ainda não possui agendamentos."
                        action_label="Agendar um serviço"
                        on_action=move |_| set_booking.set(true)
                    />
                }.into_any(),
                LoadState::Error(message) => view! {
                    <ErrorPanel message=message on_retry=move |_| refetch() />
                }.into_any(),
            }}

            <Show when=move || booking.get()>
                <AppointmentModal on_close=move |_| set_booking.set(false) on_booked=on_booked />
            </Show>
        </section>
    }
}
