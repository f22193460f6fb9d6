//! Admin Overview Component
//!
//! Read-only listing of every provider and service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorPanel, LoadingPlaceholder};
use crate::context::use_app_context;
use crate::models::{format_price, Service, ServiceProvider};
use crate::resource::LoadState;

#[component]
fn ProvidersOverview() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<ServiceProvider>>::Loading);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            set_state.set(LoadState::from_list(ctx.api().list_providers().await));
        });
    });

    view! {
        <section class="panel">
            <h2>"Prestadores"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingPlaceholder message="Carregando prestadores..." /> }.into_any(),
                LoadState::Populated(providers) => view! {
                    <table class="overview-table">
                        <thead>
                            <tr><th>"Nome"</th><th>"E-mail"</th><th>"Especialidade"</th></tr>
                        </thead>
                        <tbody>
                            {providers.into_iter().map(|p| view! {
                                <tr>
                                    <td>{p.display_name()}</td>
                                    <td>{p.email.unwrap_or_default()}</td>
                                    <td>{p.speciality.unwrap_or_else(|| "—".into())}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
                LoadState::Empty => view! { <p class="empty-state">"Nenhum prestador cadastrado."</p> }.into_any(),
                LoadState::Error(message) => view! {
                    <ErrorPanel message=message on_retry=move |_| set_reload.update(|n| *n += 1) />
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ServicesOverview() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<Vec<Service>>::Loading);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            set_state.set(LoadState::from_list(ctx.api().list_services().await));
        });
    });

    view! {
        <section class="panel">
            <h2>"Serviços"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingPlaceholder message="Carregando serviços..." /> }.into_any(),
                LoadState::Populated(services) => view! {
                    <table class="overview-table">
                        <thead>
                            <tr><th>"Serviço"</th><th>"Duração"</th><th>"Preço"</th></tr>
                        </thead>
                        <tbody>
                            {services.into_iter().map(|s| view! {
                                <tr>
                                    <td>{s.name}</td>
                                    <td>{format!("{} min", s.default_duration_in_minutes)}</td>
                                    <td>{format_price(s.default_price)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
                LoadState::Empty => view! { <p class="empty-state">"Nenhum serviço cadastrado."</p> }.into_any(),
                LoadState::Error(message) => view! {
                    <ErrorPanel message=message on_retry=move |_| set_reload.update(|n| *n += 1) />
                }.into_any(),
            }}
        </section>
    }
}

/// Admin dashboard body
#[component]
pub fn AdminOverview() -> impl IntoView {
    view! {
        <div class="admin-overview">
            <ProvidersOverview />
            <ServicesOverview />
        </div>
    }
}
