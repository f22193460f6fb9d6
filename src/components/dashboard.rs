//! Dashboard Component
//!
//! Header plus the role-specific body for the signed-in user.

use leptos::prelude::*;

use crate::components::{AdminOverview, AppointmentsPanel, ServicesPanel, SpecialityPanel};
use crate::context::use_app_context;
use crate::controller::Dashboard;
use crate::models::SessionUser;

#[component]
fn DashboardHeader(user: SessionUser) -> impl IntoView {
    let ctx = use_app_context();
    let badge_class = format!("role-badge role-{}", user.role.to_lowercase());

    view! {
        <header class="dashboard-header">
            <h1 class="brand">"AgendaFácil"</h1>
            <div class="user-info">
                <span class="welcome">{format!("Bem-vindo, {}", user.username)}</span>
                <span class=badge_class>{user.role_display_name()}</span>
                <button class="btn btn-secondary" on:click=move |_| ctx.logout()>
                    "Sair"
                </button>
            </div>
        </header>
    }
}

#[component]
fn ProviderDashboard() -> impl IntoView {
    view! {
        <div class="provider-dashboard">
            <SpecialityPanel />
            <ServicesPanel />
        </div>
    }
}

#[component]
fn ClientDashboard() -> impl IntoView {
    view! {
        <div class="client-dashboard">
            <AppointmentsPanel />
        </div>
    }
}

/// Authenticated view for `user`
#[component]
pub fn DashboardView(user: SessionUser) -> impl IntoView {
    let body = match Dashboard::for_user(&user) {
        Dashboard::Admin => view! { <AdminOverview /> }.into_any(),
        Dashboard::ServiceProvider => view! { <ProviderDashboard /> }.into_any(),
        Dashboard::Client => view! { <ClientDashboard /> }.into_any(),
        Dashboard::Unsupported(role) => {
            log::warn!("[APP] No dashboard for role {:?}", role);
            view! {
                <p class="error-state">"Dashboard não configurado para este tipo de usuário."</p>
            }.into_any()
        }
    };

    view! {
        <div class="dashboard">
            <DashboardHeader user=user />
            <main class="dashboard-body">{body}</main>
        </div>
    }
}
