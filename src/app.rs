//! AgendaFácil App
//!
//! Root component: owns the session context and switches between the
//! auth screen and the dashboard.

use leptos::prelude::*;

use crate::components::{AuthPanel, DashboardView};
use crate::config::Config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Config::from_env());
    provide_context(ctx);

    view! {
        <div class="app">
            {move || match ctx.user() {
                Some(user) => view! { <DashboardView user=user /> }.into_any(),
                None => view! { <AuthPanel /> }.into_any(),
            }}
        </div>
    }
}
