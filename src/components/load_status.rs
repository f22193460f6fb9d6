//! Load Status Components
//!
//! Placeholder, empty and error fragments shared by the resource panels.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-state">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}

/// Empty list with a call to action
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(into)] action_label: String,
    #[prop(into)] on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}

/// Failed load with a retry that re-enters Loading
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <p class="error-text">{message}</p>
            <button class="btn btn-secondary" on:click=move |_| on_retry.run(())>
                "Tentar novamente"
            </button>
        </div>
    }
}

/// Optional one-line status message
#[component]
pub fn StatusLine(
    message: ReadSignal<Option<String>>,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error { "status-line error-message" } else { "status-line success-message" };
    view! {
        {move || message.get().map(|text| view! { <div class=class>{text}</div> })}
    }
}
