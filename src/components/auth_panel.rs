//! Auth Panel Component
//!
//! Login and registration tabs shown while unauthenticated.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatusLine;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::Role;
use crate::validation::{validate_login, RegisterForm};

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

/// Pause between "cadastro realizado" and switching back to login
const REGISTER_REDIRECT_MS: u32 = 2_000;

#[component]
fn LoginForm(
    set_error: WriteSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);
        let (email, password) = (email.get(), password.get());
        if let Err(e) = validate_login(&email, &password) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_pending.set(true);
        spawn_local(async move {
            let result = ctx.api().login(email.trim(), &password).await;
            set_pending.set(false);
            match result {
                Ok(user) => ctx.logged_in(user),
                Err(ApiError::Unauthorized) => {
                    set_error.set(Some("E-mail ou senha inválidos.".into()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label>
                "E-mail"
                <input
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Senha"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                {move || if pending.get() { "Entrando..." } else { "Entrar" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterFormView(
    set_error: WriteSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
    set_tab: WriteSignal<AuthTab>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(RegisterForm {
        role: Role::Client.as_str().to_string(),
        ..RegisterForm::default()
    });
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);
        let request = match form.get().validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_pending.set(true);
        spawn_local(async move {
            match ctx.api().register(&request).await {
                Ok(()) => {
                    set_success.set(Some("Cadastro realizado! Faça o login para continuar.".into()));
                    set_form.set(RegisterForm {
                        role: Role::Client.as_str().to_string(),
                        ..RegisterForm::default()
                    });
                    set_pending.set(false);
                    TimeoutFuture::new(REGISTER_REDIRECT_MS).await;
                    set_tab.set(AuthTab::Login);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label>
                "Nome de usuário"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| set_form.update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label>
                "E-mail"
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label>
                "Perfil"
                <select
                    prop:value=move || form.with(|f| f.role.clone())
                    on:change=move |ev| set_form.update(|f| f.role = event_target_value(&ev))
                >
                    <option value={Role::Client.as_str()}>{Role::Client.display_name()}</option>
                    <option value={Role::ServiceProvider.as_str()}>{Role::ServiceProvider.display_name()}</option>
                </select>
            </label>
            <label>
                "Senha"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| set_form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <label>
                "Confirmar senha"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| set_form.update(|f| f.confirm_password = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                {move || if pending.get() { "Cadastrando..." } else { "Cadastrar" }}
            </button>
        </form>
    }
}

/// Unauthenticated view
#[component]
pub fn AuthPanel() -> impl IntoView {
    let (tab, set_tab) = signal(AuthTab::Login);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let switch_to = move |next: AuthTab| {
        set_tab.set(next);
        set_error.set(None);
        set_success.set(None);
    };

    view! {
        <div class="auth-container">
            <h1 class="brand">"AgendaFácil"</h1>
            <div class="auth-tabs">
                <button
                    class=move || if tab.get() == AuthTab::Login { "tab-btn active" } else { "tab-btn" }
                    on:click=move |_| switch_to(AuthTab::Login)
                >
                    "Entrar"
                </button>
                <button
                    class=move || if tab.get() == AuthTab::Register { "tab-btn active" } else { "tab-btn" }
                    on:click=move |_| switch_to(AuthTab::Register)
                >
                    "Cadastrar"
                </button>
            </div>

            <StatusLine message=error error=true />
            <StatusLine message=success />

            {move || match tab.get() {
                AuthTab::Login => view! {
                    <LoginForm set_error=set_error set_success=set_success />
                }.into_any(),
                AuthTab::Register => view! {
                    <RegisterFormView set_error=set_error set_success=set_success set_tab=set_tab />
                }.into_any(),
            }}
        </div>
    }
}
