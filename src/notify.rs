//! User Notices
//!
//! Blocking alerts and self-clearing status lines.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiError;

/// How long a confirmation stays on screen
const FLASH_MS: u32 = 3_000;

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => log::warn!("[UI] alert without window: {}", message),
    }
}

/// Alert for a failed mutation; a 401 already triggered its own notice
pub fn alert_error(error: &ApiError) {
    if !error.is_unauthorized() {
        alert(&error.to_string());
    }
}

/// Show `message`, then clear it unless something newer replaced it
pub fn flash(target: WriteSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    target.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_MS).await;
        target.update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    });
}
