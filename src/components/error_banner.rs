//! Error Banner Component
//!
//! Visible failure state for the todo page.

use leptos::prelude::*;

use crate::store::{store_dismiss_errors, use_todo_store, TodoState};

/// Shows list failures, and create failures no open modal is showing, with a
/// dismiss button.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_todo_store();
    let message = Memo::new(move |_| store.with(TodoState::banner_error));

    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-text">{move || message.get().unwrap_or_default()}</span>
                <button class="dismiss-btn" on:click=move |_| store_dismiss_errors(&store)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
