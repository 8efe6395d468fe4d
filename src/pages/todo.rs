//! Todo Page
//!
//! Lists todos from the API and creates new ones through a modal form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_client::TodoClient;

use crate::app::AppRoute;
use crate::components::{ErrorBanner, NewTodoDialog, TodoList};
use crate::context::use_app_context;
use crate::store::{
    store_fail_load, store_open_dialog, store_set_items, TodoState, TodoStateStoreFields,
    TodoStore,
};

/// Fetch the list and hand it to the store.
pub async fn load_todos(client: TodoClient, store: TodoStore) {
    match client.list_todos().await {
        Ok(todos) => {
            log::info!("[TODO] Loaded {} todos", todos.len());
            store_set_items(&store, todos);
        }
        Err(e) => {
            log::warn!("[TODO] Loading todos failed: {}", e);
            store_fail_load(&store, e.to_string());
        }
    }
}

/// Create the page-local store and load the list once. The effect tracks no
/// signals, so store updates (dialog toggles, creations, errors) never re-run
/// it.
pub fn init_todo_store(client: TodoClient) -> TodoStore {
    let store = Store::new(TodoState::default());
    Effect::new(move |_| {
        spawn_local(load_todos(client.clone(), store));
    });
    store
}

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();

    // Page-local: dropped with the page on navigation
    let store = init_todo_store(ctx.client());
    provide_context(store);

    view! {
        <div class="todo-page">
            <h1>{AppRoute::Todo.heading()}</h1>

            <ErrorBanner />

            <TodoList />

            <button class="add-todo-btn" on:click=move |_| store_open_dialog(&store)>
                "Add todo"
            </button>

            <Show when=move || store.dialog_open().get()>
                <NewTodoDialog />
            </Show>
        </div>
    }
}
