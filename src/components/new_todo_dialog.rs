//! New Todo Dialog Component
//!
//! Modal form for creating a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::NewTodo;

use crate::context::use_app_context;
use crate::store::{
    store_append_created, store_begin_create, store_close_dialog, store_fail_create,
    use_todo_store, TodoStateStoreFields,
};

/// Field state of the create form
#[derive(Clone, Copy)]
struct TodoForm {
    title: RwSignal<String>,
    body: RwSignal<String>,
    /// Bound to the checkbox's checked property, not its value attribute
    done: RwSignal<bool>,
}

impl TodoForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
            done: RwSignal::new(false),
        }
    }

    fn set_checked(&self, checked: bool) {
        self.done.set(checked);
    }

    fn to_new_todo(&self) -> NewTodo {
        NewTodo::new(
            self.title.get_untracked(),
            self.body.get_untracked(),
            self.done.get_untracked(),
        )
    }
}

/// Modal with title, body and done fields.
///
/// Mounted only while the dialog is open, so every opening starts with an
/// empty form. Closes on the × button, a backdrop click, or a successful
/// create from this opening; a failed create keeps it open with the error
/// shown inline.
#[component]
pub fn NewTodoDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let form = TodoForm::new();

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = store_begin_create(&store) else {
            return;
        };
        let new_todo = form.to_new_todo();

        let client = ctx.client();
        spawn_local(async move {
            match client.create_todo(&new_todo).await {
                Ok(todo) => {
                    log::info!("[TODO] Created #{} {:?}", todo.id, todo.title);
                    store_append_created(&store, todo, session);
                }
                Err(e) => {
                    log::warn!("[TODO] Creating todo failed: {}", e);
                    store_fail_create(&store, e.to_string());
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| store_close_dialog(&store)>
            <div
                class="dialog"
                role="dialog"
                aria-labelledby="new-todo-title"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="dialog-header">
                    <h2 id="new-todo-title">"Add todo"</h2>
                    <button
                        type="button"
                        class="dialog-close"
                        on:click=move |_| store_close_dialog(&store)
                    >
                        "×"
                    </button>
                </div>

                <form class="new-todo-form" on:submit=create_todo>
                    <input
                        type="text"
                        name="title"
                        placeholder="Title"
                        prop:value=move || form.title.get()
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                    />
                    <textarea
                        name="body"
                        placeholder="Body"
                        prop:value=move || form.body.get()
                        on:input=move |ev| form.body.set(event_target_value(&ev))
                    ></textarea>
                    <label class="done-toggle">
                        <input
                            type="checkbox"
                            name="done"
                            prop:checked=move || form.done.get()
                            on:change=move |ev| form.set_checked(event_target_checked(&ev))
                        />
                        "Done"
                    </label>

                    {move || store.create_error().get().map(|msg| view! {
                        <p class="dialog-error" role="alert">{msg}</p>
                    })}

                    <div class="dialog-actions">
                        <button type="submit" disabled=move || store.submitting().get()>
                            "Add"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_empty() {
        let owner = Owner::new();
        owner.set();

        let form = TodoForm::new();

        assert_eq!(form.to_new_todo(), NewTodo::default());
    }

    #[test]
    fn test_checked_state_reaches_payload() {
        let owner = Owner::new();
        owner.set();

        let form = TodoForm::new();
        form.title.set("buy milk".to_string());
        form.set_checked(true);
        assert_eq!(form.to_new_todo(), NewTodo::new("buy milk", "", true));

        form.set_checked(false);
        assert!(!form.to_new_todo().done);
    }
}
