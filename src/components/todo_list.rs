use leptos::prelude::*;

use crate::store::{use_todo_store, TodoStateStoreFields};

/// Todos in insertion order, one list entry per todo
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.items().get()
                key=|todo| todo.id
                children=move |todo| {
                    let class = if todo.done { "todo-item done" } else { "todo-item" };
                    view! {
                        <li class=class>{todo.title}</li>
                    }
                }
            />
        </ul>
    }
}
