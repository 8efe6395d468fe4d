//! Todo View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the todo page and lives only as long as that page is mounted.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::Todo;

/// State owned by the todo page, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in insertion order: server list first, then local creations
    pub items: Vec<Todo>,
    /// Whether the "Add todo" modal is open
    pub dialog_open: bool,
    /// Bumped on every open; ties a create completion to the dialog it came from
    pub dialog_session: u32,
    /// A create request is in flight
    pub submitting: bool,
    /// Last failure of the list request
    pub load_error: Option<String>,
    /// Last failure of a create request
    pub create_error: Option<String>,
}

impl TodoState {
    /// Take a server list response. Todos already held but missing from the
    /// response (created while the list request was in flight) are kept after
    /// the server's entries.
    pub fn replace_items(&mut self, items: Vec<Todo>) {
        let mut merged = items;
        for local in self.items.drain(..) {
            if !merged.iter().any(|t| t.id == local.id) {
                merged.push(local);
            }
        }
        self.items = merged;
    }

    /// Record a todo the server acknowledged. Closes the modal only if it is
    /// still the one the request was submitted from.
    pub fn append_created(&mut self, todo: Todo, session: u32) {
        if !self.items.iter().any(|t| t.id == todo.id) {
            self.items.push(todo);
        }
        self.submitting = false;
        if session == self.dialog_session {
            self.dialog_open = false;
            self.create_error = None;
        }
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
        self.dialog_session = self.dialog_session.wrapping_add(1);
        self.create_error = None;
    }

    /// In-flight creates keep running; `submitting` stays set until they land.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Mark a create as started. Returns the dialog session it belongs to, or
    /// `None` while another create is still in flight.
    pub fn begin_create(&mut self) -> Option<u32> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.create_error = None;
        Some(self.dialog_session)
    }

    pub fn fail_load(&mut self, message: String) {
        self.load_error = Some(message);
    }

    /// The modal stays as it was so the user can resubmit.
    pub fn fail_create(&mut self, message: String) {
        self.submitting = false;
        self.create_error = Some(message);
    }

    /// Message for the page-level banner: list failures, and create failures
    /// no open modal is showing.
    pub fn banner_error(&self) -> Option<String> {
        self.load_error.clone().or_else(|| {
            if self.dialog_open {
                None
            } else {
                self.create_error.clone()
            }
        })
    }

    pub fn dismiss_errors(&mut self) {
        self.load_error = None;
        self.create_error = None;
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Completions of in-flight requests may land after the page unmounted and the
// store was disposed; `try_update` drops them silently.

pub fn store_set_items(store: &TodoStore, items: Vec<Todo>) {
    store.try_update(|state| state.replace_items(items));
}

pub fn store_append_created(store: &TodoStore, todo: Todo, session: u32) {
    store.try_update(|state| state.append_created(todo, session));
}

pub fn store_fail_load(store: &TodoStore, message: String) {
    store.try_update(|state| state.fail_load(message));
}

pub fn store_fail_create(store: &TodoStore, message: String) {
    store.try_update(|state| state.fail_create(message));
}

pub fn store_begin_create(store: &TodoStore) -> Option<u32> {
    store.try_update(TodoState::begin_create).flatten()
}

pub fn store_open_dialog(store: &TodoStore) {
    store.update(TodoState::open_dialog);
}

pub fn store_close_dialog(store: &TodoStore) {
    store.update(TodoState::close_dialog);
}

pub fn store_dismiss_errors(store: &TodoStore) {
    store.update(TodoState::dismiss_errors);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            body: String::new(),
            done: false,
        }
    }

    fn ids(state: &TodoState) -> Vec<i64> {
        state.items.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_replace_items_takes_server_order() {
        let mut state = TodoState::default();
        state.replace_items(vec![todo(2, "a"), todo(3, "b")]);
        assert_eq!(ids(&state), vec![2, 3]);
    }

    #[test]
    fn test_empty_response_renders_nothing() {
        let mut state = TodoState::default();
        state.replace_items(vec![]);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_late_list_keeps_created_todo() {
        let mut state = TodoState::default();
        state.open_dialog();
        let session = state.begin_create().unwrap();
        state.append_created(todo(5, "buy milk"), session);

        // List answered before the POST landed on the server
        state.replace_items(vec![todo(1, "a")]);

        assert_eq!(ids(&state), vec![1, 5]);
    }

    #[test]
    fn test_late_list_does_not_duplicate() {
        let mut state = TodoState::default();
        state.open_dialog();
        let session = state.begin_create().unwrap();
        state.append_created(todo(5, "buy milk"), session);

        state.replace_items(vec![todo(1, "a"), todo(5, "buy milk")]);

        assert_eq!(ids(&state), vec![1, 5]);
    }

    #[test]
    fn test_append_created_closes_dialog() {
        let mut state = TodoState::default();
        state.replace_items(vec![todo(1, "a")]);
        state.open_dialog();
        let session = state.begin_create().unwrap();

        state.append_created(todo(2, "buy milk"), session);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].title, "buy milk");
        assert!(!state.dialog_open);
        assert!(!state.submitting);
    }

    #[test]
    fn test_second_create_blocked_while_in_flight() {
        let mut state = TodoState::default();
        state.open_dialog();
        assert!(state.begin_create().is_some());
        assert!(state.begin_create().is_none());
    }

    #[test]
    fn test_close_reopen_then_late_echo() {
        let mut state = TodoState::default();
        state.open_dialog();
        let session = state.begin_create().unwrap();
        state.close_dialog();
        state.open_dialog();

        assert!(state.submitting);
        assert!(state.begin_create().is_none());

        state.append_created(todo(2, "buy milk"), session);

        assert!(state.dialog_open);
        assert!(!state.submitting);
        assert_eq!(ids(&state), vec![2]);
        assert!(state.begin_create().is_some());
    }

    #[test]
    fn test_failed_create_keeps_dialog_open() {
        let mut state = TodoState::default();
        state.open_dialog();
        state.begin_create().unwrap();

        state.fail_create("API error 500: boom".to_string());

        assert!(state.dialog_open);
        assert!(!state.submitting);
        assert_eq!(state.create_error.as_deref(), Some("API error 500: boom"));
        assert_eq!(state.banner_error(), None);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_load_failure_stays_out_of_dialog() {
        let mut state = TodoState::default();
        state.open_dialog();

        state.fail_load("HTTP request failed".to_string());

        assert!(state.create_error.is_none());
        assert_eq!(state.banner_error().as_deref(), Some("HTTP request failed"));
    }

    #[test]
    fn test_create_failure_after_close_goes_to_banner() {
        let mut state = TodoState::default();
        state.open_dialog();
        state.begin_create().unwrap();
        state.close_dialog();

        state.fail_create("API error 500: boom".to_string());

        assert_eq!(state.banner_error().as_deref(), Some("API error 500: boom"));
    }

    #[test]
    fn test_open_dialog_clears_stale_create_error() {
        let mut state = TodoState::default();
        state.fail_create("HTTP request failed".to_string());
        state.open_dialog();
        assert!(state.create_error.is_none());
    }

    #[test]
    fn test_dismiss_clears_both_errors() {
        let mut state = TodoState::default();
        state.fail_load("a".to_string());
        state.fail_create("b".to_string());
        state.dismiss_errors();
        assert_eq!(state.banner_error(), None);
    }
}
