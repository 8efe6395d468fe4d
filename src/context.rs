//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_client::TodoClient;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// API client, built once at startup from `ApiConfig`
    client: StoredValue<TodoClient, LocalStorage>,
}

impl AppContext {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client: StoredValue::new_local(client),
        }
    }

    /// Handle to the API client (cheap clone of a shared connection pool)
    pub fn client(&self) -> TodoClient {
        self.client.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
