//! Todo API Client
//!
//! Wire models and a typed HTTP client for the remote todo API.
//! Runs in the browser (fetch) and on native targets.

mod client;
mod config;
mod error;
pub mod models;

pub use client::TodoClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use models::{NewTodo, Todo, TodoList};

pub type Result<T> = std::result::Result<T, ClientError>;
