//! Todo Models
//!
//! Data structures matching the API's JSON.

use serde::{Deserialize, Serialize};

/// Todo item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub done: bool,
}

/// Creation payload; the server assigns the id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub body: String,
    pub done: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, body: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            done,
        }
    }
}

/// Envelope of `GET /todos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}
