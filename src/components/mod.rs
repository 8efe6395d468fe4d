//! UI Components
//!
//! Pieces of the todo page.

mod error_banner;
mod new_todo_dialog;
mod todo_list;

pub use error_banner::ErrorBanner;
pub use new_todo_dialog::NewTodoDialog;
pub use todo_list::TodoList;
