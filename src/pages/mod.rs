//! Routed Views

mod home;
mod signin;
mod todo;

pub use home::HomePage;
pub use signin::SigninPage;
pub use todo::TodoPage;
