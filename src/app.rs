//! Todo Web UI App
//!
//! Root component: API client context and the route table.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use todo_client::{ApiConfig, TodoClient};

use crate::context::AppContext;
use crate::pages::{HomePage, SigninPage, TodoPage};

/// Route paths, shared by the route table and navigation links
pub mod paths {
    pub const HOME: &str = "/";
    pub const SIGNIN: &str = "/signin";
    pub const TODO: &str = "/todo";
}

/// The routed views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Signin,
    Todo,
}

impl AppRoute {
    /// Route for a URL path. No fallback: unknown paths match nothing.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { paths::HOME } else { trimmed };
        match path {
            paths::HOME => Some(AppRoute::Home),
            paths::SIGNIN => Some(AppRoute::Signin),
            paths::TODO => Some(AppRoute::Todo),
            _ => None,
        }
    }

    /// Page heading
    pub fn heading(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Signin => "Sign in",
            AppRoute::Todo => "Todo",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::default();
    match TodoClient::new(&config) {
        Ok(client) => {
            log::info!("[APP] Todo API at {}", client.base_url());
            provide_context(AppContext::new(client));
            view! {
                <div>
                    <Router>
                        <RouteView />
                    </Router>
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("[APP] {}", e);
            view! { <p class="error-banner" role="alert">{e.to_string()}</p> }.into_any()
        }
    }
}

/// Exactly one view per known path; anything else renders nothing.
#[component]
fn RouteView() -> impl IntoView {
    let location = use_location();
    // Memo so that path changes within the same route don't remount the view
    let route = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));

    move || match route.get() {
        Some(AppRoute::Home) => view! { <HomePage /> }.into_any(),
        Some(AppRoute::Signin) => view! { <SigninPage /> }.into_any(),
        Some(AppRoute::Todo) => view! { <TodoPage /> }.into_any(),
        None => ().into_any(),
    }
}
