//! Home Page
//!
//! Static landing view with links to the other views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{paths, AppRoute};

/// Navigation links (href, label)
const NAV_LINKS: &[(&str, &str)] = &[
    (paths::TODO, "Todos"),
    (paths::SIGNIN, "Sign in"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>{AppRoute::Home.heading()}</h1>
            <nav>
                <ul>
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <li>
                            <A href=*href>{*label}</A>
                        </li>
                    }).collect_view()}
                </ul>
            </nav>
        </div>
    }
}
