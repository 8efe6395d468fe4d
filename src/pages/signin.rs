use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{paths, AppRoute};

/// Placeholder; sign-in has no behavior yet.
#[component]
pub fn SigninPage() -> impl IntoView {
    view! {
        <div class="signin-page">
            <h1>{AppRoute::Signin.heading()}</h1>
            <A href=paths::HOME>"Back to home"</A>
        </div>
    }
}
