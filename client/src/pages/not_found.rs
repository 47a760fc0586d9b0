//! Fallback for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a class="btn" href="/">"Back to start"</a>
        </div>
    }
}
