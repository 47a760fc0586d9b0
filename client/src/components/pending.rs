//! Neutral placeholder shown while the session resolves or a redirect is in flight.

use leptos::prelude::*;

/// Full-screen spinner. Renders no route content.
#[component]
pub fn PendingView() -> impl IntoView {
    view! {
        <div class="pending" aria-busy="true">
            <span class="pending__spinner"></span>
        </div>
    }
}
