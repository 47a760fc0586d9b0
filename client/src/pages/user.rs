//! Screens of the foster-family area that carry their own logic.

use leptos::prelude::*;

use crate::components::layout::USER_NAV;
use crate::state::auth::AuthState;

/// Home for a signed-in foster family: greeting plus shortcuts to each area.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .principal
            .map(|p| format!("Welcome back, {}!", p.name))
            .unwrap_or_default()
    };

    view! {
        <section class="dashboard-page">
            <p class="dashboard-page__greeting">{greeting}</p>
            <div class="dashboard-page__cards">
                {USER_NAV
                    .iter()
                    .skip(1)
                    .map(|(href, label)| {
                        view! {
                            <a class="dashboard-page__card" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
