//! Landing route (`/`).
//!
//! Runs a [`RedirectResolver`] once the session is known: signed-out
//! visitors go to the login page, admins to the console. A standard user's
//! destination is `/` itself, so instead of navigating the page renders the
//! user home in place.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::user::DashboardPage;
use crate::components::layout::UserLayout;
use crate::components::pending::PendingView;
use crate::routing::dispatch::should_navigate;
use crate::routing::resolver::{RedirectResolver, ResolverState};
use crate::routing::table::View;
use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let resolver = RwSignal::new(RedirectResolver::new());
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        let mut target = None;
        resolver.update(|r| target = r.observe(&state));
        if let Some(target) = target {
            let current = pathname.get_untracked();
            if should_navigate(&current, target) {
                log::debug!("landing: redirecting to {target}");
                navigate(target, NavigateOptions { replace: true, ..Default::default() });
            }
        }
    });

    let show_home = move || {
        resolver.get().state() == ResolverState::RedirectingToDefault && auth.get().principal.is_some()
    };

    view! {
        <Show when=show_home fallback=|| view! { <PendingView/> }>
            <UserLayout title=View::Dashboard.title()>
                <DashboardPage/>
            </UserLayout>
        </Show>
    }
}
