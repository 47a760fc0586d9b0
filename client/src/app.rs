//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Every path mounts the same [`Dispatcher`]. It runs the route table and
//! auth guard over the current location and the auth snapshot, performs any
//! redirect through the router's navigate primitive, and renders the result.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::render_outcome;
use crate::routing::dispatch::{Outcome, dispatch, should_navigate};
use crate::routing::table::routes;
use crate::state::auth::{AuthState, IdentityContext};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the identity context, mirrors it into a reactive signal for views,
/// and starts session resolution in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = IdentityContext::new();
    let auth = RwSignal::new(identity.state());

    let subscription = identity.subscribe(move |state: &AuthState| {
        let _ = auth.try_set(state.clone());
    });
    let identity_cleanup = identity.clone();
    on_cleanup(move || {
        identity_cleanup.unsubscribe(subscription);
    });

    #[cfg(feature = "hydrate")]
    {
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            identity.resolve_session(&crate::net::api::HttpSessionService).await;
        });
    }

    provide_context(identity);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/competny.css"/>
        <Title text="ComPetny"/>

        <Router>
            <Routes fallback=|| view! { <Dispatcher/> }>
                <Route path=StaticSegment("") view=Dispatcher/>
                <Route path=WildcardSegment("any") view=Dispatcher/>
            </Routes>
        </Router>
    }
}

/// Maps the current location to a view through the route table and guard.
#[component]
fn Dispatcher() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| dispatch(routes(), &pathname.get(), &auth.get()));

    Effect::new(move || {
        if let Outcome::Redirect(target) = outcome.get() {
            let current = pathname.get_untracked();
            if should_navigate(&current, target) {
                log::debug!("route guard: {current} -> {target}");
                navigate(target, NavigateOptions { replace: true, ..Default::default() });
            }
        }
    });

    move || render_outcome(outcome.get())
}
