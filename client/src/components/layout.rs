//! Page chrome for the user area and the admin console.
//!
//! Both layouts share a header with the brand, section navigation, the
//! signed-in principal's name and a sign-out button.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::table::LOGIN_ROUTE;
use crate::state::auth::{AuthState, IdentityContext};

/// One navigation entry: `(path, label)`.
pub type NavLink = (&'static str, &'static str);

pub const USER_NAV: &[NavLink] = &[
    ("/dashboard", "Dashboard"),
    ("/browse-pets", "Browse Pets"),
    ("/my-applications", "My Applications"),
    ("/pet-tracking", "Pet Tracking"),
    ("/pet-care-tips", "Care Tips"),
    ("/reviews", "Reviews"),
];

pub const ADMIN_NAV: &[NavLink] = &[
    ("/admin", "Dashboard"),
    ("/admin/users", "Users"),
    ("/admin/pets", "Pets"),
    ("/admin/foster-applications", "Applications"),
    ("/admin/reports", "Reports"),
    ("/admin/cms", "CMS"),
    ("/admin/review-moderation", "Reviews"),
    ("/admin/security-logs", "Security Logs"),
];

/// Layout for the foster-family area.
#[component]
pub fn UserLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="layout layout--user">
            <SiteHeader links=USER_NAV/>
            <main class="layout__main">
                <h1 class="layout__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

/// Layout for the management console.
#[component]
pub fn AdminLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="layout layout--admin">
            <SiteHeader links=ADMIN_NAV/>
            <main class="layout__main">
                <h1 class="layout__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
fn SiteHeader(links: &'static [NavLink]) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let display_name = move || {
        auth.get()
            .principal
            .map(|p| p.name)
            .unwrap_or_default()
    };

    view! {
        <header class="layout__header">
            <a class="layout__brand" href="/">"ComPetny"</a>
            <nav class="layout__nav">
                {links
                    .iter()
                    .map(|(href, label)| {
                        view! { <a class="layout__link" href=*href>{*label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="layout__user">{display_name}</span>
            <SignOutButton/>
        </header>
    }
}

/// Clears the session, then leaves for the login route.
#[component]
fn SignOutButton() -> impl IntoView {
    let identity = expect_context::<IdentityContext>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                identity.logout(&crate::net::api::HttpSessionService).await;
                busy.set(false);
                navigate(LOGIN_ROUTE, NavigateOptions::default());
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            identity.clear();
            busy.set(false);
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    };

    view! {
        <button class="btn layout__signout" on:click=on_click disabled=move || busy.get()>
            "Sign out"
        </button>
    }
}
