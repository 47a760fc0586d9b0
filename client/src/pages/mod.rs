//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dispatcher hands a [`routing::dispatch::Outcome`](crate::routing::dispatch::Outcome)
//! to [`render_outcome`], which wraps the view in the layout of its section.
//! Pending and redirecting outcomes render only the neutral placeholder.

pub mod admin;
pub mod admin_users;
pub mod auth;
pub mod landing;
pub mod not_found;
pub mod pets;
pub mod section;
pub mod user;

use leptos::prelude::*;

use self::admin::{AdminDashboardPage, SecurityLogsPage};
use self::admin_users::UsersPage;
use self::auth::AuthPage;
use self::landing::LandingPage;
use self::not_found::NotFoundPage;
use self::section::SectionPage;
use self::pets::{BrowsePetsPage, PetDetailPage};
use self::user::DashboardPage;
use crate::components::layout::{AdminLayout, UserLayout};
use crate::components::pending::PendingView;
use crate::routing::dispatch::Outcome;
use crate::routing::table::{RouteParams, Section, View};

/// Turn a dispatch outcome into the view tree to mount.
pub fn render_outcome(outcome: Outcome) -> AnyView {
    match outcome {
        Outcome::Pending | Outcome::Redirect(_) => view! { <PendingView/> }.into_any(),
        Outcome::NotFound => view! { <NotFoundPage/> }.into_any(),
        Outcome::Render(target, params) => render_view(target, &params),
    }
}

fn render_view(target: View, params: &RouteParams) -> AnyView {
    let title = target.title();
    match target {
        View::Auth => view! { <AuthPage/> }.into_any(),
        View::Landing => view! { <LandingPage/> }.into_any(),
        View::Dashboard => view! {
            <UserLayout title=title>
                <DashboardPage/>
            </UserLayout>
        }
        .into_any(),
        View::BrowsePets => view! {
            <UserLayout title=title>
                <BrowsePetsPage/>
            </UserLayout>
        }
        .into_any(),
        View::PetDetail => {
            let id = params.get("id").unwrap_or_default().to_owned();
            view! {
                <UserLayout title=title>
                    <PetDetailPage id=id/>
                </UserLayout>
            }
            .into_any()
        }
        View::AdminDashboard => view! {
            <AdminLayout title=title>
                <AdminDashboardPage/>
            </AdminLayout>
        }
        .into_any(),
        View::AdminUsers => view! {
            <AdminLayout title=title>
                <UsersPage/>
            </AdminLayout>
        }
        .into_any(),
        View::AdminSecurityLogs => view! {
            <AdminLayout title=title>
                <SecurityLogsPage/>
            </AdminLayout>
        }
        .into_any(),
        other => match other.section() {
            Section::Admin => view! {
                <AdminLayout title=title>
                    <SectionPage target=other/>
                </AdminLayout>
            }
            .into_any(),
            Section::User | Section::Public => view! {
                <UserLayout title=title>
                    <SectionPage target=other/>
                </UserLayout>
            }
            .into_any(),
        },
    }
}
