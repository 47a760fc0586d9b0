//! Generic section page for views that have no dedicated screen yet.
//!
//! Applications, tracking, care tips, reviews, reports and the CMS have no
//! screen in this app; this page gives each of those routes its heading and
//! a short description inside the right layout.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;

use crate::routing::table::View;

/// One-line description shown under the layout title.
#[must_use]
pub fn summary(target: View) -> &'static str {
    match target {
        View::Auth => "Sign in or create an account.",
        View::Landing => "Finding where to take you.",
        View::Dashboard => "Your fostering activity at a glance.",
        View::BrowsePets => "Pets waiting for a foster home, filterable by type, breed and status.",
        View::PetDetail => "Everything about this pet and how to apply to foster it.",
        View::MyApplications => "Foster applications you have submitted and their status.",
        View::PetTracking => "Location, health and activity updates for the pets in your care.",
        View::PetCareTips => "Articles, tutorials and first-aid guides for foster families.",
        View::Reviews => "Share how fostering went and read other families' experiences.",
        View::AdminDashboard => "Shelter-wide statistics and recent activity.",
        View::AdminUsers => "Create, update and remove user accounts.",
        View::AdminPets => "Add pets, edit their profiles and update availability.",
        View::AdminFosterApplications => "Review, approve or reject foster applications and schedule visits.",
        View::AdminReports => "Adoption, application, user and pet reports with export.",
        View::AdminCms => "Edit the site's content pages.",
        View::AdminReviewModeration => "Approve or remove reviews before they are published.",
        View::AdminSecurityLogs => "Sign-in, sign-out and registration events.",
    }
}

/// Heading-and-summary body for `target`.
#[component]
pub fn SectionPage(target: View) -> impl IntoView {
    view! {
        <section class="section-page">
            <p class="section-page__summary">{summary(target)}</p>
        </section>
    }
}
