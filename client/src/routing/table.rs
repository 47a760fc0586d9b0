//! Static route table mapping URL paths to views.
//!
//! DESIGN
//! ======
//! Routes are plain data: a pattern, the view it renders and the role it
//! requires. Patterns are compiled into segments once and matched in table
//! order, first match wins. `:name` segments capture a parameter.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::OnceLock;

/// Login / registration route.
pub const LOGIN_ROUTE: &str = "/auth";
/// Landing route; also the non-privileged default destination.
pub const DEFAULT_ROUTE: &str = "/";
/// Admin console entry.
pub const ADMIN_ROUTE: &str = "/admin";

/// Role a route demands of the signed-in principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRole {
    /// Public route; the dispatcher does not guard it.
    None,
    Standard,
    Admin,
}

/// Part of the UI a view belongs to; picks the surrounding layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Public,
    User,
    Admin,
}

/// Every view the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Auth,
    Landing,
    Dashboard,
    BrowsePets,
    PetDetail,
    MyApplications,
    PetTracking,
    PetCareTips,
    Reviews,
    AdminDashboard,
    AdminUsers,
    AdminPets,
    AdminFosterApplications,
    AdminReports,
    AdminCms,
    AdminReviewModeration,
    AdminSecurityLogs,
}

impl View {
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Self::Auth | Self::Landing => Section::Public,
            Self::Dashboard
            | Self::BrowsePets
            | Self::PetDetail
            | Self::MyApplications
            | Self::PetTracking
            | Self::PetCareTips
            | Self::Reviews => Section::User,
            Self::AdminDashboard
            | Self::AdminUsers
            | Self::AdminPets
            | Self::AdminFosterApplications
            | Self::AdminReports
            | Self::AdminCms
            | Self::AdminReviewModeration
            | Self::AdminSecurityLogs => Section::Admin,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Auth => "Sign In",
            Self::Landing => "Welcome",
            Self::Dashboard => "Dashboard",
            Self::BrowsePets => "Browse Pets",
            Self::PetDetail => "Pet Details",
            Self::MyApplications => "My Applications",
            Self::PetTracking => "Pet Tracking",
            Self::PetCareTips => "Pet Care Tips",
            Self::Reviews => "Reviews",
            Self::AdminDashboard => "Admin Dashboard",
            Self::AdminUsers => "User Management",
            Self::AdminPets => "Pet Management",
            Self::AdminFosterApplications => "Foster Applications",
            Self::AdminReports => "Reports",
            Self::AdminCms => "Content Management",
            Self::AdminReviewModeration => "Review Moderation",
            Self::AdminSecurityLogs => "Security Logs",
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub pattern: &'static str,
    pub view: View,
    pub required: RequiredRole,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn new(pattern: &'static str, view: View, required: RequiredRole) -> Self {
        Self { pattern, view, required }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

#[derive(Clone, Debug)]
struct CompiledRoute {
    descriptor: RouteDescriptor,
    segments: Vec<Segment>,
}

/// Named values captured from `:param` segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub descriptor: RouteDescriptor,
    pub params: RouteParams,
}

/// Immutable, compiled route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    #[must_use]
    pub fn new(descriptors: &[RouteDescriptor]) -> Self {
        let routes = descriptors
            .iter()
            .map(|descriptor| CompiledRoute { descriptor: *descriptor, segments: compile(descriptor.pattern) })
            .collect();
        Self { routes }
    }

    #[must_use]
    pub fn descriptors(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(|route| &route.descriptor)
    }

    /// Find the first route matching `path`. Query string, fragment and a
    /// trailing slash are ignored.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let parts = split_path(path);
        self.routes.iter().find_map(|route| {
            if route.segments.len() != parts.len() {
                return None;
            }
            let mut params = Vec::new();
            for (segment, part) in route.segments.iter().zip(&parts) {
                match segment {
                    Segment::Static(expected) if expected == part => {}
                    Segment::Static(_) => return None,
                    Segment::Param(name) => params.push((*name, (*part).to_owned())),
                }
            }
            Some(RouteMatch { descriptor: route.descriptor, params: RouteParams(params) })
        })
    }
}

/// The application's routes.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new(LOGIN_ROUTE, View::Auth, RequiredRole::None),
    RouteDescriptor::new(DEFAULT_ROUTE, View::Landing, RequiredRole::None),
    RouteDescriptor::new("/dashboard", View::Dashboard, RequiredRole::Standard),
    RouteDescriptor::new("/browse-pets", View::BrowsePets, RequiredRole::Standard),
    RouteDescriptor::new("/pet/:id", View::PetDetail, RequiredRole::Standard),
    RouteDescriptor::new("/my-applications", View::MyApplications, RequiredRole::Standard),
    RouteDescriptor::new("/pet-tracking", View::PetTracking, RequiredRole::Standard),
    RouteDescriptor::new("/pet-care-tips", View::PetCareTips, RequiredRole::Standard),
    RouteDescriptor::new("/reviews", View::Reviews, RequiredRole::Standard),
    RouteDescriptor::new(ADMIN_ROUTE, View::AdminDashboard, RequiredRole::Admin),
    RouteDescriptor::new("/admin/users", View::AdminUsers, RequiredRole::Admin),
    RouteDescriptor::new("/admin/pets", View::AdminPets, RequiredRole::Admin),
    RouteDescriptor::new("/admin/foster-applications", View::AdminFosterApplications, RequiredRole::Admin),
    RouteDescriptor::new("/admin/reports", View::AdminReports, RequiredRole::Admin),
    RouteDescriptor::new("/admin/cms", View::AdminCms, RequiredRole::Admin),
    RouteDescriptor::new("/admin/review-moderation", View::AdminReviewModeration, RequiredRole::Admin),
    RouteDescriptor::new("/admin/security-logs", View::AdminSecurityLogs, RequiredRole::Admin),
];

/// Compiled form of [`ROUTES`], built on first use.
#[must_use]
pub fn routes() -> &'static RouteTable {
    static TABLE: OnceLock<RouteTable> = OnceLock::new();
    TABLE.get_or_init(|| RouteTable::new(ROUTES))
}

fn compile(pattern: &'static str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name),
            None => Segment::Static(s),
        })
        .collect()
}

/// Split a location into non-empty path segments.
fn split_path(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Normalize a location for comparison (`/admin/?x=1` and `/admin` are equal).
#[must_use]
pub fn normalize(path: &str) -> String {
    let parts = split_path(path);
    format!("/{}", parts.join("/"))
}
