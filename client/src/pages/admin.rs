//! Admin console overview and security log viewer.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::{DashboardStats, SecurityLogEntry};

/// Human label for a logged action.
#[must_use]
pub fn action_label(action: &str) -> &str {
    match action {
        "login" => "Signed in",
        "login_failed" => "Failed sign-in",
        "logout" => "Signed out",
        "register" => "Registered",
        "user_created" => "Created account",
        "user_updated" => "Updated account",
        "user_deleted" => "Deleted account",
        other => other,
    }
}

/// Date and time portion of an RFC 3339 timestamp, without fractional
/// seconds or offset.
#[must_use]
pub fn short_timestamp(ts: &str) -> String {
    let trimmed = ts.split(['.', '+', 'Z']).next().unwrap_or(ts);
    trimmed.replacen('T', " ", 1)
}

/// Label and value for each dashboard figure.
#[must_use]
pub fn stat_tiles(stats: &DashboardStats) -> [(&'static str, usize); 6] {
    [
        ("Foster families", stats.active_users),
        ("Admins", stats.admins),
        ("Pets", stats.total_pets),
        ("Available", stats.available_pets),
        ("In foster care", stats.fostered_pets),
        ("Adopted", stats.adopted_pets),
    ]
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_dashboard_stats());

    view! {
        <section class="admin-dashboard">
            <Suspense fallback=|| view! { <p class="admin-dashboard__status">"Loading..."</p> }>
                {move || {
                    stats.get()
                        .map(|result| match result {
                            Some(stats) => {
                                let tiles = stat_tiles(&stats);
                                view! {
                                    <div class="admin-dashboard__tiles">
                                        {tiles
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="admin-dashboard__tile">
                                                        <span class="admin-dashboard__value">{value}</span>
                                                        <span class="admin-dashboard__label">{label}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <h3>"Recent security events"</h3>
                                    <LogTable entries=stats.recent_security_events/>
                                    <a class="btn" href="/admin/security-logs">"Full security log"</a>
                                }
                                .into_any()
                            }
                            None => {
                                view! { <p class="admin-dashboard__status">"Could not load statistics."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
pub fn SecurityLogsPage() -> impl IntoView {
    let logs = LocalResource::new(|| crate::net::api::fetch_security_logs());

    view! {
        <section class="security-logs">
            <Suspense fallback=|| view! { <p class="security-logs__status">"Loading..."</p> }>
                {move || {
                    logs.get()
                        .map(|result| match result {
                            Some(entries) if entries.is_empty() => {
                                view! { <p class="security-logs__status">"No events recorded yet."</p> }
                                    .into_any()
                            }
                            Some(entries) => view! { <LogTable entries=entries/> }.into_any(),
                            None => {
                                view! { <p class="security-logs__status">"Could not load the security log."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn LogTable(entries: Vec<SecurityLogEntry>) -> impl IntoView {
    view! {
        <table class="security-logs__table">
            <thead>
                <tr>
                    <th>"When"</th>
                    <th>"Event"</th>
                    <th>"User"</th>
                    <th>"Details"</th>
                    <th>"IP"</th>
                </tr>
            </thead>
            <tbody>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let user = entry.user_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_owned());
                        view! {
                            <tr>
                                <td>{short_timestamp(&entry.timestamp)}</td>
                                <td>{action_label(&entry.action).to_owned()}</td>
                                <td>{user}</td>
                                <td>{entry.details.unwrap_or_default()}</td>
                                <td>{entry.ip_address.unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
