//! Account management for the admin console.
//!
//! The table re-fetches after every successful mutation by bumping a
//! revision counter the resource tracks.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;

use super::auth::validate_registration;
use crate::net::types::{NewAccount, Principal, Role};
use crate::state::auth::AuthState;

#[must_use]
pub fn toggled_role(role: Role) -> Role {
    match role {
        Role::Standard => Role::Admin,
        Role::Admin => Role::Standard,
    }
}

#[must_use]
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Standard => "Foster family",
        Role::Admin => "Admin",
    }
}

/// Admins cannot remove their own account.
#[must_use]
pub fn can_delete(target: &Principal, current: Option<&Principal>) -> bool {
    current.is_none_or(|me| me.id != target.id)
}

/// Check the create form and build the request body.
///
/// # Errors
///
/// Returns the same field messages as the registration form.
pub fn build_new_account(
    username: &str,
    password: &str,
    email: &str,
    name: &str,
    admin: bool,
) -> Result<NewAccount, &'static str> {
    let registration = validate_registration(username, password, email, name)?;
    Ok(NewAccount {
        username: registration.username,
        password: registration.password,
        email: registration.email,
        name: registration.name,
        role: if admin { Role::Admin } else { Role::Standard },
    })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let revision = RwSignal::new(0_u32);
    let info = RwSignal::new(String::new());

    let users = LocalResource::new(move || {
        revision.track();
        crate::net::api::fetch_users()
    });

    view! {
        <section class="admin-users">
            <NewAccountForm revision=revision info=info/>
            <p class="admin-users__info">{move || info.get()}</p>
            <Suspense fallback=|| view! { <p class="admin-users__status">"Loading..."</p> }>
                {move || {
                    users.get()
                        .map(|result| match result {
                            Some(list) => {
                                let current = auth.get_untracked().principal;
                                view! { <UserTable users=list current=current revision=revision info=info/> }.into_any()
                            }
                            None => {
                                view! { <p class="admin-users__status">"Could not load accounts."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn UserTable(
    users: Vec<Principal>,
    current: Option<Principal>,
    revision: RwSignal<u32>,
    info: RwSignal<String>,
) -> impl IntoView {
    view! {
        <table class="admin-users__table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Username"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let deletable = can_delete(&user, current.as_ref());
                        let (id, role) = (user.id, user.role);
                        let toggle_label = format!("Make {}", role_label(toggled_role(role)));
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{user.username}</td>
                                <td>{user.name}</td>
                                <td>{user.email}</td>
                                <td>{role_label(role)}</td>
                                <td>
                                    <button
                                        class="btn"
                                        disabled=!deletable
                                        on:click=move |_| change_role(id, role, revision, info)
                                    >
                                        {toggle_label}
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        disabled=!deletable
                                        on:click=move |_| remove(id, revision, info)
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn NewAccountForm(revision: RwSignal<u32>, info: RwSignal<String>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let admin = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account = match build_new_account(
            &username.get_untracked(),
            &password.get_untracked(),
            &email.get_untracked(),
            &name.get_untracked(),
            admin.get_untracked(),
        ) {
            Ok(account) => account,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_user(&account).await {
                    Ok(user) => {
                        info.set(format!("Created {}.", user.username));
                        username.set(String::new());
                        password.set(String::new());
                        email.set(String::new());
                        name.set(String::new());
                        admin.set(false);
                        revision.update(|r| *r += 1);
                    }
                    Err(e) => info.set(e),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (account, revision);
        }
    };

    view! {
        <form class="admin-users__form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || admin.get()
                    on:change=move |ev| admin.set(event_target_checked(&ev))
                />
                "Admin"
            </label>
            <button class="btn" type="submit">
                "Add user"
            </button>
        </form>
    }
}

fn change_role(id: i64, role: Role, revision: RwSignal<u32>, info: RwSignal<String>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let update = crate::net::types::UserUpdate { role: Some(toggled_role(role)), ..Default::default() };
            match crate::net::api::update_user(id, &update).await {
                Ok(user) => {
                    info.set(format!("{} is now {}.", user.username, role_label(user.role)));
                    revision.update(|r| *r += 1);
                }
                Err(e) => info.set(e),
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, role, revision, info);
    }
}

fn remove(id: i64, revision: RwSignal<u32>, info: RwSignal<String>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(id).await {
                Ok(()) => {
                    info.set(format!("Deleted user #{id}."));
                    revision.update(|r| *r += 1);
                }
                Err(e) => info.set(e),
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, revision, info);
    }
}
