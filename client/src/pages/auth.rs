//! Sign-in and registration page.
//!
//! Field checks run locally before anything is sent; the server still owns
//! the final answer. On success the identity context flips to signed-in and
//! the page hands off to the landing route, which picks the destination.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::SessionError;
use crate::net::types::{Credentials, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, Registration};
use crate::routing::table::DEFAULT_ROUTE;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::auth::IdentityContext;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }
}

/// Trim and check the sign-in fields.
///
/// # Errors
///
/// Returns a user-facing message naming the first missing field.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Trim and check the registration fields.
///
/// # Errors
///
/// Returns a user-facing message for the first field that fails.
pub fn validate_registration(
    username: &str,
    password: &str,
    email: &str,
    name: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    let name = name.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err("Username must be at least 3 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if name.is_empty() {
        return Err("Enter your name.");
    }
    Ok(Registration {
        username: username.to_owned(),
        password: password.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
    })
}

/// Message shown under the form when the server rejects a request.
#[must_use]
pub fn failure_message(mode: AuthMode, error: &SessionError) -> String {
    match (mode, error) {
        (AuthMode::SignIn, SessionError::InvalidCredentials) => "Invalid username or password.".to_owned(),
        (AuthMode::Register, SessionError::UsernameTaken) => "That username is already taken.".to_owned(),
        (_, SessionError::Rejected(reason)) => capitalize(reason),
        (AuthMode::SignIn, other) => format!("Sign in failed: {other}"),
        (AuthMode::Register, other) => format!("Registration failed: {other}"),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let identity = expect_context::<IdentityContext>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().principal.is_some() {
            navigate(DEFAULT_ROUTE, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = mode.get();
        let request = match current {
            AuthMode::SignIn => validate_credentials(&username.get(), &password.get()).map(Request::SignIn),
            AuthMode::Register => {
                validate_registration(&username.get(), &password.get(), &email.get(), &name.get())
                    .map(Request::Register)
            }
        };
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let identity = identity.clone();
            leptos::task::spawn_local(async move {
                let service = crate::net::api::HttpSessionService;
                let result = match &request {
                    Request::SignIn(credentials) => identity.login(&service, credentials).await,
                    Request::Register(registration) => identity.register(&service, registration).await,
                };
                if let Err(e) = result {
                    info.set(failure_message(current, &e));
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    let heading = move || match mode.get() {
        AuthMode::SignIn => "Sign in",
        AuthMode::Register => "Create an account",
    };
    let submit_label = move || match mode.get() {
        AuthMode::SignIn => "Sign in",
        AuthMode::Register => "Register",
    };
    let toggle_label = move || match mode.get() {
        AuthMode::SignIn => "Need an account? Register",
        AuthMode::Register => "Already registered? Sign in",
    };
    let registering = move || mode.get() == AuthMode::Register;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"ComPetny"</h1>
                <p class="auth-card__subtitle">{heading}</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=registering>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <button
                    class="auth-toggle"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        info.set(String::new());
                    }
                >
                    {toggle_label}
                </button>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Request {
    SignIn(Credentials),
    Register(Registration),
}
