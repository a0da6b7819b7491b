//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::RegisterRequest;

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &phone.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(message) => {
                    registered.set(true);
                    info.set(if message.is_empty() { "Registration successful.".to_owned() } else { message });
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    info.set(e.user_message("Registration failed."));
                }
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <Show
                    when=move || !registered.get()
                    fallback=move || {
                        view! {
                            <p class="login-message">{move || info.get()}</p>
                            <A href="/login" attr:class="login-button">"Go to Login"</A>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit>
                        {field("Full name", "text", name)}
                        {field("Email", "email", email)}
                        {field("Phone number", "tel", phone)}
                        {field("Password", "password", password)}
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                    <p class="login-card__subtitle">
                        "Already registered? "
                        <A href="/login">"Sign in"</A>
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the fields and check them before a round trip.
pub fn validate_register_input(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    if name.is_empty() || email.is_empty() || phone.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        phone_number: phone.to_owned(),
        password: password.to_owned(),
    })
}
