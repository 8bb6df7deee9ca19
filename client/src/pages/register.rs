//! Self-service student registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use lending_portal::gateway::auth;
use lending_portal::validate::{SignupDraft, SignupErrors, SignupField};

use crate::net::api::use_api;
use crate::util::notice;

const REGISTERED: &str = "Registration successful! Please login with your credentials.";
const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Registration form with per-field validation. Editing a field clears its
/// message; a successful signup goes to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let draft = RwSignal::new(SignupDraft::default());
    let errors = RwSignal::new(SignupErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let payload = match draft.get_untracked().validate() {
                Ok(payload) => payload,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(SignupErrors::default());
            busy.set(true);

            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth::signup(&api, &payload).await {
                    Ok(()) => {
                        notice::alert(REGISTERED);
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        notice::alert(&e.user_message(REGISTER_FAILED));
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="container">
            <div class="row justify-content-center mt-5">
                <div class="col-md-6">
                    <div class="card shadow-lg">
                        <div class="card-header bg-primary text-white">
                            <h2 class="text-center mb-0">"User Registration"</h2>
                        </div>
                        <div class="card-body">
                            <form on:submit=on_submit novalidate>
                                <SignupInput
                                    field=SignupField::FullName
                                    label="Full Name"
                                    kind="text"
                                    autocomplete="off"
                                    draft=draft
                                    errors=errors
                                    busy=busy
                                />
                                <SignupInput
                                    field=SignupField::Username
                                    label="Username"
                                    kind="text"
                                    autocomplete="username"
                                    draft=draft
                                    errors=errors
                                    busy=busy
                                />
                                <SignupInput
                                    field=SignupField::Email
                                    label="Email"
                                    kind="email"
                                    autocomplete="email"
                                    draft=draft
                                    errors=errors
                                    busy=busy
                                />
                                <SignupInput
                                    field=SignupField::Password
                                    label="Password"
                                    kind="password"
                                    autocomplete="new-password"
                                    draft=draft
                                    errors=errors
                                    busy=busy
                                />
                                <div class="mb-3">
                                    <label class="form-label" for="role">"Role"</label>
                                    <select id="role" class="form-control" disabled>
                                        <option value="STUDENT">"STUDENT"</option>
                                    </select>
                                </div>

                                <div class="d-grid gap-2">
                                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || busy.get()>
                                        {move || if busy.get() { "Registering..." } else { "Register" }}
                                    </button>
                                </div>

                                <div class="text-center mt-3">
                                    <span class="text-muted">"Already have an account? "</span>
                                    <button
                                        type="button"
                                        class="btn btn-link p-0"
                                        disabled=move || busy.get()
                                        on:click=move |_| navigate("/login", NavigateOptions::default())
                                    >
                                        "Sign in here"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn field_value(draft: &SignupDraft, field: SignupField) -> &str {
    match field {
        SignupField::FullName => &draft.full_name,
        SignupField::Username => &draft.username,
        SignupField::Email => &draft.email,
        SignupField::Password => &draft.password,
    }
}

fn field_slot(draft: &mut SignupDraft, field: SignupField) -> &mut String {
    match field {
        SignupField::FullName => &mut draft.full_name,
        SignupField::Username => &mut draft.username,
        SignupField::Email => &mut draft.email,
        SignupField::Password => &mut draft.password,
    }
}

/// One labelled input bound to a draft field and its error message.
#[component]
fn SignupInput(
    field: SignupField,
    label: &'static str,
    kind: &'static str,
    autocomplete: &'static str,
    draft: RwSignal<SignupDraft>,
    errors: RwSignal<SignupErrors>,
    busy: RwSignal<bool>,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));
    let id = format!("signup-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="mb-3">
            <label for=id.clone() class="form-label">
                {label} " " <span class="text-danger">"*"</span>
            </label>
            <input
                id=id
                type=kind
                autocomplete=autocomplete
                placeholder=format!("Enter {}", label.to_lowercase())
                class=move || if message().is_some() { "form-control is-invalid" } else { "form-control" }
                disabled=move || busy.get()
                prop:value=move || draft.with(|d| field_value(d, field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *field_slot(d, field) = value);
                    errors.update(|e| e.clear(field));
                }
            />
            {move || message().map(|m| view! { <div class="invalid-feedback d-block">{m}</div> })}
        </div>
    }
}
