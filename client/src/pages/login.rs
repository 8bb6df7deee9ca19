//! Username/password login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lending_portal::gateway::auth;

use crate::net::api::use_api;
use crate::state::session::AppSession;
use crate::util::notice;

const LOGIN_FAILED: &str = "Login failed. Please check your username and password.";

/// Login form. A successful login stores the session and opens the catalog.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        let name = username.get_untracked();
        let secret = password.get_untracked();
        leptos::task::spawn_local(async move {
            match auth::login(&api, &name, &secret).await {
                Ok(response) => {
                    session.begin(&response, name.trim());
                    navigate("/equipment", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    notice::alert(&e.user_message(LOGIN_FAILED));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="container">
            <div class="row justify-content-center mt-5">
                <div class="col-md-6">
                    <div class="card shadow-lg">
                        <div class="card-header bg-primary text-white">
                            <h2 class="text-center mb-0">"Login"</h2>
                        </div>
                        <div class="card-body">
                            <form on:submit=on_submit>
                                <div class="mb-3">
                                    <label class="form-label" for="username">"Username"</label>
                                    <input
                                        id="username"
                                        class="form-control"
                                        type="text"
                                        autocomplete="username"
                                        placeholder="Enter username"
                                        prop:value=move || username.get()
                                        on:input=move |ev| username.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="mb-3">
                                    <label class="form-label" for="password">"Password"</label>
                                    <input
                                        id="password"
                                        class="form-control"
                                        type="password"
                                        autocomplete="current-password"
                                        placeholder="Enter password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="d-grid">
                                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || busy.get()>
                                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                                    </button>
                                </div>
                                <div class="text-center mt-3">
                                    <span class="text-muted">"Need an account? "</span>
                                    <A href="/register">"Register here"</A>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
