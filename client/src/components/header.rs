//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;

/// Navigation links depend on who is logged in: everyone signed in sees
/// Equipment, students see their requests, staff see the request queue.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let current = session.current;
    let logged_in = move || current.get().is_logged_in();
    let student = move || logged_in() && current.get().is_student();
    let staff = move || logged_in() && current.get().is_admin();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header>
            <nav class="navbar navbar-expand-md navbar-dark bg-dark px-3">
                <A href="/" attr:class="navbar-brand">
                    "School Equipment Lending Portal"
                </A>
                <ul class="navbar-nav me-auto">
                    <Show when=logged_in>
                        <li class="nav-item">
                            <A href="/equipment" attr:class="nav-link">"Equipment"</A>
                        </li>
                    </Show>
                    <Show when=student>
                        <li class="nav-item">
                            <A href="/my-requests" attr:class="nav-link">"Borrow Requests"</A>
                        </li>
                    </Show>
                    <Show when=staff>
                        <li class="nav-item">
                            <A href="/admin-requests" attr:class="nav-link">"Manage Requests"</A>
                        </li>
                    </Show>
                </ul>
                <ul class="navbar-nav">
                    <Show
                        when=logged_in
                        fallback=|| {
                            view! {
                                <li class="nav-item">
                                    <A href="/register" attr:class="nav-link">"Register"</A>
                                </li>
                                <li class="nav-item">
                                    <A href="/login" attr:class="nav-link">"Login"</A>
                                </li>
                            }
                        }
                    >
                        <li class="nav-item">
                            <a href="/login" class="nav-link" on:click=on_logout.clone()>"Logout"</a>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
