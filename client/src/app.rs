//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::api::provide_api;
use crate::pages::{
    admin_requests::AdminRequestsPage, borrow_request::BorrowRequestPage, equipment_form::EquipmentFormPage,
    equipment_list::EquipmentListPage, login::LoginPage, my_requests::MyRequestsPage, register::RegisterPage,
};
use crate::state::session::AppSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the stored session, provides it and the API client to every
/// page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::restore();
    provide_api(&session);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/lending-portal.css"/>
        <Title text="School Equipment Lending Portal"/>

        <Router>
            <Header/>
            <main class="py-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("equipment") view=EquipmentListPage/>
                    <Route path=StaticSegment("add-equipment") view=EquipmentFormPage/>
                    <Route path=(StaticSegment("edit-equipment"), ParamSegment("id")) view=EquipmentFormPage/>
                    <Route path=StaticSegment("borrow-request") view=BorrowRequestPage/>
                    <Route path=StaticSegment("my-requests") view=MyRequestsPage/>
                    <Route path=StaticSegment("admin-requests") view=AdminRequestsPage/>
                </Routes>
            </main>
        </Router>
    }
}
