//! A student's own borrow requests.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lending_portal::PortalError;
use lending_portal::gateway::requests;
use lending_portal::models::BorrowRequest;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::status_badge::StatusBadge;
use crate::net::api::use_api;
use crate::state::session::AppSession;
use crate::util::auth::install_login_redirect;
use crate::util::format::{display_date, or_dash};
use crate::util::notice;

const LOAD_FAILED: &str = "Error loading your requests.";

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    install_login_redirect(session, use_navigate());

    let mine = LocalResource::new(move || {
        let api = api.clone();
        async move {
            match requests::mine(&api).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::error!("failed to load own requests: {e}");
                    if e != PortalError::Unauthorized {
                        notice::alert(LOAD_FAILED);
                    }
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="container">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"My Borrow Requests"</h2>
                <A href="/borrow-request" attr:class="btn btn-primary">"New Request"</A>
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner text="Loading your requests..."/> }>
                {move || mine.get().map(|list| view! { <RequestTable list=list/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn RequestTable(list: Vec<BorrowRequest>) -> impl IntoView {
    if list.is_empty() {
        return view! {
            <div class="alert alert-info">
                "No requests found. "
                <A href="/borrow-request">"Create your first request"</A>
            </div>
        }
        .into_any();
    }

    let rows = list
        .into_iter()
        .map(|request| {
            view! {
                <tr>
                    <td>{request.id}</td>
                    <td>{or_dash(request.equipment_name.as_deref())}</td>
                    <td>{request.quantity}</td>
                    <td>{display_date(Some(&request.from_date))}</td>
                    <td>{display_date(Some(&request.to_date))}</td>
                    <td>{display_date(request.return_date.as_deref())}</td>
                    <td><StatusBadge status=request.status/></td>
                    <td>{or_dash(request.reason.as_deref())}</td>
                    <td>{or_dash(request.remarks.as_deref())}</td>
                    <td>{display_date(request.created_at.as_deref())}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="table-responsive">
            <table class="table table-bordered table-striped">
                <thead class="table-dark">
                    <tr>
                        <th>"Request ID"</th>
                        <th>"Equipment"</th>
                        <th>"Quantity"</th>
                        <th>"From Date"</th>
                        <th>"To Date"</th>
                        <th>"Return Date"</th>
                        <th>"Status"</th>
                        <th>"Reason"</th>
                        <th>"Remarks"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
