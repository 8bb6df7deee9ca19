//! Colored badge for a borrow-request status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use lending_portal::models::RequestStatus;

/// Bootstrap badge classes per status.
pub fn badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge bg-warning text-dark",
        RequestStatus::Approved => "badge bg-success",
        RequestStatus::Rejected => "badge bg-danger",
        RequestStatus::Returned => "badge bg-secondary",
    }
}

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
