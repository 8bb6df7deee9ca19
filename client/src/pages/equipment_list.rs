//! Equipment catalog with search, filters, and role-specific row actions.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lending_portal::PortalError;
use lending_portal::gateway::equipment;
use lending_portal::lifecycle::Revision;
use lending_portal::models::Equipment;

use crate::net::api::use_api;
use crate::state::catalog::{self, CatalogFilters};
use crate::state::session::AppSession;
use crate::util::auth::install_login_redirect;
use crate::util::format::{DESCRIPTION_PREVIEW_CHARS, truncate};
use crate::util::notice;

const LOAD_FAILED: &str = "Error loading equipment data. Please refresh the page.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";
const DELETED: &str = "Equipment deleted successfully!";
const DELETE_FAILED: &str = "Error deleting equipment. Please try again.";

/// Catalog page. Every filter change re-queries the server; staff can add,
/// edit and delete, students can request available items.
#[component]
pub fn EquipmentListPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    let navigate = use_navigate();
    install_login_redirect(session.clone(), navigate.clone());

    let current = session.current;
    let is_admin = move || current.with(lending_portal::Session::is_admin);
    let is_student = move || current.with(lending_portal::Session::is_student);

    let filters = RwSignal::new(CatalogFilters::default());
    let categories = RwSignal::new(Vec::<String>::new());
    let revision = RwSignal::new(Revision::default());

    let items = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let filter = filters.get().to_filter();
            revision.track();
            async move {
                match equipment::list(&api, &filter).await {
                    Ok(list) => {
                        categories.set(catalog::categories(&list));
                        list
                    }
                    Err(e) => {
                        report(&e, LOAD_FAILED);
                        Vec::new()
                    }
                }
            }
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        if !notice::confirm(CONFIRM_DELETE) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match equipment::delete(&api, id).await {
                Ok(()) => {
                    notice::alert(DELETED);
                    revision.update(|r| *r = r.next());
                }
                Err(e) => report(&e, DELETE_FAILED),
            }
        });
    });

    view! {
        <div class="container">
            <h2 class="text-center">"Equipment Dashboard"</h2>

            <div class="card mb-4">
                <div class="card-header">
                    <h5>"Search & Filters"</h5>
                </div>
                <div class="card-body">
                    <div class="row g-3">
                        <div class="col-md-4">
                            <label class="form-label">"Search Equipment"</label>
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Search by name or description..."
                                prop:value=move || filters.with(|f| f.search.clone())
                                on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-3">
                            <label class="form-label">"Category"</label>
                            <select
                                class="form-control"
                                prop:value=move || filters.with(|f| f.category.clone())
                                on:change=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value="">"All Categories"</option>
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </div>
                        <div class="col-md-3">
                            <label class="form-label">"Availability"</label>
                            <div class="form-check mt-2">
                                <input
                                    id="availableOnlyCheck"
                                    class="form-check-input"
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.available_only)
                                    on:change=move |ev| filters.update(|f| f.available_only = event_target_checked(&ev))
                                />
                                <label class="form-check-label" for="availableOnlyCheck">"Available Only"</label>
                            </div>
                        </div>
                        <div class="col-md-2">
                            <label class="form-label">" "</label>
                            <div>
                                <button
                                    class="btn btn-secondary btn-sm"
                                    on:click=move |_| filters.set(CatalogFilters::default())
                                >
                                    "Clear Filters"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <Suspense fallback=move || view! { <p>"Loading equipment..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| {
                            view! {
                                <div class="d-flex justify-content-between align-items-center mb-3">
                                    <span class="text-muted">{catalog::count_label(list.len())}</span>
                                    <Show when=is_admin>
                                        <A href="/add-equipment" attr:class="btn btn-primary">"Add Equipment"</A>
                                    </Show>
                                </div>
                                <EquipmentTable list=list is_admin=is_admin() is_student=is_student() on_delete=on_delete/>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Log a failure and tell the user, unless the transport already sent them
/// to the login page.
fn report(err: &PortalError, fallback: &str) {
    leptos::logging::error!("equipment request failed: {err}");
    if *err != PortalError::Unauthorized {
        notice::alert(&err.user_message(fallback));
    }
}

#[component]
fn EquipmentTable(list: Vec<Equipment>, is_admin: bool, is_student: bool, on_delete: Callback<i64>) -> impl IntoView {
    if list.is_empty() {
        return view! {
            <div class="alert alert-info">"No equipment found matching your search criteria."</div>
        }
        .into_any();
    }

    let has_actions = is_admin || is_student;
    let rows = list
        .into_iter()
        .map(|item| {
            let id = item.id;
            let stock_class = if item.available_quantity > 0 { "badge bg-success" } else { "badge bg-danger" };
            let (status_class, status_text) =
                if item.availability { ("badge bg-success", "Available") } else { ("badge bg-danger", "Unavailable") };
            let requestable = item.is_requestable();
            let description = item.description.clone().filter(|d| !d.is_empty());

            view! {
                <tr>
                    <td><strong>{item.name}</strong></td>
                    <td><span class="badge bg-secondary">{item.category}</span></td>
                    <td>{item.condition}</td>
                    <td>{item.total_quantity}</td>
                    <td><span class=stock_class>{item.available_quantity}</span></td>
                    <td>
                        {match description {
                            Some(text) => {
                                let preview = truncate(&text, DESCRIPTION_PREVIEW_CHARS);
                                view! { <span title=text>{preview}</span> }.into_any()
                            }
                            None => "-".into_any(),
                        }}
                    </td>
                    <td><span class=status_class>{status_text}</span></td>
                    {has_actions.then(|| view! {
                        <td>
                            {is_admin.then(|| view! {
                                <A href=format!("/edit-equipment/{id}") attr:class="btn btn-info btn-sm me-1">"Edit"</A>
                                <button class="btn btn-danger btn-sm" on:click=move |_| on_delete.run(id)>"Delete"</button>
                            })}
                            {(is_student && requestable).then(|| view! {
                                <A href=format!("/borrow-request?equipmentId={id}") attr:class="btn btn-success btn-sm">
                                    "Request"
                                </A>
                            })}
                            {(is_student && !requestable).then(|| view! {
                                <span class="text-muted small">"Not Available"</span>
                            })}
                        </td>
                    })}
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="table-responsive">
            <table class="table table-bordered table-striped">
                <thead class="table-dark">
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Condition"</th>
                        <th>"Total Quantity"</th>
                        <th>"Available Quantity"</th>
                        <th>"Description"</th>
                        <th>"Status"</th>
                        {has_actions.then(|| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
