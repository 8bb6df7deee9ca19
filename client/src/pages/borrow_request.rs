//! Student borrow-request form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use lending_portal::PortalError;
use lending_portal::gateway::{equipment, requests};
use lending_portal::models::{Equipment, format_iso_date};
use lending_portal::validate::BorrowRequestDraft;

use crate::net::api::use_api;
use crate::state::catalog;
use crate::state::session::AppSession;
use crate::util::auth::install_login_redirect;
use crate::util::{clock, notice};

const SUBMITTED: &str = "Borrow request submitted successfully!";
const SUBMIT_FAILED: &str = "Error submitting request. Please try again.";
const LOAD_FAILED: &str = "Error loading equipment data.";

/// Selected item within the loaded list, by the raw id in the draft.
fn selected(list: &[Equipment], raw_id: &str) -> Option<Equipment> {
    let id = raw_id.trim().parse::<i64>().ok()?;
    list.iter().find(|item| item.id == id).cloned()
}

/// Request form. `?equipmentId=` preselects an item; stock and date checks
/// run locally before the request is sent.
#[component]
pub fn BorrowRequestPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    let navigate = use_navigate();
    install_login_redirect(session, navigate.clone());

    let query = use_query_map();
    let draft = RwSignal::new(BorrowRequestDraft::default());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(id) = query.with(|q| q.get("equipmentId")) {
            draft.update(|d| d.equipment_id = id);
        }
    });

    let available = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match equipment::list_available(&api).await {
                    Ok(list) => catalog::requestable(list),
                    Err(e) => {
                        leptos::logging::error!("failed to load equipment: {e}");
                        if e != PortalError::Unauthorized {
                            notice::alert(LOAD_FAILED);
                        }
                        Vec::new()
                    }
                }
            }
        }
    });

    let choice = move || {
        let list = available.get().unwrap_or_default();
        draft.with(|d| selected(&list, &d.equipment_id))
    };
    let today = move || format_iso_date(clock::today());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = draft.get_untracked();
            let known_available = available
                .get_untracked()
                .and_then(|list| selected(&list, &form.equipment_id))
                .map(|item| item.available_quantity);

            busy.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = requests::create(&api, &form, clock::today(), known_available).await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        notice::alert(SUBMITTED);
                        navigate("/my-requests", NavigateOptions::default());
                    }
                    Err(PortalError::Unauthorized) => {}
                    Err(e) => {
                        leptos::logging::warn!("borrow request rejected: {e}");
                        notice::alert(&e.user_message(SUBMIT_FAILED));
                    }
                }
            });
        }
    };

    view! {
        <div class="container">
            <h2>"Create Borrow Request"</h2>
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label class="form-label">"Equipment"</label>
                    <select
                        class="form-control"
                        required
                        prop:value=move || draft.with(|d| d.equipment_id.clone())
                        on:change=move |ev| draft.update(|d| d.equipment_id = event_target_value(&ev))
                    >
                        <option value="">"Select Equipment"</option>
                        {move || {
                            available
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|item| {
                                    let label = format!(
                                        "{} - {} (Available: {})",
                                        item.name,
                                        item.category,
                                        item.available_quantity,
                                    );
                                    view! { <option value=item.id.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="mb-3">
                    <label class="form-label">"Quantity"</label>
                    <input
                        type="number"
                        class="form-control"
                        required
                        min="1"
                        max=move || choice().map_or(1, |item| item.available_quantity).to_string()
                        prop:value=move || draft.with(|d| d.quantity.clone())
                        on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                    />
                    {move || {
                        choice()
                            .map(|item| {
                                view! {
                                    <small class="text-muted">
                                        {format!("Maximum available: {}", item.available_quantity)}
                                    </small>
                                }
                            })
                    }}
                </div>

                <div class="mb-3">
                    <label class="form-label">"From Date"</label>
                    <input
                        type="date"
                        class="form-control"
                        required
                        min=today
                        prop:value=move || draft.with(|d| d.from_date.clone())
                        on:input=move |ev| draft.update(|d| d.from_date = event_target_value(&ev))
                    />
                </div>

                <div class="mb-3">
                    <label class="form-label">"To Date"</label>
                    <input
                        type="date"
                        class="form-control"
                        required
                        min=move || {
                            let from = draft.with(|d| d.from_date.clone());
                            if from.is_empty() { today() } else { from }
                        }
                        prop:value=move || draft.with(|d| d.to_date.clone())
                        on:input=move |ev| draft.update(|d| d.to_date = event_target_value(&ev))
                    />
                </div>

                <div class="mb-3">
                    <label class="form-label">"Reason (Optional)"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        placeholder="Enter reason for borrowing this equipment"
                        prop:value=move || draft.with(|d| d.reason.clone())
                        on:input=move |ev| draft.update(|d| d.reason = event_target_value(&ev))
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-success" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary ms-2"
                    on:click=move |_| navigate("/equipment", NavigateOptions::default())
                >
                    "Cancel"
                </button>
            </form>
        </div>
    }
}
