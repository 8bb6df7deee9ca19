//! Add / edit equipment form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use lending_portal::PortalError;
use lending_portal::gateway::equipment;
use lending_portal::validate::EquipmentDraft;

use crate::net::api::use_api;
use crate::state::session::AppSession;
use crate::util::auth::install_login_redirect;
use crate::util::notice;

const ADDED: &str = "Equipment added successfully!";
const UPDATED: &str = "Equipment updated successfully!";
const SAVE_FAILED: &str = "Error saving equipment. Please try again.";
const LOAD_FAILED: &str = "Error loading equipment data.";

type Reader = fn(&EquipmentDraft) -> &String;
type Writer = fn(&mut EquipmentDraft) -> &mut String;

/// Shared by `/add-equipment` and `/edit-equipment/:id`; the id segment
/// switches the page to edit mode and preloads the record.
#[component]
pub fn EquipmentFormPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    let navigate = use_navigate();
    install_login_redirect(session, navigate.clone());

    let params = use_params_map();
    let edit_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let draft = RwSignal::new(EquipmentDraft::blank());
    let busy = RwSignal::new(false);

    Effect::new({
        let api = api.clone();
        move || {
            let Some(id) = edit_id() else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match equipment::get(&api, id).await {
                    Ok(item) => draft.set(EquipmentDraft::from_equipment(&item)),
                    Err(e) => {
                        leptos::logging::error!("failed to load equipment {id}: {e}");
                        if e != PortalError::Unauthorized {
                            notice::alert(LOAD_FAILED);
                        }
                    }
                }
            });
        }
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);

            let api = api.clone();
            let navigate = navigate.clone();
            let form = draft.get_untracked();
            let id = edit_id();
            leptos::task::spawn_local(async move {
                let result = match id {
                    Some(id) => equipment::update(&api, id, &form).await,
                    None => equipment::create(&api, &form).await,
                };
                busy.set(false);
                match result {
                    Ok(()) => {
                        notice::alert(if id.is_some() { UPDATED } else { ADDED });
                        navigate("/equipment", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::error!("failed to save equipment: {e}");
                        if e != PortalError::Unauthorized {
                            notice::alert(&e.user_message(SAVE_FAILED));
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="container">
            <h2>{move || if edit_id().is_some() { "Edit Equipment" } else { "Add Equipment" }}</h2>
            <form on:submit=on_submit>
                <DraftInput label="Name" read=|d| &d.name write=|d| &mut d.name draft=draft/>
                <DraftInput label="Category" read=|d| &d.category write=|d| &mut d.category draft=draft/>
                <DraftInput label="Condition" read=|d| &d.condition write=|d| &mut d.condition draft=draft/>
                <div class="mb-3">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        placeholder="Enter equipment description (optional)"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <DraftInput
                    label="Total Quantity"
                    kind="number"
                    min="1"
                    read=|d| &d.total_quantity
                    write=|d| &mut d.total_quantity
                    draft=draft
                />
                <DraftInput
                    label="Available Quantity"
                    kind="number"
                    min="0"
                    read=|d| &d.available_quantity
                    write=|d| &mut d.available_quantity
                    draft=draft
                />
                <div class="form-check mb-3">
                    <input
                        id="availabilityCheck"
                        class="form-check-input"
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.availability.unwrap_or(false))
                        on:change=move |ev| draft.update(|d| d.availability = Some(event_target_checked(&ev)))
                    />
                    <label class="form-check-label" for="availabilityCheck">"Available"</label>
                </div>
                <button type="submit" class="btn btn-success" disabled=move || busy.get()>
                    {move || if edit_id().is_some() { "Update" } else { "Add" }}
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

/// Required text/number input bound to one draft field.
#[component]
fn DraftInput(
    label: &'static str,
    read: Reader,
    write: Writer,
    draft: RwSignal<EquipmentDraft>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                required
                min=min
                prop:value=move || draft.with(|d| read(d).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| *write(d) = value);
                }
            />
        </div>
    }
}
