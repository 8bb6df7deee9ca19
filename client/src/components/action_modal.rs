//! Dialog collecting the inputs for approve / reject / return.

use leptos::prelude::*;
use lending_portal::lifecycle::{ActionForm, RequestAction};

/// Modal over the staff request table. Renders nothing while `form` is
/// `None`; edits write straight back into `form`.
#[component]
pub fn ActionModal(
    form: RwSignal<Option<ActionForm>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] max_return_date: Signal<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let action = move || form.with(|f| f.as_ref().map(|f| f.action));
    let is_return = move || action() == Some(RequestAction::Return);
    let is_reject = move || action() == Some(RequestAction::Reject);

    let edit = move |apply: fn(&mut ActionForm, String), value: String| {
        form.update(|f| {
            if let Some(f) = f.as_mut() {
                apply(f, value);
            }
        });
    };

    view! {
        <Show when=move || action().is_some()>
            <div
                class="modal show d-block"
                style="background-color: rgba(0,0,0,0.5)"
                on:click=move |_| on_cancel.run(())
            >
                <div class="modal-dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || action().map(RequestAction::title)}</h5>
                            <button type="button" class="btn-close" on:click=move |_| on_cancel.run(())></button>
                        </div>
                        <div class="modal-body">
                            <Show when=is_return>
                                <div class="mb-3">
                                    <label class="form-label">"Return Date *"</label>
                                    <input
                                        type="date"
                                        class="form-control"
                                        required
                                        max=move || max_return_date.get()
                                        prop:value=move || {
                                            form.with(|f| f.as_ref().map(|f| f.return_date.clone()).unwrap_or_default())
                                        }
                                        on:input=move |ev| edit(|f, v| f.return_date = v, event_target_value(&ev))
                                    />
                                </div>
                                <div class="mb-3">
                                    <label class="form-label">"Condition After Use"</label>
                                    <textarea
                                        class="form-control"
                                        rows="3"
                                        placeholder="Describe the condition of the equipment after use"
                                        prop:value=move || {
                                            form.with(|f| {
                                                f.as_ref().map(|f| f.condition_after_use.clone()).unwrap_or_default()
                                            })
                                        }
                                        on:input=move |ev| edit(|f, v| f.condition_after_use = v, event_target_value(&ev))
                                    ></textarea>
                                </div>
                            </Show>
                            <Show when=move || action().is_some_and(RequestAction::takes_remarks)>
                                <div class="mb-3">
                                    <label class="form-label">
                                        {move || if is_reject() { "Reason for Rejection" } else { "Remarks" }}
                                    </label>
                                    <textarea
                                        class="form-control"
                                        rows="3"
                                        placeholder=move || {
                                            if is_reject() { "Enter reason for rejection" } else { "Enter any remarks" }
                                        }
                                        prop:value=move || {
                                            form.with(|f| f.as_ref().map(|f| f.remarks.clone()).unwrap_or_default())
                                        }
                                        on:input=move |ev| edit(|f, v| f.remarks = v, event_target_value(&ev))
                                    ></textarea>
                                </div>
                            </Show>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class=move || {
                                    action().map_or("btn btn-primary", |a| a.button_class()).replace("btn-sm ", "")
                                }
                                disabled=move || busy.get()
                                on:click=move |_| on_submit.run(())
                            >
                                {move || {
                                    if busy.get() {
                                        "Processing...".to_owned()
                                    } else {
                                        action().map(RequestAction::label).unwrap_or_default().to_owned()
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
