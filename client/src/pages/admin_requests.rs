//! Staff review of every borrow request.
//!
//! DESIGN
//! ======
//! The table is keyed on the status filter and a [`Revision`]; a successful
//! approve, reject or return bumps the revision so the list is re-fetched
//! rather than patched locally. Each row is disabled while its own mutation
//! is outstanding.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lending_portal::PortalError;
use lending_portal::gateway::requests;
use lending_portal::lifecycle::{self, ActionForm, InFlight, RequestAction, Revision};
use lending_portal::models::{BorrowRequest, RequestFilter, RequestStatus, format_iso_date};

use crate::components::action_modal::ActionModal;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::status_badge::StatusBadge;
use crate::net::api::use_api;
use crate::state::session::AppSession;
use crate::util::auth::install_login_redirect;
use crate::util::format::{display_date, or_dash};
use crate::util::{clock, notice};

#[component]
pub fn AdminRequestsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = use_api();
    install_login_redirect(session.clone(), use_navigate());

    let current = session.current;
    let is_admin = move || current.with(lending_portal::Session::is_admin);

    let status = RwSignal::new(None::<RequestStatus>);
    let revision = RwSignal::new(Revision::default());
    let in_flight = RwSignal::new(InFlight::default());
    let form = RwSignal::new(None::<ActionForm>);

    let list = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let filter = RequestFilter { status: status.get(), user_id: None };
            let admin = current.with(lending_portal::Session::is_admin);
            revision.track();
            async move {
                if !admin {
                    return Vec::new();
                }
                match requests::list(&api, filter).await {
                    Ok(list) => list,
                    Err(e) => {
                        leptos::logging::error!("failed to load requests: {e}");
                        if e != PortalError::Unauthorized {
                            notice::alert(lifecycle::LOAD_ERROR);
                        }
                        Vec::new()
                    }
                }
            }
        }
    });

    let busy = Signal::derive(move || {
        form.with(|f| f.as_ref().is_some_and(|f| in_flight.with(|set| set.is_busy(f.request_id))))
    });

    let on_open = Callback::new(move |(action, request): (RequestAction, BorrowRequest)| {
        form.set(Some(ActionForm::open(action, &request, clock::today())));
    });
    let on_cancel = Callback::new(move |()| form.set(None));

    let on_submit = Callback::new(move |()| {
        let Some(pending) = form.get_untracked() else {
            return;
        };
        let id = pending.request_id;
        let mut started = false;
        in_flight.update(|set| started = set.begin(id));
        if !started {
            return;
        }

        let api = api.clone();
        let approver = current.with_untracked(|s| s.user_id);
        leptos::task::spawn_local(async move {
            let action = pending.action;
            match pending.submit(&api, approver, clock::today()).await {
                Ok(()) => {
                    notice::alert(action.success_message());
                    form.set(None);
                    revision.update(|r| *r = r.next());
                }
                Err(PortalError::Unauthorized) => form.set(None),
                Err(e) => {
                    leptos::logging::warn!("{} failed for request {id}: {e}", action.label());
                    notice::alert(&e.user_message(action.failure_message()));
                }
            }
            in_flight.update(|set| set.finish(id));
        });
    });

    view! {
        <div class="container-fluid">
            <Show
                when=is_admin
                fallback=|| view! { <div class="alert alert-danger">{lifecycle::ACCESS_DENIED}</div> }
            >
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <h2>"Manage Borrow Requests"</h2>
                    <div class="d-flex align-items-center">
                        <label class="me-2">"Filter by Status:"</label>
                        <select
                            class="form-select"
                            style="width: auto"
                            prop:value=move || lifecycle::filter_value(status.get())
                            on:change=move |ev| status.set(RequestStatus::parse(&event_target_value(&ev)))
                        >
                            {lifecycle::STATUS_FILTERS
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=lifecycle::filter_value(option)>
                                            {lifecycle::filter_label(option)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        list.get()
                            .map(|list| view! { <StaffTable list=list in_flight=in_flight on_open=on_open/> })
                    }}
                </Suspense>

                <ActionModal
                    form=form
                    busy=busy
                    max_return_date=Signal::derive(|| format_iso_date(clock::today()))
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn StaffTable(
    list: Vec<BorrowRequest>,
    in_flight: RwSignal<InFlight>,
    on_open: Callback<(RequestAction, BorrowRequest)>,
) -> impl IntoView {
    if list.is_empty() {
        return view! { <div class="alert alert-info">{lifecycle::EMPTY_FILTER}</div> }.into_any();
    }

    let rows = list
        .into_iter()
        .map(|request| {
            let id = request.id;
            let actions = lifecycle::actions_for(request.status);
            let who = request
                .user_name
                .clone()
                .or_else(|| request.user_id.map(|uid| format!("User {uid}")));

            let buttons = if actions.is_empty() {
                view! { <span class="text-muted">{lifecycle::NO_ACTIONS}</span> }.into_any()
            } else {
                actions
                    .iter()
                    .map(|&action| {
                        let request = request.clone();
                        view! {
                            <button
                                class=format!("{} me-1", action.button_class())
                                disabled=move || in_flight.with(|set| set.is_busy(id))
                                on:click=move |_| on_open.run((action, request.clone()))
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            };

            view! {
                <tr>
                    <td>{id}</td>
                    <td>{or_dash(who.as_deref())}</td>
                    <td>{or_dash(request.equipment_name.as_deref())}</td>
                    <td>{request.quantity}</td>
                    <td>{display_date(Some(&request.from_date))}</td>
                    <td>{display_date(Some(&request.to_date))}</td>
                    <td><StatusBadge status=request.status/></td>
                    <td>{or_dash(request.reason.as_deref())}</td>
                    <td>{or_dash(request.remarks.as_deref())}</td>
                    <td>{buttons}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="table-responsive">
            <table class="table table-bordered table-striped table-hover">
                <thead class="table-dark">
                    <tr>
                        <th>"ID"</th>
                        <th>"User"</th>
                        <th>"Equipment"</th>
                        <th>"Qty"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        <th>"Status"</th>
                        <th>"Reason"</th>
                        <th>"Remarks"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
