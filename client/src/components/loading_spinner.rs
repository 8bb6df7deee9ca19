//! Centered loading spinner.

use leptos::prelude::*;

const DEFAULT_TEXT: &str = "Loading...";

/// Spinner with screen-reader text; custom text is also shown beside it.
#[component]
pub fn LoadingSpinner(#[prop(into, optional)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| DEFAULT_TEXT.to_owned());
    let visible = (text != DEFAULT_TEXT).then(|| text.clone());

    view! {
        <div class="d-flex justify-content-center align-items-center" style="min-height: 200px">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">{text}</span>
            </div>
            {visible.map(|text| view! { <span class="ms-2">{text}</span> })}
        </div>
    }
}
