//! Status Banner Component
//!
//! Shows a failure message under the controls when there is one.

use leptos::prelude::*;

#[component]
pub fn StatusBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="status error" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
