//! Modal Component
//!
//! Overlay shell shared by the add and edit modals. Always mounted;
//! `is_open` only switches the `open` class.

use leptos::prelude::*;

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    /// Flip the visibility flag (overlay click, close button)
    #[prop(into)] set_is_open: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || if is_open.get() { "modal-overlay open" } else { "modal-overlay" }
            on:click=move |_| set_is_open.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button type="button" class="modal-close" on:click=move |_| set_is_open.run(())>
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
