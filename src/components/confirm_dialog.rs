//! Confirm Dialog Component
//!
//! Shared yes/no overlay. Visible whenever `message` is `Some`; the
//! caller owns the pending-action state and repopulates the message on
//! each open. Clicking the backdrop cancels.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <p class="modal-message">{move || message.get().unwrap_or_default()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
