//! Notification Area Component
//!
//! Fixed slot rendering the transient banner queue. Banners stack in
//! FIFO order and expire on the `notify` module's policy; the close
//! button dismisses early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotificationArea() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let queue = notifier.queue();

    view! {
        <div class="message-container">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.level.css_class()>
                            <span>{n.message.clone()}</span>
                            <button
                                class="notification-close"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
