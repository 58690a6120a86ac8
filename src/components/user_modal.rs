//! User Modal Component
//!
//! One shared overlay for the user view with three populated modes:
//! read-only details, role editing, and delete confirmation. The mode
//! enum carries the target user, so each open fully repopulates the
//! content and there is no handler wiring left over from a previous
//! open.

use leptos::prelude::*;

use crate::models::{format_date, Role, User};

/// Modal view modes. `Hidden` renders nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Details(User),
    EditRole(User),
    ConfirmDelete(User),
}

#[component]
pub fn UserModal(
    state: RwSignal<ModalState>,
    #[prop(into)] on_confirm_delete: Callback<()>,
    #[prop(into)] on_save_role: Callback<Role>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || state.get() != ModalState::Hidden>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal user-modal"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {move || match state.get() {
                        ModalState::Hidden => ().into_any(),
                        ModalState::Details(user) => details_view(user, on_cancel).into_any(),
                        ModalState::EditRole(user) => {
                            edit_role_view(user, on_save_role, on_cancel).into_any()
                        }
                        ModalState::ConfirmDelete(user) => {
                            confirm_delete_view(user, on_confirm_delete, on_cancel).into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

fn details_view(user: User, on_cancel: Callback<()>) -> impl IntoView {
    let email = user.email.clone().unwrap_or_else(|| "No especificado".to_string());
    let created = format_date(user.created_at.as_deref());
    view! {
        <h3 class="modal-title">"Detalles de Usuario"</h3>
        <div class="user-details">
            <div class="detail-item">
                <strong>"ID: "</strong>
                {user.id}
            </div>
            <div class="detail-item">
                <strong>"Usuario: "</strong>
                {user.username.clone()}
            </div>
            <div class="detail-item">
                <strong>"Email: "</strong>
                {email}
            </div>
            <div class="detail-item">
                <strong>"Rol: "</strong>
                <span class=format!("role-badge {}", user.role.css_class())>
                    {user.role.label()}
                </span>
            </div>
            <div class="detail-item">
                <strong>"Creado: "</strong>
                {created}
            </div>
        </div>
        <div class="modal-actions">
            <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                "Cerrar"
            </button>
        </div>
    }
}

fn edit_role_view(
    user: User,
    on_save_role: Callback<Role>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (selected, set_selected) = signal(user.role);
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save_role.run(selected.get());
    };
    view! {
        <h3 class="modal-title">"Editar Usuario"</h3>
        <form class="edit-user-form" on:submit=on_submit>
            <div class="form-field">
                <label>"Usuario"</label>
                <input type="text" prop:value=user.username.clone() disabled=true />
            </div>
            <div class="form-field">
                <label>"Rol"</label>
                <select
                    prop:value=move || selected.get().key()
                    on:change=move |ev| {
                        if let Some(role) = Role::parse_key(&event_target_value(&ev)) {
                            set_selected.set(role);
                        }
                    }
                >
                    <option value="user">"Usuario"</option>
                    <option value="admin">"Administrador"</option>
                </select>
            </div>
            <div class="modal-actions">
                <button type="submit" class="btn btn-primary">"Guardar"</button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </button>
            </div>
        </form>
    }
}

fn confirm_delete_view(
    user: User,
    on_confirm_delete: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <h3 class="modal-title">"Confirmar Eliminación"</h3>
        <p class="modal-message">
            "¿Estás seguro de que quieres eliminar al usuario "
            <strong>{user.username.clone()}</strong>
            "?"
        </p>
        <p class="modal-note"><small>"Esta acción no se puede deshacer."</small></p>
        <div class="modal-actions">
            <button class="btn btn-danger" on:click=move |_| on_confirm_delete.run(())>
                "Eliminar"
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                "Cancelar"
            </button>
        </div>
    }
}
