//! Users View Component
//!
//! Admin table over `ListState<User>`: stats cards computed from the
//! fetched page, debounced search plus role filter (both purely
//! client-side), pagination, and the shared modal for details, role
//! editing, and delete confirmation. All mutations flow through the
//! single pending-action slot and trigger a full reload on success.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::context::use_app_context;
use crate::list::{check_delete_allowed, check_role_change, ActionError, ListState};
use crate::models::{format_date, Role, User, UserStats};

use super::user_modal::{ModalState, UserModal};

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Mutations that pass through the confirmation slot.
#[derive(Debug, Clone, PartialEq)]
enum UserAction {
    Delete(User),
    UpdateRole { user: User, new_role: Role },
}

#[component]
pub fn UsersView() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let api = StoredValue::new(ctx.api.clone());
    let session_id = ctx.session.id;
    let page_size = ctx.config.page_size;

    let list = RwSignal::new(ListState::<User, UserAction>::new(page_size));
    let (loading, set_loading) = signal(false);
    let modal = RwSignal::new(ModalState::Hidden);
    let (search_input, set_search_input) = signal(String::new());
    let debounce_gen = StoredValue::new(0u32);

    // Full reload of the current page. Responses from superseded loads
    // are discarded by the list's token check.
    let load = move || {
        let api = api.get_value();
        let token = list.try_update(|l| l.begin_load()).unwrap_or_default();
        let skip = list.with_untracked(|l| l.skip());
        let limit = list.with_untracked(|l| l.page_size());
        set_loading.set(true);
        spawn_local(async move {
            match api.list_users(skip, limit).await {
                Ok(users) => {
                    let count = users.len();
                    let applied = list
                        .try_update(|l| l.apply_load(token, users, None))
                        .unwrap_or(false);
                    if applied {
                        console::log_1(&format!("[users] loaded {count} users").into());
                    }
                }
                Err(e) => {
                    console::error_1(&format!("[users] load failed: {e}").into());
                    notifier.error(format!("Error al cargar usuarios: {e}"));
                }
            }
            if list.with_untracked(|l| l.is_current(token)) {
                set_loading.set(false);
            }
        });
    };

    Effect::new(move |_| load());

    let stats = Memo::new(move |_| list.with(|l| UserStats::from_page(l.items())));

    let on_search = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        let generation = debounce_gen.get_value() + 1;
        debounce_gen.set_value(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Only the newest keystroke applies the filter.
            if debounce_gen.get_value() == generation {
                list.update(|l| {
                    let mut filter = l.filter().clone();
                    filter.search = value;
                    l.set_filter(filter);
                });
            }
        });
    };

    let on_role_filter = move |ev: web_sys::Event| {
        let role = Role::parse_key(&event_target_value(&ev));
        list.update(|l| {
            let mut filter = l.filter().clone();
            filter.role = role;
            l.set_filter(filter);
        });
    };

    let open_details = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.get_user(id).await {
                Ok(user) => {
                    list.update(|l| l.select(Some(user.id)));
                    modal.set(ModalState::Details(user));
                }
                Err(e) => {
                    console::error_1(&format!("[users] fetch user {id} failed: {e}").into());
                    notifier.error(e.to_string());
                }
            }
        });
    };

    let open_edit = move |id: u32| {
        let api = api.get_value();
        spawn_local(async move {
            match api.get_user(id).await {
                Ok(user) => {
                    list.update(|l| l.select(Some(user.id)));
                    modal.set(ModalState::EditRole(user));
                }
                Err(e) => {
                    console::error_1(&format!("[users] fetch user {id} failed: {e}").into());
                    notifier.error(format!("Error al cargar datos del usuario: {e}"));
                }
            }
        });
    };

    let request_delete = move |id: u32| {
        let Some(user) = list.with_untracked(|l| l.find(id).cloned()) else {
            return;
        };
        if let Err(e) = check_delete_allowed(&user, session_id) {
            notifier.error(e.to_string());
            return;
        }
        let queued = list
            .try_update(|l| l.request_action(UserAction::Delete(user.clone())))
            .unwrap_or(Err(ActionError::Busy));
        match queued {
            Ok(()) => {
                list.update(|l| l.select(Some(user.id)));
                modal.set(ModalState::ConfirmDelete(user));
            }
            Err(e) => notifier.error(e.to_string()),
        }
    };

    let close_modal = move || {
        modal.set(ModalState::Hidden);
        list.update(|l| {
            l.cancel_action();
            l.select(None);
        });
    };

    let confirm_delete = move |_: ()| {
        let begun = list
            .try_update(|l| l.begin_execute())
            .unwrap_or(Err(ActionError::NothingPending));
        let action = match begun {
            Ok(action) => action,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        let UserAction::Delete(user) = action else {
            list.update(|l| l.finish_action());
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_user(user.id).await;
            list.update(|l| l.finish_action());
            match result {
                Ok(()) => {
                    notifier.success("Usuario eliminado correctamente");
                    modal.set(ModalState::Hidden);
                    list.update(|l| l.select(None));
                    // Resynchronize any server-side cascades we don't model.
                    load();
                }
                Err(e) => {
                    console::error_1(&format!("[users] delete {} failed: {e}", user.id).into());
                    notifier.error(format!("Error al eliminar usuario: {e}"));
                    modal.set(ModalState::Hidden);
                    list.update(|l| l.select(None));
                }
            }
        });
    };

    let save_role = move |new_role: Role| {
        let ModalState::EditRole(user) = modal.get_untracked() else {
            return;
        };
        if let Err(e) = check_role_change(&user, new_role) {
            notifier.error(e.to_string());
            return;
        }
        let begun = list
            .try_update(|l| {
                l.request_action(UserAction::UpdateRole { user: user.clone(), new_role })
                    .and_then(|_| l.begin_execute().map(|_| ()))
            })
            .unwrap_or(Err(ActionError::Busy));
        if let Err(e) = begun {
            notifier.error(e.to_string());
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            let result = api.update_role(user.id, new_role).await;
            list.update(|l| l.finish_action());
            match result {
                Ok(updated) => {
                    notifier.success(format!(
                        "Rol de usuario {} actualizado a {}",
                        updated.username,
                        updated.role.label()
                    ));
                    modal.set(ModalState::Hidden);
                    list.update(|l| l.select(None));
                    load();
                }
                // The modal stays open so the input can be corrected;
                // validation details are surfaced verbatim.
                Err(e) => {
                    console::error_1(
                        &format!("[users] role update {} failed: {e}", user.id).into(),
                    );
                    notifier.error(e.to_string());
                }
            }
        });
    };

    let prev_page = move |_| {
        if list.try_update(|l| l.prev_page()).unwrap_or(false) {
            load();
        }
    };
    let next_page = move |_| {
        if list.try_update(|l| l.next_page()).unwrap_or(false) {
            load();
        }
    };

    let visible = move || list.with(|l| l.visible());
    let empty = move || !loading.get() && visible().is_empty();

    view! {
        <section class="panel users-view">
            <h2>"Gestión de Usuarios"</h2>

            <div class="stats-cards">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().admins}</span>
                    <span class="stat-label">"Administradores"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().users}</span>
                    <span class="stat-label">"Usuarios"</span>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="user-search"
                    placeholder="Buscar por usuario o email..."
                    prop:value=move || search_input.get()
                    on:input=on_search
                />
                <select class="role-filter" on:change=on_role_filter>
                    <option value="">"Todos los roles"</option>
                    <option value="admin">"Administrador"</option>
                    <option value="user">"Usuario"</option>
                </select>
                <button class="btn" on:click=move |_| load()>"Actualizar"</button>
            </div>

            <table class="users-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Usuario"</th>
                        <th>"Email"</th>
                        <th>"Rol"</th>
                        <th>"Creado"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || loading.get()>
                        <tr>
                            <td colspan="6" class="loading-message">"Cargando usuarios..."</td>
                        </tr>
                    </Show>
                    <Show when=empty>
                        <tr>
                            <td colspan="6" class="empty-message">"No se encontraron usuarios"</td>
                        </tr>
                    </Show>
                    <For
                        each=visible
                        key=|user| user.id
                        children=move |user: User| {
                            let id = user.id;
                            let email = user
                                .email
                                .clone()
                                .unwrap_or_else(|| "No especificado".to_string());
                            let created = format_date(user.created_at.as_deref());
                            let protected = user.is_protected();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td><strong>{user.username.clone()}</strong></td>
                                    <td>{email}</td>
                                    <td>
                                        <span class=format!("role-badge {}", user.role.css_class())>
                                            {user.role.label()}
                                        </span>
                                    </td>
                                    <td>{created}</td>
                                    <td class="actions-cell">
                                        <button
                                            class="btn-action btn-view"
                                            title="Ver detalles"
                                            on:click=move |_| open_details(id)
                                        >
                                            "Ver"
                                        </button>
                                        <button
                                            class="btn-action btn-edit"
                                            title="Editar usuario"
                                            on:click=move |_| open_edit(id)
                                        >
                                            "Editar"
                                        </button>
                                        <button
                                            class="btn-action btn-delete"
                                            title="Eliminar usuario"
                                            disabled=protected
                                            on:click=move |_| request_delete(id)
                                        >
                                            "Eliminar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="pagination">
                <button
                    class="btn"
                    disabled=move || !list.with(|l| l.has_prev())
                    on:click=prev_page
                >
                    "Anterior"
                </button>
                <span class="page-info">
                    {move || format!("Página {}", list.with(|l| l.page()))}
                </span>
                <button
                    class="btn"
                    disabled=move || !list.with(|l| l.has_next())
                    on:click=next_page
                >
                    "Siguiente"
                </button>
            </div>

            <UserModal
                state=modal
                on_confirm_delete=confirm_delete
                on_save_role=save_role
                on_cancel=move |_: ()| close_modal()
            />
        </section>
    }
}
