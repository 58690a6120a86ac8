//! Vulnerabilities View Component
//!
//! Single-fetch table view over the stats endpoint: summary cards,
//! a pending table sorted most-severe-first, and a resolved table
//! sorted newest-first. The "resolver" flow goes through the shared
//! confirm dialog and the single pending-action slot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::context::use_app_context;
use crate::list::{ActionError, ActionState, ListState};
use crate::models::{
    format_date, pending_sorted, resolved_sorted, VulnStats, Vulnerability,
};

use super::confirm_dialog::ConfirmDialog;

#[derive(Debug, Clone, PartialEq)]
enum VulnAction {
    Resolve(Vulnerability),
}

#[component]
pub fn VulnsView() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let api = StoredValue::new(ctx.api.clone());
    let fetch_limit = ctx.config.vuln_fetch_limit;

    let list = RwSignal::new(ListState::<Vulnerability, VulnAction>::new(fetch_limit));
    let (loading, set_loading) = signal(false);

    let load = move || {
        let api = api.get_value();
        let token = list.try_update(|l| l.begin_load()).unwrap_or_default();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_vulnerabilities(1, fetch_limit).await {
                Ok(page) => {
                    let count = page.vulnerabilities.len();
                    let applied = list
                        .try_update(|l| l.apply_load(token, page.vulnerabilities, page.total))
                        .unwrap_or(false);
                    if applied {
                        console::log_1(
                            &format!("[vulns] loaded {count} vulnerabilities").into(),
                        );
                        notifier.success("Vulnerabilidades cargadas correctamente");
                    }
                }
                Err(e) => {
                    console::error_1(&format!("[vulns] load failed: {e}").into());
                    notifier.error(format!("Error al cargar vulnerabilidades: {e}"));
                }
            }
            if list.with_untracked(|l| l.is_current(token)) {
                set_loading.set(false);
            }
        });
    };

    Effect::new(move |_| load());

    let stats = Memo::new(move |_| list.with(|l| VulnStats::from_page(l.items(), l.total())));
    let pending = Memo::new(move |_| list.with(|l| pending_sorted(l.items())));
    let resolved = Memo::new(move |_| list.with(|l| resolved_sorted(l.items())));

    let request_resolve = move |id: u32| {
        let Some(vuln) = list.with_untracked(|l| l.find(id).cloned()) else {
            return;
        };
        let queued = list
            .try_update(|l| l.request_action(VulnAction::Resolve(vuln.clone())))
            .unwrap_or(Err(ActionError::Busy));
        match queued {
            Ok(()) => list.update(|l| l.select(Some(vuln.id))),
            Err(e) => notifier.error(e.to_string()),
        }
    };

    let confirm_message = Memo::new(move |_| {
        list.with(|l| match l.action() {
            ActionState::Pending(VulnAction::Resolve(vuln)) => Some(format!(
                "¿Seguro que se ha resuelto la vulnerabilidad {}?",
                vuln.name
            )),
            _ => None,
        })
    });

    let on_confirm = move |_: ()| {
        match list
            .try_update(|l| l.begin_execute())
            .unwrap_or(Err(ActionError::NothingPending))
        {
            Ok(VulnAction::Resolve(_)) => {
                // The stats backend exposes no resolve endpoint yet.
                notifier.warning("La operación de resolución no está disponible en el backend");
                list.update(|l| {
                    l.finish_action();
                    l.select(None);
                });
            }
            Err(e) => notifier.error(e.to_string()),
        }
    };

    let on_cancel = move |_: ()| {
        list.update(|l| {
            l.cancel_action();
            l.select(None);
        });
    };

    view! {
        <section class="panel vulns-view">
            <h2>"Vulnerabilidades"</h2>

            <div class="stats-cards">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().active}</span>
                    <span class="stat-label">"Pendientes"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().resolved}</span>
                    <span class="stat-label">"Resueltas"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().critical}</span>
                    <span class="stat-label">"Críticas"</span>
                </div>
            </div>

            <Show when=move || loading.get()>
                <p class="loading-message">"Cargando vulnerabilidades..."</p>
            </Show>

            <h3>"Pendientes"</h3>
            <table class="vulns-table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Descripción"</th>
                        <th>"Severidad"</th>
                        <th>"Creada"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !loading.get() && pending.get().is_empty()>
                        <tr>
                            <td colspan="5" class="empty-message">
                                "¡No hay vulnerabilidades pendientes!"
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || pending.get()
                        key=|v| v.id
                        children=move |vuln: Vulnerability| {
                            let id = vuln.id;
                            let created = format_date(vuln.created_at.as_deref());
                            view! {
                                <tr>
                                    <td><strong>{vuln.name.clone()}</strong></td>
                                    <td>{vuln.short_description()}</td>
                                    <td>
                                        <span class=format!(
                                            "severity-badge {}",
                                            vuln.severity.css_class()
                                        )>
                                            {vuln.severity.label()}
                                        </span>
                                    </td>
                                    <td>{created}</td>
                                    <td>
                                        <button
                                            class="btn-resolve"
                                            on:click=move |_| request_resolve(id)
                                        >
                                            "Resolver"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <h3>"Resueltas"</h3>
            <table class="vulns-table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Descripción"</th>
                        <th>"Severidad"</th>
                        <th>"Creada"</th>
                        <th>"Resuelta"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !loading.get() && resolved.get().is_empty()>
                        <tr>
                            <td colspan="5" class="empty-message">
                                "No hay vulnerabilidades resueltas todavía"
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || resolved.get()
                        key=|v| v.id
                        children=move |vuln: Vulnerability| {
                            let created = format_date(vuln.created_at.as_deref());
                            let resolved_on = format_date(vuln.resolved_date.as_deref());
                            view! {
                                <tr>
                                    <td><strong>{vuln.name.clone()}</strong></td>
                                    <td>{vuln.short_description()}</td>
                                    <td>
                                        <span class=format!(
                                            "severity-badge {}",
                                            vuln.severity.css_class()
                                        )>
                                            {vuln.severity.label()}
                                        </span>
                                    </td>
                                    <td>{created}</td>
                                    <td><strong class="resolved-date">{resolved_on}</strong></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <ConfirmDialog
                message=confirm_message
                confirm_label="Resolver"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}
