use dioxus::prelude::*;
use tracing::info;

use crate::app::QuoteRefresh;
use crate::domain::{
    filter_quotes, next_statuses, remove_record, replace_record, status_counters,
    transition_label, with_status, AppState, AppliedMargin, QuoteDraft, QuoteId, QuoteRecord,
    QuoteStatus, Role, StatusFilter,
};
use crate::infra::api::ApiClient;
use crate::ui::components::badges::{StatusBadge, TransportBadge};
use crate::ui::components::metric_card::MetricCard;
use crate::ui::components::toast::{push_api_error, push_toast, ToastKind, ToastMessage};
use crate::ui::components::MarginCalculator;
use crate::ui::theme;
use crate::util::format;

#[derive(Clone, Debug, PartialEq)]
enum RowAction {
    Transition(QuoteStatus),
    Edit,
    AskDelete,
    ConfirmDelete,
    CancelDelete,
}

#[component]
pub fn QuotesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh = use_context::<QuoteRefresh>();
    let api = use_context::<ApiClient>();

    let mut filter = use_signal(StatusFilter::default);
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| None::<QuoteId>);
    let mut confirming = use_signal(|| None::<QuoteId>);
    let busy = use_signal(|| None::<QuoteId>);

    let role = state.with(|st| st.role());
    let (records, loaded) = state.with(|st| (st.quotes.clone(), st.quotes_loaded));
    let counters = status_counters(&records);
    let visible: Vec<QuoteRecord> = filter_quotes(&records, &filter(), &search())
        .into_iter()
        .cloned()
        .collect();
    let edited = editing().and_then(|id| records.iter().find(|r| r.id == id).cloned());
    let current_filter = filter_key(&filter());

    let on_row_action = {
        let api = api.clone();
        move |(record, action): (QuoteRecord, RowAction)| match action {
            RowAction::Transition(to) => {
                change_status(state, toasts, busy, api.clone(), record, to);
            }
            RowAction::Edit => {
                confirming.set(None);
                editing.set(Some(record.id));
            }
            RowAction::AskDelete => confirming.set(Some(record.id)),
            RowAction::CancelDelete => confirming.set(None),
            RowAction::ConfirmDelete => {
                confirming.set(None);
                if editing() == Some(record.id) {
                    editing.set(None);
                }
                delete_quote(state, toasts, busy, api.clone(), record.id);
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "grid gap-4 md:grid-cols-4",
                MetricCard { title: "Total".to_string(), value: counters.total.to_string(), role: role.clone() }
                MetricCard { title: "Pendientes".to_string(), value: counters.pending.to_string(), highlight: Some("text-amber-300"), role: role.clone() }
                MetricCard { title: "Enviadas".to_string(), value: counters.sent.to_string(), highlight: Some("text-sky-300"), role: role.clone() }
                MetricCard { title: "Completadas".to_string(), value: counters.completed.to_string(), highlight: Some("text-emerald-300"), role: role.clone() }
            }

            section { class: "flex flex-wrap items-end gap-4",
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Estado" }
                    select {
                        class: "{theme::input_class(&role)}",
                        value: "{current_filter}",
                        onchange: move |evt| {
                            let key = evt.value();
                            if let Some(next) = StatusFilter::options().into_iter().find(|f| filter_key(f) == key) {
                                filter.set(next);
                            }
                        },
                        for choice in StatusFilter::options() {
                            option {
                                value: "{filter_key(&choice)}",
                                selected: filter_key(&choice) == current_filter,
                                "{choice.label()}"
                            }
                        }
                    }
                }
                label { class: "flex-1 space-y-1",
                    span { class: "{theme::label_class()}", "Buscar" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        placeholder: "Origen, destino, proveedor o folio",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: move |_| refresh.request(),
                    "🔄 Actualizar"
                }
            }

            if !loaded {
                p { class: "text-sm {theme::text_muted()}", "Cargando cotizaciones..." }
            } else if visible.is_empty() {
                div { class: "{theme::panel_border(&role)} p-8 text-center",
                    p { class: "text-slate-300", "No hay cotizaciones que coincidan con el filtro" }
                }
            } else {
                div { class: "{theme::table_container(&role)}",
                    table { class: "min-w-full text-sm",
                        thead { class: "{theme::table_header(&role)}",
                            tr {
                                th { class: "px-4 py-3 text-left", "Folio" }
                                th { class: "px-4 py-3 text-left", "Proveedor" }
                                th { class: "px-4 py-3 text-left", "Transporte" }
                                th { class: "px-4 py-3 text-left", "Ruta" }
                                th { class: "px-4 py-3 text-right", "Costo" }
                                th { class: "px-4 py-3 text-right", "Margen" }
                                th { class: "px-4 py-3 text-left", "Válido hasta" }
                                th { class: "px-4 py-3 text-left", "Estado" }
                                th { class: "px-4 py-3 text-right", "Acciones" }
                            }
                        }
                        tbody { class: "{theme::table_divider()}",
                            for record in visible {
                                QuoteRow {
                                    key: "{record.id}",
                                    busy: busy() == Some(record.id),
                                    confirming: confirming() == Some(record.id),
                                    role: role.clone(),
                                    record: record.clone(),
                                    on_action: on_row_action.clone(),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(record) = edited {
                if role.can_edit_quotes() {
                    QuoteEditor {
                        key: "{record.id}",
                        record: record.clone(),
                        on_close: move |_| editing.set(None),
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteRow(
    record: QuoteRecord,
    role: Role,
    busy: bool,
    confirming: bool,
    on_action: EventHandler<(QuoteRecord, RowAction)>,
) -> Element {
    let folio = format::text_or_na(record.request_folio());
    let provider = format::text_or_na(record.provider_name());
    let transitions: Vec<QuoteStatus> = if role.can_change_status() {
        next_statuses(&record.estado).to_vec()
    } else {
        Vec::new()
    };

    let emit = {
        let record = record.clone();
        move |action: RowAction| on_action.call((record.clone(), action))
    };
    let emit_edit = emit.clone();
    let emit_ask = emit.clone();
    let emit_confirm = emit.clone();
    let emit_cancel = emit.clone();

    rsx! {
        tr { class: "hover:bg-slate-900/60",
            td { class: "px-4 py-3 font-mono text-xs", "{folio}" }
            td { class: "px-4 py-3", "{provider}" }
            td { class: "px-4 py-3", TransportBadge { transport: record.tipo_transporte.clone() } }
            td { class: "px-4 py-3", "{record.origen} → {record.destino}" }
            td { class: "px-4 py-3 text-right", "{format::money_or_na(record.costo)}" }
            td { class: "px-4 py-3 text-right", "{format::percent_or_na(record.margen_ganancia_pct)}" }
            td { class: "px-4 py-3", "{format::date_or_na(record.valido_hasta.as_deref())}" }
            td { class: "px-4 py-3", StatusBadge { status: record.estado.clone() } }
            td { class: "px-4 py-3",
                div { class: "flex justify-end gap-2",
                    if confirming {
                        span { class: "self-center text-xs text-rose-300", "¿Eliminar?" }
                        button { class: "{theme::btn_danger()}", disabled: busy, onclick: move |_| emit_confirm(RowAction::ConfirmDelete), "Sí" }
                        button { class: "{theme::btn_secondary()}", onclick: move |_| emit_cancel(RowAction::CancelDelete), "No" }
                    } else {
                        for to in transitions {
                            button {
                                class: "{theme::btn_small_inactive(&role)}",
                                disabled: busy,
                                onclick: {
                                    let emit = emit.clone();
                                    let to = to.clone();
                                    move |_| emit(RowAction::Transition(to.clone()))
                                },
                                "{transition_label(&to)}"
                            }
                        }
                        if role.can_edit_quotes() {
                            button { class: "{theme::btn_small_inactive(&role)}", disabled: busy, onclick: move |_| emit_edit(RowAction::Edit), "Editar" }
                        }
                        if role.can_delete_quotes() {
                            button { class: "{theme::btn_danger()}", disabled: busy, onclick: move |_| emit_ask(RowAction::AskDelete), "Eliminar" }
                        }
                    }
                }
            }
        }
    }
}

/// Cost and margin editor for one quote, with the margin calculator alongside.
#[component]
fn QuoteEditor(record: QuoteRecord, on_close: EventHandler<()>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let api = use_context::<ApiClient>();

    let mut draft = use_signal(|| QuoteDraft::from_record(&record));
    let mut saving = use_signal(|| false);

    let role = state.with(|st| st.role());
    let title = format!(
        "✏️ Editar cotización {}",
        record.request_folio().unwrap_or("sin folio")
    );

    let on_save = {
        let record = record.clone();
        move |_| {
            let Some(session) = state.with(|st| st.active_session().cloned()) else {
                return;
            };
            let payload = match draft.with(|d| d.to_record(&record)) {
                Ok(payload) => payload,
                Err(err) => {
                    push_toast(toasts, ToastKind::Warning, err.to_string());
                    return;
                }
            };

            saving.set(true);
            let api = api.clone();
            spawn(async move {
                match api.update_quote(&session, &payload).await {
                    Ok(saved) => {
                        info!(id = saved.id, "quote updated");
                        state.with_mut(|st| replace_record(&mut st.quotes, saved));
                        push_toast(toasts, ToastKind::Success, "Cotización actualizada");
                        on_close.call(());
                    }
                    Err(err) => push_api_error(toasts, &err, "No se pudo guardar la cotización"),
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        section { class: "{theme::panel_border(&role)} space-y-6 p-6",
            header { class: "flex items-center justify-between",
                h2 { class: "text-lg font-semibold text-slate-100", "{title}" }
                button { class: "{theme::btn_secondary()}", onclick: move |_| on_close.call(()), "Cerrar" }
            }

            div { class: "grid gap-4 md:grid-cols-2",
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Costo (USD)" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "number",
                        step: "0.01",
                        value: "{draft().cost}",
                        oninput: move |evt| draft.with_mut(|d| d.cost = evt.value()),
                    }
                }
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Margen de ganancia (%)" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "number",
                        step: "0.01",
                        value: "{draft().margin_pct}",
                        oninput: move |evt| draft.with_mut(|d| d.margin_pct = evt.value()),
                    }
                }
            }

            div { class: "flex justify-end",
                button {
                    class: "{theme::btn_primary(&role)}",
                    disabled: saving(),
                    onclick: on_save,
                    if saving() { "Guardando..." } else { "Guardar cambios" }
                }
            }

            MarginCalculator {
                request_id: record.request_id(),
                on_apply: move |applied: AppliedMargin| draft.with_mut(|d| d.apply(applied)),
            }
        }
    }
}

fn filter_key(filter: &StatusFilter) -> String {
    match filter {
        StatusFilter::All => "all".to_string(),
        StatusFilter::Only(status) => status.code().to_string(),
    }
}

/// Sends the record with its new status and updates the row once the backend accepts it.
fn change_status(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut busy: Signal<Option<QuoteId>>,
    api: ApiClient,
    record: QuoteRecord,
    to: QuoteStatus,
) {
    let Some(session) = state.peek().active_session().cloned() else {
        return;
    };
    let payload = match with_status(&record, to) {
        Ok(payload) => payload,
        Err(err) => {
            push_toast(toasts, ToastKind::Warning, err.to_string());
            return;
        }
    };

    busy.set(Some(record.id));
    spawn(async move {
        match api.update_quote(&session, &payload).await {
            Ok(saved) => {
                info!(id = saved.id, status = %saved.estado, "quote status changed");
                let label = saved.estado.plural_label().to_string();
                state.with_mut(|st| replace_record(&mut st.quotes, saved));
                push_toast(toasts, ToastKind::Success, format!("Estado actualizado: {label}"));
            }
            Err(err) => push_api_error(toasts, &err, "No se pudo cambiar el estado."),
        }
        busy.set(None);
    });
}

fn delete_quote(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut busy: Signal<Option<QuoteId>>,
    api: ApiClient,
    id: QuoteId,
) {
    let Some(session) = state.peek().active_session().cloned() else {
        return;
    };

    busy.set(Some(id));
    spawn(async move {
        match api.delete_quote(&session, id).await {
            Ok(()) => {
                info!(id, "quote deleted");
                state.with_mut(|st| remove_record(&mut st.quotes, id));
                push_toast(toasts, ToastKind::Success, "Cotización eliminada");
            }
            Err(err) => push_api_error(toasts, &err, "No se pudo eliminar la cotización."),
        }
        busy.set(None);
    });
}
