use dioxus::prelude::*;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::app::QuoteRefresh;
use crate::domain::{
    best_per_transport, service_type, validity_label, AppState, QuoteSuggestion, RequestId, Role,
    SuggestionSlot,
};
use crate::infra::api::ApiClient;
use crate::ui::components::badges::TransportBadge;
use crate::ui::components::toast::{push_api_error, push_toast, ToastKind, ToastMessage};
use crate::ui::pages::comparator::parse_request_id;
use crate::ui::theme;
use crate::util::format;

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Idle,
    Loading,
    Ready(Vec<SuggestionSlot>),
}

#[component]
pub fn SuggestionsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let api = use_context::<ApiClient>();

    let mut request_input = use_signal(String::new);
    let mut request_id = use_signal(|| None::<RequestId>);
    let mut loaded = use_signal(|| Loaded::Idle);

    let role = state.with(|st| st.role());

    let _suggestions = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(id) = request_id() else {
                loaded.set(Loaded::Idle);
                return;
            };
            let Some(session) = state.peek().active_session().cloned() else {
                return;
            };

            loaded.set(Loaded::Loading);
            match api.advanced_suggestions(&session, id).await {
                Ok(suggestions) => {
                    info!(request = id, count = suggestions.len(), "suggestions loaded");
                    loaded.set(Loaded::Ready(best_per_transport(&suggestions)));
                }
                Err(err) => {
                    push_api_error(toasts, &err, "No se pudieron cargar las sugerencias");
                    loaded.set(Loaded::Ready(best_per_transport(&[])));
                }
            }
        }
    });

    let on_search = move |_| match parse_request_id(&request_input()) {
        Some(id) => request_id.set(Some(id)),
        None => push_toast(toasts, ToastKind::Warning, "Ingresa un ID de solicitud válido"),
    };

    let today = OffsetDateTime::now_utc().date();

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::panel_border(&role)} flex flex-wrap items-end gap-4 p-6",
                div { class: "flex-1",
                    h2 { class: "text-lg font-semibold text-slate-100", "♻️ Sugerencias de reutilización" }
                    p { class: "text-sm text-slate-400",
                        "Mejor cotización previa por tipo de transporte para una ruta similar"
                    }
                }
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "ID de solicitud" }
                    input {
                        class: "{theme::input_class(&role)}",
                        r#type: "number",
                        min: "1",
                        value: request_input(),
                        oninput: move |evt| request_input.set(evt.value()),
                    }
                }
                button { class: "{theme::btn_primary(&role)}", onclick: on_search, "Buscar" }
            }

            match loaded() {
                Loaded::Idle => rsx! {
                    p { class: "text-sm {theme::text_muted()}", "Selecciona una solicitud para ver sugerencias" }
                },
                Loaded::Loading => rsx! {
                    p { class: "text-sm {theme::text_muted()}", "Buscando sugerencias..." }
                },
                Loaded::Ready(slots) => rsx! {
                    div { class: "grid gap-4 md:grid-cols-3",
                        for slot in slots {
                            SuggestionCard {
                                key: "{slot.transport.code()}",
                                slot: slot.clone(),
                                request_id: request_id().unwrap_or_default(),
                                role: role.clone(),
                                today,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn SuggestionCard(
    slot: SuggestionSlot,
    request_id: RequestId,
    role: Role,
    today: Date,
) -> Element {
    let transport = slot.transport.clone();

    let Some(suggestion) = slot.suggestion else {
        return rsx! {
            div { class: "{theme::panel_border(&role)} space-y-3 p-6 text-center",
                TransportBadge { transport: Some(transport.clone()) }
                p { class: "text-sm {theme::text_muted()}", "Sin sugerencias para {transport.label()}" }
            }
        };
    };

    let validity = validity_label(suggestion.valido_hasta.as_deref(), today);
    let service = service_type(&suggestion, &transport);
    let score = suggestion
        .puntuacion
        .map(|p| format!("{p:.0}"))
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div { class: "{theme::panel_border(&role)} space-y-4 p-6",
            div { class: "flex items-center justify-between",
                TransportBadge { transport: Some(transport.clone()) }
                span { class: "text-xs {theme::text_muted()}", "Puntuación {score}" }
            }
            div {
                p { class: "font-semibold text-slate-100", "{format::text_or_na(suggestion.proveedor_nombre.as_deref())}" }
                p { class: "text-xs {theme::text_muted()}",
                    "{format::text_or_na(suggestion.origen.as_deref())} → {format::text_or_na(suggestion.destino.as_deref())}"
                }
            }
            dl { class: "grid grid-cols-2 gap-2 text-sm",
                dt { class: "{theme::label_class()}", "Servicio" }
                dd { "{service}" }
                dt { class: "{theme::label_class()}", "Costo" }
                dd { "{format::money_or_na(suggestion.costo)}" }
                dt { class: "{theme::label_class()}", "Margen" }
                dd { "{format::percent_or_na(suggestion.margen_ganancia_pct)}" }
                dt { class: "{theme::label_class()}", "Tiempo" }
                dd { "{format::text_or_na(suggestion.tiempo_estimado.as_deref())}" }
                dt { class: "{theme::label_class()}", "Vigencia" }
                dd { "{validity}" }
                dt { class: "{theme::label_class()}", "Crédito" }
                dd { "{format::days_or_na(suggestion.dias_credito)}" }
            }
            if let Some(reason) = suggestion.razon.as_deref().filter(|r| !r.trim().is_empty()) {
                p { class: "text-xs italic text-slate-400", "{reason}" }
            }
            if role.can_reuse_quotes() {
                ReuseForm { suggestion: suggestion.clone(), request_id, role: role.clone() }
            }
        }
    }
}

/// Copies a suggestion onto the current request, optionally with a fresh provider cost.
#[component]
fn ReuseForm(suggestion: QuoteSuggestion, request_id: RequestId, role: Role) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh = use_context::<QuoteRefresh>();
    let api = use_context::<ApiClient>();

    let mut new_cost = use_signal(String::new);
    let mut reusing = use_signal(|| false);

    let on_reuse = move |_| {
        let Some(session) = state.with(|st| st.active_session().cloned()) else {
            return;
        };
        let cost = match parse_new_cost(&new_cost()) {
            Ok(cost) => cost,
            Err(message) => {
                push_toast(toasts, ToastKind::Warning, message);
                return;
            }
        };

        reusing.set(true);
        let (api, id) = (api.clone(), suggestion.id);
        spawn(async move {
            match api.reuse_quote(&session, id, request_id, cost).await {
                Ok(created) => {
                    info!(source = id, created = created.id, request = request_id, "quote reused");
                    push_toast(toasts, ToastKind::Success, "Cotización reutilizada en la solicitud");
                    new_cost.set(String::new());
                    refresh.request();
                }
                Err(err) => push_api_error(toasts, &err, "No se pudo reutilizar la cotización"),
            }
            reusing.set(false);
        });
    };

    rsx! {
        div { class: "flex items-end gap-2 border-t border-slate-800 pt-4",
            label { class: "flex-1 space-y-1",
                span { class: "{theme::label_class()}", "Nuevo costo (opcional)" }
                input {
                    class: "{theme::input_class(&role)} w-full",
                    r#type: "number",
                    step: "0.01",
                    placeholder: "{format::money_or_na(suggestion.costo)}",
                    value: new_cost(),
                    oninput: move |evt| new_cost.set(evt.value()),
                }
            }
            button {
                class: "{theme::btn_primary(&role)}",
                disabled: reusing(),
                onclick: on_reuse,
                if reusing() { "Reutilizando..." } else { "Reutilizar" }
            }
        }
    }
}

fn parse_new_cost(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite() && *cost > 0.0)
        .map(Some)
        .ok_or("El nuevo costo debe ser mayor a 0")
}
