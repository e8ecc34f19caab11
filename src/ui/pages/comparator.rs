use dioxus::prelude::*;

use crate::domain::{AppState, ComparativeQuote, RequestId};
use crate::ui::components::badges::{CompetitivenessBadge, TransportBadge};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::components::QuoteComparator;
use crate::ui::theme;
use crate::util::format;

#[component]
pub fn ComparatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut request_input = use_signal(String::new);
    let mut request_id = use_signal(|| None::<RequestId>);
    let mut selected = use_signal(|| None::<ComparativeQuote>);

    let role = state.with(|st| st.role());

    let on_load = move |_| match parse_request_id(&request_input()) {
        Some(id) => {
            selected.set(None);
            request_id.set(Some(id));
        }
        None => push_toast(toasts, ToastKind::Warning, "Ingresa un ID de solicitud válido"),
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::panel_border(&role)} flex flex-wrap items-end gap-4 p-6",
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
                button { class: "{theme::btn_primary(&role)}", onclick: on_load, "Comparar" }
                if request_id().is_some() {
                    button {
                        class: "{theme::btn_secondary()}",
                        onclick: move |_| {
                            request_id.set(None);
                            selected.set(None);
                        },
                        "Limpiar"
                    }
                }
            }

            QuoteComparator {
                request_id,
                on_select: move |quote: ComparativeQuote| {
                    let provider = format::text_or_na(quote.proveedor_nombre.as_deref());
                    push_toast(toasts, ToastKind::Info, format!("Seleccionaste la cotización de {provider}"));
                    selected.set(Some(quote));
                },
            }

            if let Some(quote) = selected() {
                section { class: "{theme::panel_border(&role)} space-y-3 p-6",
                    h2 { class: "text-lg font-semibold text-slate-100", "✅ Cotización seleccionada" }
                    div { class: "flex flex-wrap items-center gap-3",
                        span { class: "font-semibold", "{format::text_or_na(quote.proveedor_nombre.as_deref())}" }
                        TransportBadge { transport: quote.tipo_transporte.clone() }
                        CompetitivenessBadge { level: quote.nivel_competitividad.clone() }
                    }
                    dl { class: "grid gap-3 text-sm md:grid-cols-4",
                        div {
                            dt { class: "{theme::label_class()}", "Costo proveedor" }
                            dd { "{format::money_or_na(quote.costo_proveedor)}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Precio de venta" }
                            dd { "{format::money_or_na(quote.precio_venta)}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Margen" }
                            dd { "{format::percent_or_na(quote.margen_ganancia_pct)}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Días de crédito" }
                            dd { "{format::days_or_na(quote.dias_credito)}" }
                        }
                    }
                }
            }
        }
    }
}

/// Positive integer ids only; anything else leaves the comparator untouched.
pub(crate) fn parse_request_id(raw: &str) -> Option<RequestId> {
    raw.trim().parse::<RequestId>().ok().filter(|id| *id > 0)
}
