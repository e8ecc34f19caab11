use dioxus::prelude::*;
use tracing::debug;

use crate::domain::{
    AppState, ComparativeQuote, ComparatorState, ComparisonSummary, LoadOutcome, QuoteSort,
    RequestId, Role, ViewMode,
};
use crate::infra::api::ApiClient;
use crate::ui::components::badges::{
    CompetitivenessBadge, MetricValue, RankingBadge, TransportBadge, ValidityBadge,
};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format;

const LOAD_FAILED: &str = "No se pudo cargar la comparación de cotizaciones";

/// Side-by-side comparison of every quote received for one request.
///
/// Reloads whenever `request_id` changes. A response that arrives after a newer load started is
/// dropped, so the list always belongs to the request currently shown.
#[component]
pub fn QuoteComparator(
    request_id: Signal<Option<RequestId>>,
    on_select: Option<EventHandler<ComparativeQuote>>,
) -> Element {
    let state = use_context::<Signal<AppState>>();
    let api = use_context::<ApiClient>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut comparator = use_signal(ComparatorState::default);

    let _load = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(id) = request_id() else {
                comparator.with_mut(|cmp| cmp.reset());
                return;
            };
            let Some(session) = state.peek().active_session().cloned() else {
                return;
            };

            let ticket = comparator.with_mut(|cmp| cmp.begin_load(id));
            let result = api
                .compare_quotes(&session, id)
                .await
                .map_err(|err| err.user_message(LOAD_FAILED));

            match comparator.with_mut(|cmp| cmp.finish_load(ticket, result)) {
                LoadOutcome::Loaded(count) => debug!(request_id = id, count, "comparison loaded"),
                LoadOutcome::Failed(message) => push_toast(toasts, ToastKind::Error, message),
                LoadOutcome::Discarded => {
                    debug!(request_id = ticket.request_id(), "dropped stale comparison")
                }
            }
        }
    });

    let role = state.with(|st| st.role());
    let snapshot = comparator();

    if snapshot.loading {
        return rsx! {
            div { class: "{theme::panel_border(&role)} p-6 text-sm text-slate-400", "Cargando comparación..." }
        };
    }

    if snapshot.request_id.is_none() {
        return rsx! {
            div { class: "{theme::panel_border(&role)} p-6 text-sm text-slate-400",
                "Selecciona una solicitud para comparar sus cotizaciones."
            }
        };
    }

    let summary = match snapshot.summary() {
        Some(summary) if !snapshot.is_empty() => summary,
        _ => return rsx! {
            div { class: "{theme::panel_border(&role)} p-10 text-center text-sm text-slate-400",
                p { class: "text-3xl", "📭" }
                p { class: "mt-2", "No hay cotizaciones para comparar" }
            }
        },
    };

    let sort = snapshot.sort;
    let view = snapshot.view;
    let rows = snapshot
        .sorted()
        .into_iter()
        .map(|quote| QuoteRow {
            view: ComparativeQuoteView::from(&quote),
            quote,
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "space-y-4",
            header { class: "flex flex-wrap items-end justify-between gap-4",
                div {
                    h2 { class: "text-lg font-semibold text-slate-100", "📊 Comparación de Cotizaciones" }
                    p { class: "text-sm {theme::text_muted()}", "{summary.count} cotizaciones" }
                }
                div { class: "flex items-end gap-4",
                    label { class: "space-y-1",
                        span { class: "{theme::label_class()}", "Ordenar por" }
                        select {
                            class: "{theme::input_class(&role)}",
                            value: "{sort.key()}",
                            onchange: move |evt| {
                                if let Some(next) = QuoteSort::from_key(&evt.value()) {
                                    comparator.with_mut(|cmp| cmp.sort = next);
                                }
                            },
                            for choice in QuoteSort::ALL {
                                option { value: "{choice.key()}", selected: choice == sort, "{choice.label()}" }
                            }
                        }
                    }
                    div { class: "flex gap-1",
                        button {
                            class: if view == ViewMode::Table { theme::btn_small_active(&role) } else { theme::btn_small_inactive(&role) },
                            title: "Vista de tabla",
                            onclick: move |_| comparator.with_mut(|cmp| cmp.view = ViewMode::Table),
                            "Tabla"
                        }
                        button {
                            class: if view == ViewMode::Cards { theme::btn_small_active(&role) } else { theme::btn_small_inactive(&role) },
                            title: "Vista de tarjetas",
                            onclick: move |_| comparator.with_mut(|cmp| cmp.view = ViewMode::Cards),
                            "Tarjetas"
                        }
                    }
                }
            }

            match view {
                ViewMode::Table => rsx! { QuoteTable { rows: rows.clone(), role: role.clone(), on_select } },
                ViewMode::Cards => rsx! { QuoteCards { rows: rows.clone(), role: role.clone(), on_select } },
            }

            SummaryBar { summary: SummaryView::from(summary), role: role.clone() }
        }
    }
}

#[derive(Clone, PartialEq)]
struct QuoteRow {
    quote: ComparativeQuote,
    view: ComparativeQuoteView,
}

#[component]
fn QuoteTable(
    rows: Vec<QuoteRow>,
    role: Role,
    on_select: Option<EventHandler<ComparativeQuote>>,
) -> Element {
    rsx! {
        div { class: "{theme::table_container(&role)} overflow-x-auto",
            table { class: "w-full text-sm",
                thead { class: "{theme::table_header(&role)}",
                    tr {
                        th { class: "px-3 py-2 text-left", "Proveedor" }
                        th { class: "px-3 py-2 text-left", "Tipo Transporte" }
                        th { class: "px-3 py-2 text-left", "Ruta" }
                        th { class: "px-3 py-2 text-right", "Costo" }
                        th { class: "px-3 py-2 text-right", "Margen %" }
                        th { class: "px-3 py-2 text-right", "Precio Venta" }
                        th { class: "px-3 py-2 text-right", "Utilidad" }
                        th { class: "px-3 py-2 text-right", "ROI %" }
                        th { class: "px-3 py-2 text-center", "Rankings" }
                        th { class: "px-3 py-2 text-left", "Competitividad" }
                        th { class: "px-3 py-2 text-left", "Vigencia" }
                        if on_select.is_some() {
                            th { class: "px-3 py-2", "Acciones" }
                        }
                    }
                }
                tbody { class: "{theme::table_divider()}",
                    for row in rows {
                        tr { key: "{row.quote.id}", class: "hover:bg-slate-900/60",
                            td { class: "px-3 py-2",
                                p { class: "font-semibold text-slate-100", "{row.view.provider}" }
                                if let Some(country) = row.view.country.clone() {
                                    p { class: "text-xs text-slate-500", "{country}" }
                                }
                            }
                            td { class: "px-3 py-2", TransportBadge { transport: row.quote.tipo_transporte.clone() } }
                            td { class: "px-3 py-2 text-xs text-slate-300", "{row.view.route}" }
                            td { class: "px-3 py-2 text-right font-semibold text-slate-100", "{row.view.cost}" }
                            td { class: "px-3 py-2 text-right", MetricValue { value: row.quote.margen_ganancia_pct } }
                            td { class: "px-3 py-2 text-right", "{row.view.sale_price}" }
                            td { class: "px-3 py-2 text-right text-emerald-300", "{row.view.profit}" }
                            td { class: "px-3 py-2 text-right", MetricValue { value: row.quote.roi } }
                            td { class: "px-3 py-2 text-center",
                                RankingBadge { rank: row.quote.ranking_por_costo, title: "Ranking por costo" }
                                RankingBadge { rank: row.quote.ranking_por_margen, title: "Ranking por margen" }
                            }
                            td { class: "px-3 py-2", CompetitivenessBadge { level: row.quote.nivel_competitividad.clone() } }
                            td { class: "px-3 py-2",
                                ValidityBadge {
                                    state: row.quote.estado_vigencia.clone(),
                                    days: row.quote.dias_vigencia_restantes,
                                }
                            }
                            if let Some(handler) = on_select {
                                td { class: "px-3 py-2",
                                    button {
                                        class: "{theme::btn_small_active(&role)}",
                                        title: "Seleccionar cotización",
                                        onclick: {
                                            let quote = row.quote.clone();
                                            move |_| handler.call(quote.clone())
                                        },
                                        "✔"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteCards(
    rows: Vec<QuoteRow>,
    role: Role,
    on_select: Option<EventHandler<ComparativeQuote>>,
) -> Element {
    rsx! {
        div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
            for row in rows {
                article { key: "{row.quote.id}", class: "quote-card {theme::panel_border(&role)} flex flex-col gap-4 p-4",
                    div { class: "flex items-start justify-between gap-2",
                        div {
                            h3 { class: "font-semibold text-slate-100", "{row.view.provider}" }
                            TransportBadge { transport: row.quote.tipo_transporte.clone() }
                        }
                        CompetitivenessBadge { level: row.quote.nivel_competitividad.clone() }
                    }
                    p { class: "text-sm text-slate-300", "📍 {row.view.route}" }
                    dl { class: "grid grid-cols-2 gap-3 text-sm",
                        div {
                            dt { class: "{theme::label_class()}", "Costo Proveedor" }
                            dd { class: "text-lg font-semibold text-slate-100", "{row.view.cost}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Margen" }
                            dd { MetricValue { value: row.quote.margen_ganancia_pct } }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Precio Venta" }
                            dd { class: "text-slate-200", "{row.view.sale_price}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "Utilidad" }
                            dd { class: "text-emerald-300", "{row.view.profit}" }
                        }
                        div {
                            dt { class: "{theme::label_class()}", "ROI" }
                            dd { MetricValue { value: row.quote.roi } }
                        }
                    }
                    div { class: "flex flex-wrap items-center gap-3 text-xs text-slate-400",
                        span { "🚚 {row.view.unit}" }
                        if let Some(eta) = row.view.eta.clone() {
                            span { "⏱ {eta}" }
                        }
                        ValidityBadge {
                            state: row.quote.estado_vigencia.clone(),
                            days: row.quote.dias_vigencia_restantes,
                        }
                    }
                    if let Some(handler) = on_select {
                        button {
                            class: "{theme::btn_primary(&role)} w-full",
                            onclick: {
                                let quote = row.quote.clone();
                                move |_| handler.call(quote.clone())
                            },
                            "Seleccionar"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryBar(summary: SummaryView, role: Role) -> Element {
    rsx! {
        div { class: "{theme::panel_border(&role)} grid gap-4 p-4 text-sm md:grid-cols-3",
            div {
                span { class: "{theme::label_class()}", "Costo Promedio" }
                strong { class: "text-lg text-slate-100", "{summary.average_cost}" }
            }
            div {
                span { class: "{theme::label_class()}", "Margen Promedio" }
                strong { class: "text-lg text-slate-100", "{summary.average_margin}" }
            }
            div {
                span { class: "{theme::label_class()}", "ROI Promedio" }
                strong { class: "text-lg text-slate-100", "{summary.average_roi}" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ComparativeQuoteView {
    provider: String,
    country: Option<String>,
    route: String,
    cost: String,
    sale_price: String,
    profit: String,
    unit: String,
    eta: Option<String>,
}

impl From<&ComparativeQuote> for ComparativeQuoteView {
    fn from(quote: &ComparativeQuote) -> Self {
        Self {
            provider: format::text_or_na(quote.proveedor_nombre.as_deref()),
            country: quote
                .proveedor_pais
                .clone()
                .filter(|country| !country.trim().is_empty()),
            route: format!(
                "{} → {}",
                format::text_or_na(quote.origen.as_deref()),
                format::text_or_na(quote.destino.as_deref())
            ),
            cost: format::money_or_na(quote.costo_proveedor),
            sale_price: format::money_or_na(quote.precio_venta),
            profit: format::money_or_na(quote.utilidad_estimada),
            unit: quote
                .tipo_unidad
                .clone()
                .filter(|unit| !unit.trim().is_empty())
                .unwrap_or_else(|| "No especificado".to_string()),
            eta: quote
                .tiempo_estimado
                .clone()
                .filter(|eta| !eta.trim().is_empty()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SummaryView {
    average_cost: String,
    average_margin: String,
    average_roi: String,
}

impl From<ComparisonSummary> for SummaryView {
    fn from(summary: ComparisonSummary) -> Self {
        Self {
            average_cost: format::money(summary.average_cost),
            average_margin: format::percent(summary.average_margin),
            average_roi: format::percent(summary.average_roi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison_summary;
    use pretty_assertions::assert_eq;

    #[test]
    fn quote_view_formats_missing_fields() {
        let quote = ComparativeQuote {
            id: 1,
            proveedor_nombre: Some("Naviera Golfo".into()),
            origen: Some("Veracruz".into()),
            destino: Some("Houston".into()),
            costo_proveedor: Some(1500.0),
            ..Default::default()
        };
        let view = ComparativeQuoteView::from(&quote);
        assert_eq!(view.route, "Veracruz → Houston");
        assert_eq!(view.cost, "$1,500.00");
        assert_eq!(view.sale_price, "N/A");
        assert_eq!(view.unit, "No especificado");
        assert_eq!(view.country, None);
    }

    #[test]
    fn summary_view_divides_by_full_count() {
        let quotes = vec![
            ComparativeQuote {
                id: 1,
                costo_proveedor: Some(500.0),
                margen_ganancia_pct: Some(20.0),
                roi: Some(30.0),
                ..Default::default()
            },
            ComparativeQuote {
                id: 2,
                costo_proveedor: Some(200.0),
                ..Default::default()
            },
        ];
        let view = SummaryView::from(comparison_summary(&quotes).unwrap());
        assert_eq!(view.average_cost, "$350.00");
        assert_eq!(view.average_margin, "10.00%");
        assert_eq!(view.average_roi, "15.00%");
    }
}
