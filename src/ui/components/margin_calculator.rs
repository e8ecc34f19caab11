use dioxus::prelude::*;

use crate::domain::{
    AppState, AppliedMargin, CalculatorState, MarginCalculation, MarketPosition, RequestId, Role,
};
use crate::infra::api::ApiClient;
use crate::ui::components::metric_card::MetricCard;
use crate::ui::components::toast::{push_api_error, push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format;

/// Margin calculator. When `on_apply` is given, a result can be pushed back into the caller's
/// form as cost, margin and sale price.
#[component]
pub fn MarginCalculator(
    request_id: Option<RequestId>,
    on_apply: Option<EventHandler<AppliedMargin>>,
) -> Element {
    let state = use_context::<Signal<AppState>>();
    let api = use_context::<ApiClient>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut calculator = use_signal(|| CalculatorState::for_request(request_id));

    let role = state.with(|st| st.role());
    let snapshot = calculator();
    let loading = snapshot.loading;

    let on_calculate = move |_| {
        let Some(session) = state.with(|st| st.active_session().cloned()) else {
            push_toast(toasts, ToastKind::Warning, "Inicia sesión para calcular márgenes");
            return;
        };

        let request = match calculator.with_mut(|calc| {
            calc.request_id = request_id;
            calc.submit()
        }) {
            Ok(request) => request,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, err.to_string());
                return;
            }
        };

        let api = api.clone();
        spawn(async move {
            let result = api.calculate_margin(&session, &request).await;
            if let Err(err) = calculator.with_mut(|calc| calc.complete(result)) {
                push_api_error(toasts, &err, "No se pudo calcular el margen");
            }
        });
    };

    rsx! {
        section { class: "{theme::panel_border(&role)} space-y-6 p-6",
            header {
                h2 { class: "text-lg font-semibold text-slate-100", "🧮 Calculadora de Márgenes" }
                p { class: "text-sm text-slate-400",
                    "Calcula automáticamente el precio de venta según tu margen deseado"
                }
            }

            div { class: "grid gap-4 md:grid-cols-3",
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Costo del Proveedor (USD) *" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "number",
                        step: "0.01",
                        placeholder: "0.00",
                        value: "{snapshot.form.provider_cost}",
                        oninput: move |evt| calculator.with_mut(|calc| calc.form.provider_cost = evt.value()),
                    }
                }
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Costos Adicionales (USD)" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "number",
                        step: "0.01",
                        placeholder: "0.00",
                        value: "{snapshot.form.additional_costs}",
                        oninput: move |evt| calculator.with_mut(|calc| calc.form.additional_costs = evt.value()),
                    }
                }
                label { class: "space-y-1",
                    span { class: "{theme::label_class()}", "Margen Deseado (%)" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        max: "100",
                        placeholder: "15",
                        value: "{snapshot.form.desired_margin_pct}",
                        oninput: move |evt| calculator.with_mut(|calc| calc.form.desired_margin_pct = evt.value()),
                    }
                }
            }

            div { class: "flex justify-end gap-3",
                button {
                    class: "{theme::btn_secondary()}",
                    disabled: loading,
                    onclick: move |_| calculator.with_mut(|calc| calc.clear()),
                    "Limpiar"
                }
                button {
                    class: "{theme::btn_primary(&role)}",
                    disabled: loading,
                    onclick: on_calculate,
                    if loading { "Calculando..." } else { "Calcular" }
                }
            }

            if let (Some(result), Some(applied)) = (snapshot.result.as_ref(), snapshot.applied()) {
                CalculationResults {
                    view: CalculationView::from(result),
                    role: role.clone(),
                    on_apply,
                    applied,
                    toasts,
                }
            }
        }
    }
}

#[component]
fn CalculationResults(
    view: CalculationView,
    role: Role,
    on_apply: Option<EventHandler<AppliedMargin>>,
    applied: AppliedMargin,
    toasts: Signal<Vec<ToastMessage>>,
) -> Element {
    rsx! {
        div { class: "space-y-4",
            h3 { class: "text-sm font-semibold uppercase tracking-wide text-slate-400", "Resultados del Cálculo" }
            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-4",
                MetricCard {
                    title: "Costo Total".to_string(),
                    value: view.total_cost.clone(),
                    subtitle: Some(view.cost_breakdown.clone()),
                    highlight: Some("text-sky-300"),
                    role: role.clone(),
                }
                MetricCard {
                    title: "Precio Venta Sugerido".to_string(),
                    value: view.suggested_price.clone(),
                    subtitle: Some(view.suggested_caption.clone()),
                    highlight: Some("text-emerald-300"),
                    role: role.clone(),
                }
                MetricCard {
                    title: "Utilidad Estimada".to_string(),
                    value: view.profit.clone(),
                    subtitle: Some(view.roi_caption.clone()),
                    role: role.clone(),
                }
                MetricCard {
                    title: "Precio Venta Mínimo".to_string(),
                    value: view.minimum_price.clone(),
                    subtitle: Some(view.minimum_caption.clone()),
                    highlight: Some("text-amber-300"),
                    role: role.clone(),
                }
            }

            if let Some(market) = view.market.clone() {
                div { class: "rounded-xl border border-slate-800 bg-slate-900/60 p-4",
                    h4 { class: "text-sm font-semibold text-slate-200", "📊 Análisis de Mercado" }
                    dl { class: "mt-3 grid gap-3 text-sm md:grid-cols-3",
                        div {
                            dt { class: "text-slate-500", "Precio Promedio" }
                            dd { class: "font-semibold text-slate-100", "{market.average}" }
                        }
                        div {
                            dt { class: "text-slate-500", "Rango" }
                            dd { class: "font-semibold text-slate-100", "{market.range}" }
                        }
                        div {
                            dt { class: "text-slate-500", "Tu Posición" }
                            dd { class: "font-semibold {market.position_color}", "{market.position}" }
                        }
                    }
                }
            }

            if let Some(text) = view.recommendation.clone() {
                div { class: "rounded-lg border border-sky-500/30 bg-sky-500/10 px-4 py-3 text-sm text-sky-100",
                    strong { "💡 Recomendación: " }
                    "{text}"
                }
            }
            if let Some(text) = view.alert.clone() {
                div { class: "rounded-lg border border-amber-500/30 bg-amber-500/10 px-4 py-3 text-sm text-amber-100",
                    "⚠️ {text}"
                }
            }

            if let Some(handler) = on_apply {
                div { class: "flex justify-end",
                    button {
                        class: "{theme::btn_primary(&role)}",
                        onclick: move |_| {
                            handler.call(applied);
                            push_toast(toasts, ToastKind::Success, "Los valores se han aplicado al formulario");
                        },
                        "Aplicar al Formulario"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MarketView {
    average: String,
    range: String,
    position: String,
    position_color: &'static str,
}

/// Pre-formatted copy of a calculation. Values are shown as the backend returned them.
#[derive(Clone, Debug, PartialEq)]
struct CalculationView {
    total_cost: String,
    cost_breakdown: String,
    suggested_price: String,
    suggested_caption: String,
    profit: String,
    roi_caption: String,
    minimum_price: String,
    minimum_caption: String,
    market: Option<MarketView>,
    recommendation: Option<String>,
    alert: Option<String>,
}

impl From<&MarginCalculation> for CalculationView {
    fn from(result: &MarginCalculation) -> Self {
        let market = result.has_market_data().then(|| {
            let position = result.posicion_mercado.clone();
            MarketView {
                average: format::exact_money_or_na(result.precio_mercado_promedio),
                range: format!(
                    "{} - {}",
                    format::exact_money_or_na(result.precio_mercado_minimo),
                    format::exact_money_or_na(result.precio_mercado_maximo)
                ),
                position_color: match position {
                    Some(MarketPosition::EnRango) => "text-emerald-300",
                    Some(MarketPosition::PorDebajo) => "text-sky-300",
                    _ => "text-amber-300",
                },
                position: position
                    .map(|p| p.label().to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            }
        });

        Self {
            total_cost: format::exact_money_or_na(result.costo_total),
            cost_breakdown: format!(
                "Proveedor: {} + Adicionales: {}",
                format::exact_money_or_na(result.costo_proveedor),
                format::exact_money(result.costos_adicionales.unwrap_or(0.0))
            ),
            suggested_price: format::exact_money_or_na(result.precio_venta_sugerido),
            suggested_caption: format!(
                "Con margen del {}",
                format::raw_percent_or_na(result.margen_deseado_pct)
            ),
            profit: format::exact_money_or_na(result.utilidad_estimada),
            roi_caption: format!("ROI: {}", format::raw_percent_or_na(result.roi)),
            minimum_price: format::exact_money_or_na(result.precio_venta_minimo),
            minimum_caption: format!(
                "Con margen mínimo del {}",
                format::raw_percent_or_na(result.margen_minimo_pct)
            ),
            market,
            recommendation: result.recommendation().map(str::to_string),
            alert: result.alert().map(str::to_string),
        }
    }
}
