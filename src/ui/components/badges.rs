use dioxus::prelude::*;

use crate::domain::{
    metric_level, rank_badge, Competitiveness, MetricLevel, QuoteStatus, RankBadge,
    TransportType, ValidityState,
};
use crate::util::format;

const PILL: &str = "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium";
const NEUTRAL: &str = "bg-slate-700/40 text-slate-300 border-slate-600/60";
const SUCCESS: &str = "bg-emerald-500/10 text-emerald-300 border-emerald-500/40";
const INFO: &str = "bg-sky-500/10 text-sky-300 border-sky-500/40";
const WARNING: &str = "bg-amber-500/10 text-amber-300 border-amber-500/40";
const DANGER: &str = "bg-rose-500/10 text-rose-300 border-rose-500/40";

#[component]
pub fn CompetitivenessBadge(level: Option<Competitiveness>) -> Element {
    let (icon, color) = match &level {
        Some(Competitiveness::MuyCompetitivo) => ("★", SUCCESS),
        Some(Competitiveness::Competitivo) => ("👍", INFO),
        Some(Competitiveness::PocoCompetitivo) => ("!", WARNING),
        _ => ("?", NEUTRAL),
    };
    let label = level
        .as_ref()
        .map(|level| level.label().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        span { class: "{PILL} {color}",
            span { "{icon}" }
            "{label}"
        }
    }
}

#[component]
pub fn ValidityBadge(state: Option<ValidityState>, days: Option<i32>) -> Element {
    let (icon, color) = match &state {
        Some(ValidityState::Vigente) => ("✔", SUCCESS),
        Some(ValidityState::ProximoAVencer) => ("⏱", WARNING),
        Some(ValidityState::Vencido) => ("✖", DANGER),
        _ => ("?", NEUTRAL),
    };
    let text = validity_text(state.as_ref(), days);

    rsx! {
        span { class: "{PILL} {color}",
            span { "{icon}" }
            "{text}"
        }
    }
}

/// `VIGENTE (12d)`; the day count is only shown while it is not negative.
pub fn validity_text(state: Option<&ValidityState>, days: Option<i32>) -> String {
    let label = state.map(ValidityState::label).unwrap_or("SIN FECHA");
    match days {
        Some(days) if days >= 0 => format!("{label} ({days}d)"),
        _ => label.to_string(),
    }
}

#[component]
pub fn RankingBadge(rank: Option<u32>, title: &'static str) -> Element {
    let badge = rank_badge(rank);
    let style = match badge {
        RankBadge::Medal(medal) => format!("color: {}", medal.color()),
        _ => String::new(),
    };

    rsx! {
        span {
            class: "inline-flex min-w-[2rem] justify-center text-xs font-semibold text-slate-300",
            title: title,
            style: "{style}",
            "{badge.text()}"
        }
    }
}

#[component]
pub fn TransportBadge(transport: Option<TransportType>) -> Element {
    let color = match &transport {
        Some(TransportType::Aereo) => INFO,
        Some(TransportType::Maritimo) => "bg-blue-500/10 text-blue-300 border-blue-500/40",
        Some(TransportType::Terrestre) => WARNING,
        _ => NEUTRAL,
    };
    let label = transport
        .as_ref()
        .map(|transport| transport.code().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        span { class: "{PILL} {color}", "{label}" }
    }
}

#[component]
pub fn StatusBadge(status: QuoteStatus) -> Element {
    let color = match status {
        QuoteStatus::Pendiente => WARNING,
        QuoteStatus::Enviado => INFO,
        QuoteStatus::Completado => SUCCESS,
        QuoteStatus::Cancelado => DANGER,
        QuoteStatus::Other(_) => NEUTRAL,
    };

    rsx! {
        span { class: "{PILL} {color}", "{status}" }
    }
}

/// Margin or ROI percentage coloured by band.
#[component]
pub fn MetricValue(value: Option<f64>) -> Element {
    let color = metric_color(metric_level(value));
    let text = format::percent_or_na(value);

    rsx! {
        span { class: "font-semibold {color}", "{text}" }
    }
}

pub fn metric_color(level: MetricLevel) -> &'static str {
    match level {
        MetricLevel::High => "text-emerald-300",
        MetricLevel::Medium => "text-amber-300",
        MetricLevel::Low => "text-rose-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validity_text_shows_non_negative_days() {
        assert_eq!(
            validity_text(Some(&ValidityState::Vigente), Some(12)),
            "VIGENTE (12d)"
        );
        assert_eq!(
            validity_text(Some(&ValidityState::ProximoAVencer), Some(0)),
            "PRÓXIMO A VENCER (0d)"
        );
        assert_eq!(validity_text(Some(&ValidityState::Vencido), Some(-3)), "VENCIDO");
        assert_eq!(validity_text(None, None), "SIN FECHA");
    }

    #[test]
    fn metric_bands_map_to_colors() {
        assert_eq!(metric_color(metric_level(Some(25.0))), "text-emerald-300");
        assert_eq!(metric_color(metric_level(Some(10.0))), "text-amber-300");
        assert_eq!(metric_color(metric_level(None)), "text-rose-300");
    }
}
