use dioxus::prelude::*;

use crate::domain::Role;
use crate::ui::theme;

/// Headline figure with an optional caption, used by the calculator results and list counters.
#[component]
pub fn MetricCard(
    title: String,
    value: String,
    subtitle: Option<String>,
    highlight: Option<&'static str>,
    role: Role,
) -> Element {
    let value_color = highlight.unwrap_or("text-slate-100");
    rsx! {
        div {
            class: "{theme::panel_border(&role)} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {value_color}", "{value}" }
            if let Some(caption) = subtitle {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{caption}" }
            }
        }
    }
}
