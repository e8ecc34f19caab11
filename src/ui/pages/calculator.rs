use dioxus::prelude::*;

use crate::domain::{AppState, RequestId};
use crate::ui::components::MarginCalculator;
use crate::ui::pages::comparator::parse_request_id;
use crate::ui::theme;

/// Stand-alone calculator. Linking a request lets the backend compare against its market data.
#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut request_input = use_signal(String::new);

    let role = state.with(|st| st.role());
    let request_id: Option<RequestId> = parse_request_id(&request_input());

    rsx! {
        div { class: "space-y-6",
            label { class: "block max-w-xs space-y-1",
                span { class: "{theme::label_class()}", "ID de solicitud (opcional)" }
                input {
                    class: "{theme::input_class(&role)} w-full",
                    r#type: "number",
                    min: "1",
                    value: request_input(),
                    oninput: move |evt| request_input.set(evt.value()),
                }
            }
            MarginCalculator { request_id }
        }
    }
}
