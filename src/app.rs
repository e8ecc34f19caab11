use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::{AppState, Session},
    infra::api::ApiClient,
    ui::{
        components::toast::{push_api_error, push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, ComparatorPage, QuotesPage, SettingsPage, SuggestionsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/cotizaciones")]
    Quotes {},
    #[route("/comparar")]
    Compare {},
    #[route("/calculadora")]
    Calculator {},
    #[route("/sugerencias")]
    Suggestions {},
    #[route("/ajustes")]
    Settings {},
}

/// Bumped to ask for a fresh copy of the quote list.
#[derive(Clone, Copy)]
pub struct QuoteRefresh(pub Signal<u64>);

impl QuoteRefresh {
    pub fn request(mut self) {
        self.0 += 1;
    }
}

#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);
    use_hook(move || {
        if let Some(saved) = load_persisted_state() {
            state.with_mut(|st| st.apply_persisted(saved));
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let refresh = use_signal(|| 0_u64);
    use_context_provider(|| QuoteRefresh(refresh));

    let api = use_context::<ApiClient>();
    let _quotes = use_resource(move || {
        let api = api.clone();
        async move {
            let _generation = refresh();
            fetch_quotes(state, api, toasts).await
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!(%err, "failed to persist session");
    }
}

/// Installs a fresh session and reloads everything that depends on it.
pub fn sign_in(mut state: Signal<AppState>, refresh: QuoteRefresh, session: Session) {
    info!(role = %session.role, "signed in");
    state.with_mut(|st| st.sign_in(session));
    persist_user_state(&state);
    refresh.request();
}

pub fn sign_out(mut state: Signal<AppState>) {
    info!("signed out");
    state.with_mut(|st| st.sign_out());
    persist_user_state(&state);
}

async fn fetch_quotes(
    mut state: Signal<AppState>,
    api: ApiClient,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(session) = state.peek().active_session().cloned() else {
        return;
    };

    match api.list_quotes(&session).await {
        Ok(quotes) => {
            info!(count = quotes.len(), "quote list loaded");
            state.with_mut(|st| {
                st.quotes = quotes;
                st.quotes_loaded = true;
            });
        }
        Err(err) if err.is_unauthorized() => {
            sign_out(state);
            push_toast(
                toasts,
                ToastKind::Warning,
                "Tu sesión expiró. Vuelve a iniciar sesión.",
            );
        }
        Err(err) => {
            state.with_mut(|st| st.quotes_loaded = true);
            push_api_error(toasts, &err, "No se pudieron cargar las cotizaciones");
        }
    }
}

#[component]
pub fn Quotes() -> Element {
    rsx! { Shell { QuotesPage {} } }
}

#[component]
pub fn Compare() -> Element {
    rsx! { Shell { ComparatorPage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Suggestions() -> Element {
    rsx! { Shell { SuggestionsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
