use dioxus::prelude::*;

use crate::{
    app::{sign_out, QuoteRefresh, Route},
    domain::AppState,
    infra::api::ApiClient,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        assets,
        config::{AppConfig, API_TIMEOUT_VAR, API_URL_VAR},
        version::{version_label, APP_AUTHOR, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh = use_context::<QuoteRefresh>();
    let api = use_context::<ApiClient>();
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let nav = use_navigator();

    let (session, quote_count) = state.with(|st| (st.active_session().cloned(), st.quotes.len()));
    let role = state.with(|st| st.role());
    let timeout_secs = config.request_timeout.as_secs();

    let on_reload = move |_| {
        refresh.request();
        push_toast(toasts, ToastKind::Info, "Recargando cotizaciones...");
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::panel_border(&role)} p-6",
                h2 { class: "{theme::label_class()}", "Sesión" }
                if let Some(session) = session {
                    dl { class: "mt-4 grid gap-3 text-sm sm:grid-cols-2",
                        div {
                            dt { class: "text-xs text-slate-500", "Usuario" }
                            dd { class: "text-slate-200", "{session.name}" }
                        }
                        div {
                            dt { class: "text-xs text-slate-500", "Rol" }
                            dd { class: "text-slate-200", "{session.role.emoji()} {session.role.name()}" }
                        }
                        div {
                            dt { class: "text-xs text-slate-500", "Cotizaciones cargadas" }
                            dd { class: "text-slate-200", "{quote_count}" }
                        }
                    }
                    div { class: "mt-4 flex gap-3",
                        button { class: "{theme::btn_secondary()}", onclick: on_reload, "Recargar cotizaciones" }
                        button {
                            class: "{theme::btn_danger()}",
                            onclick: move |_| {
                                sign_out(state);
                                nav.replace(Route::Quotes {});
                            },
                            "Cerrar sesión"
                        }
                    }
                } else {
                    p { class: "mt-3 text-sm text-slate-400", "Sin sesión activa." }
                }
            }

            section { class: "{theme::panel_border(&role)} p-6",
                h2 { class: "{theme::label_class()}", "Conexión" }
                dl { class: "mt-4 grid gap-3 text-sm sm:grid-cols-2",
                    div {
                        dt { class: "text-xs text-slate-500", "API" }
                        dd { class: "font-mono text-slate-200", "{api.base_url()}" }
                    }
                    div {
                        dt { class: "text-xs text-slate-500", "Tiempo de espera" }
                        dd { class: "text-slate-200", "{timeout_secs} s" }
                    }
                }
                p { class: "mt-4 text-xs text-slate-500",
                    "Configurable con {API_URL_VAR} y {API_TIMEOUT_VAR} (también desde un archivo .env)."
                }
            }

            section {
                class: "{theme::panel_border(&role)} flex flex-col items-center gap-3 p-6 text-center text-slate-400",
                img { class: "h-10 w-auto opacity-80", src: assets::logo_data_uri(), alt: "{APP_AUTHOR}" }
                p { class: "text-sm", "{APP_NAME} {version_label()}" }
                p { class: "text-xs text-slate-500", "© {APP_AUTHOR}" }
            }
        }
    }
}
