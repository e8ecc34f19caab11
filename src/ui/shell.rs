use dioxus::prelude::*;

use crate::app::{sign_out, Route};
use crate::domain::{AppState, Role};
use crate::ui::pages::LoginPage;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let Some(session) = state.with(|st| st.active_session().cloned()) else {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                LoginPage {}
            }
        };
    };

    let role = session.role.clone();

    let greeting = if session.name.trim().is_empty() {
        role.name().to_string()
    } else {
        format!("{} · {}", session.name, role.name())
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-7xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "{role.emoji()}" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight {theme::text_primary(&role)}", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500", "{greeting}" }
                        }
                    }

                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Quotes {}), onclick: move |_| { nav.push(Route::Quotes {}); }, label: "📋 Cotizaciones", role: role.clone() }
                        NavButton { active: matches!(current_route, Route::Compare {}), onclick: move |_| { nav.push(Route::Compare {}); }, label: "📊 Comparar", role: role.clone() }
                        NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "🧮 Calculadora", role: role.clone() }
                        NavButton { active: matches!(current_route, Route::Suggestions {}), onclick: move |_| { nav.push(Route::Suggestions {}); }, label: "♻️ Sugerencias", role: role.clone() }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️", role: role.clone() }
                    }

                    div { class: "flex items-center gap-3",
                        span { class: "text-xs text-slate-600", "{version_label()}" }
                        button {
                            class: "{theme::btn_secondary()}",
                            onclick: move |_| {
                                sign_out(state);
                                nav.replace(Route::Quotes {});
                            },
                            "Cerrar sesión"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, role: Role) -> Element {
    rsx! {
        button {
            class: "min-w-[5.5rem] {theme::nav_button(&role, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
