//! Sign-in screen shown by the shell while no session is active.

use dioxus::prelude::*;

use crate::app::{sign_in, QuoteRefresh};
use crate::domain::{AppState, Role};
use crate::infra::api::ApiClient;
use crate::ui::components::toast::{push_api_error, push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::assets;
use crate::util::version::APP_NAME;

#[component]
pub fn LoginPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh = use_context::<QuoteRefresh>();
    let api = use_context::<ApiClient>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let role = Role::None;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let (user, secret) = (email().trim().to_string(), password());
        if user.is_empty() || secret.is_empty() {
            push_toast(toasts, ToastKind::Warning, "Ingresa tu correo y contraseña");
            return;
        }

        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.login(&user, &secret).await {
                Ok(session) => {
                    password.set(String::new());
                    let welcome = format!("Bienvenido, {}", session.name);
                    sign_in(state, refresh, session);
                    push_toast(toasts, ToastKind::Success, welcome);
                }
                Err(err) => push_api_error(toasts, &err, "Usuario o contraseña inválidos"),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center p-8",
            form {
                class: "{theme::panel_border(&role)} w-full max-w-md space-y-6 p-8",
                onsubmit: on_submit,
                div { class: "text-center",
                    img { class: "mx-auto h-12", src: assets::logo_data_uri(), alt: "Performer Logistics" }
                    h1 { class: "mt-4 text-2xl font-bold text-slate-100", "{APP_NAME}" }
                    p { class: "text-sm text-slate-400", "Inicia sesión con tu cuenta de empleado" }
                }
                label { class: "block space-y-1",
                    span { class: "{theme::label_class()}", "Correo" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "email",
                        autocomplete: "username",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "block space-y-1",
                    span { class: "{theme::label_class()}", "Contraseña" }
                    input {
                        class: "{theme::input_class(&role)} w-full",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary(&role)} w-full",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Ingresando..." } else { "Iniciar sesión" }
                }
            }
        }
    }
}
