use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::QuoteRecord;

/// Role reported by the backend at login. Gating on it is advisory; the backend enforces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    None,
    Admin,
    Pricing,
    Vendedor,
    Other(String),
}

impl Role {
    pub fn code(&self) -> &str {
        match self {
            Role::None => "",
            Role::Admin => "ADMIN",
            Role::Pricing => "PRICING",
            Role::Vendedor => "VENDEDOR",
            Role::Other(raw) => raw.as_str(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Role::None => "Sin rol",
            Role::Admin => "Administrador",
            Role::Pricing => "Pricing",
            Role::Vendedor => "Ventas",
            Role::Other(raw) => raw.as_str(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Role::Admin => "🛡️",
            Role::Pricing => "🧮",
            Role::Vendedor => "🤝",
            Role::None | Role::Other(_) => "👤",
        }
    }

    pub fn can_change_status(&self) -> bool {
        matches!(self, Role::Pricing)
    }

    pub fn can_edit_quotes(&self) -> bool {
        matches!(self, Role::Pricing)
    }

    pub fn can_delete_quotes(&self) -> bool {
        matches!(self, Role::Admin | Role::Pricing)
    }

    pub fn can_reuse_quotes(&self) -> bool {
        matches!(self, Role::Admin | Role::Pricing | Role::Vendedor)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        let normalized = value.trim().trim_start_matches("ROLE_").to_ascii_uppercase();
        match normalized.as_str() {
            "" => Role::None,
            "ADMIN" => Role::Admin,
            "PRICING" => Role::Pricing,
            "VENDEDOR" => Role::Vendedor,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of the signed-in employee. Created at login or restored on startup, then handed
/// down through context; nothing reads identity from anywhere else.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub name: String,
}

impl Session {
    pub fn is_active(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("role", &self.role)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    /// Unfiltered quote list, shared by the list page and the edit form.
    pub quotes: Vec<QuoteRecord>,
    pub quotes_loaded: bool,
}

impl AppState {
    pub fn active_session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|session| session.is_active())
    }

    pub fn role(&self) -> Role {
        self.active_session()
            .map(|session| session.role.clone())
            .unwrap_or_default()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.quotes.clear();
        self.quotes_loaded = false;
    }

    pub fn sign_out(&mut self) {
        *self = AppState::default();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.session = persisted.session.filter(Session::is_active);
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            session: self.active_session().cloned(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub session: Option<Session>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(role: &str) -> Session {
        Session {
            token: "jwt".into(),
            role: Role::from(role.to_string()),
            name: "Ana".into(),
        }
    }

    #[test]
    fn roles_parse_with_and_without_prefix() {
        assert_eq!(Role::from("PRICING".to_string()), Role::Pricing);
        assert_eq!(Role::from("ROLE_ADMIN".to_string()), Role::Admin);
        assert_eq!(Role::from("vendedor".to_string()), Role::Vendedor);
        assert_eq!(Role::from("AUDITOR".to_string()), Role::Other("AUDITOR".into()));
    }

    #[test]
    fn gating_follows_backend_roles() {
        assert!(Role::Pricing.can_change_status());
        assert!(!Role::Admin.can_change_status());
        assert!(Role::Admin.can_delete_quotes());
        assert!(!Role::Vendedor.can_delete_quotes());
        assert!(Role::Vendedor.can_reuse_quotes());
    }

    #[test]
    fn persisted_state_drops_empty_tokens() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            session: Some(Session {
                token: "  ".into(),
                role: Role::Admin,
                name: String::new(),
            }),
        });
        assert!(state.active_session().is_none());
        assert_eq!(state.role(), Role::None);

        state.sign_in(session("ADMIN"));
        assert_eq!(state.to_persisted().session, Some(session("ADMIN")));
        state.sign_out();
        assert!(state.to_persisted().session.is_none());
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", session("PRICING"));
        assert!(!rendered.contains("jwt"));
        assert!(rendered.contains("Pricing"));
    }
}
