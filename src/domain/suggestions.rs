//! Reuse suggestions grouped per transport mode.

use time::{format_description::well_known::Iso8601, macros::format_description, Date};

use super::entities::{QuoteSuggestion, TransportType};

/// One card of the suggestion grid. `suggestion` is `None` when the backend had nothing for
/// that transport mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionSlot {
    pub transport: TransportType,
    pub suggestion: Option<QuoteSuggestion>,
}

/// Best (first) suggestion for each of AEREO, MARITIMO and TERRESTRE, in that order.
pub fn best_per_transport(suggestions: &[QuoteSuggestion]) -> Vec<SuggestionSlot> {
    TransportType::GROUPED
        .into_iter()
        .map(|transport| SuggestionSlot {
            suggestion: suggestions
                .iter()
                .find(|s| s.tipo_transporte.as_ref() == Some(&transport))
                .cloned(),
            transport,
        })
        .collect()
}

/// Parses a backend `LocalDate` (`2025-03-31`), tolerating a trailing time part.
pub fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| Date::parse(trimmed, &Iso8601::DEFAULT).ok())
}

/// Remaining validity as shown on a suggestion card.
pub fn validity_label(valid_until: Option<&str>, today: Date) -> String {
    let Some(until) = valid_until.and_then(parse_date) else {
        return "N/A".to_string();
    };

    let days = (until - today).whole_days();
    match days {
        d if d > 0 => format!("{d} días"),
        0 => "Hoy vence".to_string(),
        _ => "Expirado".to_string(),
    }
}

/// Unit type when the quote names one, otherwise the transport's default service.
pub fn service_type(suggestion: &QuoteSuggestion, transport: &TransportType) -> String {
    suggestion
        .tipo_unidad
        .as_deref()
        .filter(|unit| !unit.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| transport.default_service().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    fn suggestion(id: i64, transport: &str) -> QuoteSuggestion {
        QuoteSuggestion {
            id,
            tipo_transporte: Some(TransportType::from(transport.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_first_suggestion_per_transport_in_fixed_order() {
        let suggestions = vec![
            suggestion(1, "TERRESTRE"),
            suggestion(2, "AEREO"),
            suggestion(3, "TERRESTRE"),
            suggestion(4, "FERROVIARIO"),
        ];
        let slots = best_per_transport(&suggestions);
        let view: Vec<_> = slots
            .iter()
            .map(|slot| (slot.transport.code().to_string(), slot.suggestion.as_ref().map(|s| s.id)))
            .collect();
        assert_eq!(
            view,
            vec![
                ("AEREO".to_string(), Some(2)),
                ("MARITIMO".to_string(), None),
                ("TERRESTRE".to_string(), Some(1)),
            ]
        );
    }

    #[test]
    fn validity_label_counts_days() {
        let today = date!(2025 - 03 - 10);
        assert_eq!(validity_label(Some("2025-03-15"), today), "5 días");
        assert_eq!(validity_label(Some("2025-03-10"), today), "Hoy vence");
        assert_eq!(validity_label(Some("2025-03-01"), today), "Expirado");
        assert_eq!(validity_label(Some("2025-03-11T00:00:00"), today), "1 días");
        assert_eq!(validity_label(Some("no-date"), today), "N/A");
        assert_eq!(validity_label(None, today), "N/A");
    }

    #[test]
    fn service_type_falls_back_per_transport() {
        let mut s = suggestion(1, "MARITIMO");
        assert_eq!(service_type(&s, &TransportType::Maritimo), "Contenedor");
        assert_eq!(service_type(&s, &TransportType::Aereo), "Carga General");
        assert_eq!(service_type(&s, &TransportType::Terrestre), "Trailer");
        s.tipo_unidad = Some("Contenedor 40HQ".into());
        assert_eq!(service_type(&s, &TransportType::Maritimo), "Contenedor 40HQ");
    }
}
