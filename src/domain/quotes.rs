use thiserror::Error;

use super::entities::{QuoteId, QuoteRecord, QuoteStatus};
use super::margin::AppliedMargin;

/// Status filter of the quote list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(QuoteStatus),
}

impl StatusFilter {
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(QuoteStatus::ALL.into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "Todas",
            Self::Only(status) => status.plural_label(),
        }
    }

    pub fn matches(&self, record: &QuoteRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => &record.estado == status,
        }
    }
}

/// Case-insensitive match on origin, destination, provider name or request folio.
pub fn matches_search(record: &QuoteRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |value: &str| value.to_lowercase().contains(&needle);
    contains(&record.origen)
        || contains(&record.destino)
        || record.provider_name().map(contains).unwrap_or(false)
        || record.request_folio().map(contains).unwrap_or(false)
}

pub fn filter_quotes<'a>(
    records: &'a [QuoteRecord],
    filter: &StatusFilter,
    query: &str,
) -> Vec<&'a QuoteRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record) && matches_search(record, query))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounters {
    pub total: usize,
    pub pending: usize,
    pub sent: usize,
    pub completed: usize,
}

pub fn status_counters(records: &[QuoteRecord]) -> StatusCounters {
    records
        .iter()
        .fold(StatusCounters::default(), |mut counters, record| {
            counters.total += 1;
            match record.estado {
                QuoteStatus::Pendiente => counters.pending += 1,
                QuoteStatus::Enviado => counters.sent += 1,
                QuoteStatus::Completado => counters.completed += 1,
                _ => {}
            }
            counters
        })
}

/// Replaces the stored row after the backend accepted an update.
pub fn replace_record(records: &mut [QuoteRecord], updated: QuoteRecord) -> bool {
    match records.iter_mut().find(|record| record.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn remove_record(records: &mut Vec<QuoteRecord>, id: QuoteId) -> bool {
    let before = records.len();
    records.retain(|record| record.id != id);
    records.len() != before
}

/// Editable cost and margin of a listed quote, kept as typed text until saved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDraft {
    pub cost: String,
    pub margin_pct: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("El costo debe ser un número mayor a 0")]
    InvalidCost,
    #[error("El margen debe estar entre 0 y 100")]
    InvalidMargin,
}

impl QuoteDraft {
    pub fn from_record(record: &QuoteRecord) -> Self {
        Self {
            cost: record.costo.map(|v| v.to_string()).unwrap_or_default(),
            margin_pct: record
                .margen_ganancia_pct
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Takes whatever the calculator produced; fields it left empty stay as they were.
    pub fn apply(&mut self, applied: AppliedMargin) {
        if let Some(cost) = applied.cost {
            self.cost = cost.to_string();
        }
        if let Some(margin) = applied.margin_pct {
            self.margin_pct = margin.to_string();
        }
    }

    /// Full replacement payload: `record` with the edited cost and margin.
    pub fn to_record(&self, record: &QuoteRecord) -> Result<QuoteRecord, DraftError> {
        let cost = parse_number(&self.cost)
            .filter(|cost| *cost > 0.0)
            .ok_or(DraftError::InvalidCost)?;

        let margin = match self.margin_pct.trim() {
            "" => None,
            raw => Some(
                parse_number(raw)
                    .filter(|m| (0.0..=100.0).contains(m))
                    .ok_or(DraftError::InvalidMargin)?,
            ),
        };

        let mut next = record.clone();
        next.costo = Some(cost);
        next.margen_ganancia_pct = margin;
        Ok(next)
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProviderRef, RequestRef};
    use pretty_assertions::assert_eq;

    fn record(id: i64, origen: &str, destino: &str, provider: &str, folio: &str, estado: QuoteStatus) -> QuoteRecord {
        QuoteRecord {
            id,
            origen: origen.into(),
            destino: destino.into(),
            proveedor: Some(ProviderRef {
                nombre: Some(provider.into()),
                ..Default::default()
            }),
            solicitud: Some(RequestRef {
                folio_codigo: Some(folio.into()),
                ..Default::default()
            }),
            estado,
            ..Default::default()
        }
    }

    fn sample() -> Vec<QuoteRecord> {
        vec![
            record(1, "Guadalajara", "Chicago", "Fletes GDL", "SOL-001", QuoteStatus::Pendiente),
            record(2, "Veracruz", "Houston", "Naviera Golfo", "SOL-002", QuoteStatus::Enviado),
            record(3, "CDMX", "Madrid", "AeroCarga", "SOL-003", QuoteStatus::Completado),
            record(4, "CDMX", "Bogotá", "AeroCarga", "SOL-004", QuoteStatus::Cancelado),
        ]
    }

    #[test]
    fn search_covers_route_provider_and_folio() {
        let records = sample();
        let ids = |query: &str| -> Vec<i64> {
            filter_quotes(&records, &StatusFilter::All, query)
                .into_iter()
                .map(|r| r.id)
                .collect()
        };
        assert_eq!(ids("cdmx"), vec![3, 4]);
        assert_eq!(ids("HOUSTON"), vec![2]);
        assert_eq!(ids("fletes"), vec![1]);
        assert_eq!(ids("sol-004"), vec![4]);
        assert_eq!(ids("  "), vec![1, 2, 3, 4]);
    }

    #[test]
    fn status_filter_combines_with_search() {
        let records = sample();
        let filtered = filter_quotes(&records, &StatusFilter::Only(QuoteStatus::Cancelado), "aero");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 4);
        assert_eq!(StatusFilter::options().len(), 5);
    }

    #[test]
    fn counters_per_status() {
        assert_eq!(
            status_counters(&sample()),
            StatusCounters {
                total: 4,
                pending: 1,
                sent: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn replace_and_remove_rows() {
        let mut records = sample();
        let mut updated = records[0].clone();
        updated.estado = QuoteStatus::Enviado;
        assert!(replace_record(&mut records, updated));
        assert_eq!(records[0].estado, QuoteStatus::Enviado);

        assert!(remove_record(&mut records, 2));
        assert!(!remove_record(&mut records, 2));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn draft_applies_calculator_values() {
        let record = QuoteRecord {
            id: 8,
            costo: Some(100.0),
            margen_ganancia_pct: Some(10.0),
            ..Default::default()
        };
        let mut draft = QuoteDraft::from_record(&record);
        assert_eq!(draft.cost, "100");

        draft.apply(AppliedMargin {
            cost: Some(120.0),
            margin_pct: Some(15.0),
            sale_price: Some(141.18),
        });
        let next = draft.to_record(&record).unwrap();
        assert_eq!(next.costo, Some(120.0));
        assert_eq!(next.margen_ganancia_pct, Some(15.0));
        assert_eq!(record.costo, Some(100.0));
    }

    #[test]
    fn draft_rejects_bad_numbers() {
        let record = QuoteRecord::default();
        let draft = |cost: &str, margin: &str| QuoteDraft {
            cost: cost.into(),
            margin_pct: margin.into(),
        };
        assert_eq!(draft("0", "").to_record(&record), Err(DraftError::InvalidCost));
        assert_eq!(draft("abc", "").to_record(&record), Err(DraftError::InvalidCost));
        assert_eq!(draft("50", "120").to_record(&record), Err(DraftError::InvalidMargin));
        assert_eq!(
            draft("50,5", "").to_record(&record).unwrap().costo,
            Some(50.5)
        );
    }
}
