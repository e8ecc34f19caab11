//! Allowed quote status transitions.

use thiserror::Error;

use super::entities::{QuoteRecord, QuoteStatus};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no se puede pasar de {from} a {to}")]
pub struct TransitionError {
    pub from: QuoteStatus,
    pub to: QuoteStatus,
}

/// Statuses reachable from `status` in one step. Completed and cancelled quotes are final.
pub fn next_statuses(status: &QuoteStatus) -> &'static [QuoteStatus] {
    static FROM_PENDING: [QuoteStatus; 2] = [QuoteStatus::Enviado, QuoteStatus::Cancelado];
    static FROM_SENT: [QuoteStatus; 2] = [QuoteStatus::Completado, QuoteStatus::Cancelado];

    match status {
        QuoteStatus::Pendiente => &FROM_PENDING,
        QuoteStatus::Enviado => &FROM_SENT,
        _ => &[],
    }
}

pub fn can_transition(from: &QuoteStatus, to: &QuoteStatus) -> bool {
    next_statuses(from).contains(to)
}

/// Full replacement payload carrying the new status. The original record is left as is so
/// the caller can keep showing it until the backend confirms.
pub fn with_status(record: &QuoteRecord, to: QuoteStatus) -> Result<QuoteRecord, TransitionError> {
    if !can_transition(&record.estado, &to) {
        return Err(TransitionError {
            from: record.estado.clone(),
            to,
        });
    }
    let mut next = record.clone();
    next.estado = to;
    Ok(next)
}

/// Action label shown for a transition button.
pub fn transition_label(to: &QuoteStatus) -> &'static str {
    match to {
        QuoteStatus::Enviado => "Marcar enviada",
        QuoteStatus::Completado => "Completar",
        QuoteStatus::Cancelado => "Cancelar",
        _ => "Cambiar estado",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pending_moves_to_sent_or_cancelled() {
        assert!(can_transition(&QuoteStatus::Pendiente, &QuoteStatus::Enviado));
        assert!(can_transition(&QuoteStatus::Pendiente, &QuoteStatus::Cancelado));
        assert!(!can_transition(&QuoteStatus::Pendiente, &QuoteStatus::Completado));
    }

    #[test]
    fn sent_moves_to_completed_or_cancelled() {
        assert_eq!(
            next_statuses(&QuoteStatus::Enviado),
            &[QuoteStatus::Completado, QuoteStatus::Cancelado]
        );
        assert!(!can_transition(&QuoteStatus::Enviado, &QuoteStatus::Pendiente));
    }

    #[test]
    fn final_states_have_no_exit() {
        assert!(next_statuses(&QuoteStatus::Completado).is_empty());
        assert!(next_statuses(&QuoteStatus::Cancelado).is_empty());
        assert!(next_statuses(&QuoteStatus::Other("ARCHIVADO".into())).is_empty());
    }

    #[test]
    fn with_status_copies_record() {
        let record = QuoteRecord {
            id: 4,
            origen: "Monterrey".into(),
            destino: "Laredo".into(),
            costo: Some(900.0),
            ..Default::default()
        };
        let next = with_status(&record, QuoteStatus::Enviado).unwrap();
        assert_eq!(next.estado, QuoteStatus::Enviado);
        assert_eq!(next.costo, Some(900.0));
        assert_eq!(record.estado, QuoteStatus::Pendiente);

        let err = with_status(&record, QuoteStatus::Completado).unwrap_err();
        assert_eq!(err.to_string(), "no se puede pasar de PENDIENTE a COMPLETADO");
    }
}
