use super::entities::{MarginCalculation, RequestId};
use super::margin::{AppliedMargin, MarginForm, MarginFormError, MarginRequest};

/// State behind the margin calculator widget.
///
/// `submit` is the only way to obtain a [`MarginRequest`], so an invalid form can never reach
/// the network.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    pub form: MarginForm,
    pub request_id: Option<RequestId>,
    pub result: Option<MarginCalculation>,
    pub loading: bool,
}

impl CalculatorState {
    pub fn for_request(request_id: Option<RequestId>) -> Self {
        Self {
            request_id,
            ..Default::default()
        }
    }

    pub fn submit(&mut self) -> Result<MarginRequest, MarginFormError> {
        let request = self.form.validate(self.request_id)?;
        self.loading = true;
        Ok(request)
    }

    /// Stores a successful result. A failure keeps whatever was shown before.
    pub fn complete<E>(&mut self, result: Result<MarginCalculation, E>) -> Result<(), E> {
        self.loading = false;
        self.result = Some(result?);
        Ok(())
    }

    pub fn applied(&self) -> Option<AppliedMargin> {
        self.result.as_ref().map(AppliedMargin::from)
    }

    pub fn clear(&mut self) {
        self.form = MarginForm::default();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_cost_never_yields_a_request() {
        let mut state = CalculatorState::for_request(Some(9));
        state.form.provider_cost = "0".into();
        assert_eq!(state.submit(), Err(MarginFormError::InvalidProviderCost));
        assert!(!state.loading);
        assert!(state.result.is_none());
    }

    #[test]
    fn backend_total_is_shown_unmodified() {
        let mut state = CalculatorState::for_request(None);
        state.form.provider_cost = "100".into();
        state.form.additional_costs = "20".into();
        state.form.desired_margin_pct = "15".into();

        let request = state.submit().unwrap();
        assert!(state.loading);
        assert_eq!(request.provider_cost, 100.0);

        let backend = MarginCalculation {
            costo_proveedor: Some(100.0),
            costos_adicionales: Some(20.0),
            costo_total: Some(120.0),
            margen_deseado_pct: Some(15.0),
            precio_venta_sugerido: Some(141.18),
            ..Default::default()
        };
        state.complete::<String>(Ok(backend.clone())).unwrap();

        assert!(!state.loading);
        assert_eq!(state.result.as_ref(), Some(&backend));
        assert_eq!(state.result.as_ref().and_then(|r| r.costo_total), Some(120.0));
        assert_eq!(state.applied().and_then(|a| a.cost), Some(120.0));
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut state = CalculatorState::default();
        state.result = Some(MarginCalculation {
            costo_total: Some(50.0),
            ..Default::default()
        });
        state.form.provider_cost = "10".into();
        state.submit().unwrap();

        let err = state.complete(Err("sin conexión")).unwrap_err();
        assert_eq!(err, "sin conexión");
        assert!(!state.loading);
        assert_eq!(state.result.as_ref().and_then(|r| r.costo_total), Some(50.0));
    }

    #[test]
    fn clear_restores_defaults_and_drops_result() {
        let mut state = CalculatorState::for_request(Some(3));
        state.form.provider_cost = "100".into();
        state.form.desired_margin_pct = "30".into();
        state.result = Some(MarginCalculation::default());

        state.clear();
        assert_eq!(state.form, MarginForm::default());
        assert!(state.result.is_none());
        assert!(state.applied().is_none());
        assert_eq!(state.request_id, Some(3));
    }
}
