//! Margin calculator inputs, validation and the fields it hands back to a quote form.

use thiserror::Error;

use super::entities::{MarginCalculation, RequestId};

pub const DEFAULT_MARGIN_PCT: &str = "15";

/// Raw text inputs, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginForm {
    pub provider_cost: String,
    pub additional_costs: String,
    pub desired_margin_pct: String,
}

impl Default for MarginForm {
    fn default() -> Self {
        Self {
            provider_cost: String::new(),
            additional_costs: String::new(),
            desired_margin_pct: DEFAULT_MARGIN_PCT.to_string(),
        }
    }
}

/// Validated parameters for one calculation request.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginRequest {
    pub provider_cost: f64,
    pub additional_costs: Option<f64>,
    pub desired_margin_pct: Option<f64>,
    pub request_id: Option<RequestId>,
}

impl MarginRequest {
    /// Query pairs in the order the backend documents them. Absent optionals are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("costoProveedor", self.provider_cost.to_string())];
        if let Some(extra) = self.additional_costs {
            pairs.push(("costosAdicionales", extra.to_string()));
        }
        if let Some(margin) = self.desired_margin_pct {
            pairs.push(("margenDeseadoPct", margin.to_string()));
        }
        if let Some(id) = self.request_id {
            pairs.push(("solicitudId", id.to_string()));
        }
        pairs
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum MarginFormError {
    #[error("Debes ingresar un costo de proveedor válido")]
    InvalidProviderCost,
    #[error("Los costos adicionales no pueden ser negativos")]
    NegativeAdditionalCosts,
    #[error("El margen deseado debe estar entre 0 y 100")]
    MarginOutOfRange,
    #[error("'{0}' no es un número válido")]
    NotANumber(String),
}

impl MarginForm {
    pub fn validate(&self, request_id: Option<RequestId>) -> Result<MarginRequest, MarginFormError> {
        let provider_cost = parse_optional(&self.provider_cost)
            .map_err(|_| MarginFormError::InvalidProviderCost)?
            .filter(|cost| *cost > 0.0)
            .ok_or(MarginFormError::InvalidProviderCost)?;

        let additional_costs = parse_optional(&self.additional_costs)?;
        if additional_costs.map(|v| v < 0.0).unwrap_or(false) {
            return Err(MarginFormError::NegativeAdditionalCosts);
        }

        let desired_margin_pct = parse_optional(&self.desired_margin_pct)?;
        if desired_margin_pct
            .map(|v| !(0.0..=100.0).contains(&v))
            .unwrap_or(false)
        {
            return Err(MarginFormError::MarginOutOfRange);
        }

        Ok(MarginRequest {
            provider_cost,
            additional_costs,
            desired_margin_pct,
            request_id,
        })
    }
}

fn parse_optional(raw: &str) -> Result<Option<f64>, MarginFormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| MarginFormError::NotANumber(trimmed.to_string()))
}

/// Values a calculation contributes to the quote being edited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedMargin {
    pub cost: Option<f64>,
    pub margin_pct: Option<f64>,
    pub sale_price: Option<f64>,
}

impl From<&MarginCalculation> for AppliedMargin {
    fn from(result: &MarginCalculation) -> Self {
        Self {
            cost: result.costo_total,
            margin_pct: result.margen_deseado_pct,
            sale_price: result.precio_venta_sugerido,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(cost: &str, extra: &str, margin: &str) -> MarginForm {
        MarginForm {
            provider_cost: cost.into(),
            additional_costs: extra.into(),
            desired_margin_pct: margin.into(),
        }
    }

    #[test]
    fn default_form_uses_fifteen_percent() {
        let form = MarginForm::default();
        assert_eq!(form.desired_margin_pct, "15");
        assert!(form.provider_cost.is_empty());
        assert!(form.additional_costs.is_empty());
    }

    #[test]
    fn provider_cost_must_be_positive() {
        for cost in ["", "   ", "0", "-10", "abc"] {
            assert_eq!(
                form(cost, "", "15").validate(None),
                Err(MarginFormError::InvalidProviderCost),
                "cost {cost:?}"
            );
        }
    }

    #[test]
    fn optional_fields_are_omitted_from_query() {
        let request = form("100", "", "").validate(None).unwrap();
        assert_eq!(request.query_pairs(), vec![("costoProveedor", "100".to_string())]);
    }

    #[test]
    fn full_request_encodes_all_pairs() {
        let request = form("100", "20", "15").validate(Some(42)).unwrap();
        assert_eq!(
            request.query_pairs(),
            vec![
                ("costoProveedor", "100".to_string()),
                ("costosAdicionales", "20".to_string()),
                ("margenDeseadoPct", "15".to_string()),
                ("solicitudId", "42".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_negative_extras_and_out_of_range_margin() {
        assert_eq!(
            form("100", "-1", "15").validate(None),
            Err(MarginFormError::NegativeAdditionalCosts)
        );
        assert_eq!(
            form("100", "0", "120").validate(None),
            Err(MarginFormError::MarginOutOfRange)
        );
        assert_eq!(
            form("100", "x", "15").validate(None),
            Err(MarginFormError::NotANumber("x".into()))
        );
        assert!(form("100", "0", "0").validate(None).is_ok());
        assert!(form("100", "0", "100").validate(None).is_ok());
    }

    #[test]
    fn accepts_decimal_comma() {
        let request = form("99,5", "", "15").validate(None).unwrap();
        assert_eq!(request.provider_cost, 99.5);
    }

    #[test]
    fn applied_margin_takes_backend_totals() {
        let result = MarginCalculation {
            costo_total: Some(120.0),
            margen_deseado_pct: Some(15.0),
            precio_venta_sugerido: Some(141.18),
            ..Default::default()
        };
        assert_eq!(
            AppliedMargin::from(&result),
            AppliedMargin {
                cost: Some(120.0),
                margin_pct: Some(15.0),
                sale_price: Some(141.18),
            }
        );
    }
}
