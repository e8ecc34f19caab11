use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a shipping request (solicitud).
pub type RequestId = i64;

/// Identifier of a quote (cotizacion).
pub type QuoteId = i64;

/// Transport mode a quote covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportType {
    Terrestre,
    Maritimo,
    Aereo,
    Other(String),
}

impl TransportType {
    /// Display order used by the suggestion grid.
    pub const GROUPED: [TransportType; 3] = [
        TransportType::Aereo,
        TransportType::Maritimo,
        TransportType::Terrestre,
    ];

    pub fn code(&self) -> &str {
        match self {
            Self::Terrestre => "TERRESTRE",
            Self::Maritimo => "MARITIMO",
            Self::Aereo => "AEREO",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Feminine label used on suggestion cards ("carga aérea").
    pub fn label(&self) -> &str {
        match self {
            Self::Terrestre => "TERRESTRE",
            Self::Maritimo => "MARÍTIMA",
            Self::Aereo => "AÉREA",
            Self::Other(raw) => raw.as_str(),
        }
    }

    pub fn default_service(&self) -> &'static str {
        match self {
            Self::Aereo => "Carga General",
            Self::Maritimo => "Contenedor",
            Self::Terrestre => "Trailer",
            Self::Other(_) => "Carga General",
        }
    }
}

impl From<String> for TransportType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TERRESTRE" => Self::Terrestre,
            "MARITIMO" => Self::Maritimo,
            "AEREO" => Self::Aereo,
            _ => Self::Other(value),
        }
    }
}

impl From<TransportType> for String {
    fn from(value: TransportType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle status of a quote.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    Pendiente,
    Enviado,
    Completado,
    Cancelado,
    Other(String),
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Pendiente,
        QuoteStatus::Enviado,
        QuoteStatus::Completado,
        QuoteStatus::Cancelado,
    ];

    pub fn code(&self) -> &str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Enviado => "ENVIADO",
            Self::Completado => "COMPLETADO",
            Self::Cancelado => "CANCELADO",
            Self::Other(raw) => raw.as_str(),
        }
    }

    pub fn plural_label(&self) -> &str {
        match self {
            Self::Pendiente => "Pendientes",
            Self::Enviado => "Enviadas",
            Self::Completado => "Completadas",
            Self::Cancelado => "Canceladas",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for QuoteStatus {
    fn default() -> Self {
        Self::Pendiente
    }
}

impl From<String> for QuoteStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDIENTE" => Self::Pendiente,
            "ENVIADO" => Self::Enviado,
            "COMPLETADO" => Self::Completado,
            "CANCELADO" => Self::Cancelado,
            _ => Self::Other(value),
        }
    }
}

impl From<QuoteStatus> for String {
    fn from(value: QuoteStatus) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Backend-derived validity of a quote relative to today.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValidityState {
    Vigente,
    ProximoAVencer,
    Vencido,
    SinFecha,
    Other(String),
}

impl ValidityState {
    pub fn label(&self) -> &str {
        match self {
            Self::Vigente => "VIGENTE",
            Self::ProximoAVencer => "PRÓXIMO A VENCER",
            Self::Vencido => "VENCIDO",
            Self::SinFecha => "SIN FECHA",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ValidityState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VIGENTE" => Self::Vigente,
            "PRÓXIMO A VENCER" => Self::ProximoAVencer,
            "VENCIDO" => Self::Vencido,
            "SIN FECHA" => Self::SinFecha,
            _ => Self::Other(value),
        }
    }
}

impl From<ValidityState> for String {
    fn from(value: ValidityState) -> Self {
        value.label().to_string()
    }
}

/// Backend tier describing how attractive a quote's price is against market data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Competitiveness {
    MuyCompetitivo,
    Competitivo,
    PocoCompetitivo,
    Other(String),
}

impl Competitiveness {
    pub fn label(&self) -> &str {
        match self {
            Self::MuyCompetitivo => "MUY COMPETITIVO",
            Self::Competitivo => "COMPETITIVO",
            Self::PocoCompetitivo => "POCO COMPETITIVO",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Competitiveness {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MUY COMPETITIVO" => Self::MuyCompetitivo,
            "COMPETITIVO" => Self::Competitivo,
            "POCO COMPETITIVO" => Self::PocoCompetitivo,
            _ => Self::Other(value),
        }
    }
}

impl From<Competitiveness> for String {
    fn from(value: Competitiveness) -> Self {
        value.label().to_string()
    }
}

/// Where a suggested price sits against the market range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarketPosition {
    EnRango,
    PorDebajo,
    PorEncima,
    Other(String),
}

impl MarketPosition {
    pub fn label(&self) -> &str {
        match self {
            Self::EnRango => "EN RANGO",
            Self::PorDebajo => "POR DEBAJO",
            Self::PorEncima => "POR ENCIMA",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for MarketPosition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "EN RANGO" => Self::EnRango,
            "POR DEBAJO" => Self::PorDebajo,
            "POR ENCIMA" => Self::PorEncima,
            _ => Self::Other(value),
        }
    }
}

impl From<MarketPosition> for String {
    fn from(value: MarketPosition) -> Self {
        value.label().to_string()
    }
}

/// A quote as served by the comparison endpoint. Every metric is computed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparativeQuote {
    pub id: QuoteId,
    pub folio_codigo: Option<String>,
    pub proveedor_nombre: Option<String>,
    pub proveedor_pais: Option<String>,
    pub tipo_transporte: Option<TransportType>,
    pub origen: Option<String>,
    pub destino: Option<String>,
    pub tipo_unidad: Option<String>,
    pub tiempo_estimado: Option<String>,
    pub costo_proveedor: Option<f64>,
    pub margen_ganancia_pct: Option<f64>,
    pub precio_venta: Option<f64>,
    pub utilidad_estimada: Option<f64>,
    pub dias_credito: Option<i32>,
    pub valido_hasta: Option<String>,
    pub costo_por_km: Option<f64>,
    pub roi: Option<f64>,
    pub dias_vigencia_restantes: Option<i32>,
    pub estado_vigencia: Option<ValidityState>,
    pub nivel_competitividad: Option<Competitiveness>,
    pub ranking_por_costo: Option<u32>,
    pub ranking_por_margen: Option<u32>,
    pub estado: Option<QuoteStatus>,
    pub tiene_descuento_volumen: Option<bool>,
    pub proveedor_preferido: Option<bool>,
}

/// Pricing breakdown returned by the margin calculation endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarginCalculation {
    pub costo_proveedor: Option<f64>,
    pub costos_adicionales: Option<f64>,
    pub costo_total: Option<f64>,
    pub margen_deseado_pct: Option<f64>,
    pub margen_minimo_pct: Option<f64>,
    pub precio_venta_sugerido: Option<f64>,
    pub precio_venta_minimo: Option<f64>,
    pub utilidad_estimada: Option<f64>,
    pub utilidad_minima: Option<f64>,
    pub precio_mercado_promedio: Option<f64>,
    pub precio_mercado_minimo: Option<f64>,
    pub precio_mercado_maximo: Option<f64>,
    pub posicion_mercado: Option<MarketPosition>,
    pub recomendacion: Option<String>,
    pub alertas: Option<String>,
    pub roi: Option<f64>,
    pub dias_pago_proveedor: Option<i32>,
    pub dias_cobro_cliente: Option<i32>,
    pub impacto_flujo_caja: Option<f64>,
}

impl MarginCalculation {
    /// Market analysis is only meaningful when the backend found comparable prices.
    pub fn has_market_data(&self) -> bool {
        self.precio_mercado_promedio.map(|avg| avg > 0.0).unwrap_or(false)
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.recomendacion.as_deref().filter(|text| !text.is_empty())
    }

    pub fn alert(&self) -> Option<&str> {
        self.alertas.as_deref().filter(|text| !text.is_empty())
    }
}

/// Reference to the request a quote belongs to, as nested in list payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRef {
    #[serde(default)]
    pub id: Option<RequestId>,
    #[serde(default)]
    pub folio_codigo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to the provider a quote belongs to, as nested in list payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A quote as served by the list endpoint and sent back on full replacement.
///
/// Fields the console does not model are kept in `extra` so a `PUT` round-trips them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub id: QuoteId,
    #[serde(default)]
    pub solicitud: Option<RequestRef>,
    #[serde(default)]
    pub proveedor: Option<ProviderRef>,
    #[serde(default)]
    pub tipo_transporte: Option<TransportType>,
    #[serde(default)]
    pub origen: String,
    #[serde(default)]
    pub destino: String,
    #[serde(default)]
    pub tipo_unidad: Option<String>,
    #[serde(default)]
    pub tiempo_estimado: Option<String>,
    #[serde(default)]
    pub costo: Option<f64>,
    #[serde(default)]
    pub valido_hasta: Option<String>,
    #[serde(default)]
    pub dias_credito: Option<i32>,
    #[serde(default)]
    pub margen_ganancia_pct: Option<f64>,
    #[serde(default)]
    pub estado: QuoteStatus,
    #[serde(default)]
    pub creado_en: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteRecord {
    pub fn provider_name(&self) -> Option<&str> {
        self.proveedor.as_ref().and_then(|p| p.nombre.as_deref())
    }

    pub fn request_folio(&self) -> Option<&str> {
        self.solicitud.as_ref().and_then(|s| s.folio_codigo.as_deref())
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.solicitud.as_ref().and_then(|s| s.id)
    }
}

/// A past quote the backend proposes for reuse on a new request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSuggestion {
    pub id: QuoteId,
    pub folio_solicitud: Option<String>,
    pub proveedor_nombre: Option<String>,
    pub tipo_transporte: Option<TransportType>,
    pub origen: Option<String>,
    pub destino: Option<String>,
    pub tipo_unidad: Option<String>,
    pub tiempo_estimado: Option<String>,
    pub costo: Option<f64>,
    pub valido_hasta: Option<String>,
    pub dias_credito: Option<i32>,
    pub margen_ganancia_pct: Option<f64>,
    pub puntuacion: Option<f64>,
    pub razon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comparative_quote_tolerates_missing_metrics() {
        let quote: ComparativeQuote = serde_json::from_value(serde_json::json!({
            "id": 7,
            "proveedorNombre": "Transportes Norte",
            "tipoTransporte": "TERRESTRE",
            "estadoVigencia": "PRÓXIMO A VENCER",
            "nivelCompetitividad": "MUY COMPETITIVO",
            "rankingPorCosto": 1
        }))
        .unwrap();

        assert_eq!(quote.id, 7);
        assert_eq!(quote.tipo_transporte, Some(TransportType::Terrestre));
        assert_eq!(quote.estado_vigencia, Some(ValidityState::ProximoAVencer));
        assert_eq!(quote.nivel_competitividad, Some(Competitiveness::MuyCompetitivo));
        assert_eq!(quote.costo_proveedor, None);
        assert_eq!(quote.roi, None);
    }

    #[test]
    fn unknown_enum_values_are_kept_verbatim() {
        let transport: TransportType = serde_json::from_str("\"FERROVIARIO\"").unwrap();
        assert_eq!(transport, TransportType::Other("FERROVIARIO".into()));
        assert_eq!(serde_json::to_string(&transport).unwrap(), "\"FERROVIARIO\"");
    }

    #[test]
    fn quote_record_round_trips_unmodelled_fields() {
        let raw = serde_json::json!({
            "id": 3,
            "solicitud": { "id": 11, "folioCodigo": "SOL-0011", "cliente": { "id": 2 } },
            "proveedor": { "id": 5, "nombre": "Naviera Pacífico", "pais": "MX" },
            "tipoTransporte": "MARITIMO",
            "origen": "Manzanillo",
            "destino": "Shanghai",
            "costo": 1500.0,
            "estado": "ENVIADO",
            "moneda": "USD"
        });
        let record: QuoteRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.estado, QuoteStatus::Enviado);
        assert_eq!(record.provider_name(), Some("Naviera Pacífico"));
        assert_eq!(record.request_folio(), Some("SOL-0011"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["moneda"], "USD");
        assert_eq!(back["proveedor"]["pais"], "MX");
        assert_eq!(back["solicitud"]["cliente"]["id"], 2);
        assert_eq!(back["estado"], "ENVIADO");
    }

    #[test]
    fn market_section_requires_positive_average() {
        let mut calc = MarginCalculation::default();
        assert!(!calc.has_market_data());
        calc.precio_mercado_promedio = Some(0.0);
        assert!(!calc.has_market_data());
        calc.precio_mercado_promedio = Some(980.0);
        assert!(calc.has_market_data());
    }
}
