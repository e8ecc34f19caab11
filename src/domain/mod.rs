//! Domain logic for quoting, comparison and quote workflow lives here.

pub mod app_state;
pub mod calculator;
pub mod comparator;
pub mod comparison;
pub mod entities;
pub mod margin;
pub mod quotes;
pub mod suggestions;
pub mod workflow;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, Role, Session};
#[allow(unused_imports)]
pub use calculator::CalculatorState;
#[allow(unused_imports)]
pub use comparator::{ComparatorState, LoadOutcome, LoadTicket};
#[allow(unused_imports)]
pub use comparison::{
    comparison_summary, metric_level, rank_badge, sorted_quotes, ComparisonSummary, Medal,
    MetricLevel, QuoteSort, RankBadge, ViewMode,
};
#[allow(unused_imports)]
pub use entities::{
    ComparativeQuote, Competitiveness, MarginCalculation, MarketPosition, ProviderRef, QuoteId,
    QuoteRecord, QuoteStatus, QuoteSuggestion, RequestId, RequestRef, TransportType,
    ValidityState,
};
#[allow(unused_imports)]
pub use margin::{AppliedMargin, MarginForm, MarginFormError, MarginRequest};
#[allow(unused_imports)]
pub use quotes::{
    filter_quotes, remove_record, replace_record, status_counters, DraftError, QuoteDraft,
    StatusCounters, StatusFilter,
};
#[allow(unused_imports)]
pub use suggestions::{best_per_transport, service_type, validity_label, SuggestionSlot};
#[allow(unused_imports)]
pub use workflow::{can_transition, next_statuses, transition_label, with_status, TransitionError};
