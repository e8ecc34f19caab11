//! View state of the quote comparator.

use super::comparison::{comparison_summary, sorted_quotes, ComparisonSummary, QuoteSort, ViewMode};
use super::entities::{ComparativeQuote, RequestId};

/// Marks one load. Only the most recently issued ticket may write results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    request_id: RequestId,
}

impl LoadTicket {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }
}

/// What happened to a finished load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed(String),
    /// A newer load was started; the response was dropped.
    Discarded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparatorState {
    pub request_id: Option<RequestId>,
    pub quotes: Vec<ComparativeQuote>,
    pub sort: QuoteSort,
    pub view: ViewMode,
    pub loading: bool,
    generation: u64,
}

impl ComparatorState {
    pub fn begin_load(&mut self, request_id: RequestId) -> LoadTicket {
        self.generation += 1;
        self.request_id = Some(request_id);
        self.loading = true;
        LoadTicket {
            generation: self.generation,
            request_id,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a load result. A failure leaves the list empty; stale tickets change nothing.
    pub fn finish_load<E: std::fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ComparativeQuote>, E>,
    ) -> LoadOutcome {
        if !self.is_current(&ticket) {
            return LoadOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(quotes) => {
                let count = quotes.len();
                self.quotes = quotes;
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                self.quotes.clear();
                LoadOutcome::Failed(err.to_string())
            }
        }
    }

    /// Forgets the current request and invalidates any load in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.request_id = None;
        self.quotes.clear();
        self.loading = false;
    }

    pub fn sorted(&self) -> Vec<ComparativeQuote> {
        sorted_quotes(&self.quotes, self.sort)
    }

    pub fn summary(&self) -> Option<ComparisonSummary> {
        comparison_summary(&self.quotes)
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quotes(costs: &[f64]) -> Vec<ComparativeQuote> {
        costs
            .iter()
            .enumerate()
            .map(|(i, cost)| ComparativeQuote {
                id: i as i64 + 1,
                costo_proveedor: Some(*cost),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn loaded_quotes_are_sorted_by_cost_by_default() {
        let mut state = ComparatorState::default();
        let ticket = state.begin_load(12);
        assert!(state.loading);

        let outcome = state.finish_load::<String>(ticket, Ok(quotes(&[500.0, 200.0, 800.0])));
        assert_eq!(outcome, LoadOutcome::Loaded(3));
        assert!(!state.loading);

        let costs: Vec<_> = state.sorted().iter().map(|q| q.costo_proveedor.unwrap()).collect();
        assert_eq!(costs, vec![200.0, 500.0, 800.0]);
        // stored order is the backend order
        assert_eq!(state.quotes[0].costo_proveedor, Some(500.0));
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let mut state = ComparatorState::default();
        let first = state.begin_load(1);
        state.finish_load::<String>(first, Ok(quotes(&[10.0])));

        let second = state.begin_load(2);
        let outcome = state.finish_load(second, Err("boom"));
        assert_eq!(outcome, LoadOutcome::Failed("boom".into()));
        assert!(state.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ComparatorState::default();
        let old = state.begin_load(1);
        let new = state.begin_load(2);

        let new_outcome = state.finish_load::<String>(new, Ok(quotes(&[300.0, 100.0])));
        assert_eq!(new_outcome, LoadOutcome::Loaded(2));

        // older request resolves last and must not overwrite
        let old_outcome = state.finish_load::<String>(old, Ok(quotes(&[999.0])));
        assert_eq!(old_outcome, LoadOutcome::Discarded);
        assert_eq!(state.quotes.len(), 2);
        assert_eq!(state.request_id, Some(2));
    }

    #[test]
    fn reset_invalidates_in_flight_load() {
        let mut state = ComparatorState::default();
        let ticket = state.begin_load(5);
        state.reset();
        assert_eq!(
            state.finish_load::<String>(ticket, Ok(quotes(&[1.0]))),
            LoadOutcome::Discarded
        );
        assert!(state.is_empty());
        assert_eq!(state.request_id, None);
    }

    #[test]
    fn empty_load_has_no_summary() {
        let mut state = ComparatorState::default();
        let ticket = state.begin_load(3);
        state.finish_load::<String>(ticket, Ok(Vec::new()));
        assert!(state.is_empty());
        assert_eq!(state.summary(), None);
    }

    #[test]
    fn changing_sort_or_view_does_not_touch_data() {
        let mut state = ComparatorState::default();
        let ticket = state.begin_load(3);
        state.finish_load::<String>(ticket, Ok(quotes(&[5.0, 1.0])));
        let before = state.quotes.clone();

        state.sort = QuoteSort::Roi;
        state.view = ViewMode::Cards;
        let _ = state.sorted();
        assert_eq!(state.quotes, before);
    }
}
