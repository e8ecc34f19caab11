//! Local ordering and summary statistics over a request's quotes.

use std::cmp::Ordering;

use super::entities::ComparativeQuote;

/// Sort keys offered by the comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteSort {
    /// Cheapest provider cost first.
    #[default]
    Cost,
    /// Highest margin first.
    Margin,
    /// Highest ROI first.
    Roi,
}

impl QuoteSort {
    pub const ALL: [QuoteSort; 3] = [QuoteSort::Cost, QuoteSort::Margin, QuoteSort::Roi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cost => "Menor Costo",
            Self::Margin => "Mayor Margen",
            Self::Roi => "Mayor ROI",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Cost => "costo",
            Self::Margin => "margen",
            Self::Roi => "roi",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "costo" => Some(Self::Cost),
            "margen" => Some(Self::Margin),
            "roi" => Some(Self::Roi),
            _ => None,
        }
    }

    fn value(&self, quote: &ComparativeQuote) -> f64 {
        match self {
            Self::Cost => quote.costo_proveedor,
            Self::Margin => quote.margen_ganancia_pct,
            Self::Roi => quote.roi,
        }
        .unwrap_or(0.0)
    }
}

/// Table or card layout. Both render the same sorted sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

/// Returns a new sequence ordered by `sort`. The input is left untouched and ties keep input order.
pub fn sorted_quotes(quotes: &[ComparativeQuote], sort: QuoteSort) -> Vec<ComparativeQuote> {
    let mut ordered = quotes.to_vec();
    // `sort_by` is stable.
    ordered.sort_by(|a, b| {
        let (a_value, b_value) = (sort.value(a), sort.value(b));
        let ord = a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal);
        match sort {
            QuoteSort::Cost => ord,
            QuoteSort::Margin | QuoteSort::Roi => ord.reverse(),
        }
    });
    ordered
}

/// Arithmetic means over the loaded set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonSummary {
    pub count: usize,
    pub average_cost: f64,
    pub average_margin: f64,
    pub average_roi: f64,
}

/// Missing values count as 0 and the divisor is the full count, so incomplete data pulls
/// averages down. Returns `None` for an empty set.
pub fn comparison_summary(quotes: &[ComparativeQuote]) -> Option<ComparisonSummary> {
    if quotes.is_empty() {
        return None;
    }

    let count = quotes.len();
    let mean = |sort: QuoteSort| quotes.iter().map(|q| sort.value(q)).sum::<f64>() / count as f64;

    Some(ComparisonSummary {
        count,
        average_cost: mean(QuoteSort::Cost),
        average_margin: mean(QuoteSort::Margin),
        average_roi: mean(QuoteSort::Roi),
    })
}

/// Medal shown for the top three server-assigned ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Gold => "#FFD700",
            Self::Silver => "#C0C0C0",
            Self::Bronze => "#CD7F32",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Unranked,
    Medal(Medal),
    Position(u32),
}

impl RankBadge {
    pub fn text(&self) -> String {
        match self {
            Self::Unranked => "-".to_string(),
            Self::Medal(medal) => medal.icon().to_string(),
            Self::Position(position) => format!("#{position}"),
        }
    }
}

pub fn rank_badge(rank: Option<u32>) -> RankBadge {
    match rank {
        None | Some(0) => RankBadge::Unranked,
        Some(1) => RankBadge::Medal(Medal::Gold),
        Some(2) => RankBadge::Medal(Medal::Silver),
        Some(3) => RankBadge::Medal(Medal::Bronze),
        Some(other) => RankBadge::Position(other),
    }
}

/// Colour band for margin and ROI percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricLevel {
    High,
    Medium,
    Low,
}

pub fn metric_level(value: Option<f64>) -> MetricLevel {
    match value {
        Some(v) if v >= 20.0 => MetricLevel::High,
        Some(v) if v >= 10.0 => MetricLevel::Medium,
        _ => MetricLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quote(id: i64, cost: Option<f64>, margin: Option<f64>, roi: Option<f64>) -> ComparativeQuote {
        ComparativeQuote {
            id,
            costo_proveedor: cost,
            margen_ganancia_pct: margin,
            roi,
            ..Default::default()
        }
    }

    fn ids(quotes: &[ComparativeQuote]) -> Vec<i64> {
        quotes.iter().map(|q| q.id).collect()
    }

    #[test]
    fn cost_sort_orders_cheapest_first() {
        let quotes = vec![
            quote(1, Some(500.0), None, None),
            quote(2, Some(200.0), None, None),
            quote(3, Some(800.0), None, None),
        ];
        let sorted = sorted_quotes(&quotes, QuoteSort::Cost);
        let costs: Vec<_> = sorted.iter().map(|q| q.costo_proveedor.unwrap()).collect();
        assert_eq!(costs, vec![200.0, 500.0, 800.0]);
        // input untouched
        assert_eq!(ids(&quotes), vec![1, 2, 3]);
    }

    #[test]
    fn missing_cost_sorts_as_zero() {
        let quotes = vec![
            quote(1, Some(50.0), None, None),
            quote(2, None, None, None),
            quote(3, Some(-5.0), None, None),
        ];
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Cost)), vec![3, 2, 1]);
    }

    #[test]
    fn margin_and_roi_sort_descending() {
        let quotes = vec![
            quote(1, None, Some(12.0), Some(5.0)),
            quote(2, None, None, Some(40.0)),
            quote(3, None, Some(25.0), None),
        ];
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Margin)), vec![3, 1, 2]);
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Roi)), vec![2, 1, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let quotes = vec![
            quote(4, Some(100.0), Some(10.0), None),
            quote(1, Some(100.0), Some(10.0), None),
            quote(9, None, None, None),
            quote(2, Some(100.0), Some(10.0), None),
        ];
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Cost)), vec![9, 4, 1, 2]);
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Margin)), vec![4, 1, 2, 9]);
        // all missing roi: identical keys, original order
        assert_eq!(ids(&sorted_quotes(&quotes, QuoteSort::Roi)), vec![4, 1, 9, 2]);
    }

    #[test]
    fn sorted_sequences_are_monotonic() {
        let values = [Some(3.5), None, Some(120.0), Some(0.0), Some(42.0), None, Some(7.25)];
        let quotes: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, v)| quote(i as i64, *v, v.map(|x| x / 2.0), v.map(|x| x * 3.0)))
            .collect();

        let by_cost = sorted_quotes(&quotes, QuoteSort::Cost);
        assert!(by_cost
            .windows(2)
            .all(|w| w[0].costo_proveedor.unwrap_or(0.0) <= w[1].costo_proveedor.unwrap_or(0.0)));

        let by_margin = sorted_quotes(&quotes, QuoteSort::Margin);
        assert!(by_margin.windows(2).all(|w| {
            w[0].margen_ganancia_pct.unwrap_or(0.0) >= w[1].margen_ganancia_pct.unwrap_or(0.0)
        }));

        let by_roi = sorted_quotes(&quotes, QuoteSort::Roi);
        assert!(by_roi
            .windows(2)
            .all(|w| w[0].roi.unwrap_or(0.0) >= w[1].roi.unwrap_or(0.0)));
    }

    #[test]
    fn averages_divide_by_total_count() {
        let quotes = vec![
            quote(1, Some(100.0), Some(10.0), Some(30.0)),
            quote(2, None, Some(20.0), None),
            quote(3, Some(200.0), None, Some(15.0)),
            quote(4, Some(100.0), Some(30.0), None),
        ];
        let summary = comparison_summary(&quotes).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.average_cost, 100.0);
        assert_eq!(summary.average_margin, 15.0);
        assert_eq!(summary.average_roi, 11.25);
    }

    #[test]
    fn empty_set_has_no_summary() {
        assert_eq!(comparison_summary(&[]), None);
    }

    #[test]
    fn medals_cover_top_three_ranks_only() {
        assert_eq!(rank_badge(None), RankBadge::Unranked);
        assert_eq!(rank_badge(Some(1)), RankBadge::Medal(Medal::Gold));
        assert_eq!(rank_badge(Some(2)), RankBadge::Medal(Medal::Silver));
        assert_eq!(rank_badge(Some(3)), RankBadge::Medal(Medal::Bronze));
        assert_eq!(rank_badge(Some(4)).text(), "#4");
        assert_eq!(rank_badge(None).text(), "-");
    }

    #[test]
    fn metric_levels_use_ten_and_twenty_thresholds() {
        assert_eq!(metric_level(Some(20.0)), MetricLevel::High);
        assert_eq!(metric_level(Some(19.99)), MetricLevel::Medium);
        assert_eq!(metric_level(Some(10.0)), MetricLevel::Medium);
        assert_eq!(metric_level(Some(9.5)), MetricLevel::Low);
        assert_eq!(metric_level(None), MetricLevel::Low);
    }

    #[test]
    fn sort_keys_round_trip() {
        for sort in QuoteSort::ALL {
            assert_eq!(QuoteSort::from_key(sort.key()), Some(sort));
        }
        assert_eq!(QuoteSort::from_key("precio"), None);
    }
}
