pub mod badges;
pub mod margin_calculator;
pub mod metric_card;
pub mod quote_comparator;
pub mod toast;

pub use margin_calculator::MarginCalculator;
pub use quote_comparator::QuoteComparator;
