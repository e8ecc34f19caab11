pub mod calculator;
pub mod comparator;
pub mod login;
pub mod quotes;
pub mod settings;
pub mod suggestions;

pub use calculator::CalculatorPage;
pub use comparator::ComparatorPage;
pub use login::LoginPage;
pub use quotes::QuotesPage;
pub use settings::SettingsPage;
pub use suggestions::SuggestionsPage;
