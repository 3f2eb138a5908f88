//! Core portfolio logic: holdings, ordering, calendar and wallet helpers

pub mod config;
pub mod date;
pub mod holding;
pub mod log;
pub mod sort;
pub mod wallet;

// Re-export main types for cleaner imports
pub use date::{DateError, count_weekday_occurrences, parse_date, parse_weekday_name};
pub use holding::AssetHolding;
pub use sort::{SortCriterion, SortError, SortFilter, compare, make_sort_function, sort_holdings};
pub use wallet::{WalletError, WalletSession};
