//! Ordering of asset holdings for the holdings view.
//!
//! Every criterion has a natural direction: higher values and later dates
//! first, except [`SortCriterion::Name`] which sorts A to Z. Reversal flips
//! the natural comparator as a whole.

use crate::core::holding::AssetHolding;
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Invalid sort criterion: {0}")]
    InvalidCriterion(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    Name,
    Value,
    Apr,
    InitialLaunch,
    Occupancy,
    Rent,
    Token,
    RentStart,
    TotalUnit,
    RentedUnit,
    Supply,
}

impl SortCriterion {
    /// Criteria in the order the selector presents them.
    pub const ALL: [SortCriterion; 11] = [
        SortCriterion::Name,
        SortCriterion::Value,
        SortCriterion::Apr,
        SortCriterion::InitialLaunch,
        SortCriterion::Occupancy,
        SortCriterion::Rent,
        SortCriterion::Token,
        SortCriterion::RentStart,
        SortCriterion::TotalUnit,
        SortCriterion::RentedUnit,
        SortCriterion::Supply,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortCriterion::Name => "name",
            SortCriterion::Value => "value",
            SortCriterion::Apr => "apr",
            SortCriterion::InitialLaunch => "initial-launch",
            SortCriterion::Occupancy => "occupancy",
            SortCriterion::Rent => "rent",
            SortCriterion::Token => "token",
            SortCriterion::RentStart => "rent-start",
            SortCriterion::TotalUnit => "total-unit",
            SortCriterion::RentedUnit => "rented-unit",
            SortCriterion::Supply => "supply",
        }
    }

    /// Key used to look up the localized option label.
    pub fn translation_key(&self) -> &'static str {
        match self {
            SortCriterion::Name => "sortOptions.name",
            SortCriterion::Value => "sortOptions.value",
            SortCriterion::Apr => "sortOptions.apr",
            SortCriterion::InitialLaunch => "sortOptions.initialLaunch",
            SortCriterion::Occupancy => "sortOptions.occupancy",
            SortCriterion::Rent => "sortOptions.rent",
            SortCriterion::Token => "sortOptions.token",
            SortCriterion::RentStart => "sortOptions.rentStart",
            SortCriterion::TotalUnit => "sortOptions.totalUnit",
            SortCriterion::RentedUnit => "sortOptions.rentedUnit",
            SortCriterion::Supply => "sortOptions.supply",
        }
    }

    /// English label, used when no translation is available.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::Name => "Name",
            SortCriterion::Value => "Value",
            SortCriterion::Apr => "APR",
            SortCriterion::InitialLaunch => "Initial launch",
            SortCriterion::Occupancy => "Occupancy",
            SortCriterion::Rent => "Rent",
            SortCriterion::Token => "Tokens",
            SortCriterion::RentStart => "Rent start",
            SortCriterion::TotalUnit => "Total units",
            SortCriterion::RentedUnit => "Rented units",
            SortCriterion::Supply => "Supply",
        }
    }

    /// Compares two holdings in the natural order of this criterion.
    pub fn compare(&self, a: &AssetHolding, b: &AssetHolding) -> Ordering {
        match self {
            SortCriterion::Name => compare_names(&a.short_name, &b.short_name),
            SortCriterion::Value => higher_first(a.value, b.value),
            SortCriterion::Apr => {
                higher_first(a.annual_percentage_yield, b.annual_percentage_yield)
            }
            SortCriterion::Rent => higher_first(a.daily_rent(), b.daily_rent()),
            SortCriterion::RentStart => b.rent_start_date.cmp(&a.rent_start_date),
            SortCriterion::Supply => higher_first(a.total_investment, b.total_investment),
            SortCriterion::Token => higher_first(a.amount, b.amount),
            SortCriterion::TotalUnit => b.total_units.cmp(&a.total_units),
            SortCriterion::RentedUnit => b.rented_units.cmp(&a.rented_units),
            SortCriterion::Occupancy => {
                let (x, y) = (a.occupancy(), b.occupancy());
                if x.is_nan() || y.is_nan() {
                    trace!(
                        a = %a.short_name,
                        b = %b.short_name,
                        "Occupancy undefined for a property without units"
                    );
                }
                higher_first(x, y)
            }
            SortCriterion::InitialLaunch => b.initial_launch_date.cmp(&a.initial_launch_date),
        }
    }
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SortCriterion {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.id() == normalized)
            .ok_or_else(|| SortError::InvalidCriterion(s.to_string()))
    }
}

/// Sort settings chosen in the holdings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortFilter {
    pub sort_by: SortCriterion,
    #[serde(default)]
    pub sort_reverse: bool,
}

impl Default for SortFilter {
    fn default() -> Self {
        SortFilter {
            sort_by: SortCriterion::Value,
            sort_reverse: false,
        }
    }
}

/// Compares `a` and `b` in the natural order of `criterion`.
pub fn compare(a: &AssetHolding, b: &AssetHolding, criterion: SortCriterion) -> Ordering {
    criterion.compare(a, b)
}

/// Builds a comparator for `criterion`, flipped when `reverse` is set.
pub fn make_sort_function(
    criterion: SortCriterion,
    reverse: bool,
) -> impl Fn(&AssetHolding, &AssetHolding) -> Ordering {
    move |a, b| {
        let ordering = criterion.compare(a, b);
        if reverse { ordering.reverse() } else { ordering }
    }
}

/// Stable sort of `holdings` according to `filter`.
pub fn sort_holdings(holdings: &mut [AssetHolding], filter: &SortFilter) {
    holdings.sort_by(make_sort_function(filter.sort_by, filter.sort_reverse));
}

/// Descending order of two numeric keys. NaN keys tie with each other and
/// sort after every number.
fn higher_first(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

thread_local! {
    static NAME_COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Root-locale collation, raw text as the tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| a.cmp(b))
}
