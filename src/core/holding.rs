//! Asset holding records as delivered by the surrounding application.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One user position in a tokenized property.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetHolding {
    pub short_name: String,
    pub amount: f64,
    pub value: f64,
    pub annual_percentage_yield: f64,
    pub net_rent_day_per_token: f64,
    /// Total property value, shown as "supply".
    pub total_investment: f64,
    pub total_units: u32,
    pub rented_units: u32,
    #[serde(deserialize_with = "deserialize_date")]
    pub rent_start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub initial_launch_date: NaiveDate,
}

impl AssetHolding {
    /// Daily rent earned by this position.
    pub fn daily_rent(&self) -> f64 {
        self.amount * self.net_rent_day_per_token
    }

    /// Ratio of rented to total units. NaN when the property has no units.
    pub fn occupancy(&self) -> f64 {
        if self.total_units == 0 {
            return f64::NAN;
        }
        f64::from(self.rented_units) / f64::from(self.total_units)
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    super::date::parse_date(&raw).map_err(serde::de::Error::custom)
}
