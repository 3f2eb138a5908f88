use super::ui;
use crate::core::date::weekday_name;
use crate::core::{count_weekday_occurrences, parse_date, parse_weekday_name};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PaydayQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub after: NaiveDate,
    pub weekday: Weekday,
}

impl PaydayQuery {
    /// Builds a query from command line text. `after` defaults to `start`.
    pub fn parse(start: &str, end: &str, after: Option<&str>, weekday: &str) -> Result<Self> {
        let start = parse_date(start).context("Invalid start date")?;
        let end = parse_date(end).context("Invalid end date")?;
        let after = match after {
            Some(after) => parse_date(after).context("Invalid cutoff date")?,
            None => start,
        };
        let weekday = parse_weekday_name(weekday)?;
        Ok(PaydayQuery {
            start,
            end,
            after,
            weekday,
        })
    }

    pub fn count(&self) -> usize {
        count_weekday_occurrences(self.start, self.end, self.after, self.weekday)
    }
}

pub fn render(query: &PaydayQuery) -> String {
    let count = query.count();
    format!(
        "{} {}s between {} and {} (from {}): {}",
        ui::style_text("Paydays:", ui::StyleType::TotalLabel),
        weekday_name(query.weekday),
        query.start,
        query.end,
        query.after,
        ui::style_text(&count.to_string(), ui::StyleType::TotalValue)
    )
}

pub fn run(query: &PaydayQuery) -> Result<()> {
    debug!(?query, "Counting weekday occurrences");
    println!("{}", render(query));
    Ok(())
}
