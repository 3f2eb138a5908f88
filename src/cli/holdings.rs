use super::ui;
use crate::core::{AssetHolding, SortCriterion, SortFilter, sort_holdings};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Renders holdings sorted by `filter` as a table followed by totals.
pub fn render_holdings(holdings: &[AssetHolding], filter: &SortFilter) -> String {
    let mut sorted = holdings.to_vec();
    sort_holdings(&mut sorted, filter);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Property"),
        ui::header_cell("Tokens"),
        ui::header_cell("Value"),
        ui::header_cell("APR (%)"),
        ui::header_cell("Rent / day"),
        ui::header_cell("Units"),
        ui::header_cell("Occupancy"),
        ui::header_cell("Rent start"),
        ui::header_cell("Launch"),
    ]);

    for holding in &sorted {
        let occupancy = holding.occupancy();
        let occupancy_cell = if occupancy.is_nan() {
            ui::na_cell()
        } else {
            ui::occupancy_cell(occupancy)
        };

        table.add_row(vec![
            Cell::new(&holding.short_name),
            ui::number_cell(format!("{:.4}", holding.amount)),
            ui::number_cell(format!("{:.2}", holding.value)),
            ui::number_cell(format!("{:.2}", holding.annual_percentage_yield)),
            ui::number_cell(format!("{:.4}", holding.daily_rent())),
            ui::number_cell(format!("{}/{}", holding.rented_units, holding.total_units)),
            occupancy_cell,
            Cell::new(holding.rent_start_date.to_string()),
            Cell::new(holding.initial_launch_date.to_string()),
        ]);
    }

    let direction = if filter.sort_reverse {
        "reversed"
    } else {
        "natural order"
    };
    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text("Holdings", ui::StyleType::Title),
        ui::style_text(
            &format!("Sorted by {} ({direction})", filter.sort_by.label()),
            ui::StyleType::Subtle
        )
    );
    output.push_str(&table.to_string());

    let total_value: f64 = sorted.iter().map(|h| h.value).sum();
    let total_rent: f64 = sorted.iter().map(AssetHolding::daily_rent).sum();
    output.push_str(&format!(
        "\n\n{}: {}\n{}: {}",
        ui::style_text("Total Value", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{total_value:.2}"), ui::StyleType::TotalValue),
        ui::style_text("Rent / day", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{total_rent:.4}"), ui::StyleType::TotalValue),
    ));

    output
}

pub fn run(holdings: &[AssetHolding], filter: &SortFilter) -> Result<()> {
    debug!(
        sort_by = %filter.sort_by,
        reverse = filter.sort_reverse,
        count = holdings.len(),
        "Rendering holdings"
    );
    if holdings.is_empty() {
        println!("No holdings configured.");
        return Ok(());
    }
    println!("{}", render_holdings(holdings, filter));
    Ok(())
}

/// Renders the available sort options with their translation keys.
pub fn render_sort_options(current: &SortFilter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Option"),
        ui::header_cell("Label"),
        ui::header_cell("Translation key"),
    ]);
    for criterion in SortCriterion::ALL {
        let id = if criterion == current.sort_by {
            format!("{criterion} *")
        } else {
            criterion.to_string()
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(criterion.label()),
            Cell::new(criterion.translation_key()),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn holding(name: &str, value: f64, total_units: u32) -> AssetHolding {
        AssetHolding {
            short_name: name.to_string(),
            amount: 2.0,
            value,
            annual_percentage_yield: 9.5,
            net_rent_day_per_token: 0.5,
            total_investment: 50000.0,
            total_units,
            rented_units: 0,
            rent_start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            initial_launch_date: NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
        }
    }

    #[test]
    fn test_render_holdings_orders_rows_and_totals() {
        console::set_colors_enabled(false);
        let holdings = vec![holding("Small", 10.0, 1), holding("Large", 90.0, 0)];
        let output = render_holdings(&holdings, &SortFilter::default());

        let large = output.find("Large").unwrap();
        let small = output.find("Small").unwrap();
        assert!(large < small);
        assert!(output.contains("Sorted by Value (natural order)"));
        assert!(output.contains("Total Value: 100.00"));
        assert!(output.contains("Rent / day: 2.0000"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_render_holdings_reversed() {
        console::set_colors_enabled(false);
        let holdings = vec![holding("Small", 10.0, 1), holding("Large", 90.0, 1)];
        let filter = SortFilter {
            sort_by: SortCriterion::Value,
            sort_reverse: true,
        };
        let output = render_holdings(&holdings, &filter);
        assert!(output.find("Small").unwrap() < output.find("Large").unwrap());
        assert!(output.contains("(reversed)"));
    }

    #[test]
    fn test_render_sort_options_marks_current() {
        let output = render_sort_options(&SortFilter {
            sort_by: SortCriterion::RentStart,
            sort_reverse: false,
        });
        assert!(output.contains("rent-start *"));
        assert!(output.contains("sortOptions.rentStart"));
        assert!(output.contains("sortOptions.supply"));
    }
}
