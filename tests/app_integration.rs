use realtfolio::core::{
    AssetHolding, SortCriterion, SortFilter, compare, count_weekday_occurrences,
    make_sort_function, parse_date, parse_weekday_name, sort_holdings,
};
use realtfolio::{AppCommand, load_config, run_command, run_paydays};
use std::cmp::Ordering;
use std::fs;
use tracing::info;

mod test_utils {
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const CONFIG: &str = r#"
holdings:
  - short_name: "Patton"
    amount: 12.5
    value: 650.0
    annual_percentage_yield: 10.2
    net_rent_day_per_token: 0.0145
    total_investment: 68000.0
    total_units: 2
    rented_units: 1
    rent_start_date: "2021-05-07 00:00:00"
    initial_launch_date: "2021-04-30"
  - short_name: "appoline"
    amount: 4.0
    value: 204.0
    annual_percentage_yield: 11.6
    net_rent_day_per_token: 0.0162
    total_investment: 70000.0
    total_units: 0
    rented_units: 0
    rent_start_date: "2020-11-01"
    initial_launch_date: "2020-10-16"
  - short_name: "Kirby"
    amount: 30.0
    value: 1530.0
    annual_percentage_yield: 9.1
    net_rent_day_per_token: 0.0128
    total_investment: 120000.0
    total_units: 4
    rented_units: 4
    rent_start_date: "2022-02-01"
    initial_launch_date: "2022-01-14"
wallet:
  user_id: "1234"
  addresses:
    - "0xabcdef0123456789abcdef0123456789abcdef01"
    - ""
view:
  sort_by: name
"#;

    pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }
}

fn names(holdings: &[AssetHolding]) -> Vec<&str> {
    holdings.iter().map(|h| h.short_name.as_str()).collect()
}

#[test_log::test]
fn test_holdings_from_config_sort_by_each_criterion() {
    let (_dir, path) = test_utils::write_config(test_utils::CONFIG);
    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.view.sort_by, SortCriterion::Name);

    let expectations = [
        (SortCriterion::Name, vec!["appoline", "Kirby", "Patton"]),
        (SortCriterion::Value, vec!["Kirby", "Patton", "appoline"]),
        (SortCriterion::Apr, vec!["appoline", "Patton", "Kirby"]),
        (SortCriterion::Rent, vec!["Kirby", "Patton", "appoline"]),
        (SortCriterion::Occupancy, vec!["Kirby", "Patton", "appoline"]),
        (SortCriterion::RentStart, vec!["Kirby", "Patton", "appoline"]),
        (SortCriterion::InitialLaunch, vec!["Kirby", "Patton", "appoline"]),
        (SortCriterion::Supply, vec!["Kirby", "appoline", "Patton"]),
    ];

    for (criterion, expected) in expectations {
        let mut holdings = config.holdings.clone();
        sort_holdings(
            &mut holdings,
            &SortFilter {
                sort_by: criterion,
                sort_reverse: false,
            },
        );
        info!(%criterion, order = ?names(&holdings), "Sorted holdings");
        assert_eq!(names(&holdings), expected, "criterion {criterion}");

        let mut reversed = config.holdings.clone();
        sort_holdings(
            &mut reversed,
            &SortFilter {
                sort_by: criterion,
                sort_reverse: true,
            },
        );
        let mut expected_reversed = expected.clone();
        expected_reversed.reverse();
        assert_eq!(names(&reversed), expected_reversed, "criterion {criterion}");
    }
}

#[test_log::test]
fn test_comparator_properties_hold_for_config_holdings() {
    let (_dir, path) = test_utils::write_config(test_utils::CONFIG);
    let holdings = load_config(path.to_str()).unwrap().holdings;

    for criterion in SortCriterion::ALL {
        let natural = make_sort_function(criterion, false);
        let reversed = make_sort_function(criterion, true);
        for a in &holdings {
            assert_eq!(compare(a, a, criterion), Ordering::Equal);
            for b in &holdings {
                assert_eq!(compare(a, b, criterion), compare(b, a, criterion).reverse());
                assert_eq!(reversed(a, b), natural(a, b).reverse());
            }
        }

        let filter = SortFilter {
            sort_by: criterion,
            sort_reverse: false,
        };
        let mut once = holdings.clone();
        sort_holdings(&mut once, &filter);
        let mut twice = once.clone();
        sort_holdings(&mut twice, &filter);
        assert_eq!(once, twice);
    }
}

#[test_log::test]
fn test_run_commands_with_config_file() {
    let (_dir, path) = test_utils::write_config(test_utils::CONFIG);
    let path = path.to_str();

    let commands = [
        AppCommand::Holdings {
            sort_by: Some(SortCriterion::Occupancy),
            reverse: true,
        },
        AppCommand::Holdings {
            sort_by: None,
            reverse: false,
        },
        AppCommand::SortOptions,
        AppCommand::Wallets,
        AppCommand::Sources,
    ];
    for command in commands {
        let result = run_command(command.clone(), path);
        assert!(result.is_ok(), "{command:?} failed: {result:?}");
    }
}

#[test_log::test]
fn test_run_command_reports_bad_config() {
    let (_dir, path) = test_utils::write_config("view:\n  sort_by: price\n");
    let err = run_command(AppCommand::SortOptions, path.to_str()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let (_dir, path) = test_utils::write_config("wallet:\n  addresses: [\"0x12\"]\n");
    assert!(run_command(AppCommand::Wallets, path.to_str()).is_err());
}

#[test_log::test]
fn test_setup_writes_loadable_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    realtfolio::cli::setup::setup_at_path(&path).unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert!(!config.holdings.is_empty());
    assert!(fs::read_to_string(&path).unwrap().contains("holdings:"));
    assert!(realtfolio::cli::setup::setup_at_path(&path).is_err());
}

#[test_log::test]
fn test_paydays() {
    let start = parse_date("2024-01-01").unwrap();
    let end = parse_date("2024-01-08").unwrap();
    let monday = parse_weekday_name("Monday").unwrap();

    assert_eq!(count_weekday_occurrences(start, end, start, monday), 1);
    assert_eq!(
        count_weekday_occurrences(start, end, parse_date("2024-01-02").unwrap(), monday),
        0
    );
    assert_eq!(count_weekday_occurrences(start, start, start, monday), 0);

    assert!(run_paydays("2024-01-01", "2024-12-31", Some("2024-06-01"), "Friday").is_ok());
    assert!(run_paydays("2024-01-01", "2024-12-31", None, "friday").is_err());
}
