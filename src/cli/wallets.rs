use super::ui;
use crate::core::WalletSession;
use crate::core::config::SubgraphsConfig;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the wallet menu: user details, addresses and the connector action.
pub fn render_wallets(session: &WalletSession) -> Result<String> {
    let addresses = session.checksummed_addresses()?;

    let mut output = format!(
        "{}\n\n",
        ui::style_text(&session.button_label(), ui::StyleType::Title)
    );

    if let Some(user_id) = &session.user_id {
        output.push_str(&format!(
            "User ID: {user_id}\nAddresses: {}\nWhitelists: {}\n\n",
            session.addresses.len(),
            session.whitelist_attribute_keys.len()
        ));
    }

    if !addresses.is_empty() {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Address")]);
        for address in &addresses {
            table.add_row(vec![Cell::new(address)]);
        }
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }

    output.push_str(&ui::style_text(
        &format!("[{}]", session.connect_action_label()),
        ui::StyleType::Subtle,
    ));
    Ok(output)
}

pub fn run(session: &WalletSession) -> Result<()> {
    println!("{}", render_wallets(session)?);
    Ok(())
}

/// Renders the configured subgraph endpoints.
pub fn render_sources(subgraphs: &SubgraphsConfig) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Subgraph"), ui::header_cell("URL")]);
    for (name, endpoint) in subgraphs.endpoints() {
        table.add_row(vec![Cell::new(name), Cell::new(&endpoint.url)]);
    }
    table.to_string()
}
