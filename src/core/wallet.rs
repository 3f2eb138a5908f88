//! Wallet address list shown in the wallet menu.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),
}

/// Drops empty entries, keeping the remaining addresses as entered.
pub fn clean_address_list(addresses: &[String]) -> Vec<String> {
    addresses
        .iter()
        .filter(|a| !a.is_empty())
        .cloned()
        .collect()
}

/// Parses a hex EVM address and returns its EIP-55 checksummed form.
pub fn checksum_address(address: &str) -> Result<String, WalletError> {
    address
        .parse::<Address>()
        .map(|a| a.to_checksum(None))
        .map_err(|_| WalletError::InvalidAddress(address.to_string()))
}

pub fn wallet_count_label(count: usize) -> String {
    if count == 1 {
        "1 wallet".to_string()
    } else {
        format!("{count} wallets")
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct WalletSession {
    pub user_id: Option<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub whitelist_attribute_keys: Vec<String>,
    /// Account reported by the wallet connector, if one is connected.
    pub active_account: Option<String>,
}

impl WalletSession {
    pub fn cleaned_addresses(&self) -> Vec<String> {
        clean_address_list(&self.addresses)
    }

    /// Label of the menu button, counting non-empty addresses only.
    pub fn button_label(&self) -> String {
        wallet_count_label(self.cleaned_addresses().len())
    }

    pub fn is_connected(&self) -> bool {
        self.active_account.as_deref().is_some_and(|a| !a.is_empty())
    }

    pub fn connect_action_label(&self) -> &'static str {
        if self.is_connected() {
            "Disconnect wallet"
        } else {
            "Connect wallet"
        }
    }

    /// Checksummed addresses; fails on the first malformed entry.
    pub fn checksummed_addresses(&self) -> Result<Vec<String>, WalletError> {
        self.cleaned_addresses()
            .iter()
            .map(|a| checksum_address(a))
            .collect()
    }
}
