use crate::core::holding::AssetHolding;
use crate::core::sort::SortFilter;
use crate::core::wallet::WalletSession;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SubgraphEndpoint {
    pub url: String,
}

impl SubgraphEndpoint {
    fn new(url: &str) -> Self {
        SubgraphEndpoint {
            url: url.to_string(),
        }
    }
}

/// Read-only GraphQL subgraphs the holdings and market data come from.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SubgraphsConfig {
    pub gnosis: SubgraphEndpoint,
    pub ethereum: SubgraphEndpoint,
    pub rmm: SubgraphEndpoint,
    pub levinswap: SubgraphEndpoint,
    pub yam_statistics: SubgraphEndpoint,
}

impl Default for SubgraphsConfig {
    fn default() -> Self {
        SubgraphsConfig {
            gnosis: SubgraphEndpoint::new(
                "https://api.thegraph.com/subgraphs/name/realtoken-thegraph/realtoken-xdai",
            ),
            ethereum: SubgraphEndpoint::new(
                "https://api.thegraph.com/subgraphs/name/realtoken-thegraph/realtoken-eth",
            ),
            rmm: SubgraphEndpoint::new(
                "https://api.thegraph.com/subgraphs/name/realtoken-thegraph/rmm-realt",
            ),
            levinswap: SubgraphEndpoint::new(
                "https://api.thegraph.com/subgraphs/name/levinswap/uniswap-v2",
            ),
            yam_statistics: SubgraphEndpoint::new(
                "https://api.thegraph.com/subgraphs/name/jycssu-com/yam-history-gnosis",
            ),
        }
    }
}

impl SubgraphsConfig {
    /// Named endpoints in display order.
    pub fn endpoints(&self) -> Vec<(&'static str, &SubgraphEndpoint)> {
        vec![
            ("gnosis", &self.gnosis),
            ("ethereum", &self.ethereum),
            ("rmm", &self.rmm),
            ("levinswap", &self.levinswap),
            ("yam_statistics", &self.yam_statistics),
        ]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub holdings: Vec<AssetHolding>,
    #[serde(default)]
    pub wallet: WalletSession,
    #[serde(default)]
    pub view: SortFilter,
    #[serde(default)]
    pub subgraphs: SubgraphsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "realtfolio", "realtfolio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!(
            holdings = config.holdings.len(),
            "Successfully loaded config"
        );
        Ok(config)
    }
}
