//! Command front-ends printing to the terminal

pub mod holdings;
pub mod paydays;
pub mod setup;
pub mod ui;
pub mod wallets;
