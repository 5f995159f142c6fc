pub mod cli;
pub mod config;
pub mod db;
pub mod models;

#[cfg(test)]
mod testutil;

pub use config::Config;
pub use db::Database;
