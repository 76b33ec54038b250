pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod utils;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
