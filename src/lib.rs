pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use core::{etl::EtlEngine, pipeline::TransferPipeline};
pub use utils::error::{Result, TransferError};
