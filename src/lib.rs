pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::{LambdaConfig, TomlConfig};
pub use crate::core::cpf::{validate, validate_detailed};
pub use crate::core::{batch::CsvBatchPipeline, engine::BatchEngine};
pub use domain::model::{Cpf, ValidationResult};
pub use utils::error::{AppError, CpfError, Result};
