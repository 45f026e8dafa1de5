pub mod batch;
pub mod cpf;
pub mod engine;

pub use crate::domain::model::{BatchResult, Cpf, CpfRecord, CpfVerdict, ValidationResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
