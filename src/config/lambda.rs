use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub query_param: String,
    pub detailed_errors: bool,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            query_param: "cpf".to_string(),
            detailed_errors: false,
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let detailed_errors = match lookup("CPF_DETAILED_ERRORS") {
            Some(value) => parse_bool("CPF_DETAILED_ERRORS", &value)?,
            None => defaults.detailed_errors,
        };

        Ok(Self {
            query_param: lookup("CPF_QUERY_PARAM").unwrap_or(defaults.query_param),
            detailed_errors,
        })
    }
}

fn parse_bool(field_name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::validate_non_empty_string;

        validate_non_empty_string("CPF_QUERY_PARAM", &self.query_param)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
