use crate::core::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_path: String,
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default = "default_true")]
    pub has_headers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default = "default_report_name")]
    pub report_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// 報表中是否包含失敗原因
    #[serde(default)]
    pub detailed: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            formats: default_formats(),
            report_name: default_report_name(),
        }
    }
}

fn default_column() -> String {
    "cpf".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_report_name() -> String {
    "cpf_report".to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CPF_INPUT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.batch.input_path
    }

    fn cpf_column(&self) -> &str {
        &self.batch.column
    }

    fn has_headers(&self) -> bool {
        self.batch.has_headers
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn report_name(&self) -> &str {
        &self.output.report_name
    }

    fn detailed(&self) -> bool {
        self.validation.detailed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_path("batch.input_path", &self.batch.input_path)?;
        if self.batch.has_headers {
            validate_non_empty_string("batch.column", &self.batch.column)?;
        }
        validate_path("output.output_path", &self.output.output_path)?;
        validate_output_formats("output.formats", &self.output.formats)?;
        validate_file_stem("output.report_name", &self.output.report_name)?;

        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[batch]
input_path = "cpfs.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.input_path(), "cpfs.csv");
        assert_eq!(config.cpf_column(), "cpf");
        assert!(config.has_headers());
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), &["csv".to_string()]);
        assert_eq!(config.report_name(), "cpf_report");
        assert!(!config.detailed());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[batch]
input_path = "data/clientes.csv"
column = "documento"
has_headers = true

[output]
output_path = "reports"
formats = ["csv", "json"]
report_name = "clientes"

[validation]
detailed = true
"#,
        )
        .unwrap();

        assert_eq!(config.cpf_column(), "documento");
        assert_eq!(config.output_formats().len(), 2);
        assert!(config.detailed());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CPF_VALIDATOR_TEST_INPUT", "from_env.csv");
        let config = TomlConfig::from_toml_str(
            r#"
[batch]
input_path = "${CPF_VALIDATOR_TEST_INPUT}"
column = "${CPF_VALIDATOR_TEST_UNSET_COLUMN}"
"#,
        )
        .unwrap();

        assert_eq!(config.input_path(), "from_env.csv");
        assert_eq!(config.cpf_column(), "${CPF_VALIDATOR_TEST_UNSET_COLUMN}");
    }

    #[test]
    fn test_invalid_format_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[batch]
input_path = "cpfs.csv"

[output]
formats = ["xml"]
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_batch_section() {
        let err = TomlConfig::from_toml_str("[output]\nformats = [\"csv\"]\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigValidationError { .. }));
    }
}
