use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-validator")]
#[command(about = "Validate Brazilian CPF numbers against their check digits")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate one or more CPFs given on the command line
    Check(CheckArgs),
    /// Validate every CPF in a CSV file and write a report
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// CPFs to validate; formatting characters are ignored
    #[arg(required = true)]
    pub cpfs: Vec<String>,

    /// Report why an invalid CPF was rejected
    #[arg(long)]
    pub detailed: bool,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// TOML configuration file; replaces the input/output flags below
    #[arg(short, long)]
    pub config: Option<String>,

    /// CSV file containing the CPFs
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long, default_value = "cpf")]
    pub column: String,

    /// Treat the first row as data and read the first column
    #[arg(long)]
    pub no_headers: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<String>,

    #[arg(long, default_value = "cpf_report")]
    pub report_name: String,

    /// Include the rejection reason in the report
    #[arg(long)]
    pub detailed: bool,
}

impl ConfigProvider for BatchArgs {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn cpf_column(&self) -> &str {
        &self.column
    }

    fn has_headers(&self) -> bool {
        !self.no_headers
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn report_name(&self) -> &str {
        &self.report_name
    }

    fn detailed(&self) -> bool {
        self.detailed
    }
}

impl Validate for BatchArgs {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        let input = validate_required_field("input", &self.input)?;
        validate_path("input", input)?;
        if self.has_headers() {
            validate_non_empty_string("column", &self.column)?;
        }
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.formats)?;
        validate_file_stem("report_name", &self.report_name)?;

        Ok(())
    }
}
