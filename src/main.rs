use clap::Parser;
use cpf_validator::config::cli::{BatchArgs, CheckArgs, Command};
use cpf_validator::core::{ConfigProvider, CpfVerdict};
use cpf_validator::utils::error::{AppError, ErrorSeverity};
use cpf_validator::utils::{logger, validation::Validate};
use cpf_validator::{
    validate_detailed, BatchEngine, CliConfig, CsvBatchPipeline, LocalStorage, TomlConfig,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let outcome = match config.command {
        Command::Check(args) => run_check(&args),
        Command::Batch(args) => run_batch(args).await,
    };

    match outcome {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ cpf-validator failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }
}

/// 逐一驗證命令列上的 CPF；全部有效時回傳 0
fn run_check(args: &CheckArgs) -> Result<i32, AppError> {
    let mut all_valid = true;

    for (index, input) in args.cpfs.iter().enumerate() {
        let outcome = validate_detailed(input);
        all_valid &= outcome.is_ok();

        if args.json {
            let mut verdict = CpfVerdict::new(index + 1, input, outcome);
            if !args.detailed {
                verdict.reason = None;
                verdict.message = None;
            }
            println!("{}", serde_json::to_string(&verdict)?);
            continue;
        }

        match outcome {
            Ok(cpf) => println!("✅ {} is valid ({})", input, cpf),
            Err(e) if args.detailed => println!("❌ {} is invalid: {}", input, e),
            Err(_) => println!("❌ {} is invalid", input),
        }
    }

    tracing::debug!("Checked {} inputs, all valid: {}", args.cpfs.len(), all_valid);
    Ok(if all_valid { 0 } else { 1 })
}

async fn run_batch(args: BatchArgs) -> Result<i32, AppError> {
    let output_path = match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(&path)?;

            // 應用命令列覆蓋設定
            if args.detailed {
                config.validation.detailed = true;
            }

            config.validate()?;
            run_pipeline(config).await?
        }
        None => {
            args.validate()?;
            run_pipeline(args).await?
        }
    };

    println!("✅ Batch validation completed successfully!");
    println!("📁 Report saved to: {}", output_path);
    Ok(0)
}

async fn run_pipeline<C: ConfigProvider>(config: C) -> Result<String, AppError> {
    tracing::info!("✅ Configuration validated, input: {}", config.input_path());
    let pipeline = CsvBatchPipeline::new(LocalStorage::default(), config);
    BatchEngine::new(pipeline).run().await
}
