#[cfg(feature = "lambda")]
use cpf_validator::adapters::http::{handle_request, CpfRequest, HttpResponse};
#[cfg(feature = "lambda")]
use cpf_validator::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use cpf_validator::LambdaConfig;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    config: &LambdaConfig,
    event: LambdaEvent<CpfRequest>,
) -> Result<HttpResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling CPF validation request");

    let response = handle_request(&event.payload, config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::debug!(status = response.status_code, "CPF validation request completed");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次配置
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let config = &config;

    run(service_fn(move |event: LambdaEvent<CpfRequest>| async move {
        function_handler(config, event).await
    }))
    .await
}
