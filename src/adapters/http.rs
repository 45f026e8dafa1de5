use crate::config::LambdaConfig;
use crate::core::cpf::validate_detailed;
use crate::core::ValidationResult;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;

pub const MISSING_CPF_MESSAGE: &str = "Please pass a cpf on the query string";

/// API Gateway 代理事件中我們需要的欄位
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpfRequest {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub raw_query_string: Option<String>,
}

impl CpfRequest {
    pub fn from_query(raw_query: &str) -> Self {
        Self {
            query_string_parameters: None,
            raw_query_string: Some(raw_query.to_string()),
        }
    }

    pub fn cpf_param(&self, name: &str) -> Option<String> {
        if let Some(value) = self
            .query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
        {
            return Some(value.clone());
        }

        // HTTP API (v2) 事件可能只帶 rawQueryString
        let raw = self.raw_query_string.as_deref()?;
        form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    fn new(status_code: u16, content_type: &str, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
struct DetailedBody {
    #[serde(flatten)]
    result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

pub fn handle_request(request: &CpfRequest, config: &LambdaConfig) -> Result<HttpResponse> {
    tracing::info!("HTTP trigger processed a request.");

    let Some(cpf) = request.cpf_param(&config.query_param) else {
        tracing::debug!("Request without '{}' query parameter", config.query_param);
        return Ok(HttpResponse::new(
            400,
            "text/plain; charset=utf-8",
            MISSING_CPF_MESSAGE.to_string(),
        ));
    };

    let outcome = validate_detailed(&cpf);
    let result = ValidationResult::from(outcome.is_ok());

    let body = if config.detailed_errors {
        serde_json::to_string(&DetailedBody {
            result,
            reason: outcome.err().map(|e| e.code()),
        })?
    } else {
        serde_json::to_string(&result)?
    };

    Ok(HttpResponse::new(200, "application/json", body))
}
