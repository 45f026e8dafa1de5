use cpf_validator::adapters::http::{handle_request, CpfRequest, MISSING_CPF_MESSAGE};
use cpf_validator::{LambdaConfig, ValidationResult};

fn event(json: serde_json::Value) -> CpfRequest {
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_rest_api_event_with_query_parameters() {
    let request = event(serde_json::json!({
        "httpMethod": "GET",
        "path": "/api/CpfValidator",
        "queryStringParameters": { "cpf": "529.982.247-25" }
    }));

    let response = handle_request(&request, &LambdaConfig::default()).unwrap();
    assert_eq!(response.status_code, 200);

    let body: ValidationResult = serde_json::from_str(&response.body).unwrap();
    assert!(body.is_valid_cpf);
}

#[test]
fn test_http_api_event_with_raw_query_string() {
    let request = event(serde_json::json!({
        "version": "2.0",
        "rawPath": "/api/CpfValidator",
        "rawQueryString": "cpf=52998224724"
    }));

    let response = handle_request(&request, &LambdaConfig::default()).unwrap();
    assert_eq!(response.status_code, 200);

    let body: ValidationResult = serde_json::from_str(&response.body).unwrap();
    assert!(!body.is_valid_cpf);
}

#[test]
fn test_event_without_cpf_returns_400() {
    let request = event(serde_json::json!({
        "httpMethod": "GET",
        "queryStringParameters": null
    }));

    let response = handle_request(&request, &LambdaConfig::default()).unwrap();
    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, MISSING_CPF_MESSAGE);
}

#[test]
fn test_custom_query_parameter_name() {
    let config = LambdaConfig {
        query_param: "documento".to_string(),
        ..LambdaConfig::default()
    };

    let request = CpfRequest::from_query("cpf=52998224725");
    assert_eq!(handle_request(&request, &config).unwrap().status_code, 400);

    let request = CpfRequest::from_query("documento=52998224725");
    let response = handle_request(&request, &config).unwrap();
    assert_eq!(response.body, r#"{"isValidCpf":true}"#);
}

#[test]
fn test_response_serializes_as_proxy_result() {
    let response =
        handle_request(&CpfRequest::from_query("cpf=11111111111"), &LambdaConfig::default())
            .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["headers"]["Content-Type"], "application/json");
    assert_eq!(json["body"], r#"{"isValidCpf":false}"#);
}
