//! `backend-template health`: check a running instance's configuration.
//!
//! Sends a `GET /config/health` request to the specified URL and
//! displays the verdict as formatted text or raw JSON. The endpoint
//! always answers 200, so an UNHEALTHY body is what makes this command
//! fail.

use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::cli::HealthArgs;
use crate::error::TemplateError;
use crate::health::ConfigHealth;

pub async fn execute(args: HealthArgs) -> Result<(), TemplateError> {
    let url = format!("{}/config/health", args.url.trim_end_matches('/'));
    let uri: hyper::Uri =
        url.parse()
            .map_err(|e: hyper::http::uri::InvalidUri| TemplateError::UriParse {
                source: Box::new(e),
            })?;

    let connector = hyper_util::client::legacy::connect::HttpConnector::new();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let req = hyper::Request::builder()
        .uri(uri)
        .body(http_body_util::Full::new(bytes::Bytes::new()))
        .map_err(|e| TemplateError::HttpRequest {
            source: Box::new(e),
        })?;

    let response = tokio::time::timeout(std::time::Duration::from_secs(10), client.request(req))
        .await
        .map_err(|_| TemplateError::HttpRequest {
            source: "health check timed out after 10s".into(),
        })?
        .map_err(|e| TemplateError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| TemplateError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();

    if !status.is_success() {
        return Err(TemplateError::HealthCheckFailed(status));
    }

    let health: ConfigHealth =
        serde_json::from_slice(&body).map_err(|e| TemplateError::HttpRequest {
            source: Box::new(e),
        })?;

    if args.json {
        println!("{}", String::from_utf8_lossy(&body));
    } else {
        print_report(&args.url, &health);
    }

    if health.is_healthy() {
        Ok(())
    } else {
        Err(TemplateError::Unhealthy)
    }
}

fn print_report(url: &str, health: &ConfigHealth) {
    let mark = if health.is_healthy() {
        "\u{2713}"
    } else {
        "\u{2717}"
    };
    println!("{mark} {url} configuration is {}", health.status.as_str());
    println!("  name:       {}", health.name.as_str());
    println!("  version:    {}", health.version.as_str());
    println!("  jwtSecret:  {}", health.jwt_secret.as_str());
}
