//! `backend-template validate`: resolve and check the configuration.
//!
//! Runs the same resolution as `run`, then reports validation findings
//! and the health verdict in either human-readable text or
//! machine-readable JSON. Fails on validation errors or an UNHEALTHY
//! verdict so it can gate deployments.

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::config::sources::env::EnvSource;
use crate::config::{validation, ConfigResolver};
use crate::error::TemplateError;
use crate::health;

pub async fn execute(args: &ValidateArgs) -> Result<(), TemplateError> {
    let profiles = args.source.profiles();
    let resolver =
        ConfigResolver::standard(&args.source.config_dir, &profiles, EnvSource::from_env()).await;
    let resolved = resolver.resolve().await?;

    let verdict = health::evaluate(&resolved.config, &profiles);
    let result = validation::validate(&resolved.config);

    match args.format {
        ValidateFormat::Text => match &result {
            Ok(()) => println!(
                "\u{2713} {}",
                validation::format_validation_report(&resolved.config, &resolved.layers)
            ),
            Err(errors) => {
                eprintln!("\u{2717} configuration has {} errors\n", errors.len());
                for error in errors {
                    eprintln!("{error}");
                }
            }
        },
        ValidateFormat::Json => {
            let json_errors: Vec<serde_json::Value> = result
                .as_ref()
                .err()
                .into_iter()
                .flatten()
                .map(|e| {
                    serde_json::json!({
                        "field": e.field,
                        "message": e.message,
                        "suggestion": e.suggestion,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "valid": result.is_ok(),
                    "layers": resolved.layers,
                    "errors": json_errors,
                    "health": verdict,
                })
            );
        }
    }

    if let Err(errors) = result {
        return Err(TemplateError::ConfigValidation { errors });
    }

    if let ValidateFormat::Text = args.format {
        println!(
            "  health: {} (name {}, version {}, jwtSecret {})",
            verdict.status.as_str(),
            verdict.name.as_str(),
            verdict.version.as_str(),
            verdict.jwt_secret.as_str()
        );
    }

    if verdict.is_healthy() {
        Ok(())
    } else {
        Err(TemplateError::Unhealthy)
    }
}
