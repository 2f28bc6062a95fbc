use crate::app_config::{AppConfig, ServiceTarget};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Missing keys are not an error here; [`AppConfig::credentials`] reports
/// them as warnings so the user sees guidance instead of a parse failure.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let company_key = lookup("PROMO_COMPANY_KEY").ok();
    let coupon_import_key = lookup("PROMO_COUPON_IMPORT_KEY").ok();
    let service_target = parse_service_target(&or_default("PROMO_SERVICE_TARGET", "evaluation"))?;
    let base_url = lookup("PROMO_BASE_URL").ok().filter(|v| !v.trim().is_empty());
    let log_level = or_default("PROMO_LOG_LEVEL", "warn");
    let request_timeout_secs = parse_u64("PROMO_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PROMO_USER_AGENT", "promo-sample/0.1 (integration-sample)");

    Ok(AppConfig {
        company_key,
        coupon_import_key,
        service_target,
        base_url,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into a `ServiceTarget` variant.
fn parse_service_target(s: &str) -> Result<ServiceTarget, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "evaluation" => Ok(ServiceTarget::Evaluation),
        "live" => Ok(ServiceTarget::Live),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROMO_SERVICE_TARGET".to_string(),
            reason: format!("expected 'evaluation' or 'live', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
