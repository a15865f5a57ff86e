// src/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {var} value: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct SmtpRelay {
    pub server: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from: String,
    pub relay: Option<SmtpRelay>,
    /// Local Mailpit/MailHog host used when RUST_ENV=test.
    pub local_host: Option<String>,
    pub local_port: u16,
}

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy)]
pub struct RetrySettings {
    pub max_retries: u32,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct JobsConfig {
    pub email: RetrySettings,
    pub translation: RetrySettings,
    pub result_ttl: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct RequestLogConfig {
    pub retention_days: u32,
    pub keep_recent: u64,
    pub cleanup_every: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub email: EmailConfig,
    pub translation: TranslationConfig,
    pub jobs: JobsConfig,
    pub request_log: RequestLogConfig,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let debug = parse_bool(get("DEBUG"), "DEBUG", false)?;

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let relay = match (
            get("SMTP_SERVER"),
            get("SMTP_USERNAME"),
            get("SMTP_PASSWORD"),
        ) {
            (Some(server), Some(username), Some(password)) => Some(SmtpRelay {
                server,
                username,
                password,
            }),
            _ => None,
        };

        let local_host = if environment == "test" {
            get("SMTP_HOST").or_else(|| Some("localhost".to_string()))
        } else {
            get("SMTP_HOST")
        };

        Ok(Self {
            debug,
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_num(get("PORT"), "PORT", 8080)?,
            database_url,
            redis_url: get("REDIS_URL"),
            email: EmailConfig {
                from: get("EMAIL_FROM").unwrap_or_else(|| "noreply@localhost".to_string()),
                relay,
                local_host,
                local_port: parse_num(get("SMTP_PORT"), "SMTP_PORT", 1025)?,
            },
            translation: TranslationConfig {
                api_key: get("OPENAI_API_KEY"),
                api_base: get("OPENAI_API_BASE")
                    .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            },
            jobs: JobsConfig {
                email: RetrySettings {
                    max_retries: parse_num(get("EMAIL_MAX_RETRIES"), "EMAIL_MAX_RETRIES", 3)?,
                    delay: Duration::from_secs(parse_num(
                        get("EMAIL_RETRY_DELAY_SECS"),
                        "EMAIL_RETRY_DELAY_SECS",
                        60,
                    )?),
                },
                translation: RetrySettings {
                    max_retries: parse_num(
                        get("TRANSLATION_MAX_RETRIES"),
                        "TRANSLATION_MAX_RETRIES",
                        2,
                    )?,
                    delay: Duration::from_secs(parse_num(
                        get("TRANSLATION_RETRY_DELAY_SECS"),
                        "TRANSLATION_RETRY_DELAY_SECS",
                        30,
                    )?),
                },
                result_ttl: Duration::from_secs(parse_num(
                    get("JOB_RESULT_TTL_SECS"),
                    "JOB_RESULT_TTL_SECS",
                    86_400,
                )?),
            },
            request_log: RequestLogConfig {
                retention_days: parse_num(
                    get("REQUEST_LOG_RETENTION_DAYS"),
                    "REQUEST_LOG_RETENTION_DAYS",
                    30,
                )?,
                keep_recent: parse_num(
                    get("REQUEST_LOG_KEEP_RECENT"),
                    "REQUEST_LOG_KEEP_RECENT",
                    10_000,
                )?,
                cleanup_every: parse_num(
                    get("REQUEST_LOG_CLEANUP_EVERY"),
                    "REQUEST_LOG_CLEANUP_EVERY",
                    1_000,
                )?
                .max(1),
            },
            environment,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn translation_enabled(&self) -> bool {
        self.translation.api_key.is_some()
    }
}

fn parse_num<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_bool(raw: Option<String>, var: &'static str, default: bool) -> Result<bool, ConfigError> {
    let normalized = raw.as_deref().map(|v| v.trim().to_ascii_lowercase());
    match normalized {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            var,
            value: raw.unwrap_or_default(),
        }),
    }
}
