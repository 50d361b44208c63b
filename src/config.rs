use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub max_body_size: usize,
    pub dedup_cooldown_secs: u64,
    pub smtp: SmtpConfig,
    pub recipients: Recipients,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub tls_mode: String,
}

/// Destination addresses for each form type.
#[derive(Debug, Clone)]
pub struct Recipients {
    pub contact: String,
    pub careers: String,
    pub downloads: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FORMRELAY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_HOST: {e}"))?;

        let port: u16 = env_or("FORMRELAY_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_PORT: {e}"))?;

        let environment = env_or("FORMRELAY_ENV", "development");
        let log_level = env_or("FORMRELAY_LOG_LEVEL", "info");

        let cors_origins: Vec<String> = env_or("FORMRELAY_CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_body_size: usize = env_or("FORMRELAY_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_MAX_BODY_SIZE: {e}"))?;

        let dedup_cooldown_secs: u64 = env_or("FORMRELAY_DEDUP_COOLDOWN_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid FORMRELAY_DEDUP_COOLDOWN_SECS: {e}"))?;

        let smtp = SmtpConfig {
            host: env_required("FORMRELAY_SMTP_HOST")?,
            port: env_or("FORMRELAY_SMTP_PORT", "587")
                .parse()
                .map_err(|e| format!("Invalid FORMRELAY_SMTP_PORT: {e}"))?,
            user: env_required("FORMRELAY_SMTP_USER")?,
            pass: env_required("FORMRELAY_SMTP_PASS")?,
            from: env_required("FORMRELAY_SMTP_FROM")?,
            tls_mode: env_or("FORMRELAY_SMTP_TLS", "starttls"),
        };

        let recipients = Recipients {
            contact: env_required("FORMRELAY_CONTACT_TO")?,
            careers: env_required("FORMRELAY_CAREERS_TO")?,
            downloads: env_required("FORMRELAY_DOWNLOADS_TO")?,
        };

        Ok(Config {
            host,
            port,
            environment,
            log_level,
            cors_origins,
            max_body_size,
            dedup_cooldown_secs,
            smtp,
            recipients,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
