use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub admin_to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("CITYFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CITYFORM_HOST: {e}"))?;

        let port: u16 = env_or("CITYFORM_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid CITYFORM_PORT: {e}"))?;

        let log_level = env_or("CITYFORM_LOG_LEVEL", "info");

        // Mail is optional: without full credentials the notification phase
        // is skipped and the form still works.
        let smtp = match (
            std::env::var("CITYFORM_SMTP_HOST").ok(),
            std::env::var("EMAIL_USER").ok(),
            std::env::var("EMAIL_PASSWORD").ok(),
            std::env::var("CITYFORM_ADMIN_EMAIL").ok(),
        ) {
            (Some(host), Some(user), Some(pass), Some(admin_to))
                if !user.is_empty() && !pass.is_empty() =>
            {
                let from = env_or("CITYFORM_FROM", &user);
                Some(SmtpConfig {
                    host,
                    port: env_or("CITYFORM_SMTP_PORT", "465")
                        .parse()
                        .map_err(|e| format!("Invalid CITYFORM_SMTP_PORT: {e}"))?,
                    user,
                    // App passwords are often pasted with spaces in them.
                    pass: pass.replace(' ', ""),
                    from,
                    admin_to,
                })
            }
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
