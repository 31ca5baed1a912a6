//! Stay server configuration

use std::str::FromStr;
use std::time::Duration;

use shared::money::AmountConvention;
use sqlx::postgres::PgConnectOptions;

use crate::BoxError;

const DEFAULT_HTTP_PORT: u16 = 4000;
const DEFAULT_PG_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Where the Postgres database lives
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseSource {
    /// `DATABASE_URL`
    Url(String),
    /// Discrete `PG*` variables
    Parts {
        host: String,
        port: u16,
        database: String,
        user: Option<String>,
        password: Option<String>,
    },
}

impl DatabaseSource {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            Self::Url(url) => PgConnectOptions::from_str(url),
            Self::Parts {
                host,
                port,
                database,
                user,
                password,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .database(database);
                if let Some(user) = user {
                    options = options.username(user);
                }
                if let Some(password) = password {
                    options = options.password(password);
                }
                Ok(options)
            }
        }
    }
}

/// Razorpay settings. Keys are optional until a card order needs them.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl RazorpayConfig {
    /// First eight characters of the key id, for startup logs.
    pub fn masked_key_id(&self) -> Option<String> {
        self.key_id
            .as_deref()
            .map(|k| format!("{}...", k.chars().take(8).collect::<String>()))
    }
}

/// Receiving side of UPI QR payments
#[derive(Debug, Clone)]
pub struct UpiConfig {
    pub payee_vpa: String,
    pub payee_name: String,
    pub qr_service_url: String,
}

/// Stay server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseSource,
    pub database_max_connections: u32,
    /// HTTP listen port
    pub http_port: u16,
    /// `*` or a single allowed origin
    pub cors_origin: String,
    /// Environment: development | staging | production
    pub environment: String,
    pub razorpay: RazorpayConfig,
    pub upi: UpiConfig,
    pub amount_convention: AmountConvention,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of a variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).and_then(clean);
        let first = |names: &[&str]| names.iter().find_map(|&name| get(name));

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseSource::Url(url),
            None => {
                let (Some(host), Some(database)) = (get("PGHOST"), get("PGDATABASE")) else {
                    return Err("DATABASE_URL or PGHOST and PGDATABASE must be set".into());
                };
                DatabaseSource::Parts {
                    host,
                    port: parse_or(get("PGPORT"), DEFAULT_PG_PORT),
                    database,
                    user: get("PGUSER"),
                    password: get("PGPASSWORD"),
                }
            }
        };

        let qr_service_url = get("QR_SERVICE_URL")
            .unwrap_or_else(|| "https://api.qrserver.com/v1/create-qr-code/".into());
        reqwest::Url::parse(&qr_service_url)
            .map_err(|e| format!("QR_SERVICE_URL is not a valid URL: {e}"))?;

        let amount_convention = match get("AMOUNT_CONVENTION") {
            Some(raw) => raw.parse::<AmountConvention>()?,
            None => AmountConvention::default(),
        };

        Ok(Self {
            database,
            database_max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            ),
            http_port: parse_or(first(&["PORT", "HTTP_PORT"]), DEFAULT_HTTP_PORT),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| "*".into()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            razorpay: RazorpayConfig {
                key_id: first(&[
                    "RAZORPAY_KEY_ID",
                    "RZP_KEY_ID",
                    "NEXT_PUBLIC_RAZORPAY_KEY_ID",
                ]),
                key_secret: first(&["RAZORPAY_KEY_SECRET", "RZP_KEY_SECRET"]),
                api_base: get("RAZORPAY_API_BASE")
                    .unwrap_or_else(|| "https://api.razorpay.com".into()),
                timeout: Duration::from_secs(parse_or(
                    get("GATEWAY_TIMEOUT_SECS"),
                    DEFAULT_GATEWAY_TIMEOUT_SECS,
                )),
            },
            upi: UpiConfig {
                payee_vpa: get("UPI_PAYEE_VPA").unwrap_or_else(|| "yourvpa@bank".into()),
                payee_name: get("UPI_PAYEE_NAME").unwrap_or_else(|| "LuxuryStay".into()),
                qr_service_url,
            },
            amount_convention,
        })
    }
}

/// Trim, drop one pair of surrounding quotes, and treat blank as unset.
fn clean(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[("DATABASE_URL", "postgres://localhost/stay")]).unwrap();
        assert_eq!(c.http_port, 4000);
        assert_eq!(c.cors_origin, "*");
        assert_eq!(c.database_max_connections, 10);
        assert_eq!(c.razorpay.api_base, "https://api.razorpay.com");
        assert_eq!(c.razorpay.timeout, Duration::from_secs(10));
        assert!(c.razorpay.key_id.is_none());
        assert_eq!(c.upi.payee_vpa, "yourvpa@bank");
        assert_eq!(c.upi.payee_name, "LuxuryStay");
        assert_eq!(c.amount_convention, AmountConvention::Auto);
    }

    #[test]
    fn test_database_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("PGHOST", "db")]).is_err());
    }

    #[test]
    fn test_database_from_parts() {
        let c = config(&[
            ("PGHOST", "db.internal"),
            ("PGDATABASE", "stay"),
            ("PGUSER", "app"),
        ])
        .unwrap();
        assert_eq!(
            c.database,
            DatabaseSource::Parts {
                host: "db.internal".into(),
                port: 5432,
                database: "stay".into(),
                user: Some("app".into()),
                password: None,
            }
        );
        let options = c.database.connect_options().unwrap();
        assert_eq!(options.get_database(), Some("stay"));
    }

    #[test]
    fn test_quotes_and_aliases() {
        let c = config(&[
            ("DATABASE_URL", "postgres://localhost/stay"),
            ("RZP_KEY_ID", " \"rzp_test_abcdefgh123\" "),
            ("NEXT_PUBLIC_RAZORPAY_KEY_ID", "ignored"),
            ("RZP_KEY_SECRET", "'s3cret'"),
            ("PORT", "8080"),
            ("HTTP_PORT", "9090"),
        ])
        .unwrap();
        assert_eq!(c.razorpay.key_id.as_deref(), Some("rzp_test_abcdefgh123"));
        assert_eq!(c.razorpay.key_secret.as_deref(), Some("s3cret"));
        assert_eq!(c.razorpay.masked_key_id().as_deref(), Some("rzp_test..."));
        assert_eq!(c.http_port, 8080);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let c = config(&[
            ("DATABASE_URL", "postgres://localhost/stay"),
            ("RAZORPAY_KEY_ID", "  "),
            ("RZP_KEY_ID", "rzp_live_x"),
            ("CORS_ORIGIN", "\"\""),
        ])
        .unwrap();
        assert_eq!(c.razorpay.key_id.as_deref(), Some("rzp_live_x"));
        assert_eq!(c.cors_origin, "*");
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[
            ("DATABASE_URL", "postgres://localhost/stay"),
            ("QR_SERVICE_URL", "not a url"),
        ])
        .is_err());
        assert!(config(&[
            ("DATABASE_URL", "postgres://localhost/stay"),
            ("AMOUNT_CONVENTION", "cents"),
        ])
        .is_err());

        let c = config(&[
            ("DATABASE_URL", "postgres://localhost/stay"),
            ("AMOUNT_CONVENTION", "major"),
        ])
        .unwrap();
        assert_eq!(c.amount_convention, AmountConvention::Major);
    }
}
